//! In-memory session store with periodic eviction of stale sessions.

use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};
use tracing::{debug, info};

/// Number of random bytes in a session id (hex-encoded to 64 characters).
const SESSION_ID_BYTES: usize = 32;

/// A live session bound to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub user_id: i64,
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Process-local session store keyed by opaque random session ids.
///
/// Expired sessions are never returned by [`SessionStore::get`], but they
/// occupy memory until [`SessionStore::sweep`] runs.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionRecord>>,
    ttl: TimeDelta,
}

impl SessionStore {
    /// Default session lifetime and sweep period: 24 hours.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(86_400);
    pub const DEFAULT_SWEEP_PERIOD: Duration = Duration::from_secs(86_400);

    /// Creates an empty store whose sessions expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
        }
    }

    /// Opens a session for `user_id` and returns its id.
    pub async fn create(&self, user_id: i64) -> String {
        let id = hex::encode(rand::random::<[u8; SESSION_ID_BYTES]>());
        let expires_at = Utc::now()
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        self.sessions.write().await.insert(
            id.clone(),
            SessionRecord {
                user_id,
                expires_at,
            },
        );

        debug!(user_id, "Session created");
        id
    }

    /// Returns the session if it exists and has not expired.
    pub async fn get(&self, session_id: &str) -> Option<SessionRecord> {
        let now = Utc::now();
        self.sessions
            .read()
            .await
            .get(session_id)
            .filter(|record| !record.is_expired_at(now))
            .cloned()
    }

    /// Removes a session. Returns `true` if it existed.
    pub async fn destroy(&self, session_id: &str) -> bool {
        self.sessions.write().await.remove(session_id).is_some()
    }

    /// Evicts every expired session and returns how many were removed.
    pub async fn sweep(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, record| !record.is_expired_at(now));
        before - sessions.len()
    }

    /// Number of stored sessions, expired ones included.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Spawns a task that calls [`SessionStore::sweep`] every `period`.
    ///
    /// The task holds only a weak reference and exits once the store is dropped.
    pub fn spawn_sweeper(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let store: Weak<Self> = Arc::downgrade(self);

        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                let Some(live) = store.upgrade() else {
                    debug!("Session store dropped, sweeper exiting");
                    break;
                };
                let evicted = live.sweep().await;
                if evicted > 0 {
                    info!(evicted, "Swept expired sessions");
                }
            }
        })
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TTL)
    }
}
