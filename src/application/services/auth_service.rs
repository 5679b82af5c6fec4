//! Authentication service for cookie sessions.

use std::sync::Arc;

use serde_json::{Value, json};

use super::password::{hash_password, verify_password};
use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::Storage;
use crate::error::AppError;
use crate::infrastructure::session::SessionStore;

/// Service for registering users and resolving session cookies.
///
/// Passwords are hashed with Argon2id before they reach storage; the storage
/// layer only ever sees the PHC string. Sessions live in the
/// [`SessionStore`] exposed by the storage backend.
pub struct AuthService {
    storage: Arc<dyn Storage>,
    sessions: Arc<SessionStore>,
}

/// A user together with the session that was opened for them.
#[derive(Debug)]
pub struct SignedIn {
    pub user: User,
    pub session_id: String,
}

fn hashing_failed(e: impl std::fmt::Display) -> AppError {
    tracing::error!(error = %e, "Password hashing failed");
    AppError::internal("Password hashing failed", json!({}))
}

impl AuthService {
    /// Creates a new authentication service bound to the backend's session store.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let sessions = storage.session_store();
        Self { storage, sessions }
    }

    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }

    /// Creates an account and signs it in.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is taken.
    /// Returns [`AppError::Internal`] on storage or hashing failures.
    pub async fn register(
        &self,
        username: String,
        password: String,
        preferences: Option<Value>,
    ) -> Result<SignedIn, AppError> {
        let hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(hashing_failed)?
            .map_err(hashing_failed)?;

        let user = self
            .storage
            .create_user(NewUser {
                username,
                password: hash,
                preferences,
            })
            .await?;

        tracing::info!(user_id = user.id, "User registered");
        self.open_session(user).await
    }

    /// Verifies credentials and signs the user in.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the username is unknown or the
    /// password does not match.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn login(&self, username: &str, password: &str) -> Result<SignedIn, AppError> {
        let invalid = || AppError::unauthorized("Invalid username or password", json!({}));

        let user = self
            .storage
            .get_user_by_username(username)
            .await?
            .ok_or_else(invalid)?;

        let stored = user.password.clone();
        let attempt = password.to_string();
        let matches = tokio::task::spawn_blocking(move || verify_password(&attempt, &stored))
            .await
            .map_err(hashing_failed)?
            .unwrap_or_else(|e| {
                tracing::warn!(user_id = user.id, error = %e, "Stored credential is not a valid hash");
                false
            });

        if !matches {
            return Err(invalid());
        }

        self.open_session(user).await
    }

    /// Ends a session. Unknown ids are ignored.
    pub async fn logout(&self, session_id: &str) {
        if self.sessions.destroy(session_id).await {
            tracing::debug!("Session destroyed");
        }
    }

    /// Resolves a session id to its user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the session is unknown, expired,
    /// or its user no longer exists.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn authenticate(&self, session_id: &str) -> Result<User, AppError> {
        let record = self.sessions.get(session_id).await.ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Session is missing or expired" }),
            )
        })?;

        match self.storage.get_user(record.user_id).await? {
            Some(user) => Ok(user),
            None => {
                self.sessions.destroy(session_id).await;
                Err(AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "User no longer exists" }),
                ))
            }
        }
    }

    async fn open_session(&self, user: User) -> Result<SignedIn, AppError> {
        let session_id = self.sessions.create(user.id).await;
        Ok(SignedIn { user, session_id })
    }
}
