use std::sync::Arc;

use crate::api::middleware::session::SessionCookie;
use crate::application::services::AuthService;
use crate::domain::repositories::Storage;

/// Shared state injected into every handler.
///
/// The storage backend is chosen once at startup and never swapped.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub auth_service: Arc<AuthService>,
    pub session_cookie: SessionCookie,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, session_cookie: SessionCookie) -> Self {
        let auth_service = Arc::new(AuthService::new(storage.clone()));
        Self {
            storage,
            auth_service,
            session_cookie,
        }
    }
}
