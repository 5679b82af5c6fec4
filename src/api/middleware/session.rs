//! Cookie session authentication middleware.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::COOKIE},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "sid";

/// Attributes applied to every `Set-Cookie` header the API emits.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookie {
    pub max_age_secs: u64,
    pub secure: bool,
}

impl SessionCookie {
    /// `Set-Cookie` value that stores `session_id` in the browser.
    pub fn issue(&self, session_id: &str) -> String {
        self.render(session_id, self.max_age_secs)
    }

    /// `Set-Cookie` value that expires the session cookie immediately.
    pub fn clear(&self) -> String {
        self.render("", 0)
    }

    fn render(&self, value: &str, max_age: u64) -> String {
        let mut cookie =
            format!("{SESSION_COOKIE}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}");
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

/// Extracts the session id from the `Cookie` header, ignoring other cookies.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            let (name, value) = cookie.trim().split_once('=')?;
            (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
        })
}

/// Resolves the `sid` cookie to a [`crate::domain::entities::User`] and
/// stores it in request extensions for handlers to pick up with
/// `Extension<User>`.
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - The `sid` cookie is missing
/// - The session is unknown or expired
/// - The session's user no longer exists
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::session;
///
/// let protected = Router::new()
///     .route("/api/saves", get(list_saves_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), session::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let session_id = session_id_from_headers(req.headers()).ok_or_else(|| {
        AppError::unauthorized(
            "Unauthorized",
            json!({ "reason": "Session cookie is missing" }),
        )
    })?;

    let user = st.auth_service.authenticate(&session_id).await?;
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
