//! Handlers for registration, login, logout and the current user.

use axum::{
    Extension, Json,
    extract::State,
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, RegisterRequest, UserResponse};
use crate::api::middleware::session::session_id_from_headers;
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

/// Creates an account and signs it in.
///
/// # Endpoint
///
/// `POST /api/register`
///
/// # Request Body
///
/// ```json
/// { "username": "ada", "password": "correct-horse", "preferences": { "style": "minimal" } }
/// ```
///
/// # Response
///
/// `201 Created` with the user and a `Set-Cookie: sid=...` header.
///
/// # Errors
///
/// - `400 Bad Request` on validation failure
/// - `409 Conflict` if the username is taken
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let signed_in = state
        .auth_service
        .register(payload.username, payload.password, payload.preferences)
        .await?;

    Ok((
        StatusCode::CREATED,
        [(SET_COOKIE, state.session_cookie.issue(&signed_in.session_id))],
        Json(UserResponse::from(signed_in.user)),
    )
        .into_response())
}

/// Verifies credentials and opens a session.
///
/// # Endpoint
///
/// `POST /api/login`
///
/// # Errors
///
/// - `400 Bad Request` if either field is empty
/// - `401 Unauthorized` on unknown username or wrong password
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let signed_in = state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    tracing::info!(user_id = signed_in.user.id, "User logged in");

    Ok((
        StatusCode::OK,
        [(SET_COOKIE, state.session_cookie.issue(&signed_in.session_id))],
        Json(UserResponse::from(signed_in.user)),
    )
        .into_response())
}

/// Destroys the current session, if any, and clears the cookie.
///
/// `POST /api/logout`. Always answers `200 OK`.
pub async fn logout_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(session_id) = session_id_from_headers(&headers) {
        state.auth_service.logout(&session_id).await;
    }

    (StatusCode::OK, [(SET_COOKIE, state.session_cookie.clear())]).into_response()
}

/// `GET /api/user`
pub async fn current_user_handler(Extension(user): Extension<User>) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}
