use crate::{AppState, errors::ApiError, store};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::Response,
};
use bcrypt::{hash, verify};

pub const SESSION_COOKIE_NAME: &str = "blog_session";

/// The authenticated caller, inserted into request extensions by
/// [`require_session`].
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub session_token: String,
}

pub fn hash_password(password: &str, cost: u32) -> Result<String, ApiError> {
    hash(password, cost)
        .map_err(|e| ApiError::InternalError(format!("Password hashing failed: {}", e)))
}

pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, ApiError> {
    verify(password, hashed_password)
        .map_err(|e| ApiError::InternalError(format!("Password verification failed: {}", e)))
}

pub fn session_cookie(
    token: &str,
    secure: bool,
    ttl_seconds: i64,
) -> Result<HeaderValue, ApiError> {
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={ttl_seconds}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
        .map_err(|e| ApiError::InternalError(format!("Invalid session cookie: {}", e)))
}

pub fn clear_session_cookie(secure: bool) -> Result<HeaderValue, ApiError> {
    let mut cookie = format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
        .map_err(|e| ApiError::InternalError(format!("Invalid session cookie: {}", e)))
}

/// Find the session token among the request's `Cookie` headers.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == SESSION_COOKIE_NAME)
        .map(|(_, token)| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

/// Guard for protected routes.
///
/// Resolves the session cookie to a user before the handler runs. Requests
/// without a live session are answered with 401 and never reach the handler.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_session_token(request.headers()).ok_or(ApiError::Unauthorized)?;
    let user_id = state
        .sessions
        .resolve(&token)
        .ok_or(ApiError::Unauthorized)?;

    let user = store::find_user_by_id(&state.pool, user_id)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    request.extensions_mut().insert(CurrentUser {
        id: user.id,
        username: user.username,
        session_token: token,
    });

    Ok(next.run(request).await)
}
