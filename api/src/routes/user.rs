use crate::{
    AppState,
    auth::{
        CurrentUser, clear_session_cookie, extract_session_token, hash_password, session_cookie,
        verify_password,
    },
    dto::{AppJson, LoginRequest, MessageResponse, SignupRequest},
    errors::ApiError,
    store::{self, CreateUserError},
};
use axum::{
    Extension, Json,
    extract::State,
    http::{HeaderMap, header},
};
use tracing::{info, warn};
use validator::Validate;

/// POST /signup
/// Body: { "username": "...", "password": "..." }
pub async fn signup(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SignupRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    payload.validate()?;

    let hashed_password = hash_password(&payload.password, state.bcrypt_cost)?;

    // The UNIQUE constraint on users.username decides collisions.
    let user = store::create_user(&state.pool, &payload.username, &hashed_password)
        .await
        .map_err(|err| match err {
            CreateUserError::Conflict => ApiError::UserAlreadyExists,
            CreateUserError::Database(err) => err.into(),
        })?;

    info!("New user registered: {}", user.username);

    Ok(Json(MessageResponse::new("signup successful")))
}

/// POST /login
/// Body: { "username": "...", "password": "..." }
/// Sets the `blog_session` cookie on success and retires any session cookie
/// the client presented.
pub async fn login(
    State(state): State<AppState>,
    request_headers: HeaderMap,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<(HeaderMap, Json<MessageResponse>), ApiError> {
    payload.validate()?;

    let Some(user) = store::find_user_by_username(&state.pool, &payload.username).await? else {
        // Pay the same bcrypt cost as a wrong password.
        let _ = verify_password(&payload.password, state.dummy_password_hash());
        warn!("Login rejected: unknown user {}", payload.username);
        return Err(ApiError::InvalidCredentials);
    };

    if !verify_password(&payload.password, &user.hashed_password)? {
        warn!("Login rejected: wrong password for {}", user.username);
        return Err(ApiError::InvalidCredentials);
    }

    if let Some(previous) = extract_session_token(&request_headers) {
        state.sessions.destroy(&previous);
    }
    let token = state.sessions.create(user.id);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        session_cookie(
            &token,
            state.cookie_secure,
            state.sessions.ttl().num_seconds(),
        )?,
    );

    info!("User logged in: {}", user.username);

    Ok((headers, Json(MessageResponse::new("login successful"))))
}

/// GET /login
/// Logging in needs credentials in a POST body.
pub async fn login_page() -> ApiError {
    ApiError::LoginRequiresPost
}

/// GET /logout
/// Cookie: blog_session=<token>
pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<(HeaderMap, Json<MessageResponse>), ApiError> {
    state.sessions.destroy(&user.session_token);

    let mut headers = HeaderMap::new();
    headers.insert(header::SET_COOKIE, clear_session_cookie(state.cookie_secure)?);

    info!("User logged out: {}", user.username);

    Ok((headers, Json(MessageResponse::new("logout successful"))))
}
