use crate::{
    AppState,
    auth::CurrentUser,
    dto::{AppJson, AppPath, EditPostResponse, MessageResponse, PostRequest, PostResponse},
    errors::ApiError,
    store,
};
use axum::{
    Extension, Json,
    extract::State,
};
use tracing::info;
use validator::Validate;

/// GET /posts
/// Cookie: blog_session=<token>
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = store::list_posts(&state.pool).await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// GET /post/{id}
pub async fn get_post(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<PostResponse>, ApiError> {
    let post = store::get_post(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(post.into()))
}

/// POST /create
/// Cookie: blog_session=<token>
/// Body: { "title": "...", "body": "..." }
pub async fn create_post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    AppJson(payload): AppJson<PostRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    payload.validate()?;

    let post = store::create_post(&state.pool, &payload.title, &payload.body).await?;

    info!("Post created: {} by {}", post.id, user.username);

    Ok(Json(MessageResponse::new("post created")))
}

/// GET /{id}/update
/// Cookie: blog_session=<token>
pub async fn edit_post(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<EditPostResponse>, ApiError> {
    let post = store::get_post(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(post.into()))
}

/// POST /{id}/update
/// Cookie: blog_session=<token>
/// Body: { "title": "...", "body": "..." }
pub async fn update_post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<PostRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    payload.validate()?;

    let post = store::update_post(&state.pool, id, &payload.title, &payload.body)
        .await?
        .ok_or(ApiError::NotFound)?;

    info!("Post updated: {} by {}", post.id, user.username);

    Ok(Json(MessageResponse::new("post updated")))
}

/// DELETE /{id}/delete
/// Cookie: blog_session=<token>
pub async fn delete_post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !store::delete_post(&state.pool, id).await? {
        return Err(ApiError::NotFound);
    }

    info!("Post deleted: {} by {}", id, user.username);

    Ok(Json(MessageResponse::new("post deleted")))
}
