use crate::models::{Post, creation_time};
use sqlx::SqlitePool;

pub async fn create_post(pool: &SqlitePool, title: &str, body: &str) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        "INSERT INTO posts (title, body, created_at) VALUES (?, ?, ?) \
         RETURNING id, title, body, created_at",
    )
    .bind(title)
    .bind(body)
    .bind(creation_time())
    .fetch_one(pool)
    .await
}

pub async fn get_post(pool: &SqlitePool, id: i64) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>("SELECT id, title, body, created_at FROM posts WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// All posts, oldest first.
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>("SELECT id, title, body, created_at FROM posts ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Overwrite title and body in place. `id` and `created_at` are never touched.
pub async fn update_post(
    pool: &SqlitePool,
    id: i64,
    title: &str,
    body: &str,
) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        "UPDATE posts SET title = ?, body = ? WHERE id = ? \
         RETURNING id, title, body, created_at",
    )
    .bind(title)
    .bind(body)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Returns `false` when no post had this id.
pub async fn delete_post(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
