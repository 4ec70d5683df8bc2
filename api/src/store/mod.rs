//! Single-statement queries against the posts and users tables.
//!
//! Every function runs exactly one statement on the pool, so each write is
//! committed on its own.

pub mod posts;
pub mod users;

pub use posts::{create_post, delete_post, get_post, list_posts, update_post};
pub use users::{CreateUserError, create_user, find_user_by_id, find_user_by_username};

#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    crate::db::connect("sqlite::memory:", 1)
        .await
        .expect("in-memory database")
}
