use crate::models::User;
use sqlx::SqlitePool;

#[derive(Debug)]
pub enum CreateUserError {
    /// The username is already registered.
    Conflict,
    Database(sqlx::Error),
}

impl From<sqlx::Error> for CreateUserError {
    fn from(err: sqlx::Error) -> Self {
        let unique_violation = err
            .as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation());
        if unique_violation {
            CreateUserError::Conflict
        } else {
            CreateUserError::Database(err)
        }
    }
}

/// Insert a user. `password_hash` must already be hashed.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> Result<User, CreateUserError> {
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (username, password) VALUES (?, ?) RETURNING id, username, password",
    )
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;
    Ok(user)
}

pub async fn find_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, username, password FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Session user loader.
pub async fn find_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, username, password FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}
