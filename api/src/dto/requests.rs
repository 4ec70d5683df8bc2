use crate::errors::ApiError;
use axum::extract::{FromRequest, FromRequestParts};
use serde::Deserialize;
use validator::Validate;

/// JSON body extractor whose rejections (bad syntax, missing fields, wrong
/// content type) become `ApiError::ValidationError`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// Path extractor with the same error shape as [`AppJson`], so `/post/abc`
/// gets a JSON 400 instead of axum's plain-text rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);

#[derive(Debug, Validate, Deserialize)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 30, message = "Username must be 1-30 characters"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Validate, Deserialize)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Body of both create and update.
#[derive(Debug, Validate, Deserialize)]
pub struct PostRequest {
    #[validate(length(min = 1, max = 50, message = "Title must be 1-50 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 300, message = "Body must be 1-300 characters"))]
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_bounds() {
        let ok = PostRequest {
            title: "Hi".into(),
            body: "World".into(),
        };
        assert!(ok.validate().is_ok());

        let empty = PostRequest {
            title: String::new(),
            body: "World".into(),
        };
        assert!(empty.validate().is_err());

        let long = PostRequest {
            title: "t".repeat(51),
            body: "b".repeat(300),
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn username_bounds() {
        let long = SignupRequest {
            username: "u".repeat(31),
            password: "secret123".into(),
        };
        assert!(long.validate().is_err());

        let missing_password = SignupRequest {
            username: "alice".into(),
            password: String::new(),
        };
        assert!(missing_password.validate().is_err());
    }
}
