mod post;
mod user;

pub use post::{CREATED_AT_OFFSET_SECS, Post, creation_time};
pub use user::User;
