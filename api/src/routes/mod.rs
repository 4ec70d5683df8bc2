mod health;
mod post;
mod user;

pub use health::health_check;
pub use post::{create_post, delete_post, edit_post, get_post, list_posts, update_post};
pub use user::{login, login_page, logout, signup};
