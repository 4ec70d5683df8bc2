mod requests;
mod responses;

pub use requests::{AppJson, AppPath, LoginRequest, PostRequest, SignupRequest};
pub use responses::{EditPostResponse, MessageResponse, PostContent, PostResponse};
