pub mod auth;
pub mod prompt;

pub use auth::{Claims, ErrorResponse, LoginForm, LoginResponse, User};
pub use prompt::{PromptRecord, UserStats};
