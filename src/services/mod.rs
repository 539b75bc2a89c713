pub mod api_client;
pub mod auth_service;
pub mod token_store;

pub use api_client::ApiClient;
pub use auth_service::{AuthApi, HttpAuthApi};
pub use token_store::{LocalTokenStore, MemoryTokenStore, TokenStore};
