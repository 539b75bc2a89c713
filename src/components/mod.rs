pub mod admin_page;
pub mod app;
pub mod header;
pub mod home_page;
pub mod login_page;
pub mod not_found;

pub use admin_page::AdminPage;
pub use app::App;
pub use header::Header;
pub use home_page::HomePage;
pub use login_page::LoginPage;
pub use not_found::NotFound;
