pub mod session_context;
pub mod use_remote;
pub mod use_session;

pub use session_context::{use_session_context, SessionContextProvider};
pub use use_remote::{use_remote, Remote, RemoteOutcome};
pub use use_session::{use_session, UseSessionHandle};
