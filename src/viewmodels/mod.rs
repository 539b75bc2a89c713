pub mod session_viewmodel;

pub use session_viewmodel::{LoginAttempt, LoginGate, LoginOutcome, SessionViewModel};
