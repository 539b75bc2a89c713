pub mod guard;
pub mod routes;

pub use guard::{before_each, GuardDecision};
pub use routes::{Route, RouteMeta};
