// Utils compartidos

pub mod constants;
pub mod jwt;

pub use constants::*;
pub use jwt::{decode_claims, now_epoch_seconds};
