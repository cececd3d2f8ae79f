//! Session

pub mod errors;
pub mod models;
mod store;

pub use errors::SessionError;
pub use models::{SessionIdentity, SessionToken, UserType};
pub use store::*;
