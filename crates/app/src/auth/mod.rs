//! Authentication

mod errors;
pub mod models;
mod service;

pub use errors::*;
pub use models::{Credentials, LoginResponse};
pub use service::*;
