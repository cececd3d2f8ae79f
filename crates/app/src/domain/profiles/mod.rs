//! Profiles

mod editor;
pub mod errors;
pub mod models;

pub use editor::*;
pub use errors::ProfileError;
