//! Orders

pub mod errors;
mod history;
pub mod models;

pub use errors::OrderError;
pub use history::*;
