//! Checkout

mod controller;
pub mod errors;
pub mod models;

pub use controller::*;
pub use errors::{CheckoutError, ValidationError};
