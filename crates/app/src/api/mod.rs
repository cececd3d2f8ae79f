//! Backend REST client
//!
//! One trait per resource family, each with a generated mock, and a single
//! `reqwest` backed [`HttpStoreApi`] implementing all of them. Controllers
//! depend on the traits only.

mod auth;
mod carts;
mod catalog;
mod client;
pub mod config;
pub mod errors;
mod health;
mod orders;
mod profiles;

pub use auth::{AuthApi, MockAuthApi};
pub use carts::{CartsApi, MockCartsApi};
pub use catalog::{CatalogApi, MockCatalogApi};
pub use client::HttpStoreApi;
pub use config::ApiConfig;
pub use errors::ApiError;
pub use health::{FALLBACK_STATUS, HealthApi, HealthStatus, MockHealthApi};
pub use orders::{MockOrdersApi, OrdersApi};
pub use profiles::{MockProfilesApi, ProfilesApi};
