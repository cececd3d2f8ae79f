//! Storefront
//!
//! Client-side core for the marketplace backend: a typed REST client, a durable
//! session store, and the cart and checkout controllers that reconcile local
//! state with the backend after every call.

pub mod api;
pub mod auth;
pub mod context;
pub mod domain;
pub mod ids;
pub mod money;
pub mod session;

#[cfg(test)]
mod test;
