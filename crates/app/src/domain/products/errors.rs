//! Catalog errors.

use thiserror::Error;

use crate::{api::ApiError, domain::products::models::ProductStockId};

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("product name is required")]
    MissingName,

    #[error("price cannot be negative")]
    NegativePrice,

    #[error("nothing to update")]
    EmptyUpdate,

    #[error("product {0} not found")]
    NotFound(ProductStockId),

    #[error("failed to load products")]
    Load(#[source] ApiError),

    #[error("inventory change rejected")]
    Inventory(#[source] ApiError),
}

impl ProductError {
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingName => "Please enter a product name".to_string(),
            Self::NegativePrice => "Price cannot be negative".to_string(),
            Self::EmptyUpdate => "Provide a new quantity or price".to_string(),
            Self::NotFound(stock) => format!("Product #{stock} was not found"),
            Self::Load(_) => "Failed to load products".to_string(),
            Self::Inventory(source) => source.backend_message().map_or_else(
                || "Failed to update inventory".to_string(),
                |message| format!("Failed to update inventory: {message}"),
            ),
        }
    }
}
