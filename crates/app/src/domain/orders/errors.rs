//! Order history errors.

use thiserror::Error;

use crate::{api::ApiError, domain::orders::models::OrderId};

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("failed to load orders")]
    Load(#[source] ApiError),

    #[error("order {0} not found")]
    NotFound(OrderId),

    #[error("failed to load order {order}")]
    Get {
        order: OrderId,
        #[source]
        source: ApiError,
    },
}

impl OrderError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Load(_) => "Failed to load orders".to_string(),
            Self::NotFound(order) => format!("Order #{order} was not found"),
            Self::Get { order, .. } => format!("Failed to load order #{order}"),
        }
    }
}
