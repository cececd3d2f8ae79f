//! Cart controller errors.

use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(i64),

    #[error("failed to load cart")]
    Load(#[source] ApiError),

    #[error("failed to add product to cart")]
    Add(#[source] ApiError),

    #[error("failed to update quantity")]
    Update(#[source] ApiError),

    #[error("failed to remove item from cart")]
    Remove(#[source] ApiError),

    #[error("failed to clear cart")]
    Clear(#[source] ApiError),
}

impl CartError {
    /// The backend failure behind this error, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::InvalidQuantity(_) => None,
            Self::Load(source)
            | Self::Add(source)
            | Self::Update(source)
            | Self::Remove(source)
            | Self::Clear(source) => Some(source),
        }
    }

    /// Whether the backend refused the mutation, as opposed to being
    /// unreachable.
    pub fn is_rejected(&self) -> bool {
        matches!(
            self.api_error(),
            Some(ApiError::Rejected { .. } | ApiError::NotFound { .. })
        )
    }

    /// Inline message for the cart view.
    pub fn user_message(&self) -> String {
        match self {
            Self::Add(source) => match source.backend_message() {
                Some(message) => format!("Failed to add product to cart: {message}"),
                None => format!("Failed to add product to cart: {source}"),
            },
            Self::InvalidQuantity(_) => "Quantity must be at least 1".to_string(),
            Self::Load(_) => "Failed to load cart".to_string(),
            Self::Update(_) => "Failed to update quantity".to_string(),
            Self::Remove(_) => "Failed to remove item from cart".to_string(),
            Self::Clear(_) => "Failed to clear cart".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_failure_surfaces_backend_message() {
        let error = CartError::Add(ApiError::Rejected {
            status: 400,
            message: "Insufficient stock".to_string(),
        });

        assert!(error.is_rejected());
        assert_eq!(
            error.user_message(),
            "Failed to add product to cart: Insufficient stock"
        );
    }

    #[test]
    fn timeouts_are_not_rejections() {
        let error = CartError::Update(ApiError::Timeout);

        assert!(!error.is_rejected());
        assert_eq!(error.user_message(), "Failed to update quantity");
    }
}
