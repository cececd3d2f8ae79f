//! Checkout errors.

use thiserror::Error;

use crate::api::ApiError;

/// Generic checkout failure shown when the backend gives no reason.
pub const CHECKOUT_FAILED_MESSAGE: &str =
    "Checkout failed. Please check your information and try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("shipping address is required")]
    MissingShippingAddress,

    #[error("billing address is required")]
    MissingBillingAddress,

    #[error("unknown payment method: {0}")]
    UnknownPaymentMethod(String),
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("cart is empty")]
    EmptyCart,

    #[error("checkout is already being submitted")]
    AlreadySubmitting,

    #[error("order has already been placed")]
    AlreadyConfirmed,

    #[error("checkout has not been entered")]
    NotReady,

    #[error("failed to load cart for checkout")]
    LoadCart(#[source] ApiError),

    #[error("checkout failed")]
    Submit(#[source] ApiError),
}

impl CheckoutError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Inline message for the checkout view.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(ValidationError::MissingShippingAddress) => {
                "Please enter a shipping address".to_string()
            }
            Self::Validation(ValidationError::MissingBillingAddress) => {
                "Please enter a billing address".to_string()
            }
            Self::Validation(error @ ValidationError::UnknownPaymentMethod(_)) => {
                format!("Please choose a valid payment method ({error})")
            }
            Self::EmptyCart => "Your cart is empty".to_string(),
            Self::AlreadySubmitting => "Your order is being placed, please wait".to_string(),
            Self::AlreadyConfirmed => "This order has already been placed".to_string(),
            Self::NotReady => "Checkout is not ready yet".to_string(),
            Self::LoadCart(_) => "Failed to load cart".to_string(),
            Self::Submit(source) => source
                .backend_message()
                .map_or_else(|| CHECKOUT_FAILED_MESSAGE.to_string(), ToString::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_failure_prefers_backend_message() {
        let error = CheckoutError::Submit(ApiError::Rejected {
            status: 400,
            message: "Cart is empty".to_string(),
        });

        assert_eq!(error.user_message(), "Cart is empty");
    }

    #[test]
    fn submit_failure_without_message_is_generic() {
        let error = CheckoutError::Submit(ApiError::Timeout);

        assert_eq!(error.user_message(), CHECKOUT_FAILED_MESSAGE);
    }

    #[test]
    fn validation_converts_from_field_error() {
        let error = CheckoutError::from(ValidationError::MissingBillingAddress);

        assert!(error.is_validation());
        assert_eq!(error.to_string(), "billing address is required");
    }
}
