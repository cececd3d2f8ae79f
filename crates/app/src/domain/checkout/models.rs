//! Checkout Models

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::checkout::errors::{CheckoutError, ValidationError};

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    DebitCard,
    Paypal,
    BankTransfer,
    CashOnDelivery,
}

impl PaymentMethod {
    pub const ALL: [Self; 5] = [
        Self::CreditCard,
        Self::DebitCard,
        Self::Paypal,
        Self::BankTransfer,
        Self::CashOnDelivery,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreditCard => "credit_card",
            Self::DebitCard => "debit_card",
            Self::Paypal => "paypal",
            Self::BankTransfer => "bank_transfer",
            Self::CashOnDelivery => "cash_on_delivery",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
            Self::Paypal => "PayPal",
            Self::BankTransfer => "Bank Transfer",
            Self::CashOnDelivery => "Cash on Delivery",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', ' '], "_");

        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownPaymentMethod(value.to_string()))
    }
}

/// Checkout Form
///
/// Transient input owned by the checkout screen. It is kept by the controller
/// across failed submissions so nothing the user typed is lost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub shipping_address: String,
    pub billing_address: String,
    pub payment_method: PaymentMethod,
    pub order_notes: Option<String>,
}

impl CheckoutForm {
    /// Copy the shipping address into the billing address.
    pub fn billing_same_as_shipping(&mut self) {
        self.billing_address.clone_from(&self.shipping_address);
    }

    /// Check required fields and build the request body.
    ///
    /// # Errors
    ///
    /// Returns a validation error when either address is blank after
    /// trimming.
    pub fn validate(&self) -> Result<CheckoutRequest, CheckoutError> {
        let shipping_address = self.shipping_address.trim();

        if shipping_address.is_empty() {
            return Err(ValidationError::MissingShippingAddress.into());
        }

        let billing_address = self.billing_address.trim();

        if billing_address.is_empty() {
            return Err(ValidationError::MissingBillingAddress.into());
        }

        let order_notes = self
            .order_notes
            .as_deref()
            .map(str::trim)
            .filter(|notes| !notes.is_empty())
            .map(ToString::to_string);

        Ok(CheckoutRequest {
            shipping_address: shipping_address.to_string(),
            billing_address: billing_address.to_string(),
            payment_method: self.payment_method,
            order_notes,
        })
    }
}

/// Checkout Request, the validated form as sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub shipping_address: String,
    pub billing_address: String,
    pub payment_method: PaymentMethod,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_notes: Option<String>,
}

/// Tax included in displayed totals, in percent.
pub const DISPLAY_TAX_PERCENT: i64 = 7;

/// Display-only split of a backend total into subtotal and tax.
///
/// Has no serialized form; these figures never go to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl PriceBreakdown {
    pub fn from_total(total: Decimal) -> Self {
        let tax = (total * Decimal::new(DISPLAY_TAX_PERCENT, 2)).round_dp(2);

        Self {
            subtotal: total - tax,
            tax,
            total,
        }
    }
}
