//! Checkout command.

use std::io;

use clap::Args;
use storefront_app::{
    auth::AuthService,
    domain::checkout::{
        CheckoutController,
        models::{CheckoutForm, PaymentMethod},
    },
};
use tracing::debug;

use crate::{commands::CommandError, render};

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Where to ship the order
    #[arg(long)]
    shipping_address: String,

    /// Billing address; the shipping address when omitted
    #[arg(long)]
    billing_address: Option<String>,

    /// credit_card, debit_card, paypal, bank_transfer or cash_on_delivery
    #[arg(long, default_value_t = PaymentMethod::CreditCard)]
    payment_method: PaymentMethod,

    /// Notes for the seller
    #[arg(long)]
    notes: Option<String>,
}

impl CheckoutArgs {
    fn form(self) -> CheckoutForm {
        CheckoutForm {
            billing_address: self
                .billing_address
                .unwrap_or_else(|| self.shipping_address.clone()),
            shipping_address: self.shipping_address,
            payment_method: self.payment_method,
            order_notes: self.notes,
        }
    }
}

pub(crate) async fn run(
    args: CheckoutArgs,
    auth: &AuthService,
    checkout: &CheckoutController,
    out: &mut dyn io::Write,
) -> Result<(), CommandError> {
    let customer = auth.require_customer()?;

    let cart = checkout.enter(customer).await?;

    render::write_cart(out, Some(&cart))?;

    if let Some(breakdown) = checkout.price_breakdown() {
        render::write_breakdown(out, &breakdown)?;
    }

    let form = args.form();

    debug!(payment_method = %form.payment_method, "placing order");

    let order = checkout.submit(customer, form).await?;

    writeln!(out)?;
    writeln!(out, "Thank you for your order!")?;
    render::write_order(out, &order)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use storefront_app::domain::checkout::{CheckoutError, ValidationError};

    use super::*;

    #[test]
    fn billing_defaults_to_shipping() {
        let form = CheckoutArgs {
            shipping_address: "1 Main St".to_string(),
            billing_address: None,
            payment_method: PaymentMethod::Paypal,
            notes: None,
        }
        .form();

        assert_eq!(form.billing_address, "1 Main St");
        assert_eq!(form.payment_method, PaymentMethod::Paypal);
    }

    #[test]
    fn explicit_billing_is_kept() {
        let form = CheckoutArgs {
            shipping_address: "1 Main St".to_string(),
            billing_address: Some("PO Box 9".to_string()),
            payment_method: PaymentMethod::default(),
            notes: Some("ring twice".to_string()),
        }
        .form();

        assert_eq!(form.billing_address, "PO Box 9");
        assert_eq!(form.order_notes.as_deref(), Some("ring twice"));
    }

    #[test]
    fn blank_billing_is_left_for_validation() {
        let form = CheckoutArgs {
            shipping_address: "1 Main St".to_string(),
            billing_address: Some("   ".to_string()),
            payment_method: PaymentMethod::default(),
            notes: None,
        }
        .form();

        assert_eq!(form.billing_address, "   ");
        assert!(
            matches!(
                form.validate(),
                Err(CheckoutError::Validation(ValidationError::MissingBillingAddress))
            ),
            "blank billing address must fail validation"
        );
    }
}
