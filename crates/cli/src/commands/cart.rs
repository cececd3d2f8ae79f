//! Cart commands.

use std::io;

use clap::{Args, Subcommand};
use storefront_app::{
    auth::AuthService,
    domain::{
        carts::{CartController, ClearOutcome, Confirm, DEFAULT_QUANTITY, models::CartItemId},
        products::models::ProductStockId,
        profiles::models::PersonId,
    },
};

use crate::{
    commands::CommandError,
    prompt::{AssumeYes, TerminalConfirm},
    render,
};

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show the cart
    Show,

    /// Add a product to the cart
    Add {
        /// Stock entry id, as listed by `products`
        stock: ProductStockId,

        #[arg(long, short, default_value_t = DEFAULT_QUANTITY, allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Change an item's quantity; zero or less removes it
    Update {
        item: CartItemId,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Remove an item
    Remove { item: CartItemId },

    /// Remove every item
    Clear {
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

pub(crate) async fn run(
    command: CartCommand,
    auth: &AuthService,
    cart: &CartController,
    out: &mut dyn io::Write,
) -> Result<(), CommandError> {
    let customer = auth.require_customer()?;

    match command.command {
        CartSubcommand::Show => {
            cart.load(customer).await?;
        }
        CartSubcommand::Add { stock, quantity } => {
            cart.add(customer, stock, quantity).await?;
        }
        CartSubcommand::Update { item, quantity } => {
            cart.update_quantity(customer, item, quantity).await?;
        }
        CartSubcommand::Remove { item } => {
            cart.remove(customer, item).await?;
        }
        CartSubcommand::Clear { yes: true } => {
            return clear(cart, customer, &AssumeYes, out).await;
        }
        CartSubcommand::Clear { yes: false } => {
            return clear(cart, customer, &TerminalConfirm, out).await;
        }
    }

    render::write_cart(out, cart.cart().as_ref())?;

    Ok(())
}

async fn clear(
    cart: &CartController,
    customer: PersonId,
    confirm: &dyn Confirm,
    out: &mut dyn io::Write,
) -> Result<(), CommandError> {
    match cart.clear(customer, confirm).await? {
        ClearOutcome::Cleared => writeln!(out, "Cart cleared")?,
        ClearOutcome::Declined => writeln!(out, "Cart left unchanged")?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use storefront_app::{
        api::{ApiError, MockAuthApi, MockCartsApi, MockProfilesApi},
        domain::carts::{CartError, MockConfirm},
        session::{MemorySessionStore, SessionIdentity, SessionToken, UserType},
    };
    use testresult::TestResult;

    use super::*;

    fn customer_session() -> AuthService {
        let session = MemorySessionStore::with_identity(SessionIdentity {
            token: SessionToken::new("jwt"),
            user_type: UserType::Customer,
            user_id: PersonId::new(5),
            email: "ada@example.com".to_string(),
            display_name: "Ada Buyer".to_string(),
        });

        AuthService::new(
            Arc::new(MockAuthApi::new()),
            Arc::new(MockProfilesApi::new()),
            Arc::new(session),
        )
    }

    #[tokio::test]
    async fn declined_clear_sends_nothing() -> TestResult {
        let mut api = MockCartsApi::new();
        let mut confirm = MockConfirm::new();

        api.expect_clear_cart().never();
        confirm.expect_confirm().once().return_const(false);

        let cart = CartController::new(Arc::new(api));
        let mut out = Vec::new();

        clear(&cart, PersonId::new(5), &confirm, &mut out).await?;

        assert_eq!(String::from_utf8(out)?, "Cart left unchanged\n");

        Ok(())
    }

    #[tokio::test]
    async fn missing_cart_shows_empty() -> TestResult {
        let mut api = MockCartsApi::new();

        api.expect_get_cart()
            .once()
            .withf(|customer| *customer == PersonId::new(5))
            .return_once(|_| {
                Err(ApiError::NotFound {
                    message: "Not Found".to_string(),
                })
            });

        let cart = CartController::new(Arc::new(api));
        let mut out = Vec::new();

        run(
            CartCommand {
                command: CartSubcommand::Show,
            },
            &customer_session(),
            &cart,
            &mut out,
        )
        .await?;

        assert_eq!(String::from_utf8(out)?, "Your cart is empty\n");

        Ok(())
    }

    #[tokio::test]
    async fn zero_quantity_add_is_refused_locally() {
        let mut api = MockCartsApi::new();

        api.expect_add_to_cart().never();

        let cart = CartController::new(Arc::new(api));
        let mut out = Vec::new();

        let result = run(
            CartCommand {
                command: CartSubcommand::Add {
                    stock: ProductStockId::new(7),
                    quantity: 0,
                },
            },
            &customer_session(),
            &cart,
            &mut out,
        )
        .await;

        assert!(
            matches!(result, Err(CommandError::Cart(CartError::InvalidQuantity(0)))),
            "expected InvalidQuantity, got {result:?}"
        );
    }
}
