//! Cart controller.
//!
//! Holds the client's view of a customer's cart. Every mutation is a round
//! trip that ends by replacing the local cart with whatever the backend
//! returned; nothing is merged or recomputed locally. Concurrent mutations are
//! not serialized here, so the response that arrives last wins.

use std::{fmt, sync::Arc};

use mockall::automock;
use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use crate::{
    api::{ApiError, CartsApi},
    domain::{
        carts::{
            errors::CartError,
            models::{AddToCart, Cart, CartItemId},
        },
        products::models::ProductStockId,
        profiles::models::PersonId,
    },
};

/// Quantity used when the caller does not pick one.
pub const DEFAULT_QUANTITY: i64 = 1;

/// Question put to the user before a cart is cleared.
pub const CLEAR_CART_PROMPT: &str = "Are you sure you want to clear your cart?";

/// Asks the user to confirm a destructive action.
#[automock]
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Result of a clear request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The cart was emptied (or already was).
    Cleared,

    /// The user backed out; nothing was sent.
    Declined,
}

pub struct CartController {
    api: Arc<dyn CartsApi>,
    cart: RwLock<Option<Cart>>,
}

impl fmt::Debug for CartController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartController")
            .field("cart", &*self.cart.read())
            .finish_non_exhaustive()
    }
}

impl CartController {
    pub fn new(api: Arc<dyn CartsApi>) -> Self {
        Self {
            api,
            cart: RwLock::new(None),
        }
    }

    /// The last cart the backend returned, `None` when there is none.
    pub fn cart(&self) -> Option<Cart> {
        self.cart.read().clone()
    }

    /// Checkout is reachable only with at least one item in the cart.
    pub fn can_checkout(&self) -> bool {
        self.cart
            .read()
            .as_ref()
            .is_some_and(|cart| !cart.is_empty())
    }

    /// Fetch the current cart. A customer without a cart has an empty one.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Load`] on any other failure; the previous cart is
    /// kept.
    pub async fn load(&self, customer: PersonId) -> Result<Option<Cart>, CartError> {
        match self.api.get_cart(customer).await {
            Ok(cart) => {
                debug!(%customer, items = cart.total_items, "cart loaded");

                Ok(Some(self.accept(cart)))
            }
            Err(source) if source.is_not_found() => {
                debug!(%customer, "no cart yet, treating as empty");

                *self.cart.write() = None;

                Ok(None)
            }
            Err(source) => {
                error!(%customer, "failed to load cart: {source}");

                Err(CartError::Load(source))
            }
        }
    }

    /// Add a stock item to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] without contacting the backend
    /// when `quantity` is below one, and [`CartError::Add`] when the backend
    /// refuses (e.g. insufficient stock). The local cart is unchanged on
    /// error.
    pub async fn add(
        &self,
        customer: PersonId,
        stock: ProductStockId,
        quantity: i64,
    ) -> Result<Cart, CartError> {
        let quantity = positive_quantity(quantity)?;

        let cart = self
            .api
            .add_to_cart(
                customer,
                AddToCart {
                    product_stock_id: stock,
                    quantity,
                },
            )
            .await
            .map_err(|source| {
                log_failure("add to cart", customer, &source);

                CartError::Add(source)
            })?;

        info!(%customer, %stock, quantity, "item added to cart");

        Ok(self.accept(cart))
    }

    /// Set an item's quantity. Zero or less removes the item.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Update`] (or [`CartError::Remove`] for
    /// non-positive quantities) when the backend call fails.
    pub async fn update_quantity(
        &self,
        customer: PersonId,
        item: CartItemId,
        quantity: i64,
    ) -> Result<Cart, CartError> {
        if quantity <= 0 {
            return self.remove(customer, item).await;
        }

        let quantity = positive_quantity(quantity)?;

        let cart = self
            .api
            .update_cart_item(customer, item, quantity)
            .await
            .map_err(|source| {
                log_failure("update quantity", customer, &source);

                CartError::Update(source)
            })?;

        info!(%customer, %item, quantity, "cart quantity updated");

        Ok(self.accept(cart))
    }

    /// Remove an item from the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Remove`] when the backend call fails.
    pub async fn remove(&self, customer: PersonId, item: CartItemId) -> Result<Cart, CartError> {
        let cart = self
            .api
            .remove_cart_item(customer, item)
            .await
            .map_err(|source| {
                log_failure("remove item", customer, &source);

                CartError::Remove(source)
            })?;

        info!(%customer, %item, "item removed from cart");

        Ok(self.accept(cart))
    }

    /// Empty the cart after the user confirms.
    ///
    /// Clearing a cart that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Clear`] when the backend call fails.
    pub async fn clear(
        &self,
        customer: PersonId,
        confirm: &dyn Confirm,
    ) -> Result<ClearOutcome, CartError> {
        if !confirm.confirm(CLEAR_CART_PROMPT) {
            debug!(%customer, "clear cart declined");

            return Ok(ClearOutcome::Declined);
        }

        match self.api.clear_cart(customer).await {
            Ok(()) => info!(%customer, "cart cleared"),
            Err(source) if source.is_not_found() => {
                debug!(%customer, "cart already empty");
            }
            Err(source) => {
                log_failure("clear cart", customer, &source);

                return Err(CartError::Clear(source));
            }
        }

        *self.cart.write() = None;

        Ok(ClearOutcome::Cleared)
    }

    fn accept(&self, cart: Cart) -> Cart {
        *self.cart.write() = Some(cart.clone());

        cart
    }
}

fn positive_quantity(quantity: i64) -> Result<u32, CartError> {
    u32::try_from(quantity)
        .ok()
        .filter(|quantity| *quantity >= 1)
        .ok_or(CartError::InvalidQuantity(quantity))
}

fn log_failure(action: &str, customer: PersonId, source: &ApiError) {
    match source {
        ApiError::Rejected { .. } | ApiError::NotFound { .. } => {
            warn!(%customer, status = ?source.status(), "{action} rejected: {source}");
        }
        ApiError::Transport(_) | ApiError::Timeout | ApiError::UnexpectedResponse(_) => {
            error!(%customer, "{action} failed: {source}");
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        api::MockCartsApi,
        test::fixtures::{CUSTOMER, make_cart, make_item},
    };

    use super::*;

    fn not_found() -> ApiError {
        ApiError::NotFound {
            message: "Not Found".to_string(),
        }
    }

    fn two_item_cart() -> Cart {
        make_cart(
            vec![
                make_item(1, 7, 2, Decimal::new(10, 0)),
                make_item(2, 8, 1, Decimal::new(5, 0)),
            ],
            Decimal::new(25, 0),
        )
    }

    async fn loaded(mut api: MockCartsApi, cart: Cart) -> Result<CartController, CartError> {
        api.expect_get_cart()
            .once()
            .return_once(move |_| Ok(cart));

        let controller = CartController::new(Arc::new(api));

        controller.load(CUSTOMER).await?;

        Ok(controller)
    }

    #[tokio::test]
    async fn load_not_found_is_an_empty_cart() -> TestResult {
        let mut api = MockCartsApi::new();

        api.expect_get_cart()
            .once()
            .withf(|customer| *customer == CUSTOMER)
            .return_once(|_| Err(not_found()));

        let controller = CartController::new(Arc::new(api));

        assert_eq!(controller.load(CUSTOMER).await?, None);
        assert!(!controller.can_checkout());

        Ok(())
    }

    #[tokio::test]
    async fn load_failure_keeps_previous_cart() -> TestResult {
        let mut api = MockCartsApi::new();
        let cart = two_item_cart();
        let first = cart.clone();
        let mut calls = 0;

        api.expect_get_cart().times(2).returning(move |_| {
            calls += 1;

            if calls == 1 {
                Ok(first.clone())
            } else {
                Err(ApiError::Timeout)
            }
        });

        let controller = CartController::new(Arc::new(api));

        controller.load(CUSTOMER).await?;

        let result = controller.load(CUSTOMER).await;

        assert!(
            matches!(result, Err(CartError::Load(ApiError::Timeout))),
            "expected load timeout, got {result:?}"
        );
        assert_eq!(controller.cart(), Some(cart));

        Ok(())
    }

    #[tokio::test]
    async fn add_adopts_server_cart_verbatim() -> TestResult {
        let mut api = MockCartsApi::new();

        // Deliberately inconsistent totals: the controller must not recompute.
        let server_cart = make_cart(
            vec![make_item(1, 7, 1, Decimal::new(10, 0))],
            Decimal::new(999, 2),
        );
        let returned = server_cart.clone();

        api.expect_add_to_cart()
            .once()
            .withf(|customer, item| {
                *customer == CUSTOMER
                    && *item
                        == AddToCart {
                            product_stock_id: ProductStockId::new(7),
                            quantity: 1,
                        }
            })
            .return_once(move |_, _| Ok(returned));

        let controller = CartController::new(Arc::new(api));

        let cart = controller
            .add(CUSTOMER, ProductStockId::new(7), DEFAULT_QUANTITY)
            .await?;

        assert_eq!(cart, server_cart);
        assert_eq!(controller.cart(), Some(server_cart));
        assert!(controller.can_checkout());

        Ok(())
    }

    #[tokio::test]
    async fn add_rejects_non_positive_quantity_before_network() {
        let mut api = MockCartsApi::new();

        api.expect_add_to_cart().never();

        let controller = CartController::new(Arc::new(api));

        let result = controller.add(CUSTOMER, ProductStockId::new(7), 0).await;

        assert!(
            matches!(result, Err(CartError::InvalidQuantity(0))),
            "expected InvalidQuantity, got {result:?}"
        );
    }

    #[tokio::test]
    async fn add_out_of_stock_fails_and_keeps_cart() -> TestResult {
        let mut api = MockCartsApi::new();
        let cart = two_item_cart();

        api.expect_add_to_cart()
            .once()
            .withf(|_, item| item.product_stock_id == ProductStockId::new(7))
            .return_once(|_, _| {
                Err(ApiError::Rejected {
                    status: 400,
                    message: "Insufficient stock. Only 0 available.".to_string(),
                })
            });

        let controller = loaded(api, cart.clone()).await?;

        let result = controller.add(CUSTOMER, ProductStockId::new(7), 1).await;

        match result {
            Err(error @ CartError::Add(_)) => assert!(error.is_rejected(), "expected rejection"),
            other => return Err(format!("expected add failure, got {other:?}").into()),
        }

        assert_eq!(controller.cart(), Some(cart));

        Ok(())
    }

    #[tokio::test]
    async fn non_positive_update_matches_remove() -> TestResult {
        let after_removal = make_cart(
            vec![make_item(2, 8, 1, Decimal::new(5, 0))],
            Decimal::new(5, 0),
        );

        for quantity in [0, -1, -42] {
            let mut update_api = MockCartsApi::new();
            let expected = after_removal.clone();

            update_api.expect_update_cart_item().never();
            update_api
                .expect_remove_cart_item()
                .once()
                .withf(|customer, item| *customer == CUSTOMER && *item == CartItemId::new(1))
                .return_once(move |_, _| Ok(expected));

            let via_update = loaded(update_api, two_item_cart()).await?;

            via_update
                .update_quantity(CUSTOMER, CartItemId::new(1), quantity)
                .await?;

            let mut remove_api = MockCartsApi::new();
            let expected = after_removal.clone();

            remove_api
                .expect_remove_cart_item()
                .once()
                .return_once(move |_, _| Ok(expected));

            let via_remove = loaded(remove_api, two_item_cart()).await?;

            via_remove.remove(CUSTOMER, CartItemId::new(1)).await?;

            assert_eq!(via_update.cart(), via_remove.cart(), "quantity {quantity}");
        }

        Ok(())
    }

    #[tokio::test]
    async fn positive_update_sends_quantity() -> TestResult {
        let mut api = MockCartsApi::new();
        let updated = make_cart(
            vec![
                make_item(1, 7, 3, Decimal::new(10, 0)),
                make_item(2, 8, 1, Decimal::new(5, 0)),
            ],
            Decimal::new(35, 0),
        );
        let returned = updated.clone();

        api.expect_update_cart_item()
            .once()
            .withf(|_, item, quantity| *item == CartItemId::new(1) && *quantity == 3)
            .return_once(move |_, _, _| Ok(returned));

        let controller = loaded(api, two_item_cart()).await?;

        controller
            .update_quantity(CUSTOMER, CartItemId::new(1), 3)
            .await?;

        assert_eq!(controller.cart(), Some(updated));

        Ok(())
    }

    #[tokio::test]
    async fn declined_clear_sends_nothing() -> TestResult {
        let mut api = MockCartsApi::new();
        let mut confirm = MockConfirm::new();

        api.expect_clear_cart().never();
        confirm
            .expect_confirm()
            .once()
            .withf(|prompt| prompt == CLEAR_CART_PROMPT)
            .return_const(false);

        let controller = loaded(api, two_item_cart()).await?;

        assert_eq!(
            controller.clear(CUSTOMER, &confirm).await?,
            ClearOutcome::Declined
        );
        assert_eq!(controller.cart(), Some(two_item_cart()));

        Ok(())
    }

    #[tokio::test]
    async fn clearing_an_empty_cart_is_idempotent() -> TestResult {
        let mut api = MockCartsApi::new();
        let mut confirm = MockConfirm::new();

        api.expect_clear_cart()
            .times(2)
            .returning(|_| Err(not_found()));
        confirm.expect_confirm().return_const(true);

        let controller = CartController::new(Arc::new(api));

        for _ in 0..2 {
            assert_eq!(
                controller.clear(CUSTOMER, &confirm).await?,
                ClearOutcome::Cleared
            );
            assert_eq!(controller.cart(), None);
        }

        Ok(())
    }

    #[tokio::test]
    async fn clear_failure_keeps_cart() -> TestResult {
        let mut api = MockCartsApi::new();
        let mut confirm = MockConfirm::new();

        api.expect_clear_cart()
            .once()
            .return_once(|_| Err(ApiError::Timeout));
        confirm.expect_confirm().return_const(true);

        let controller = loaded(api, two_item_cart()).await?;

        let result = controller.clear(CUSTOMER, &confirm).await;

        assert!(
            matches!(result, Err(CartError::Clear(ApiError::Timeout))),
            "expected clear timeout, got {result:?}"
        );
        assert!(controller.can_checkout());

        Ok(())
    }
}
