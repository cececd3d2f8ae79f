//! Cart endpoints.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;

use crate::{
    api::{client::HttpStoreApi, errors::ApiError},
    domain::{
        carts::models::{AddToCart, Cart, CartItemId},
        profiles::models::PersonId,
    },
};

#[automock]
#[async_trait]
pub trait CartsApi: Send + Sync {
    /// Retrieve the customer's cart. A customer without one yields `NotFound`.
    async fn get_cart(&self, customer: PersonId) -> Result<Cart, ApiError>;

    /// Add a stock item; the backend creates the cart on first use.
    async fn add_to_cart(&self, customer: PersonId, item: AddToCart) -> Result<Cart, ApiError>;

    /// Set the quantity of an existing line.
    async fn update_cart_item(
        &self,
        customer: PersonId,
        item: CartItemId,
        quantity: u32,
    ) -> Result<Cart, ApiError>;

    /// Remove a line from the cart.
    async fn remove_cart_item(&self, customer: PersonId, item: CartItemId)
    -> Result<Cart, ApiError>;

    /// Remove every line from the cart.
    async fn clear_cart(&self, customer: PersonId) -> Result<(), ApiError>;
}

fn cart_path(customer: PersonId) -> String {
    format!("/api/customers/{customer}/cart")
}

fn cart_item_path(customer: PersonId, item: CartItemId) -> String {
    format!("/api/customers/{customer}/cart/items/{item}")
}

#[async_trait]
impl CartsApi for HttpStoreApi {
    async fn get_cart(&self, customer: PersonId) -> Result<Cart, ApiError> {
        self.fetch(self.request(Method::GET, &cart_path(customer)))
            .await
    }

    async fn add_to_cart(&self, customer: PersonId, item: AddToCart) -> Result<Cart, ApiError> {
        self.fetch(self.request(Method::POST, &cart_path(customer)).json(&item))
            .await
    }

    async fn update_cart_item(
        &self,
        customer: PersonId,
        item: CartItemId,
        quantity: u32,
    ) -> Result<Cart, ApiError> {
        self.fetch(
            self.request(Method::PUT, &cart_item_path(customer, item))
                .query(&[("quantity", quantity)]),
        )
        .await
    }

    async fn remove_cart_item(
        &self,
        customer: PersonId,
        item: CartItemId,
    ) -> Result<Cart, ApiError> {
        self.fetch(self.request(Method::DELETE, &cart_item_path(customer, item)))
            .await
    }

    async fn clear_cart(&self, customer: PersonId) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, &cart_path(customer)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_customer_cart_layout() {
        assert_eq!(cart_path(PersonId::new(5)), "/api/customers/5/cart");
        assert_eq!(
            cart_item_path(PersonId::new(5), CartItemId::new(11)),
            "/api/customers/5/cart/items/11"
        );
    }
}
