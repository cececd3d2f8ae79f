//! Checkout and order endpoints.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;

use crate::{
    api::{client::HttpStoreApi, errors::ApiError},
    domain::{
        checkout::models::CheckoutRequest,
        orders::models::{Order, OrderId, OrderStatus},
        profiles::models::PersonId,
    },
};

#[automock]
#[async_trait]
pub trait OrdersApi: Send + Sync {
    /// Turn the customer's cart into an order. The backend empties the cart.
    async fn checkout(
        &self,
        customer: PersonId,
        request: CheckoutRequest,
    ) -> Result<Order, ApiError>;

    /// Orders placed by a customer, newest first.
    async fn list_customer_orders(&self, customer: PersonId) -> Result<Vec<Order>, ApiError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderId) -> Result<Order, ApiError>;

    /// Move an order to a new status.
    async fn update_order_status(
        &self,
        order: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError>;

    /// Every order in the system.
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError>;
}

#[async_trait]
impl OrdersApi for HttpStoreApi {
    async fn checkout(
        &self,
        customer: PersonId,
        request: CheckoutRequest,
    ) -> Result<Order, ApiError> {
        self.fetch(
            self.request(Method::POST, &format!("/api/customers/{customer}/checkout"))
                .json(&request),
        )
        .await
    }

    async fn list_customer_orders(&self, customer: PersonId) -> Result<Vec<Order>, ApiError> {
        self.fetch(self.request(Method::GET, &format!("/api/customers/{customer}/orders")))
            .await
    }

    async fn get_order(&self, order: OrderId) -> Result<Order, ApiError> {
        self.fetch(self.request(Method::GET, &format!("/api/orders/{order}")))
            .await
    }

    async fn update_order_status(
        &self,
        order: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        self.fetch(
            self.request(Method::PUT, &format!("/api/orders/{order}/status"))
                .query(&[("status", status.as_str())]),
        )
        .await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.fetch(self.request(Method::GET, "/api/orders")).await
    }
}
