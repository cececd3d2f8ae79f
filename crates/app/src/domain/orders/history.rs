//! Read-only view of a customer's past orders.

use std::{fmt, sync::Arc};

use parking_lot::RwLock;
use tracing::{debug, error};

use crate::{
    api::OrdersApi,
    domain::{
        orders::{
            errors::OrderError,
            models::{Order, OrderId},
        },
        profiles::models::PersonId,
    },
};

pub struct OrderHistory {
    api: Arc<dyn OrdersApi>,
    orders: RwLock<Vec<Order>>,
}

impl fmt::Debug for OrderHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderHistory")
            .field("orders", &self.orders.read().len())
            .finish_non_exhaustive()
    }
}

impl OrderHistory {
    pub fn new(api: Arc<dyn OrdersApi>) -> Self {
        Self {
            api,
            orders: RwLock::new(Vec::new()),
        }
    }

    /// Orders from the last successful load, in backend order.
    pub fn orders(&self) -> Vec<Order> {
        self.orders.read().clone()
    }

    /// Fetch the customer's orders, newest first as the backend returns them.
    /// A customer the backend does not know has no orders.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Load`] when the list cannot be fetched; the
    /// previous list is kept.
    pub async fn load(&self, customer: PersonId) -> Result<Vec<Order>, OrderError> {
        let orders = match self.api.list_customer_orders(customer).await {
            Ok(orders) => orders,
            Err(source) if source.is_not_found() => Vec::new(),
            Err(source) => {
                error!(%customer, "failed to load orders: {source}");

                return Err(OrderError::Load(source));
            }
        };

        debug!(%customer, count = orders.len(), "orders loaded");

        self.orders.write().clone_from(&orders);

        Ok(orders)
    }

    /// Fetch one order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotFound`] for an unknown order and
    /// [`OrderError::Get`] for any other failure.
    pub async fn get(&self, order: OrderId) -> Result<Order, OrderError> {
        self.api.get_order(order).await.map_err(|source| {
            if source.is_not_found() {
                OrderError::NotFound(order)
            } else {
                error!(%order, "failed to load order: {source}");

                OrderError::Get { order, source }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        api::{ApiError, MockOrdersApi},
        test::fixtures::{CUSTOMER, make_cart, make_item, make_order},
    };

    use super::*;

    #[tokio::test]
    async fn load_keeps_backend_order() -> TestResult {
        let mut api = MockOrdersApi::new();
        let cart = make_cart(vec![make_item(1, 7, 1, Decimal::TEN)], Decimal::TEN);
        let newest = Order {
            order_id: OrderId::new(102),
            ..make_order(&cart)
        };
        let oldest = make_order(&cart);
        let returned = vec![newest.clone(), oldest.clone()];

        api.expect_list_customer_orders()
            .once()
            .withf(|customer| *customer == CUSTOMER)
            .return_once(move |_| Ok(returned));

        let history = OrderHistory::new(Arc::new(api));

        let orders = history.load(CUSTOMER).await?;

        assert_eq!(orders, vec![newest, oldest]);
        assert_eq!(history.orders().len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_customer_has_no_orders() -> TestResult {
        let mut api = MockOrdersApi::new();

        api.expect_list_customer_orders().once().return_once(|_| {
            Err(ApiError::NotFound {
                message: "Not Found".to_string(),
            })
        });

        let history = OrderHistory::new(Arc::new(api));

        assert!(history.load(CUSTOMER).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn missing_order_is_reported_by_id() {
        let mut api = MockOrdersApi::new();

        api.expect_get_order().once().return_once(|_| {
            Err(ApiError::NotFound {
                message: "Not Found".to_string(),
            })
        });

        let history = OrderHistory::new(Arc::new(api));

        let result = history.get(OrderId::new(9)).await;

        assert!(
            matches!(result, Err(OrderError::NotFound(order)) if order == OrderId::new(9)),
            "expected NotFound, got {result:?}"
        );
    }
}
