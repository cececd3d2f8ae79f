//! Order Models

use std::{fmt, str::FromStr};

use jiff::civil::DateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::{products::models::ProductStockId, profiles::models::PersonId},
    ids::TypedId,
};

/// Order Id
pub type OrderId = TypedId<Order>;

/// Order Item Id
pub type OrderItemId = TypedId<OrderItem>;

/// Order lifecycle status, owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Processing => "PROCESSING",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
            Self::Refunded => "REFUNDED",
        }
    }

    /// Whether the order can still change status.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed | Self::Processing | Self::Shipped)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown order status `{0}`")]
pub struct UnknownOrderStatus(String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "PROCESSING" => Ok(Self::Processing),
            "SHIPPED" => Ok(Self::Shipped),
            "DELIVERED" => Ok(Self::Delivered),
            "CANCELLED" => Ok(Self::Cancelled),
            "REFUNDED" => Ok(Self::Refunded),
            _ => Err(UnknownOrderStatus(value.to_string())),
        }
    }
}

/// Order Model
///
/// The immutable result of a checkout. Totals and frozen prices are shown
/// exactly as the backend reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: OrderId,
    pub customer_id: Option<PersonId>,
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "crate::domain::nullable")]
    pub order_items: Vec<OrderItem>,
    pub order_date: Option<DateTime>,
    pub total_amount: Decimal,
    pub shipping_address: Option<String>,
    pub billing_address: Option<String>,
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
    pub status: OrderStatus,
    pub order_notes: Option<String>,
}

impl Order {
    pub fn item_count(&self) -> u32 {
        self.order_items.iter().map(|item| item.quantity).sum()
    }
}

/// OrderItem Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub order_item_id: OrderItemId,
    pub product_stock_id: Option<ProductStockId>,
    pub product_name: Option<String>,
    pub product_description: Option<String>,

    /// Unit price frozen when the order was placed.
    pub price_at_time_of_order: Decimal,
    pub quantity: u32,
    #[serde(default, deserialize_with = "crate::domain::nullable")]
    pub total_price: Decimal,
}
