//! Cart Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        products::models::{ProductStock, ProductStockId},
        profiles::models::PersonId,
    },
    ids::TypedId,
    money,
};

/// Cart Id
pub type CartId = TypedId<Cart>;

/// Cart Item Id
pub type CartItemId = TypedId<CartItem>;

/// Cart Model
///
/// `total_items` and `total_amount` are computed by the backend and are the
/// figures to display. They are never recomputed locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub cart_id: Option<CartId>,
    pub customer_id: PersonId,
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "crate::domain::nullable")]
    pub cart_items: Vec<CartItem>,
    #[serde(default, deserialize_with = "crate::domain::nullable")]
    pub total_amount: Decimal,
    #[serde(default, deserialize_with = "crate::domain::nullable")]
    pub total_items: u32,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.cart_items.is_empty()
    }

    pub fn item(&self, id: CartItemId) -> Option<&CartItem> {
        self.cart_items.iter().find(|item| item.cart_item_id == id)
    }
}

/// CartItem Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub cart_item_id: CartItemId,
    pub product_stock: ProductStock,
    pub quantity: u32,

    /// Unit price frozen when the item was added.
    pub price_at_time_of_add: Decimal,

    #[serde(default, deserialize_with = "crate::domain::nullable")]
    pub total_price: Decimal,
}

impl CartItem {
    /// Quantity times the frozen unit price, for display.
    pub fn line_total(&self) -> Decimal {
        money::line_total(self.quantity, self.price_at_time_of_add)
    }

    pub fn name(&self) -> &str {
        self.product_stock.name()
    }
}

/// Add To Cart Request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCart {
    pub product_stock_id: ProductStockId,
    pub quantity: u32,
}
