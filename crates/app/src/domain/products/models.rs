//! Product Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{domain::profiles::models::PersonId, ids::TypedId};

/// Product Id
pub type ProductId = TypedId<Product>;

/// Product Stock Id
pub type ProductStockId = TypedId<ProductStock>;

/// Product Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: Option<ProductId>,
    pub name: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::domain::nullable")]
    pub price: Decimal,
}

/// A sellable unit: a product, how many are available, and who sells it.
///
/// The amount is informational only. Stock sufficiency is enforced by the
/// backend when an item is added or an order is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStock {
    pub product_stock_id: ProductStockId,
    pub product: Option<Product>,
    pub seller_id: Option<PersonId>,
    pub seller_name: Option<String>,
    #[serde(default, deserialize_with = "crate::domain::nullable")]
    pub amount: i64,
}

impl ProductStock {
    /// Display name, falling back to a generic label.
    pub fn name(&self) -> &str {
        self.product
            .as_ref()
            .map_or("Product", |product| product.name.as_str())
    }

    /// Current catalog price, if the product details were included.
    pub fn price(&self) -> Option<Decimal> {
        self.product.as_ref().map(|product| product.price)
    }

    pub fn is_in_stock(&self) -> bool {
        self.amount > 0
    }
}

/// New Product Model
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub initial_stock: u32,
}

/// Stock Update Model
///
/// Either field may be omitted; the backend applies whichever is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn out_of_stock_entries_are_flagged() -> TestResult {
        let stock: ProductStock = serde_json::from_value(json!({
            "productStockId": 7,
            "product": { "productId": 3, "name": "Lamp", "description": null, "price": 19.5 },
            "sellerId": 12,
            "sellerName": "Ada Seller",
            "amount": 0
        }))?;

        assert!(!stock.is_in_stock());
        assert_eq!(stock.name(), "Lamp");
        assert_eq!(stock.price(), Some(Decimal::new(195, 1)));

        Ok(())
    }

    #[test]
    fn missing_product_uses_generic_name() -> TestResult {
        let stock: ProductStock = serde_json::from_value(json!({
            "productStockId": 1,
            "product": null,
            "amount": null
        }))?;

        assert_eq!(stock.name(), "Product");
        assert_eq!(stock.amount, 0);

        Ok(())
    }

    #[test]
    fn stock_update_omits_absent_fields() -> TestResult {
        let update = StockUpdate {
            quantity: Some(4),
            price: None,
        };

        assert_eq!(serde_json::to_value(&update)?, json!({ "quantity": 4 }));

        Ok(())
    }
}
