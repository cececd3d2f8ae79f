//! Product catalog and seller inventory.
//!
//! Stock amounts shown here are informational. Whether an item can actually
//! be bought is decided by the backend when it is added to a cart.

use std::{fmt, sync::Arc};

use parking_lot::RwLock;
use rust_decimal::Decimal;
use tracing::{debug, error, info, warn};

use crate::{
    api::{ApiError, CatalogApi},
    domain::{
        products::{
            errors::ProductError,
            models::{NewProduct, ProductStock, ProductStockId, StockUpdate},
        },
        profiles::models::PersonId,
    },
};

pub struct Catalog {
    api: Arc<dyn CatalogApi>,
    products: RwLock<Vec<ProductStock>>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("products", &self.products.read().len())
            .finish_non_exhaustive()
    }
}

impl Catalog {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            products: RwLock::new(Vec::new()),
        }
    }

    /// Fetch everything currently offered to customers.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::Load`] when the listing fails; the previous
    /// listing is kept.
    pub async fn load(&self) -> Result<Vec<ProductStock>, ProductError> {
        let products = self.api.list_products().await.map_err(|source| {
            error!("failed to load products: {source}");

            ProductError::Load(source)
        })?;

        debug!(count = products.len(), "products loaded");

        self.products.write().clone_from(&products);

        Ok(products)
    }

    /// The last loaded listing.
    pub fn available(&self) -> Vec<ProductStock> {
        self.products.read().clone()
    }

    /// Entries in the last listing with nothing left to sell.
    pub fn out_of_stock(&self) -> Vec<ProductStockId> {
        self.products
            .read()
            .iter()
            .filter(|stock| !stock.is_in_stock())
            .map(|stock| stock.product_stock_id)
            .collect()
    }

    /// # Errors
    ///
    /// Returns [`ProductError::NotFound`] for an unknown entry.
    pub async fn get(&self, stock: ProductStockId) -> Result<ProductStock, ProductError> {
        self.api.get_product(stock).await.map_err(|source| {
            if source.is_not_found() {
                ProductError::NotFound(stock)
            } else {
                ProductError::Load(source)
            }
        })
    }

    /// # Errors
    ///
    /// Returns [`ProductError::Load`] when the inventory cannot be fetched.
    pub async fn seller_products(
        &self,
        seller: PersonId,
    ) -> Result<Vec<ProductStock>, ProductError> {
        self.api
            .list_seller_products(seller)
            .await
            .map_err(ProductError::Load)
    }

    /// List a new product for sale.
    ///
    /// # Errors
    ///
    /// Rejects a blank name or negative price before contacting the backend;
    /// returns [`ProductError::Inventory`] when the backend refuses.
    pub async fn add_product(
        &self,
        seller: PersonId,
        product: NewProduct,
    ) -> Result<ProductStock, ProductError> {
        let name = product.name.trim();

        if name.is_empty() {
            return Err(ProductError::MissingName);
        }

        if product.price < Decimal::ZERO {
            return Err(ProductError::NegativePrice);
        }

        let product = NewProduct {
            name: name.to_string(),
            ..product
        };

        let stock = self
            .api
            .add_seller_product(seller, product)
            .await
            .map_err(|source| inventory_failure("add product", seller, source))?;

        info!(%seller, stock = %stock.product_stock_id, "product listed");

        Ok(stock)
    }

    /// Change amount and/or price of a stock entry.
    ///
    /// # Errors
    ///
    /// Rejects an empty update or negative price before contacting the
    /// backend; returns [`ProductError::Inventory`] when the backend refuses.
    pub async fn update_stock(
        &self,
        seller: PersonId,
        stock: ProductStockId,
        update: StockUpdate,
    ) -> Result<ProductStock, ProductError> {
        if update.quantity.is_none() && update.price.is_none() {
            return Err(ProductError::EmptyUpdate);
        }

        if update.price.is_some_and(|price| price < Decimal::ZERO) {
            return Err(ProductError::NegativePrice);
        }

        let updated = self
            .api
            .update_seller_stock(seller, stock, update)
            .await
            .map_err(|source| inventory_failure("update stock", seller, source))?;

        info!(%seller, %stock, amount = updated.amount, "stock updated");

        Ok(updated)
    }

    /// # Errors
    ///
    /// Returns [`ProductError::Inventory`] when the backend refuses.
    pub async fn remove_product(
        &self,
        seller: PersonId,
        stock: ProductStockId,
    ) -> Result<(), ProductError> {
        self.api
            .remove_seller_product(seller, stock)
            .await
            .map_err(|source| inventory_failure("remove product", seller, source))?;

        info!(%seller, %stock, "product withdrawn");

        Ok(())
    }
}

fn inventory_failure(action: &str, seller: PersonId, source: ApiError) -> ProductError {
    warn!(%seller, status = ?source.status(), "{action} failed: {source}");

    ProductError::Inventory(source)
}
