//! Product and seller inventory endpoints.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;

use crate::{
    api::{client::HttpStoreApi, errors::ApiError},
    domain::{
        products::models::{NewProduct, ProductStock, ProductStockId, StockUpdate},
        profiles::models::PersonId,
    },
};

#[automock]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Stock entries currently offered to customers.
    async fn list_products(&self) -> Result<Vec<ProductStock>, ApiError>;

    /// Retrieve a single stock entry.
    async fn get_product(&self, stock: ProductStockId) -> Result<ProductStock, ApiError>;

    /// A seller's inventory.
    async fn list_seller_products(&self, seller: PersonId) -> Result<Vec<ProductStock>, ApiError>;

    /// List a new product for a seller.
    async fn add_seller_product(
        &self,
        seller: PersonId,
        product: NewProduct,
    ) -> Result<ProductStock, ApiError>;

    /// Change the available amount and/or price of a seller's stock entry.
    async fn update_seller_stock(
        &self,
        seller: PersonId,
        stock: ProductStockId,
        update: StockUpdate,
    ) -> Result<ProductStock, ApiError>;

    /// Withdraw a stock entry from sale.
    async fn remove_seller_product(
        &self,
        seller: PersonId,
        stock: ProductStockId,
    ) -> Result<(), ApiError>;
}

#[async_trait]
impl CatalogApi for HttpStoreApi {
    async fn list_products(&self) -> Result<Vec<ProductStock>, ApiError> {
        self.fetch(self.request(Method::GET, "/api/customers/products"))
            .await
    }

    async fn get_product(&self, stock: ProductStockId) -> Result<ProductStock, ApiError> {
        self.fetch(self.request(Method::GET, &format!("/api/products/{stock}")))
            .await
    }

    async fn list_seller_products(&self, seller: PersonId) -> Result<Vec<ProductStock>, ApiError> {
        self.fetch(self.request(Method::GET, &format!("/api/sellers/{seller}/products")))
            .await
    }

    async fn add_seller_product(
        &self,
        seller: PersonId,
        product: NewProduct,
    ) -> Result<ProductStock, ApiError> {
        self.fetch(
            self.request(Method::POST, &format!("/api/sellers/{seller}/products"))
                .json(&product),
        )
        .await
    }

    async fn update_seller_stock(
        &self,
        seller: PersonId,
        stock: ProductStockId,
        update: StockUpdate,
    ) -> Result<ProductStock, ApiError> {
        self.fetch(
            self.request(
                Method::PUT,
                &format!("/api/sellers/{seller}/products/{stock}/stock"),
            )
            .json(&update),
        )
        .await
    }

    async fn remove_seller_product(
        &self,
        seller: PersonId,
        stock: ProductStockId,
    ) -> Result<(), ApiError> {
        self.execute(self.request(
            Method::DELETE,
            &format!("/api/sellers/{seller}/products/{stock}"),
        ))
        .await
    }
}
