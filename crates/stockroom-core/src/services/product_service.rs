//! Product service - orchestrates product CRUD operations.

use std::sync::Arc;

use crate::domain::{NewProduct, Product, ProductFilter, ProductUpdate, filter_products};
use crate::ports::{CoreError, ProductRepository};

/// Service for product operations.
///
/// Validates inputs at the domain boundary, then delegates persistence to
/// the injected `ProductRepository`. A rejected input never reaches the
/// store.
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Create a new product service with the given repository.
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Create a product. Fails with a validation error when a required field
    /// is missing or a numeric constraint is violated; nothing is persisted
    /// in that case.
    pub async fn create(&self, product: NewProduct) -> Result<Product, CoreError> {
        product.validate()?;
        Ok(self.repo.insert(&product).await?)
    }

    /// List products matching the filter.
    ///
    /// Fetches the current snapshot and applies the pure filter function,
    /// so search/category semantics are identical regardless of the store.
    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, CoreError> {
        let products = self.repo.list().await?;
        Ok(filter_products(products, filter))
    }

    /// Get a product by ID.
    pub async fn get(&self, id: i64) -> Result<Product, CoreError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    /// Apply a partial update to a product. Unspecified fields keep their
    /// prior values.
    pub async fn update(&self, id: i64, update: ProductUpdate) -> Result<Product, CoreError> {
        update.validate()?;
        Ok(self.repo.update(id, &update).await?)
    }

    /// Delete a product. Files referenced by its image list stay on disk.
    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        Ok(self.repo.delete(id).await?)
    }
}
