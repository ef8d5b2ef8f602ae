//! Product repository trait definition.
//!
//! This port defines the interface for product persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewProduct, Product, ProductUpdate};

/// Repository for product persistence operations.
///
/// Validation and list filtering belong to the services, not here: the
/// repository assumes its inputs already satisfy the domain invariants.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products in insertion order.
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Get a product by its store ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the product doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;

    /// Insert a new product with an empty image list.
    ///
    /// Returns the persisted product with its assigned ID and timestamps.
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;

    /// Merge a partial update into an existing product and refresh
    /// `updated_at`. Returns the updated product.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the product doesn't exist.
    async fn update(&self, id: i64, update: &ProductUpdate) -> Result<Product, RepositoryError>;

    /// Delete a product by its store ID. Attached files on disk are not
    /// touched.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the product doesn't exist,
    /// including on a repeated delete.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// Append URL paths to the product's image list, in the given order,
    /// and refresh `updated_at`. Returns the updated product.
    async fn append_images(&self, id: i64, urls: &[String]) -> Result<Product, RepositoryError>;

    /// Remove every occurrence of `url` from the product's image list and
    /// refresh `updated_at`. Removing a URL that isn't present is a no-op,
    /// not an error. Returns the updated product.
    async fn remove_image(&self, id: i64, url: &str) -> Result<Product, RepositoryError>;
}
