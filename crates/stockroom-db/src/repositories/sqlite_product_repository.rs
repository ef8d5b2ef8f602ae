//! `SQLite` implementation of the `ProductRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use stockroom_core::{NewProduct, Product, ProductRepository, ProductUpdate, RepositoryError};

use super::row_mappers::{PRODUCT_SELECT_COLUMNS, row_to_product};

/// `SQLite` implementation of the `ProductRepository` trait.
///
/// Holds a connection pool and implements all CRUD and image-list operations
/// for products. Updates are whole-field-set replacement: concurrent updates
/// to the same record are last-write-wins with no version token.
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Create a new `SQLite` product repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a mutated image list and refresh `updated_at`.
    async fn write_images(&self, product: &mut Product) -> Result<(), RepositoryError> {
        let images_json = serde_json::to_string(&product.images)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        product.updated_at = Utc::now();

        let result = sqlx::query("UPDATE products SET images = ?, updated_at = ? WHERE id = ?")
            .bind(&images_json)
            .bind(product.updated_at.to_rfc3339())
            .bind(product.id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Product not found".to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let query = format!("SELECT {PRODUCT_SELECT_COLUMNS} FROM products ORDER BY id");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_product).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let query = format!("SELECT {PRODUCT_SELECT_COLUMNS} FROM products WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound("Product not found".to_string()))?;

        row_to_product(&row)
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"INSERT INTO products (
                title, category, price, quantity, description, color, size, brand,
                images, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, '[]', ?, ?)"#,
        )
        .bind(&product.title)
        .bind(&product.category)
        .bind(product.price)
        .bind(product.quantity)
        .bind(&product.description)
        .bind(&product.color)
        .bind(&product.size)
        .bind(&product.brand)
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn update(&self, id: i64, update: &ProductUpdate) -> Result<Product, RepositoryError> {
        let mut product = self.get_by_id(id).await?;
        update.apply_to(&mut product);
        product.updated_at = Utc::now();

        let result = sqlx::query(
            "UPDATE products SET title = ?, category = ?, price = ?, quantity = ?, description = ?, color = ?, size = ?, brand = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&product.title)
        .bind(&product.category)
        .bind(product.price)
        .bind(product.quantity)
        .bind(&product.description)
        .bind(&product.color)
        .bind(&product.size)
        .bind(&product.brand)
        .bind(product.updated_at.to_rfc3339())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Product not found".to_string()));
        }

        Ok(product)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Product not found".to_string()));
        }

        Ok(())
    }

    async fn append_images(&self, id: i64, urls: &[String]) -> Result<Product, RepositoryError> {
        let mut product = self.get_by_id(id).await?;
        product.images.extend_from_slice(urls);
        self.write_images(&mut product).await?;
        Ok(product)
    }

    async fn remove_image(&self, id: i64, url: &str) -> Result<Product, RepositoryError> {
        let mut product = self.get_by_id(id).await?;
        // Value-based removal: every occurrence goes, a missing URL is a no-op.
        product.images.retain(|existing| existing != url);
        self.write_images(&mut product).await?;
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;
    use std::time::Duration;

    async fn repo() -> SqliteProductRepository {
        let pool = setup_test_database().await.unwrap();
        SqliteProductRepository::new(pool)
    }

    fn mug() -> NewProduct {
        NewProduct::new("Mug", "Home", 9.99, 5)
    }

    #[tokio::test]
    async fn insert_assigns_id_and_timestamps() {
        let repo = repo().await;

        let created = repo.insert(&mug()).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.title, "Mug");
        assert_eq!(created.category, "Home");
        assert!(created.images.is_empty());
        assert_eq!(created.created_at, created.updated_at);
    }

    #[tokio::test]
    async fn get_by_id_returns_not_found_for_unknown_id() {
        let repo = repo().await;

        let err = repo.get_by_id(999).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_returns_products_in_insertion_order() {
        let repo = repo().await;
        repo.insert(&NewProduct::new("A", "X", 1.0, 1)).await.unwrap();
        repo.insert(&NewProduct::new("B", "X", 1.0, 1)).await.unwrap();
        repo.insert(&NewProduct::new("C", "X", 1.0, 1)).await.unwrap();

        let titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn update_merges_partial_fields_and_bumps_updated_at() {
        let repo = repo().await;
        let created = repo
            .insert(&NewProduct {
                brand: Some("Acme".to_string()),
                ..mug()
            })
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;
        let update = ProductUpdate {
            quantity: Some(0),
            ..ProductUpdate::default()
        };
        let updated = repo.update(created.id, &update).await.unwrap();

        assert_eq!(updated.quantity, 0);
        assert_eq!(updated.title, "Mug");
        assert_eq!(updated.brand.as_deref(), Some("Acme"));
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.created_at, created.created_at);

        // And the merge is what got persisted
        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.quantity, 0);
        assert_eq!(fetched.brand.as_deref(), Some("Acme"));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let repo = repo().await;
        let err = repo.update(42, &ProductUpdate::default()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_is_hard_and_not_idempotent() {
        let repo = repo().await;
        let created = repo.insert(&mug()).await.unwrap();

        repo.delete(created.id).await.unwrap();
        assert!(matches!(
            repo.get_by_id(created.id).await.unwrap_err(),
            RepositoryError::NotFound(_)
        ));
        // Second delete on the same id also fails, never a silent success
        assert!(matches!(
            repo.delete(created.id).await.unwrap_err(),
            RepositoryError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn append_images_preserves_order_and_existing_entries() {
        let repo = repo().await;
        let created = repo.insert(&mug()).await.unwrap();

        let first = vec!["/uploads/a.png".to_string()];
        repo.append_images(created.id, &first).await.unwrap();

        let second = vec!["/uploads/b.png".to_string(), "/uploads/c.png".to_string()];
        let updated = repo.append_images(created.id, &second).await.unwrap();

        assert_eq!(
            updated.images,
            vec!["/uploads/a.png", "/uploads/b.png", "/uploads/c.png"]
        );
    }

    #[tokio::test]
    async fn remove_image_drops_every_occurrence() {
        let repo = repo().await;
        let created = repo.insert(&mug()).await.unwrap();
        let urls = vec![
            "/uploads/a.png".to_string(),
            "/uploads/dup.png".to_string(),
            "/uploads/dup.png".to_string(),
        ];
        repo.append_images(created.id, &urls).await.unwrap();

        let updated = repo.remove_image(created.id, "/uploads/dup.png").await.unwrap();
        assert_eq!(updated.images, vec!["/uploads/a.png"]);
    }

    #[tokio::test]
    async fn remove_missing_image_is_a_noop() {
        let repo = repo().await;
        let created = repo.insert(&mug()).await.unwrap();
        let urls = vec!["/uploads/a.png".to_string()];
        repo.append_images(created.id, &urls).await.unwrap();

        let updated = repo
            .remove_image(created.id, "/uploads/never-there.png")
            .await
            .unwrap();
        assert_eq!(updated.images, vec!["/uploads/a.png"]);
    }

    #[tokio::test]
    async fn image_ops_on_unknown_product_are_not_found() {
        let repo = repo().await;
        let urls = vec!["/uploads/a.png".to_string()];
        assert!(matches!(
            repo.append_images(7, &urls).await.unwrap_err(),
            RepositoryError::NotFound(_)
        ));
        assert!(matches!(
            repo.remove_image(7, "/uploads/a.png").await.unwrap_err(),
            RepositoryError::NotFound(_)
        ));
    }
}
