//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, Utc};
use sqlx::Row;
use stockroom_core::{Product, RepositoryError};

/// Shared SELECT column list for product queries.
pub const PRODUCT_SELECT_COLUMNS: &str =
    "id, title, category, price, quantity, description, color, size, brand, images, created_at, updated_at";

/// Parse an RFC 3339 timestamp column.
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Storage(format!("invalid timestamp '{value}': {e}")))
}

/// Parse a database row into a Product.
pub fn row_to_product(row: &sqlx::sqlite::SqliteRow) -> Result<Product, RepositoryError> {
    let images_json: String = row
        .try_get("images")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;
    let images: Vec<String> = serde_json::from_str(&images_json)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    let created_at: String = row
        .try_get("created_at")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;
    let updated_at: String = row
        .try_get("updated_at")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    Ok(Product {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        title: row
            .try_get("title")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        category: row
            .try_get("category")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        price: row
            .try_get("price")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        quantity: row
            .try_get("quantity")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        description: row
            .try_get("description")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        color: row
            .try_get("color")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        size: row
            .try_get("size")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        brand: row
            .try_get("brand")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        images,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}
