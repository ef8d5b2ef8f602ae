//! Product domain types.
//!
//! Field names serialize in camelCase because that is the wire contract the
//! mobile client consumes (`createdAt`, `updatedAt`, etc.).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// A product that exists in the store with an assigned ID.
///
/// Use `NewProduct` for products that haven't been persisted yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned ID (always present for persisted products). Immutable.
    pub id: i64,
    /// Display title. Never empty.
    pub title: String,
    /// Free-form category label. Never empty.
    pub category: String,
    /// Unit price. Non-negative.
    pub price: f64,
    /// Units in stock. Non-negative.
    pub quantity: i64,
    pub description: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub brand: Option<String>,
    /// Ordered image URL paths (`/uploads/<name>`). Duplicates are allowed
    /// and entries are never checked for reachability.
    #[serde(default)]
    pub images: Vec<String>,
    /// Set by the store on insert.
    pub created_at: DateTime<Utc>,
    /// Refreshed by the store on every update, including image mutations.
    pub updated_at: DateTime<Utc>,
}

/// A product to be inserted into the store (no ID yet).
///
/// Images are deliberately absent: every product starts with an empty image
/// list and attachments arrive through the upload endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
}

impl NewProduct {
    /// Create a new product with the required fields only.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            price,
            quantity,
            description: None,
            color: None,
            size: None,
            brand: None,
        }
    }

    /// Check the creation invariants: `title` and `category` present and
    /// non-empty, `price` a finite non-negative number, `quantity >= 0`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::Required("title"));
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::Required("category"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::Negative("price"));
        }
        if self.quantity < 0 {
            return Err(ValidationError::Negative("quantity"));
        }
        Ok(())
    }
}

/// A partial update: only the provided fields are replaced, everything else
/// keeps its prior value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub brand: Option<String>,
}

impl ProductUpdate {
    /// Check that the provided fields keep the product invariants intact.
    /// `title` and `category` must remain non-empty after any update.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(ValidationError::Required("title"));
            }
        }
        if let Some(category) = &self.category {
            if category.trim().is_empty() {
                return Err(ValidationError::Required("category"));
            }
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err(ValidationError::Negative("price"));
            }
        }
        if let Some(quantity) = self.quantity {
            if quantity < 0 {
                return Err(ValidationError::Negative("quantity"));
            }
        }
        Ok(())
    }

    /// Merge the provided fields into `product`, leaving the rest untouched.
    ///
    /// The image list and timestamps are not part of a field update; the
    /// repository refreshes `updated_at` when it persists the merge.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(title) = &self.title {
            product.title = title.clone();
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(description) = &self.description {
            product.description = Some(description.clone());
        }
        if let Some(color) = &self.color {
            product.color = Some(color.clone());
        }
        if let Some(size) = &self.size {
            product.size = Some(size.clone());
        }
        if let Some(brand) = &self.brand {
            product.brand = Some(brand.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persisted(new: &NewProduct) -> Product {
        let now = Utc::now();
        Product {
            id: 1,
            title: new.title.clone(),
            category: new.category.clone(),
            price: new.price,
            quantity: new.quantity,
            description: new.description.clone(),
            color: new.color.clone(),
            size: new.size.clone(),
            brand: new.brand.clone(),
            images: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn valid_product_passes_validation() {
        let new = NewProduct::new("Mug", "Home", 9.99, 5);
        assert!(new.validate().is_ok());
    }

    #[test]
    fn missing_title_is_rejected() {
        let new = NewProduct::new("   ", "Home", 9.99, 5);
        assert!(matches!(
            new.validate(),
            Err(ValidationError::Required("title"))
        ));
    }

    #[test]
    fn missing_category_is_rejected() {
        let new = NewProduct::new("Mug", "", 9.99, 5);
        assert!(matches!(
            new.validate(),
            Err(ValidationError::Required("category"))
        ));
    }

    #[test]
    fn negative_price_and_quantity_are_rejected() {
        assert!(matches!(
            NewProduct::new("Mug", "Home", -0.01, 5).validate(),
            Err(ValidationError::Negative("price"))
        ));
        assert!(matches!(
            NewProduct::new("Mug", "Home", 9.99, -1).validate(),
            Err(ValidationError::Negative("quantity"))
        ));
    }

    #[test]
    fn non_finite_price_is_rejected() {
        assert!(NewProduct::new("Mug", "Home", f64::NAN, 5).validate().is_err());
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let mut product = persisted(&NewProduct {
            brand: Some("Acme".to_string()),
            ..NewProduct::new("Mug", "Home", 9.99, 5)
        });
        let update = ProductUpdate {
            quantity: Some(0),
            ..ProductUpdate::default()
        };
        update.apply_to(&mut product);

        assert_eq!(product.quantity, 0);
        assert_eq!(product.title, "Mug");
        assert_eq!(product.category, "Home");
        assert!((product.price - 9.99).abs() < f64::EPSILON);
        assert_eq!(product.brand.as_deref(), Some("Acme"));
    }

    #[test]
    fn update_rejects_emptied_title() {
        let update = ProductUpdate {
            title: Some(String::new()),
            ..ProductUpdate::default()
        };
        assert!(matches!(
            update.validate(),
            Err(ValidationError::Required("title"))
        ));
    }

    #[test]
    fn product_serializes_with_camel_case_timestamps() {
        let product = persisted(&NewProduct::new("Mug", "Home", 9.99, 5));
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["images"], serde_json::json!([]));
    }
}
