//! Pure list filtering.
//!
//! Filtering is a pure function over a snapshot of products rather than
//! ad-hoc store query syntax: the same criteria apply whether the snapshot
//! came from the repository or from a client-side cache, and the semantics
//! are testable without a store.

use serde::Deserialize;

use super::product::Product;

/// Criteria for listing products. Both fields optional; empty strings are
/// treated as absent (the contract clients already rely on).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilter {
    /// Case-insensitive substring match against `title`.
    pub search: Option<String>,
    /// Exact match against `category`.
    pub category: Option<String>,
}

impl ProductFilter {
    fn normalized(value: Option<&str>) -> Option<&str> {
        value.filter(|v| !v.is_empty())
    }

    /// True when no criteria are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Self::normalized(self.search.as_deref()).is_none()
            && Self::normalized(self.category.as_deref()).is_none()
    }

    /// True when `product` satisfies every set criterion (logical AND).
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(search) = Self::normalized(self.search.as_deref()) {
            if !product
                .title
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        if let Some(category) = Self::normalized(self.category.as_deref()) {
            if product.category != category {
                return false;
            }
        }
        true
    }
}

/// Derive the filtered view of a product snapshot.
///
/// Preserves the snapshot's order; an empty filter returns it unchanged.
#[must_use]
pub fn filter_products(products: Vec<Product>, filter: &ProductFilter) -> Vec<Product> {
    if filter.is_empty() {
        return products;
    }
    products
        .into_iter()
        .filter(|product| filter.matches(product))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewProduct;
    use chrono::Utc;

    fn product(id: i64, title: &str, category: &str) -> Product {
        let new = NewProduct::new(title, category, 1.0, 1);
        let now = Utc::now();
        Product {
            id,
            title: new.title,
            category: new.category,
            price: new.price,
            quantity: new.quantity,
            description: None,
            color: None,
            size: None,
            brand: None,
            images: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn snapshot() -> Vec<Product> {
        vec![
            product(1, "Blue Shirt", "Clothing"),
            product(2, "T-SHIRT classic", "Clothing"),
            product(3, "Wireless Headphones", "Electronics"),
            product(4, "Shirt Press", "Electronics"),
        ]
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let filter = ProductFilter {
            search: Some("shirt".to_string()),
            category: None,
        };
        let ids: Vec<i64> = filter_products(snapshot(), &filter)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn category_is_exact_match() {
        let filter = ProductFilter {
            search: None,
            category: Some("Electronics".to_string()),
        };
        let ids: Vec<i64> = filter_products(snapshot(), &filter)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![3, 4]);

        let partial = ProductFilter {
            search: None,
            category: Some("Electro".to_string()),
        };
        assert!(filter_products(snapshot(), &partial).is_empty());
    }

    #[test]
    fn combined_criteria_apply_logical_and() {
        let filter = ProductFilter {
            search: Some("shirt".to_string()),
            category: Some("Electronics".to_string()),
        };
        let ids: Vec<i64> = filter_products(snapshot(), &filter)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn empty_strings_are_treated_as_absent() {
        let filter = ProductFilter {
            search: Some(String::new()),
            category: Some(String::new()),
        };
        assert!(filter.is_empty());
        assert_eq!(filter_products(snapshot(), &filter).len(), 4);
    }
}
