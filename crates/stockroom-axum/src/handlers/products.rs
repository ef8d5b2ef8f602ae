//! Product handlers - CRUD operations.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use super::parse_id;
use crate::error::HttpError;
use crate::extract::ApiJson;
use crate::state::AppState;
use stockroom_core::{NewProduct, Product, ProductFilter, ProductUpdate, ValidationError};

/// Request body for creating a product.
///
/// Everything is optional at the deserialization boundary so a missing
/// field surfaces as the contract's 400 validation message instead of an
/// extractor rejection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub brand: Option<String>,
}

impl CreateProductRequest {
    /// Convert into the domain type. Absent `title`/`category` become empty
    /// strings so the domain validation reports them as missing.
    fn into_new_product(self) -> Result<NewProduct, ValidationError> {
        let price = self.price.ok_or(ValidationError::Required("price"))?;
        let quantity = self.quantity.ok_or(ValidationError::Required("quantity"))?;
        Ok(NewProduct {
            title: self.title.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            price,
            quantity,
            description: self.description,
            color: self.color,
            size: self.size,
            brand: self.brand,
        })
    }
}

/// Response body for a successful delete.
#[derive(Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

/// List products, optionally filtered by `?search=` and `?category=`.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Result<Json<Vec<Product>>, HttpError> {
    Ok(Json(state.products.list(&filter).await?))
}

/// Create a new product. Images cannot be set here; they arrive through the
/// upload endpoint.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), HttpError> {
    let product = state.products.create(req.into_new_product()?).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a single product by ID.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, HttpError> {
    let id = parse_id(&id)?;
    Ok(Json(state.products.get(id).await?))
}

/// Apply a partial update to a product.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<ProductUpdate>,
) -> Result<Json<Product>, HttpError> {
    let id = parse_id(&id)?;
    Ok(Json(state.products.update(id, req).await?))
}

/// Delete a product. Attached files stay on disk.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, HttpError> {
    let id = parse_id(&id)?;
    state.products.delete(id).await?;
    Ok(Json(DeletedResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
