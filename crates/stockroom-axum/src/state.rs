//! Shared application state type.
//!
//! Defines the `AppState` type used across all handlers and routers.

use crate::bootstrap::ApiContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// This is an Arc-wrapped `ApiContext` containing the product and
/// attachment services.
pub type AppState = Arc<ApiContext>;
