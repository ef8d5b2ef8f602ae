//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that parse the request, delegate to the core
//! services, and translate results into statuses and JSON bodies.

pub mod images;
pub mod products;

use crate::error::HttpError;
use stockroom_core::ValidationError;

/// Parse a path id segment into a store identifier.
///
/// A malformed id is a 400, not an opaque extractor rejection.
pub(crate) fn parse_id(raw: &str) -> Result<i64, HttpError> {
    raw.parse()
        .map_err(|_| ValidationError::InvalidId(raw.to_string()).into())
}
