//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They are pure orchestrators and don't know about concrete implementations.

mod attachment_service;
mod product_service;

pub use attachment_service::{AppendedImages, AttachmentService, UploadedImage};
pub use product_service::ProductService;
