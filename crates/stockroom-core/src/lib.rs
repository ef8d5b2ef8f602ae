#![doc = include_str!("../README.md")]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod uploads;

// Re-export commonly used types for convenience
pub use domain::{
    NewProduct, Product, ProductFilter, ProductUpdate, ValidationError, filter_products,
};
pub use ports::{CoreError, ProductRepository, RepositoryError};
pub use services::{AppendedImages, AttachmentService, ProductService, UploadedImage};
pub use uploads::{
    ALLOWED_IMAGE_TYPES, MAX_FILES_PER_UPLOAD, MAX_IMAGE_BYTES, UploadStore, is_allowed_image_type,
};

// Re-export path utilities
pub use paths::{PathError, data_root, database_path, uploads_dir};
