//! Attachment service - image uploads and removal.
//!
//! Files are validated for acceptance before any of them is written, then
//! persisted, then linked to the record. A missing record therefore fails
//! after the files are already on disk; those orphans are accepted and never
//! rolled back.

use std::sync::Arc;

use crate::domain::{Product, ValidationError};
use crate::ports::{CoreError, ProductRepository};
use crate::uploads::{MAX_FILES_PER_UPLOAD, MAX_IMAGE_BYTES, UploadStore, is_allowed_image_type};

/// An uploaded file as received from the HTTP layer.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Client-supplied filename, used as the base for the stored name.
    pub file_name: String,
    /// Declared content type, checked against the image allow-list.
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Result of a successful image upload.
#[derive(Debug, Clone)]
pub struct AppendedImages {
    /// The record after the append.
    pub product: Product,
    /// The new `/uploads/<name>` paths, in upload order.
    pub added: Vec<String>,
}

/// Service for managing a product's image attachments.
pub struct AttachmentService {
    repo: Arc<dyn ProductRepository>,
    store: UploadStore,
}

impl AttachmentService {
    /// Create a new attachment service.
    pub fn new(repo: Arc<dyn ProductRepository>, store: UploadStore) -> Self {
        Self { repo, store }
    }

    /// Persist the uploaded files and append their URL paths to the
    /// product's image list, in upload order.
    pub async fn append_images(
        &self,
        id: i64,
        files: Vec<UploadedImage>,
    ) -> Result<AppendedImages, CoreError> {
        if files.is_empty() {
            return Err(ValidationError::NoFiles.into());
        }
        if files.len() > MAX_FILES_PER_UPLOAD {
            return Err(ValidationError::TooManyFiles(MAX_FILES_PER_UPLOAD).into());
        }
        // Accept or reject the whole batch before writing anything.
        for file in &files {
            if !is_allowed_image_type(&file.content_type) {
                return Err(
                    ValidationError::UnsupportedImageType(file.content_type.clone()).into(),
                );
            }
            if file.data.len() > MAX_IMAGE_BYTES {
                return Err(ValidationError::FileTooLarge(file.file_name.clone()).into());
            }
        }

        let mut added = Vec::with_capacity(files.len());
        for file in &files {
            let name = self.store.save(&file.file_name, &file.data).await?;
            added.push(format!("/uploads/{name}"));
        }

        let product = self.repo.append_images(id, &added).await?;
        tracing::debug!(id, count = added.len(), "appended images to product");
        Ok(AppendedImages { product, added })
    }

    /// Remove every occurrence of `image_url` from the product's image list.
    ///
    /// The file on disk is left in place; a URL that isn't in the list is a
    /// successful no-op.
    pub async fn remove_image(&self, id: i64, image_url: &str) -> Result<Product, CoreError> {
        if image_url.trim().is_empty() {
            return Err(ValidationError::MissingImageUrl.into());
        }
        Ok(self.repo.remove_image(id, image_url).await?)
    }
}
