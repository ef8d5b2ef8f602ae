//! Upload storage: a flat directory of image files with generated names.
//!
//! Each stored file gets a unique name derived from the original filename
//! plus a timestamp and a random suffix, so concurrent uploads never collide
//! and no cross-file coordination is needed. There is no subdirectory
//! structure and no ownership record beyond the product's `images` field.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::ports::CoreError;

/// Content types accepted for image uploads.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp", "image/gif"];

/// Per-file size cap: 5 MiB.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Per-request file cap.
pub const MAX_FILES_PER_UPLOAD: usize = 10;

/// True when `content_type` is in the image allow-list.
///
/// Parameters (`; charset=...`) are ignored and the comparison is
/// case-insensitive, per the MIME grammar.
#[must_use]
pub fn is_allowed_image_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim();
    ALLOWED_IMAGE_TYPES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(essence))
}

/// Writes uploaded files into a single directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    /// Create a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The directory files are written to.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `data` under a generated unique name and return that name.
    pub async fn save(&self, original_name: &str, data: &[u8]) -> Result<String, CoreError> {
        let name = unique_file_name(original_name);
        tokio::fs::write(self.root.join(&name), data)
            .await
            .map_err(|e| CoreError::Upload(e.to_string()))?;
        tracing::debug!(file = %name, bytes = data.len(), "stored uploaded image");
        Ok(name)
    }
}

/// Generate a collision-free filename: the original base with whitespace
/// collapsed to dashes, a millisecond timestamp, and a random suffix, keeping
/// the original extension.
fn unique_file_name(original: &str) -> String {
    // file_name() strips any client-supplied directory components.
    let original = Path::new(original)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image");
    let path = Path::new(original);
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("image");
    let base: String = stem.split_whitespace().collect::<Vec<_>>().join("-");
    let base = if base.is_empty() { "image".to_string() } else { base };

    let millis = Utc::now().timestamp_millis();
    let suffix = uuid::Uuid::new_v4().simple();

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => format!("{base}-{millis}-{suffix}.{ext}"),
        _ => format!("{base}-{millis}-{suffix}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_accepts_the_four_image_types() {
        for ty in ["image/jpeg", "image/png", "image/webp", "image/gif"] {
            assert!(is_allowed_image_type(ty), "{ty} should be allowed");
        }
        assert!(is_allowed_image_type("IMAGE/PNG"));
        assert!(is_allowed_image_type("image/png; charset=binary"));
    }

    #[test]
    fn allow_list_rejects_everything_else() {
        for ty in ["application/pdf", "text/html", "image/svg+xml", ""] {
            assert!(!is_allowed_image_type(ty), "{ty} should be rejected");
        }
    }

    #[test]
    fn generated_names_keep_extension_and_replace_whitespace() {
        let name = unique_file_name("my photo 1.png");
        assert!(name.starts_with("my-photo-1-"), "got {name}");
        assert!(name.ends_with(".png"), "got {name}");
    }

    #[test]
    fn generated_names_strip_directory_components() {
        let name = unique_file_name("../../etc/passwd");
        assert!(!name.contains('/'), "got {name}");
        assert!(name.starts_with("passwd-"), "got {name}");
    }

    #[test]
    fn generated_names_are_unique() {
        assert_ne!(unique_file_name("a.png"), unique_file_name("a.png"));
    }

    #[tokio::test]
    async fn save_writes_file_under_generated_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path().join("uploads")).unwrap();

        let name = store.save("cat.jpg", b"not really a jpeg").await.unwrap();
        let on_disk = std::fs::read(store.root().join(&name)).unwrap();
        assert_eq!(on_disk, b"not really a jpeg");
    }
}
