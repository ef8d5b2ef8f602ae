//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together for
//! the web adapter. All concrete implementations are instantiated here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use stockroom_core::{AttachmentService, ProductRepository, ProductService, UploadStore};
use stockroom_core::paths::{database_path, uploads_dir};
use stockroom_db::{SqliteProductRepository, setup_database};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the SQLite database file.
    pub database_path: PathBuf,
    /// Directory uploaded files are written to and served from.
    pub uploads_dir: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            port: 4000,
            database_path: database_path()?,
            uploads_dir: uploads_dir()?,
            cors: CorsConfig::default(),
        })
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds the composed services shared across handlers.
pub struct ApiContext {
    /// Product CRUD service.
    pub products: ProductService,
    /// Image attachment service.
    pub attachments: AttachmentService,
    uploads_root: PathBuf,
}

impl ApiContext {
    /// Compose the services from a repository and an upload store.
    pub fn new(repo: Arc<dyn ProductRepository>, store: UploadStore) -> Self {
        let uploads_root = store.root().to_path_buf();
        Self {
            products: ProductService::new(Arc::clone(&repo)),
            attachments: AttachmentService::new(repo, store),
            uploads_root,
        }
    }

    /// Directory uploaded files live in, for static serving.
    #[must_use]
    pub fn uploads_root(&self) -> &Path {
        &self.uploads_root
    }
}

/// Bootstrap the server context: open the database, ensure the uploads
/// directory exists, and compose the services.
pub async fn bootstrap(config: &ServerConfig) -> Result<ApiContext> {
    tracing::info!(
        database_path = %config.database_path.display(),
        uploads_dir = %config.uploads_dir.display(),
        "bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;
    let repo: Arc<dyn ProductRepository> = Arc::new(SqliteProductRepository::new(pool));
    let store = UploadStore::new(&config.uploads_dir)?;

    Ok(ApiContext::new(repo, store))
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("stockroom API listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
