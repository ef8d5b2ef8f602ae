//! CLI entry point - the composition root for the `stockroom` binary.
//!
//! `serve` starts the HTTP API; `seed` loads a sample catalog for local
//! development. All infrastructure wiring happens through the adapter
//! bootstrap; nothing here touches the database directly except through
//! the composed services.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stockroom_axum::{ServerConfig, start_server};
use stockroom_core::{NewProduct, ProductService, database_path};
use stockroom_db::{SqliteProductRepository, setup_database};

#[derive(Parser)]
#[command(name = "stockroom", about = "Inventory-management REST API", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server.
    Serve {
        /// Port to listen on.
        #[arg(long, env = "PORT", default_value_t = 4000)]
        port: u16,

        /// SQLite database file (defaults to the platform data directory).
        #[arg(long, env = "STOCKROOM_DB")]
        database: Option<PathBuf>,

        /// Directory for uploaded images (defaults next to the database).
        #[arg(long, env = "STOCKROOM_UPLOADS_DIR")]
        uploads_dir: Option<PathBuf>,

        /// Restrict CORS to these origins; allows any origin when omitted.
        #[arg(long, value_delimiter = ',')]
        allow_origin: Vec<String>,
    },

    /// Insert a set of sample products for local development.
    Seed {
        /// SQLite database file (defaults to the platform data directory).
        #[arg(long, env = "STOCKROOM_DB")]
        database: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve {
            port,
            database,
            uploads_dir,
            allow_origin,
        } => {
            let mut config = ServerConfig::with_defaults()?;
            config.port = port;
            if let Some(database) = database {
                config.database_path = database;
            }
            if let Some(uploads_dir) = uploads_dir {
                config.uploads_dir = uploads_dir;
            }
            if !allow_origin.is_empty() {
                config = config.with_allowed_origins(allow_origin);
            }
            start_server(config).await
        }
        Commands::Seed { database } => seed(database).await,
    }
}

/// Insert the sample catalog, printing each created record.
async fn seed(database: Option<PathBuf>) -> Result<()> {
    let db_path = match database {
        Some(path) => path,
        None => database_path()?,
    };

    let pool = setup_database(&db_path).await?;
    let products = ProductService::new(Arc::new(SqliteProductRepository::new(pool)));

    for product in sample_products() {
        let created = products.create(product).await?;
        println!("Seeded product {}: {}", created.id, created.title);
    }

    Ok(())
}

fn sample_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            description: Some("Soft cotton t-shirt in classic white color.".to_string()),
            color: Some("White".to_string()),
            size: Some("M".to_string()),
            brand: Some("H&M".to_string()),
            ..NewProduct::new("Classic White T-Shirt", "Clothing", 19.99, 100)
        },
        NewProduct {
            description: Some("Noise-cancelling wireless headphones with 20h battery.".to_string()),
            color: Some("Black".to_string()),
            brand: Some("Sony".to_string()),
            ..NewProduct::new("Wireless Headphones", "Electronics", 89.99, 50)
        },
        NewProduct {
            description: Some("Lightweight running shoes with breathable mesh.".to_string()),
            color: Some("Blue".to_string()),
            size: Some("42".to_string()),
            brand: Some("Nike".to_string()),
            ..NewProduct::new("Running Shoes", "Footwear", 59.99, 80)
        },
        NewProduct {
            description: Some("Fitness tracker and smartwatch with heart rate monitor.".to_string()),
            color: Some("Silver".to_string()),
            brand: Some("Apple".to_string()),
            ..NewProduct::new("Smart Watch", "Electronics", 129.99, 60)
        },
        NewProduct {
            description: Some("Genuine leather wallet with card slots.".to_string()),
            color: Some("Brown".to_string()),
            brand: Some("Fossil".to_string()),
            ..NewProduct::new("Leather Wallet", "Accessories", 34.99, 120)
        },
        NewProduct {
            description: Some("Ceramic mug, dishwasher and microwave safe.".to_string()),
            color: Some("White".to_string()),
            ..NewProduct::new("Coffee Mug", "Home", 9.99, 200)
        },
    ]
}
