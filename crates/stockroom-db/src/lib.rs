#![doc = include_str!("../README.md")]

pub mod repositories;
pub mod setup;

// Re-export repository implementation
pub use repositories::SqliteProductRepository;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
