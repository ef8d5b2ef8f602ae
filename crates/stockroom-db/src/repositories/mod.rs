//! Repository implementations backed by `SQLite`.

mod row_mappers;
mod sqlite_product_repository;

pub use sqlite_product_repository::SqliteProductRepository;
