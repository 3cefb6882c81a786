//! Repository layer
//!
//! Bridges the core `QuestionStore` trait to SQLite

pub mod sqlite_repo;

pub use sqlite_repo::SqliteStore;
