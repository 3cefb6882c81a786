//! Trivia Store - SQLite persistence and seed import
//!
//! Provides:
//! - SQLite connection management and embedded migrations
//! - `SqliteStore`, the durable `QuestionStore` implementation
//! - Seed format v0 parser, digest and importer

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteStore;
pub use seed::{import_seed, ImportSummary};
