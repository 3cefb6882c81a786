//! Trivia Core - domain model and request-scoped algorithms
//!
//! This crate provides the pieces of the trivia service that do not
//! depend on any particular storage engine or transport:
//! - Question and Category models with their public record format
//! - Fixed-size pagination, substring search and category filtering
//! - Quiz selection over the eligible pool with an explicit exhausted outcome
//! - The `QuestionStore` collaborator trait and an in-memory implementation
//! - The error facility (`ExError`) and the structured logging facility

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod quiz;

/// Logging schema constants, re-exported for the logging macros
pub use trivia_core_types::schema;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, TriviaError};
pub use model::{Category, FormattedQuestion, NewQuestion, Question};
pub use ops::{MemoryStore, QuestionStore, StoreResult};
pub use queries::{filter_by_category, filter_by_text, paginate, parse_page, QUESTIONS_PER_PAGE};
pub use quiz::{select_question, CategoryFilter, QuizSelection};
