//! Trivia Engine - Orchestration layer
//!
//! Turns caller requests into store calls plus the core algorithms. Every
//! operation is bracketed by start/end log events and returns a typed
//! result the HTTP layer serializes as-is.

pub mod commands;

pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use commands::engine_query::{
    apply_engine_query, apply_engine_query_with_rng, EngineQuery, EngineQueryResult,
};
pub use commands::results::{
    CategoryListing, CategoryQuestions, CreatedQuestion, DeletedQuestion, QuestionPage,
    QuizResult, SearchPage,
};
