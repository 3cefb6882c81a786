//! Trivia API - HTTP surface over the engine
//!
//! Routes, JSON payload parsing, the error envelope and CORS. Handlers
//! lock the shared store only inside synchronous engine calls.

pub mod error;
pub mod middleware;
pub mod payload;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use server::serve;
pub use state::AppState;
