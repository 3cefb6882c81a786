//! Command orchestration layer.
//!
//! Mutations go through `apply_engine_command`, reads through
//! `apply_engine_query`. Both are generic over the store.

pub mod engine_command;
pub mod engine_query;
pub mod results;

use std::time::Instant;

use trivia_core::errors::ExError;
use trivia_core::{log_op_end, log_op_error, log_op_start};

/// Result type for engine calls
pub type Result<T> = std::result::Result<T, ExError>;

/// Run one engine operation between its start and end events
///
/// The error is tagged with `op` before it is logged and returned.
pub(crate) fn run_op<T>(op: &'static str, body: impl FnOnce() -> Result<T>) -> Result<T> {
    log_op_start!(op);
    let start = Instant::now();

    let result = body().map_err(|e| match e.op() {
        Some(_) => e,
        None => e.with_op(op),
    });

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = elapsed);
        }
        Err(e) => {
            let e_clone = e.clone();
            log_op_error!(op, e_clone, duration_ms = elapsed);
        }
    }
    result
}
