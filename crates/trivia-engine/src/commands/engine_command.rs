//! Engine-level mutations.
//!
//! Create and delete report every failure past request validation as
//! `Unprocessable`, store faults included.

#![allow(clippy::result_large_err)]

use trivia_core::errors::{ExError, ExErrorKind, TriviaError};
use trivia_core::{paginate, NewQuestion, QuestionStore};

use super::results::{CreatedQuestion, DeletedQuestion};
use super::{run_op, Result};

/// Commands that change the question set
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Insert a question, then return `page` of the updated listing
    CreateQuestion { question: NewQuestion, page: usize },
    /// Remove a question, then return `page` of the updated listing
    DeleteQuestion { question_id: i64, page: usize },
}

#[derive(Debug, Clone)]
pub enum EngineCommandResult {
    Created(CreatedQuestion),
    Deleted(DeletedQuestion),
}

/// Apply an engine command against a store
///
/// # Errors
///
/// * `Unprocessable` - validation failed, the question does not exist, or
///   the store rejected the write
pub fn apply_engine_command<S>(cmd: EngineCommand, store: &mut S) -> Result<EngineCommandResult>
where
    S: QuestionStore + ?Sized,
{
    match cmd {
        EngineCommand::CreateQuestion { question, page } => run_op("create_question", || {
            question.validate()?;
            let id = store.insert_question(&question).map_err(unprocessable)?;
            tracing::debug!(question_id = id, "question inserted");

            let all = store.list_questions().map_err(unprocessable)?;
            Ok(EngineCommandResult::Created(CreatedQuestion {
                created: id,
                questions: paginate(&all, page),
                total_questions: all.len(),
            }))
        }),

        EngineCommand::DeleteQuestion { question_id, page } => run_op("delete_question", || {
            let found = store.get_question(question_id).map_err(unprocessable)?;
            if found.is_none() {
                return Err(cannot_delete(question_id, "no such question"));
            }
            if !store.delete_question(question_id).map_err(unprocessable)? {
                return Err(cannot_delete(question_id, "question vanished before delete"));
            }

            let all = store.list_questions().map_err(unprocessable)?;
            Ok(EngineCommandResult::Deleted(DeletedQuestion {
                deleted: question_id,
                questions: paginate(&all, page),
                total_questions: all.len(),
            }))
        }),
    }
}

fn unprocessable(err: ExError) -> ExError {
    err.reclassify(ExErrorKind::Unprocessable)
}

fn cannot_delete(question_id: i64, reason: &str) -> ExError {
    TriviaError::CannotDelete {
        question_id,
        reason: reason.to_string(),
    }
    .into()
}
