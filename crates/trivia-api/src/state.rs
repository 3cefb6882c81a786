use std::sync::{Arc, Mutex, MutexGuard};

use trivia_core::errors::{ExError, ExErrorKind};
use trivia_core::QuestionStore;
use trivia_engine::{
    apply_engine_command, apply_engine_query, EngineCommand, EngineCommandResult, EngineQuery,
    EngineQueryResult,
};

type DynStore = Box<dyn QuestionStore + Send>;

/// Shared handler state: one store behind a lock
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<DynStore>>,
}

impl AppState {
    pub fn new<S>(store: S) -> Self
    where
        S: QuestionStore + Send + 'static,
    {
        Self {
            store: Arc::new(Mutex::new(Box::new(store))),
        }
    }

    /// Run a read query while holding the lock
    pub fn query(&self, query: EngineQuery) -> Result<EngineQueryResult, ExError> {
        let guard = self.lock()?;
        apply_engine_query(query, &**guard)
    }

    /// Run a mutation while holding the lock
    pub fn command(&self, cmd: EngineCommand) -> Result<EngineCommandResult, ExError> {
        let mut guard = self.lock()?;
        apply_engine_command(cmd, &mut **guard)
    }

    fn lock(&self) -> Result<MutexGuard<'_, DynStore>, ExError> {
        self.store.lock().map_err(|_| {
            ExError::new(ExErrorKind::Internal)
                .with_op("store_lock")
                .with_message("store mutex poisoned by an earlier panic")
        })
    }
}
