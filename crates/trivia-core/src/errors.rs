use thiserror::Error;
use trivia_core_types::RequestId;

/// Result type alias using TriviaError
pub type Result<T> = std::result::Result<T, TriviaError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every error that leaves the engine is classified into one of these
/// kinds. Each kind has a stable code for programmatic handling and a
/// fixed HTTP status for the API envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Client errors
    /// Request shape is wrong: missing or malformed required field
    InvalidInput,
    /// A result set is empty where emptiness is an error
    NotFound,
    /// Request is well-formed but the operation cannot complete
    Unprocessable,

    // Integration/IO
    Persistence,
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Unprocessable => "ERR_UNPROCESSABLE",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// HTTP status used when this kind reaches the API boundary
    pub fn http_status(&self) -> u16 {
        match self {
            ExErrorKind::InvalidInput => 400,
            ExErrorKind::NotFound => 404,
            ExErrorKind::Unprocessable => 422,
            ExErrorKind::Persistence | ExErrorKind::Io | ExErrorKind::Internal => 500,
        }
    }

    /// Caller-facing message for the error envelope
    pub fn public_message(&self) -> &'static str {
        match self.http_status() {
            400 => "bad request",
            404 => "resource not found",
            422 => "unprocessable",
            _ => "internal server error",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus optional context for debugging. The
/// `message` is for logs; callers only ever see the kind's public message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (question or category id)
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Re-classify an error while keeping the original as its source
    pub fn reclassify(self, kind: ExErrorKind) -> Self {
        let op = self.op.clone();
        let entity_id = self.entity_id.clone();
        let message = self.message.clone();
        let mut wrapped = ExError::new(kind).with_message(message).with_source(self);
        wrapped.op = op;
        wrapped.entity_id = entity_id;
        wrapped
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for trivia operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriviaError {
    /// Category id does not exist in the store
    #[error("Category not found: {category_id}")]
    CategoryNotFound { category_id: i64 },

    /// Requested page holds no questions
    #[error("Page {page} is empty")]
    PageEmpty { page: usize },

    /// The store has no categories at all
    #[error("No categories available")]
    NoCategories,

    /// Delete could not be carried out
    #[error("Cannot delete question {question_id}: {reason}")]
    CannotDelete { question_id: i64, reason: String },

    /// A question field failed validation on create
    #[error("Invalid question field '{field}': {reason}")]
    InvalidQuestionField { field: String, reason: String },

    /// A quiz request field is missing or has the wrong shape
    #[error("Invalid quiz request field '{field}': {reason}")]
    InvalidQuizField { field: String, reason: String },

    /// Request body could not be read as JSON
    #[error("Malformed request body: {reason}")]
    MalformedBody { reason: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl TriviaError {
    /// Shorthand for a create-validation failure
    pub fn invalid_question(field: &str, reason: impl Into<String>) -> Self {
        TriviaError::InvalidQuestionField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a quiz request failure
    pub fn invalid_quiz(field: &str, reason: impl Into<String>) -> Self {
        TriviaError::InvalidQuizField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Conversion from TriviaError to the structured ExError
impl From<TriviaError> for ExError {
    fn from(err: TriviaError) -> Self {
        let message = err.to_string();
        match err {
            TriviaError::CategoryNotFound { category_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(category_id)
                .with_message(message),

            TriviaError::PageEmpty { .. } | TriviaError::NoCategories => {
                ExError::new(ExErrorKind::NotFound).with_message(message)
            }

            TriviaError::CannotDelete { question_id, .. } => {
                ExError::new(ExErrorKind::Unprocessable)
                    .with_entity_id(question_id)
                    .with_message(message)
            }

            TriviaError::InvalidQuestionField { .. } => {
                ExError::new(ExErrorKind::Unprocessable).with_message(message)
            }

            TriviaError::InvalidQuizField { .. } | TriviaError::MalformedBody { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            TriviaError::Internal { .. } => ExError::new(ExErrorKind::Internal).with_message(message),
        }
    }
}
