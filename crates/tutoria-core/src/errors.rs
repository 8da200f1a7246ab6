use tutoria_core_types::RequestId;
use thiserror::Error;

use crate::model::SessionStatus;

/// Result type alias using TutoriaError
pub type Result<T> = std::result::Result<T, TutoriaError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Stable classification of every failure the tutoring store can report.
/// Each kind maps to a stable `ERR_*` code used by the CLI, by log events and
/// by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    MissingField,
    InvalidContent,

    // Lookup / uniqueness
    NotFound,
    AlreadyExists,

    // Lifecycle rules
    IllegalTransition,
    TerminalState,

    // Credentials
    CredentialMismatch,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::InvalidContent => "ERR_INVALID_CONTENT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::IllegalTransition => "ERR_ILLEGAL_TRANSITION",
            ExErrorKind::TerminalState => "ERR_TERMINAL_STATE",
            ExErrorKind::CredentialMismatch => "ERR_CREDENTIAL_MISMATCH",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Persistence and engine layers return this type. Domain errors from the
/// core convert into it with `From<TutoriaError>`.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
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
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (record id or user email)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
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

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
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
            write!(f, " (entity: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for tutoring store operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TutoriaError {
    // ===== Users =====
    /// A user with this email already exists
    #[error("A user with email {email} already exists")]
    DuplicateEmail { email: String },

    /// No user with this email
    #[error("User not found: {email}")]
    UserNotFound { email: String },

    /// Security answer did not match during password recovery
    #[error("Security answer does not match for {email}")]
    SecurityAnswerMismatch { email: String },

    // ===== Tutoring sessions =====
    /// The requested status change is not an edge of the session state machine
    #[error("Illegal session transition for {session_id}: {from} -> {to}")]
    IllegalSessionTransition {
        session_id: String,
        from: SessionStatus,
        to: SessionStatus,
    },

    /// Rejected and completed sessions cannot be edited
    #[error("Session {session_id} is {status} and can no longer be modified")]
    SessionTerminal {
        session_id: String,
        status: SessionStatus,
    },

    /// Rejecting a session needs a reason
    #[error("Rejecting session {session_id} requires a non-empty reason")]
    MissingRejectionReason { session_id: String },

    /// Completing a session needs a grade
    #[error("Completing session {session_id} requires a grade")]
    MissingGrade { session_id: String },

    // ===== Topics =====
    /// Rejecting a topic needs observations for the student
    #[error("Rejecting topic {topic_id} requires observations")]
    MissingTopicObservations { topic_id: String },

    // ===== Files =====
    /// File content is not a base64 data URL
    #[error("Invalid file content: {reason}")]
    InvalidFileContent { reason: String },

    // ===== Generic =====
    /// A field failed validation
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// Serialization error (JSON encoding/decoding of a slot)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<TutoriaError> for ExError {
    fn from(err: TutoriaError) -> Self {
        let message = err.to_string();
        match err {
            TutoriaError::DuplicateEmail { email } => ExError::new(ExErrorKind::AlreadyExists)
                .with_op("create_user")
                .with_entity_id(email)
                .with_message(message),

            TutoriaError::UserNotFound { email } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(email)
                .with_message(message),

            TutoriaError::SecurityAnswerMismatch { email } => {
                ExError::new(ExErrorKind::CredentialMismatch)
                    .with_op("recover_password")
                    .with_entity_id(email)
                    .with_message(message)
            }

            TutoriaError::IllegalSessionTransition { session_id, .. } => {
                ExError::new(ExErrorKind::IllegalTransition)
                    .with_entity_id(session_id)
                    .with_message(message)
            }

            TutoriaError::SessionTerminal { session_id, .. } => {
                ExError::new(ExErrorKind::TerminalState)
                    .with_entity_id(session_id)
                    .with_message(message)
            }

            TutoriaError::MissingRejectionReason { session_id } => {
                ExError::new(ExErrorKind::MissingField)
                    .with_op("reject_session")
                    .with_entity_id(session_id)
                    .with_message(message)
            }

            TutoriaError::MissingGrade { session_id } => ExError::new(ExErrorKind::MissingField)
                .with_op("complete_session")
                .with_entity_id(session_id)
                .with_message(message),

            TutoriaError::MissingTopicObservations { topic_id } => {
                ExError::new(ExErrorKind::MissingField)
                    .with_op("review_topic")
                    .with_entity_id(topic_id)
                    .with_message(message)
            }

            TutoriaError::InvalidFileContent { .. } => {
                ExError::new(ExErrorKind::InvalidContent).with_message(message)
            }

            TutoriaError::InvalidInput { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            TutoriaError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            TutoriaError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to TutoriaError
impl From<serde_json::Error> for TutoriaError {
    fn from(err: serde_json::Error) -> Self {
        TutoriaError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<base64::DecodeError> for TutoriaError {
    fn from(err: base64::DecodeError) -> Self {
        TutoriaError::InvalidFileContent {
            reason: err.to_string(),
        }
    }
}
