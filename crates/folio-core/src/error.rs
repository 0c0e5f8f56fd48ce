//! Error types for view rendering and transmission.

use thiserror::Error;

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while building or transmitting a response.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Field name is not part of the widget's vocabulary.
    #[error("Unknown field '{field}' for {widget} widget")]
    UnknownField { widget: &'static str, field: String },

    /// Field exists but the value has the wrong shape.
    #[error("Invalid value for field '{field}' of {widget} widget: {reason}")]
    InvalidValue {
        widget: &'static str,
        field: String,
        reason: String,
    },

    /// Envelope key reserved for the markup payload.
    #[error("Envelope key '{0}' is reserved")]
    ReservedKey(String),

    /// Accumulation or transmission attempted after the response was sent.
    #[error("Response already sent")]
    AlreadySent,

    /// Required request field is absent.
    #[error("Missing request field: {0}")]
    MissingField(String),

    /// Request field is present but has the wrong type.
    #[error("Request field '{field}' has unexpected type, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    /// Date or time string could not be parsed.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Failure reported by an upstream collaborator.
    #[error("Upstream error: {0}")]
    Upstream(#[from] anyhow::Error),

    /// Output channel failure.
    #[error("Streaming error: {0}")]
    Stream(String),

    /// File or writer failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload serialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Broad classification of a [`RenderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad widget field or value, reserved envelope key.
    Configuration,
    /// Operation attempted in the wrong view state.
    Lifecycle,
    /// Inbound data is missing or malformed.
    UpstreamData,
    /// Output channel, file or setup failure.
    Transport,
}

impl ErrorKind {
    /// Errors that can only come from a bug in the calling view.
    pub fn is_caller_bug(&self) -> bool {
        matches!(self, Self::Configuration | Self::Lifecycle)
    }
}

impl RenderError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownField { .. } | Self::InvalidValue { .. } | Self::ReservedKey(_) => {
                ErrorKind::Configuration
            }
            Self::AlreadySent => ErrorKind::Lifecycle,
            Self::MissingField(_)
            | Self::TypeMismatch { .. }
            | Self::InvalidDate(_)
            | Self::Upstream(_) => ErrorKind::UpstreamData,
            Self::Stream(_) | Self::Io(_) | Self::Serialization(_) | Self::Config(_) => {
                ErrorKind::Transport
            }
        }
    }

    /// Shorthand for an invalid widget value.
    pub fn invalid_value(
        widget: &'static str,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            widget,
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(e: serde_json::Error) -> Self {
        RenderError::Serialization(e.to_string())
    }
}
