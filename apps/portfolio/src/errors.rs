use thiserror::Error;

/// Client-side precondition failures. Raised before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("Only PDF files are accepted (got '{0}')")]
    InvalidFileType(String),

    #[error("New passwords do not match")]
    PasswordMismatch,

    #[error("New password must be at least {min} characters long")]
    PasswordTooShort { min: usize },
}

/// Error type for every operation that crosses the backend boundary.
///
/// `Server` carries the message from the backend's `{"error": ...}` payload
/// (or a generic fallback); `Network` means the request never completed.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unauthorized: {0}")]
    Auth(String),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("{0}")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    /// The message the backend sent, if this error carries one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Server { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Could not determine the user config directory")]
    ConfigDirNotFound,
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Content parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid content: {0}")]
    Invalid(String),
}
