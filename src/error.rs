use thiserror::Error;

#[derive(Error, Debug)]
pub enum OasError {
    #[error("Invalid file [{0}] extension, only .json is accepted")]
    InvalidFileExtension(String),

    #[error("Invalid file [{0}] format: {1}")]
    InvalidFileFormat(String, String),

    #[error("Operation not specified for endpoint [{path}]")]
    OperationNotSpecified { path: String },

    #[error("Validation rule [{0}] not found in rule configuration")]
    RuleNotFound(String),

    #[error("Failed to load rule configuration: {0}")]
    RuleConfig(String),

    #[error("External integration error: {0}")]
    ExternalIntegration(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Stable error codes exposed to callers, one per fatal error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidFileExtension,
    InvalidFileFormat,
    OperationNotSpecified,
    RuleNotFound,
    RuleConfig,
    ExternalIntegration,
    Internal,
}

impl OasError {
    pub fn code(&self) -> ErrorCode {
        match self {
            OasError::InvalidFileExtension(_) => ErrorCode::InvalidFileExtension,
            OasError::InvalidFileFormat(_, _) => ErrorCode::InvalidFileFormat,
            OasError::OperationNotSpecified { .. } => ErrorCode::OperationNotSpecified,
            OasError::RuleNotFound(_) => ErrorCode::RuleNotFound,
            OasError::RuleConfig(_) => ErrorCode::RuleConfig,
            OasError::ExternalIntegration(_) => ErrorCode::ExternalIntegration,
            OasError::Internal(_) | OasError::Io(_) | OasError::Json(_) => ErrorCode::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, OasError>;
