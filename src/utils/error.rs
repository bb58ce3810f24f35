use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Catalog request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Failed to decode catalog response: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, AuditError>;
