use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Upstream returned status {status}")]
    UpstreamError { status: u16 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Mail transport error: {0}")]
    MailError(#[from] lettre::transport::smtp::Error),

    #[error("Mail message error: {0}")]
    MessageError(#[from] lettre::error::Error),

    #[error("Invalid mail address: {0}")]
    AddressError(#[from] lettre::address::AddressError),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, RelayError>;
