use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    /// An options key with no matching writable attribute.
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
