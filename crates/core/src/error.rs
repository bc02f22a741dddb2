use thiserror::Error;

pub type AdCraftResult<T> = Result<T, AdCraftError>;

#[derive(Error, Debug)]
pub enum AdCraftError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input validation error: {0}")]
    Validation(String),

    #[error("Unsupported {field} value: {value}")]
    UnsupportedValue { field: String, value: String },

    #[error("A generation is already in progress")]
    Busy,

    #[error("Variation {0} not found")]
    VariantNotFound(usize),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AdCraftError {
    fn from(err: config::ConfigError) -> Self {
        AdCraftError::Config(err.to_string())
    }
}
