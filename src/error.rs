use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Form error: {0}")]
    FormError(#[from] enquiry_shared::Error),

    #[error("Line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl AppError {
    pub fn script(line: usize, message: impl Into<String>) -> Self {
        AppError::Script {
            line,
            message: message.into(),
        }
    }
}
