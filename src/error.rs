use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to read input: {0}")]
    InputError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}
