use thiserror::Error;

#[derive(Error, Debug)]
pub enum HrisError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),

    /// The input source ran dry while a prompt was waiting for a value.
    #[error("Input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, HrisError>;
