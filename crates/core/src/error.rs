use thiserror::Error;

#[derive(Error, Debug)]
pub enum BioscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Parsing error: {0}")]
    Parsing(String),
    #[error("Token {index} is not valid UTF-8 (byte offset {offset}): {source}")]
    Decode {
        index: usize,
        offset: usize,
        #[source]
        source: std::str::Utf8Error,
    },
    #[error("Invalid pattern in filter '{name}': {source}")]
    InvalidFilter {
        name: String,
        #[source]
        source: regex::Error,
    },
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BioscopeError>;
