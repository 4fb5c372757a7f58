use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComboError {
    #[error("HTTP request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("Parse error in row {row}: {message}")]
    Parse { row: String, message: String },

    #[error("Malformed value for '{field}' of '{item}': {value:?}")]
    MalformedField {
        item: String,
        field: String,
        value: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Menu has no items")]
    EmptyMenu,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ComboError>;
