// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-200 answer from the search endpoint. Recoverable: the runner
    /// logs it and moves on to the next name.
    #[error("Search rejected for \"{name}\" with status {status}")]
    Rejected { name: String, status: u16 },

    /// A 200 response whose match is missing a requested property.
    #[error("Match for \"{name}\" is missing property \"{property}\"")]
    MissingField { name: String, property: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
