use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchLabError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unreadable File '{name}': {reason}")]
    Unreadable { name: String, reason: String },

    #[error("Empty Sheet: '{0}' contains no data rows")]
    EmptySheet(String),

    #[error(
        "No Usable Rows in '{name}'. Expected a header with a club column and columns such as: {}",
        expected.join(", ")
    )]
    NoUsableRows { name: String, expected: Vec<String> },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type LlResult<T> = Result<T, LaunchLabError>;
