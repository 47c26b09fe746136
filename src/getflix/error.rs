use thiserror::Error;

#[derive(Error, Debug)]
pub enum GetflixError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed {field} on line {line}: {value:?}")]
    MalformedField {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("Invalid {field}: {value:?}")]
    InvalidMovie { field: &'static str, value: String },

    #[error("Lookup error: {0}")]
    Lookup(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, GetflixError>;
