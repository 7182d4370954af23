use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoopLensError {
    #[error("Source Unavailable: {0}")]
    Source(#[from] reqwest::Error),

    #[error("Source Unavailable: HTTP {status} from {url}")]
    SourceStatus { status: u16, url: String },

    #[error("Data Format Error: no stats table found in the fetched page")]
    NoTable,

    #[error("Data Format Error: expected column '{0}' is missing from the source table")]
    MissingColumn(String),

    #[error("Data Format Error: cannot coerce '{value}' (column '{column}') to a number")]
    BadNumber { column: String, value: String },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
}

pub type HlResult<T> = Result<T, HoopLensError>;
