//! Error types for the MLS data tools

use std::path::PathBuf;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, MlsError>;

#[derive(Error, Debug)]
pub enum MlsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Browser error: {message}")]
    Browser { message: String },

    #[error("Failed to parse PDF {}: {message}", path.display())]
    Pdf { path: PathBuf, message: String },

    #[error("Table `{table_id}` not found on page (did you click \"Show\"?)")]
    TableNotFound { table_id: String },

    #[error("No open browser page found at {endpoint}")]
    NoPage { endpoint: String },

    #[error("Invalid selector: {message}")]
    Selector { message: String },

    #[error("Failed to parse season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),
}

impl From<chromiumoxide::error::CdpError> for MlsError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        MlsError::Browser {
            message: err.to_string(),
        }
    }
}
