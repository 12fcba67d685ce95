//! Error types for figure generation

use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Result type alias for figure operations
pub type Result<T> = std::result::Result<T, FigureError>;

#[derive(Error, Debug)]
pub enum FigureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset '{path}' is unreadable: {source}")]
    DatasetUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset has no column '{column}'")]
    MissingColumn { column: String },

    #[error("unknown lamina '{0}'")]
    UnknownLayer(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("render error: {0}")]
    Render(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for FigureError
where
    E: std::error::Error + Send + Sync,
{
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        FigureError::Render(e.to_string())
    }
}

impl From<toml::de::Error> for FigureError {
    fn from(e: toml::de::Error) -> Self {
        FigureError::Config(e.to_string())
    }
}
