//! Error types for dataset records and session setup.

use thiserror::Error;

use locator_map::LocatorMapError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid dataset '{dataset}': {message}")]
    InvalidDataset { dataset: String, message: String },

    #[error("duplicate dataset name: {0}")]
    DuplicateDataset(String),

    #[error("unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("unknown locator map: {0}")]
    UnknownLocatorMap(String),

    #[error("locator map error: {0}")]
    LocatorMap(#[from] LocatorMapError),
}

impl CatalogError {
    /// Create an InvalidDataset error.
    pub fn invalid(dataset: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDataset {
            dataset: dataset.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
