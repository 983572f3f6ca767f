//! Error types for locator-map construction.

use thiserror::Error;

/// Errors that can occur while building a locator map.
///
/// All of these are configuration errors raised at construction time.
/// Pixel and coordinate queries on a built map never fail.
#[derive(Error, Debug)]
pub enum LocatorMapError {
    /// Raster dimensions must be positive.
    #[error("invalid raster dimensions {width}x{height}: both must be > 0")]
    InvalidDimensions { width: i64, height: i64 },

    /// A required asset identifier is empty.
    #[error("missing asset identifier for {0}")]
    MissingAsset(&'static str),

    /// The configured extent cannot be mapped.
    #[error("invalid extent: {0}")]
    InvalidExtent(String),

    /// Projection parameters cannot produce a usable transform.
    #[error("invalid {projection} projection: {message}")]
    InvalidProjection {
        projection: &'static str,
        message: String,
    },

    /// An asset could not be read.
    #[error("failed to load asset '{asset}': {source}")]
    AssetLoad {
        asset: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl LocatorMapError {
    /// Create an InvalidExtent error.
    pub fn invalid_extent(msg: impl Into<String>) -> Self {
        Self::InvalidExtent(msg.into())
    }

    /// Create an AssetLoad error.
    pub fn asset_load(asset: impl Into<String>, source: std::io::Error) -> Self {
        Self::AssetLoad {
            asset: asset.into(),
            source,
        }
    }
}

/// Result type for locator-map operations.
pub type Result<T> = std::result::Result<T, LocatorMapError>;
