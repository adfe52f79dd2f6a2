//! Error types for the CAMELS toolbox.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for toolbox operations.
pub type Result<T> = std::result::Result<T, ToolboxError>;

/// Errors that can occur while extracting data from a CAMELS file.
#[derive(Debug, Error)]
pub enum ToolboxError {
    /// An explicitly requested entry does not exist in the file.
    #[error("The key \"{key}\" you specified was not found in the file")]
    NotFound { key: String },

    /// No measurement entry is left once reserved entries are filtered out.
    #[error("Could not resolve a measurement entry: {0}")]
    Resolution(String),

    /// A node expected at a resolved path is missing or has the wrong kind.
    #[error("Node not found: {path}")]
    NodeNotFound { path: String },

    /// A leaf dataset could not be materialized into a numeric array.
    #[error("Failed to read dataset {path}: {reason}")]
    Materialize { path: String, reason: String },

    /// Failed to read the netCDF/HDF5 container.
    #[error("NetCDF error: {0}")]
    NetCDF(String),

    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to write CSV output.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A non-interactive selector was asked to choose between candidates.
    #[error("A selection is required but no operator is available (candidates: {})", .candidates.join(", "))]
    SelectionUnavailable { candidates: Vec<String> },

    /// The tabular adapter could not build a table from the columns.
    #[error("Tabular conversion failed: {0}")]
    Tabular(String),
}

impl ToolboxError {
    /// Create a NotFound error.
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a NodeNotFound error.
    pub fn node_not_found(path: impl Into<String>) -> Self {
        Self::NodeNotFound { path: path.into() }
    }

    /// Create a Materialize error.
    pub fn materialize(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Materialize {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<netcdf::Error> for ToolboxError {
    fn from(err: netcdf::Error) -> Self {
        Self::NetCDF(err.to_string())
    }
}

#[cfg(feature = "arrow")]
impl From<arrow::error::ArrowError> for ToolboxError {
    fn from(err: arrow::error::ArrowError) -> Self {
        Self::Tabular(err.to_string())
    }
}
