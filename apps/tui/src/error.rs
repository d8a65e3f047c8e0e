//! # App Error Type
//!
//! The only failures this system has happen at the edges: reading the
//! configured catalog file and talking to the terminal. Store and cart
//! operations are total and never reach this type.

use std::path::PathBuf;

use thiserror::Error;

/// Startup and terminal errors for the TUI shell.
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal or log-file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured catalog file could not be read.
    #[error("failed to read catalog file {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured catalog file is not valid catalog JSON.
    #[error("failed to parse catalog file {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::CatalogRead {
            path: PathBuf::from("/tmp/catalog.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/tmp/catalog.json"));
    }
}
