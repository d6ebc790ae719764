//! Typed error handling for unrequire.
//!
//! Provides structured errors that library consumers can match on,
//! with full context about what went wrong and where.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for unrequire operations.
///
/// This provides typed errors that library consumers can match on,
/// unlike opaque `anyhow::Error` types.
#[derive(Error, Debug)]
pub enum UnrequireError {
    /// I/O error when reading source files or metadata
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Source file could not be decoded as text
    #[error("Encoding error in {path}: {message}")]
    Encoding { path: PathBuf, message: String },

    /// Dependency graph document is missing or malformed
    #[error("Graph error at {path}: {message}")]
    Graph { path: PathBuf, message: String },

    /// Site-packages enumeration errors
    #[error("Site-packages error at {path}: {message}")]
    Site { path: PathBuf, message: String },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Invalid argument provided
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl UnrequireError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create an encoding error for an undecodable source file.
    pub fn encoding(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Encoding {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a graph error.
    pub fn graph(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Graph {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a site-packages error.
    pub fn site(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Site {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error (the run can continue).
    ///
    /// Config errors are downgraded to warnings by the CLI; everything else
    /// aborts the run per the fail-loud policy.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Encoding { path, .. } => Some(path),
            Self::Graph { path, .. } => Some(path),
            Self::Site { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for unrequire results.
pub type UnrequireResult<T> = Result<T, UnrequireError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> UnrequireResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> UnrequireResult<T> {
        self.map_err(|e| UnrequireError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        let err = UnrequireError::io(
            PathBuf::from("/project/app.py"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert!(matches!(err, UnrequireError::Io { .. }));
        assert_eq!(err.path(), Some(&PathBuf::from("/project/app.py")));
        assert!(err.to_string().contains("/project/app.py"));
    }

    #[test]
    fn test_graph_error_message() {
        let err = UnrequireError::graph("graph.json", "expected an array of records");
        assert!(err.to_string().contains("graph.json"));
        assert!(err.to_string().contains("expected an array"));
    }

    #[test]
    fn test_is_recoverable() {
        assert!(UnrequireError::config("unrequire.toml", "bad key").is_recoverable());
        assert!(!UnrequireError::encoding("/a.py", "invalid utf-8").is_recoverable());
        assert!(!UnrequireError::graph("graph.json", "truncated").is_recoverable());
    }

    #[test]
    fn test_io_result_ext() {
        let result: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let unrequire_result = result.with_path("/missing/app.py");
        assert!(unrequire_result.is_err());
    }
}
