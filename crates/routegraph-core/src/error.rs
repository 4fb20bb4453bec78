//! Error types and exit codes for routegraph
//!
//! The graph algorithms never fail: absent nodes, disconnected graphs and bad
//! costs all surface as sentinel values. Errors only arise where edge lists
//! and configuration are read, and where the CLI is misused.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing or malformed edge list)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or malformed edge list (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading edges or running the CLI
#[derive(Error, Debug)]
pub enum RouteGraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("edge list not found: {path:?}")]
    EdgeSourceNotFound { path: PathBuf },

    #[error("invalid edge list {path:?}: {reason}")]
    InvalidEdgeSource { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperation {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl RouteGraphError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RouteGraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        RouteGraphError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a failed IO operation on a path
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RouteGraphError::FailedOperation {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteGraphError::UnknownFormat(_)
            | RouteGraphError::UsageError(_)
            | RouteGraphError::InvalidValue { .. }
            | RouteGraphError::Unsupported { .. } => ExitCode::Usage,

            RouteGraphError::EdgeSourceNotFound { .. }
            | RouteGraphError::InvalidEdgeSource { .. } => ExitCode::Data,

            RouteGraphError::Io(_)
            | RouteGraphError::Yaml(_)
            | RouteGraphError::Json(_)
            | RouteGraphError::Toml(_)
            | RouteGraphError::FailedOperation { .. }
            | RouteGraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RouteGraphError::UnknownFormat(_) => "unknown_format",
            RouteGraphError::UsageError(_) => "usage_error",
            RouteGraphError::InvalidValue { .. } => "invalid_value",
            RouteGraphError::Unsupported { .. } => "unsupported",
            RouteGraphError::EdgeSourceNotFound { .. } => "edge_source_not_found",
            RouteGraphError::InvalidEdgeSource { .. } => "invalid_edge_source",
            RouteGraphError::Io(_) => "io_error",
            RouteGraphError::Yaml(_) => "yaml_error",
            RouteGraphError::Json(_) => "json_error",
            RouteGraphError::Toml(_) => "toml_error",
            RouteGraphError::FailedOperation { .. } => "failed_operation",
            RouteGraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for routegraph operations
pub type Result<T> = std::result::Result<T, RouteGraphError>;
