//! Error types and exit codes for graphpath
//!
//! Exit codes used by the command-line front end:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (absent vertex, unreachable vertex, search state misuse)

mod macros;

use thiserror::Error;

use crate::graph::Vertex;

/// Exit codes for the graphpath binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - absent vertex, no path (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph and search operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Data errors (exit code 3)
    #[error("invalid vertex {vertex}: {reason}")]
    InvalidArgument { vertex: Vertex, reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("shortest paths already initialized")]
    AlreadyInitialized,

    #[error("shortest paths not initialized; call set_paths first")]
    NotInitialized,

    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown graph kind: {0} (expected: directed or undirected)")]
    UnknownGraphKind(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for an operation that referenced an absent vertex
    pub fn invalid_vertex(vertex: Vertex) -> Self {
        GraphError::InvalidArgument {
            vertex,
            reason: "vertex not from graph".to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a path that could not be reconstructed
    pub fn no_path(source: Vertex, target: Vertex) -> Self {
        GraphError::not_found("path", format!("{} -> {}", source, target))
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UsageError(_)
            | GraphError::UnknownFormat(_)
            | GraphError::UnknownGraphKind(_) => ExitCode::Usage,

            GraphError::InvalidArgument { .. }
            | GraphError::NotFound { .. }
            | GraphError::AlreadyInitialized
            | GraphError::NotInitialized => ExitCode::Data,

            GraphError::Io(_) | GraphError::Json(_) | GraphError::Toml(_) | GraphError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::InvalidArgument { .. } => "invalid_argument",
            GraphError::NotFound { .. } => "not_found",
            GraphError::AlreadyInitialized => "already_initialized",
            GraphError::NotInitialized => "not_initialized",
            GraphError::UsageError(_) => "usage_error",
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UnknownGraphKind(_) => "unknown_graph_kind",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let GraphError::InvalidArgument { vertex, .. } = self {
            error_obj["vertex"] = serde_json::json!(vertex);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for graphpath operations
pub type Result<T> = std::result::Result<T, GraphError>;
