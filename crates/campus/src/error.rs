//! CLI error types with miette diagnostics.
//!
//! Maps API and core errors into user-facing errors with actionable
//! help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use campus_api::Error as ApiError;
use campus_core::CoreError;

/// Exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const PERMISSION: i32 = 5;
    pub const CONNECTION: i32 = 7;
    pub const PARTIAL: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the server")]
    #[diagnostic(
        code(campus::connection_failed),
        help("Check the server URL and that the backend is running.")
    )]
    ConnectionFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(campus::auth_failed),
        help("Check your username and password, then run: campus login")
    )]
    AuthFailed { message: String },

    #[error("Not logged in")]
    #[diagnostic(code(campus::not_logged_in), help("Run: campus login"))]
    NotLoggedIn,

    #[error("Permission denied: {message}")]
    #[diagnostic(
        code(campus::permission_denied),
        help("This operation requires an administrator account.")
    )]
    PermissionDenied { message: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("No loaded item matches id '{id}'")]
    #[diagnostic(
        code(campus::unknown_id),
        help("Run the matching list command to see available ids.")
    )]
    UnknownId { id: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("Server rejected the request: {message}")]
    #[diagnostic(code(campus::api_error))]
    Api { message: String },

    #[error("{0}")]
    #[diagnostic(code(campus::unsupported))]
    Unsupported(&'static str),

    // ── Bulk ─────────────────────────────────────────────────────────
    #[error("{failed} of {total} item(s) failed")]
    #[diagnostic(
        code(campus::bulk_failed),
        help("The list was refetched; rerun against the remaining ids.")
    )]
    BulkFailed { failed: usize, total: usize },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(campus::validation))]
    Validation { field: String, reason: String },

    #[error("{0}")]
    #[diagnostic(code(campus::precondition))]
    Precondition(String),

    // ── Configuration ────────────────────────────────────────────────
    #[error("No server configured")]
    #[diagnostic(
        code(campus::no_config),
        help(
            "Pass --server, set CAMPUS_SERVER, or add a profile to the config file.\n\
             Expected at: {path}"
        )
    )]
    NoServer { path: String },

    #[error(transparent)]
    #[diagnostic(code(campus::config))]
    Config(#[from] campus_config::ConfigError),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Aborted")]
    #[diagnostic(code(campus::aborted))]
    Aborted,

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(campus::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NotLoggedIn => exit_code::AUTH,
            Self::UnknownId { .. } => exit_code::NOT_FOUND,
            Self::PermissionDenied { .. } | Self::Unsupported(_) => exit_code::PERMISSION,
            Self::Validation { .. } | Self::Precondition(_) | Self::Aborted => exit_code::USAGE,
            Self::BulkFailed { .. } => exit_code::PARTIAL,
            _ => exit_code::GENERAL,
        }
    }
}

// ── ApiError / CoreError mapping ─────────────────────────────────────

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Authentication { message } => Self::AuthFailed { message },
            ApiError::NotLoggedIn => Self::NotLoggedIn,
            ApiError::PermissionDenied { message } => Self::PermissionDenied { message },
            ApiError::Transport(source) => Self::ConnectionFailed {
                source: source.into(),
            },
            ApiError::Unsupported(what) => Self::Unsupported(what),
            ApiError::InvalidUrl(source) => Self::Validation {
                field: "server".into(),
                reason: source.to_string(),
            },
            ApiError::Api { message } => Self::Api { message },
            other => Self::Api {
                message: other.to_string(),
            },
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Api(api) => api.into(),
            validation => Self::Precondition(validation.to_string()),
        }
    }
}
