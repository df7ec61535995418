//! Theme error types.

use thiserror::Error;

/// Errors raised while assembling theme output.
///
/// The navigation and color helpers never fail; these cover settings loading
/// and the host collaborators the layouts depend on.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("host error: {0}")]
    Host(#[from] anyhow::Error),

    #[error("user not found: {0}")]
    UserNotFound(i64),

    #[error("invalid site url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to read settings file {path}")]
    SettingsIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Settings(String),

    #[error("template context error")]
    Template(#[from] tera::Error),
}

/// Result type alias using ThemeError.
pub type ThemeResult<T> = Result<T, ThemeError>;
