//! # Centralized Error Handling
//!
//! Failure taxonomy for the startup path (credential loading and document
//! store initialization) plus the request-facing error type. Startup errors
//! are plain `thiserror` enums returned to the caller; only [`AppError`]
//! knows how to turn itself into an HTTP response.

use std::path::PathBuf;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Failure while reading or parsing the credential artifact.
///
/// Local and recoverable at the process level: the caller decides whether to
/// continue degraded or abort, the loader itself never terminates the process.
#[derive(Error, Debug)]
pub enum CredentialLoadError {
    #[error("credential file not found at `{}`", path.display())]
    Missing {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("credential file at `{}` could not be read", path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("credential file at `{}` is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("credential file at `{}` is missing a value for `{field}`", path.display())]
    Incomplete { path: PathBuf, field: &'static str },
}

/// Failure while constructing or handshaking the document store handle.
#[derive(Error, Debug)]
pub enum ServiceInitError {
    /// The connection string did not parse into valid client options.
    #[error("invalid document store connection string: {0}")]
    InvalidUri(#[source] mongodb::error::Error),

    /// The client could not be built from the parsed options.
    #[error("failed to build document store client: {0}")]
    Client(#[source] mongodb::error::Error),

    /// The initial ping failed: endpoint unreachable, credential rejected,
    /// or permission denied by the remote service.
    #[error("document store handshake failed: {0}")]
    Handshake(#[source] mongodb::error::Error),
}

/// Any error from the one-shot initialization step.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Credential(#[from] CredentialLoadError),

    #[error(transparent)]
    ServiceInit(#[from] ServiceInitError),
}

/// Request-side application error with automatic conversion to an HTTP
/// response. Handlers stay free of status-code plumbing.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("document store unavailable")]
    StoreUnavailable,
}

#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::StoreUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Document store connection is not available",
            ),
        };

        error!(%status, message, "Request failed");

        let body = Json(ErrorBody { message });
        (status, body).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
