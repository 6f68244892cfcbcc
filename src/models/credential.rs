//! # Service Credential
//!
//! The file-resident credential artifact that authenticates this process to
//! the remote document store. Read once at startup, parsed into a typed
//! struct, and consumed by the store initializer; never retained afterwards.

use std::fs;
use std::path::Path;

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::error::CredentialLoadError;

/// Parsed credential artifact.
///
/// The connection string carries the actual secret, so it is wrapped in
/// [`Secret`] and redacted from `Debug` output.
#[derive(Debug, Deserialize)]
pub struct ServiceCredential {
    /// Identity the store handle is bound to.
    pub app_id: String,
    /// Connection string for the document store.
    pub uri: Secret<String>,
    /// Default database this credential targets.
    pub database: String,
}

impl ServiceCredential {
    /// Reads and parses the credential file at `path`.
    ///
    /// No retry and no side effects beyond the read. Failure is reported to
    /// the caller; the loader never terminates the process.
    pub fn load(path: &Path) -> Result<Self, CredentialLoadError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CredentialLoadError::Missing {
                    path: path.to_path_buf(),
                    source: e,
                }
            } else {
                CredentialLoadError::Unreadable {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let credential: Self =
            serde_json::from_str(&raw).map_err(|e| CredentialLoadError::Malformed {
                path: path.to_path_buf(),
                source: e,
            })?;

        credential.validate(path)?;
        Ok(credential)
    }

    fn validate(&self, path: &Path) -> Result<(), CredentialLoadError> {
        let incomplete = |field| CredentialLoadError::Incomplete {
            path: path.to_path_buf(),
            field,
        };

        if self.app_id.is_empty() {
            return Err(incomplete("app_id"));
        }
        if self.uri.expose_secret().is_empty() {
            return Err(incomplete("uri"));
        }
        if self.database.is_empty() {
            return Err(incomplete("database"));
        }
        Ok(())
    }
}
