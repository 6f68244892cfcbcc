//! # Fleet API - Document Store Gateway
//!
//! ## Modules
//!
//! - [`config`] - Typed settings read from the environment at startup
//! - [`error`] - Failure taxonomy and HTTP error responses
//! - [`handlers`] - HTTP request handlers
//! - [`models`] - Credential artifact and shared application state
//! - [`services`] - Document store handle construction
//! - [`utils`] - Constants

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{Router, routing::get};
use tracing::{error, info};

use crate::config::{Settings, StartupPolicy};
use crate::error::StartupError;
use crate::handlers::home;
use crate::models::{AppState, ServiceCredential, StoreState};
use crate::services::store::DocStore;

/// Creates the Axum router with application routes and state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new().route("/", get(home)).with_state(state)
}

/// Loads the credential and builds the store handle: read file, construct
/// client, handshake. Runs exactly once, before the server accepts traffic.
async fn init_store(settings: &Settings) -> Result<DocStore, StartupError> {
    let credential = ServiceCredential::load(&settings.credential_path)?;
    let store = DocStore::connect(&credential, settings.database_override.as_deref()).await?;
    store.ping().await?;
    Ok(store)
}

/// One-shot document store initialization with the configured failure policy
/// applied.
///
/// Must be called exactly once, by `main`, before the listener is bound. The
/// returned state is moved into [`AppState`] and held immutably for the life
/// of the process; there is no re-initialization or retry path, so a second
/// live handle cannot exist.
///
/// On success the handle is `Ready`. On failure under
/// [`StartupPolicy::Degrade`] the error is logged and the handle is left
/// `Failed` for the life of the process; under [`StartupPolicy::FailFast`]
/// the error is returned for the caller to abort on. Either way the decision
/// is made here, visibly, not swallowed inside the initializer.
pub async fn bootstrap(settings: &Settings) -> Result<StoreState, StartupError> {
    match init_store(settings).await {
        Ok(store) => {
            info!(
                app_id = store.app_id(),
                database = store.database_name(),
                "Success: connected to document store"
            );
            Ok(StoreState::Ready(store))
        }
        Err(e) => {
            match &e {
                StartupError::Credential(cause) => {
                    error!(%cause, "Could not load service credential")
                }
                StartupError::ServiceInit(cause) => {
                    error!(%cause, "Could not initialize document store handle")
                }
            }
            match settings.startup_policy {
                StartupPolicy::Degrade => {
                    info!("Continuing in degraded mode without a document store");
                    Ok(StoreState::Failed(e.to_string()))
                }
                StartupPolicy::FailFast => Err(e),
            }
        }
    }
}
