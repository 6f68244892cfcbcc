//! # Home Handler
//!
//! The single exposed route. Acknowledges that the API is up and its
//! document store connection is live; reports 503 when startup left the
//! store handle in a failed state.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{AppError, AppResult};
use crate::models::{AppState, StoreState};
use crate::utils::constant::WELCOME_MESSAGE;

#[derive(Serialize)]
pub struct HomeResponse {
    message: &'static str,
}

/// `GET /` - fixed acknowledgment payload.
///
/// Reads the store state set at startup but never mutates it, so it is safe
/// to invoke concurrently.
#[instrument(skip_all)]
pub async fn home(State(state): State<Arc<AppState>>) -> AppResult<Json<HomeResponse>> {
    match &state.store {
        StoreState::Ready(_) => {
            debug!("Home endpoint accessed");
            Ok(Json(HomeResponse {
                message: WELCOME_MESSAGE,
            }))
        }
        StoreState::Failed(reason) => {
            debug!(%reason, "Home endpoint accessed with failed store handle");
            Err(AppError::StoreUnavailable)
        }
    }
}
