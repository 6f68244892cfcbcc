use std::process::ExitCode;
use std::sync::Arc;

use fleet_api::config::Settings;
use fleet_api::models::AppState;
use fleet_api::{app, bootstrap};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fleet_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!(%e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Initialization happens exactly once, before the listener is bound.
    let store = match bootstrap(&settings).await {
        Ok(store) => store,
        Err(e) => {
            error!(%e, "Startup failed under fail-fast policy");
            return ExitCode::FAILURE;
        }
    };

    let state = Arc::new(AppState::new(store));
    let app = app(state);

    let listener = TcpListener::bind(&settings.bind_addr).await.unwrap();
    info!("Server starting at http://{}", settings.bind_addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();

    ExitCode::SUCCESS
}
