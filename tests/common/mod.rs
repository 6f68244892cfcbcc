#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{
    Arc, Once,
    atomic::{AtomicU32, Ordering},
};

use fleet_api::models::{AppState, ServiceCredential, StoreState};
use fleet_api::services::store::DocStore;
use secrecy::Secret;
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("fleet_api=debug")
            .with_test_writer()
            .init();
    });
}

/// Spawns the application with the given store state and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app(store: StoreState) -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    let state = Arc::new(AppState::new(store));

    tokio::spawn(async move {
        axum::serve(listener, fleet_api::app(state)).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client.get(&address).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    address
}

/// Builds a ready store handle without touching the network (the driver
/// connects lazily, so no server needs to be listening).
pub async fn ready_store() -> StoreState {
    let credential = test_credential("mongodb://127.0.0.1:27017");
    let store = DocStore::connect(&credential, None)
        .await
        .expect("Failed to build offline store handle");
    StoreState::Ready(store)
}

pub fn test_credential(uri: &str) -> ServiceCredential {
    ServiceCredential {
        app_id: "fleet-test".to_string(),
        uri: Secret::new(uri.to_string()),
        database: "fleet_test".to_string(),
    }
}

/// Writes a credential file with a unique name to the temp directory and
/// returns its path.
pub fn write_credential_file(contents: &str) -> PathBuf {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!(
        "fleet-api-cred-{}-{n}.json",
        std::process::id()
    ));
    std::fs::write(&path, contents).expect("Failed to write credential fixture");
    path
}
