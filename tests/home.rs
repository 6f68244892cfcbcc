mod common;

use common::{ready_store, spawn_app};
use fleet_api::models::StoreState;

#[tokio::test]
async fn home_returns_welcome_when_store_ready() {
    let address = spawn_app(ready_store().await).await;
    let client = reqwest::Client::new();

    let response = client
        .get(&address)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(
        response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("application/json")
    );

    let body: serde_json::Value = response.json().await.expect("Body was not JSON");
    assert_eq!(
        body["message"],
        "Your API is officially talking to Firebase!"
    );
}

#[tokio::test]
async fn home_returns_503_when_store_failed() {
    let address = spawn_app(StoreState::Failed(
        "document store handshake failed: connection refused".to_string(),
    ))
    .await;
    let client = reqwest::Client::new();

    let response = client
        .get(&address)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);

    let body: serde_json::Value = response.json().await.expect("Body was not JSON");
    assert_eq!(
        body["message"],
        "Document store connection is not available"
    );
}

#[tokio::test]
async fn home_is_stable_across_repeated_requests() {
    let address = spawn_app(StoreState::Failed("init failed".to_string())).await;
    let client = reqwest::Client::new();

    // The handle is terminal for the process lifetime; every request must
    // observe the same state.
    for _ in 0..3 {
        let response = client
            .get(&address)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);
    }
}
