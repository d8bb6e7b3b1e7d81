use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common;

#[tokio::test]
async fn test_force_emergency_sends_lane_and_junction() {
    let (client, state) = common::stub_backend().await;

    let ack = client
        .force_emergency("Park Street Crossing", "LANE_3")
        .await
        .unwrap();
    assert_eq!(ack.status.as_deref(), Some("EMERGENCY ACTIVATED"));
    assert_eq!(
        state.last_body(),
        json!({"lane": "LANE_3", "junction": "Park Street Crossing"})
    );
}

#[tokio::test]
async fn test_set_priority_duration_sends_seconds() {
    let (client, state) = common::stub_backend().await;

    client.set_priority_duration(25).await.unwrap();
    assert_eq!(state.last_body(), json!({"seconds": 25}));
}

#[tokio::test]
async fn test_toggle_priority_sends_flag() {
    let (client, state) = common::stub_backend().await;

    client.toggle_priority(false).await.unwrap();
    assert_eq!(state.last_body(), json!({"enabled": false}));
}

#[tokio::test]
async fn test_reset_all_and_reset_junction() {
    let (client, state) = common::stub_backend().await;

    let ack = client.reset_all().await.unwrap();
    assert_eq!(ack.status.as_deref(), Some("RESET TO NORMAL"));

    let ack = client.reset_junction("Ring Road Interchange").await.unwrap();
    assert_eq!(
        ack.message.as_deref(),
        Some("Junction Ring Road Interchange reset to normal")
    );

    assert_eq!(
        state.calls(),
        vec!["POST /admin/reset", "POST /reset-junction/Ring Road Interchange"]
    );
}
