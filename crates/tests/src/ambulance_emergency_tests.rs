use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, EmergencyRouteDraft, RouteJunction};

use crate::common;

fn draft() -> EmergencyRouteDraft {
    EmergencyRouteDraft {
        current_location: "City Hospital".into(),
        destination_location: "Highway Exit 5".into(),
        junctions: vec![
            RouteJunction {
                junction_id: 2,
                junction_name: "Park Street Crossing".into(),
                lane_to_clear: 3,
                order: 1,
            },
            RouteJunction {
                junction_id: 1,
                junction_name: "Main Square Junction".into(),
                lane_to_clear: 1,
                order: 2,
            },
        ],
    }
}

#[tokio::test]
async fn test_start_status_stop_round() {
    let (client, state) = common::stub_backend().await;
    let ambulance = client.with_token(common::AMBULANCE_TOKEN);

    let before = ambulance.emergency_status().await.unwrap();
    assert!(!before.emergency_active);

    let ack = ambulance.start_emergency(&draft().into_request()).await.unwrap();
    assert_eq!(ack.request_id, Some(42));
    assert_eq!(ack.status.as_deref(), Some("active"));

    let sent = state.last_body();
    assert_eq!(sent["route_data"]["junctions"][0]["junction_name"], "Park Street Crossing");
    assert_eq!(sent["route_data"]["junctions"][1]["order"], 2);

    let during = ambulance.emergency_status().await.unwrap();
    assert!(during.emergency_active);
    assert_eq!(during.total_junctions, 2);
    assert_eq!(during.junctions[0].lane_number, 3);
    assert_eq!(during.current_location.as_deref(), Some("City Hospital"));

    let ack = ambulance.stop_emergency().await.unwrap();
    assert_eq!(ack.message.as_deref(), Some("Emergency mode deactivated"));
    assert!(!ambulance.emergency_status().await.unwrap().emergency_active);
}

#[tokio::test]
async fn test_ambulance_junctions_requires_token() {
    let (client, state) = common::stub_backend().await;

    let err = client.ambulance_junctions().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    // Rejected locally, the stub never saw it.
    assert!(state.calls().is_empty());

    let junctions = client
        .with_token(common::AMBULANCE_TOKEN)
        .ambulance_junctions()
        .await
        .unwrap();
    assert_eq!(junctions.len(), 3);
}

#[tokio::test]
async fn test_stale_token_is_rejected_by_backend() {
    let (client, _state) = common::stub_backend().await;

    let err = client
        .with_token("expired")
        .emergency_status()
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Token is invalid");
}
