use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn test_active_emergencies_include_route_progress() {
    let (client, _state) = common::stub_backend().await;

    let emergencies = client.active_emergencies().await.unwrap();
    assert_eq!(emergencies.len(), 2);
    assert_eq!(emergencies[0].ambulance_number, "AMB001");
    assert_eq!(emergencies[0].next_junction.as_deref(), Some("Main Square Junction"));
    assert_eq!(emergencies[0].progress_label(), "1/3");
    assert_eq!(emergencies[1].pending_junctions[0].lane_number, 4);
}

#[tokio::test]
async fn test_emergencies_by_junction_groups_ambulances() {
    let (client, _state) = common::stub_backend().await;

    let grouped = client.emergencies_by_junction().await.unwrap();
    assert!(grouped.has_emergency_at("Main Square Junction"));
    assert!(grouped.has_emergency_at("Park Street Crossing"));
    assert!(!grouped.has_emergency_at("Ring Road Interchange"));
}

#[tokio::test]
async fn test_junction_emergencies_encodes_name_with_spaces() {
    let (client, state) = common::stub_backend().await;

    let response = client
        .junction_emergencies("Main Square Junction")
        .await
        .unwrap();
    assert_eq!(response.junction, "Main Square Junction");
    assert_eq!(response.count, 1);

    let scheduled = response.scheduled().unwrap();
    assert_eq!(scheduled.ambulance_number, "AMB001");
    assert_eq!(scheduled.lane, Some(2));
    assert_eq!(scheduled.from, "City Hospital");

    assert_eq!(
        state.calls(),
        vec!["GET /emergencies/junction/Main Square Junction"]
    );
}

#[tokio::test]
async fn test_clear_emergency_removes_it_from_next_poll() {
    let (client, state) = common::stub_backend().await;

    let ack = client.clear_emergency(1).await.unwrap();
    assert_eq!(ack.message.as_deref(), Some("Emergency cleared"));

    let remaining = client.active_emergencies().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 2);
    assert_eq!(
        state.calls(),
        vec!["POST /emergencies/clear/1", "GET /emergencies/active"]
    );
}
