use pretty_assertions::assert_eq;
use shared_types::{JunctionMode, SignalColor};

use crate::common;

#[tokio::test]
async fn test_junctions_lists_every_junction() {
    let (client, _state) = common::stub_backend().await;

    let junctions = client.junctions().await.unwrap();
    assert_eq!(junctions.len(), 3);
    assert_eq!(junctions[0].name, "Main Square Junction");
    assert_eq!(junctions[2].lanes, 3);
}

#[tokio::test]
async fn test_all_junctions_status_parses_modes_and_signals() {
    let (client, _state) = common::stub_backend().await;

    let statuses = client.all_junctions_status().await.unwrap();
    assert_eq!(statuses.len(), 2);

    let main = &statuses["Main Square Junction"];
    assert_eq!(main.mode, JunctionMode::Emergency);
    assert_eq!(main.emergency_lane.as_deref(), Some("LANE_2"));
    assert_eq!(main.signals["LANE_2"], SignalColor::Green);

    let park = &statuses["Park Street Crossing"];
    assert_eq!(park.mode, JunctionMode::Normal);
    assert_eq!(park.emergency_lane, None);
}

#[tokio::test]
async fn test_each_poll_is_a_fresh_request() {
    let (client, state) = common::stub_backend().await;

    client.junctions().await.unwrap();
    client.junctions().await.unwrap();
    client.all_junctions_status().await.unwrap();

    assert_eq!(
        state.calls(),
        vec!["GET /junctions", "GET /junctions", "GET /all-junctions-status"]
    );
}
