use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn test_analyze_uploads_video_and_junction() {
    let (client, state) = common::stub_backend().await;

    let result = client
        .analyze_video("rush-hour.mp4", vec![0u8; 2048], "Park Street Crossing")
        .await
        .unwrap();

    assert!(result.emergency);
    assert!(result.is_scheduled);
    assert_eq!(result.junction, "Park Street Crossing");
    assert_eq!(result.lane_to_clear, Some(2));
    assert_eq!(result.confidence_label(), "87.0%");
    assert_eq!(result.output_video.as_deref(), Some("/output/2048-rush-hour.mp4"));
    assert_eq!(
        result.output_video_url(client.base_url()),
        Some(format!("{}/output/2048-rush-hour.mp4", client.base_url()))
    );
    assert_eq!(state.calls(), vec!["POST /analyze"]);
}
