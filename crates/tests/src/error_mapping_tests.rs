use axum::{http::StatusCode, routing::get, Router};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, CONNECTION_ERROR_MESSAGE};

use crate::common;

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let client = common::dead_backend().await;

    let err = client.junctions().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
    assert_eq!(err.friendly_message(), CONNECTION_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let router = Router::new().route("/junctions", get(|| async { "definitely not json" }));
    let client = common::spawn_router(router).await;

    let err = client.junctions().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Decode);
}

#[tokio::test]
async fn test_server_error_carries_backend_message() {
    let router = Router::new().route(
        "/all-junctions-status",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(serde_json::json!({"error": "Signal controller failed"})),
            )
        }),
    );
    let client = common::spawn_router(router).await;

    let err = client.all_junctions_status().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.friendly_message(), "Signal controller failed");
}

#[tokio::test]
async fn test_missing_route_is_not_found() {
    let client = common::spawn_router(Router::new()).await;

    let err = client.emergencies_by_junction().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Request failed with status 404");
}
