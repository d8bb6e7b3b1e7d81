use pretty_assertions::assert_eq;
use shared_types::{fallback_hospitals, AmbulanceType, AppErrorKind, RegisterAmbulanceRequest};

use crate::common;

#[tokio::test]
async fn test_ambulance_login_returns_token_and_profile() {
    let (client, _state) = common::stub_backend().await;

    let auth = client
        .ambulance_login(common::AMBULANCE_NUMBER, common::AMBULANCE_PASSWORD)
        .await
        .unwrap();
    assert_eq!(auth.token, common::AMBULANCE_TOKEN);
    assert_eq!(auth.ambulance.ambulance_number, "AMB001");
    assert_eq!(auth.ambulance.driver_name, "Ravi Kumar");
    assert_eq!(
        auth.ambulance.hospital_name.as_deref(),
        Some("City General Hospital")
    );
}

#[tokio::test]
async fn test_ambulance_login_wrong_password_is_unauthorized() {
    let (client, _state) = common::stub_backend().await;

    let err = client
        .ambulance_login(common::AMBULANCE_NUMBER, "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.friendly_message(), "Invalid credentials");
}

#[tokio::test]
async fn test_ambulance_login_missing_fields_is_bad_request() {
    let (client, _state) = common::stub_backend().await;

    let err = client.ambulance_login("", "").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "Ambulance number and password required");
}

fn registration(number: &str) -> RegisterAmbulanceRequest {
    RegisterAmbulanceRequest {
        ambulance_number: number.to_string(),
        driver_name: "Meera Das".to_string(),
        phone_number: "9876543210".to_string(),
        password: "siren456".to_string(),
        hospital_name: Some("Medicare Hospital".to_string()),
        license_number: "DL-0999".to_string(),
        ambulance_type: AmbulanceType::Advanced,
    }
}

#[tokio::test]
async fn test_register_ambulance_returns_session() {
    let (client, state) = common::stub_backend().await;

    let auth = client.register_ambulance(&registration("AMB204")).await.unwrap();
    assert_eq!(auth.token, "token-AMB204");
    assert_eq!(auth.ambulance.ambulance_number, "AMB204");
    assert_eq!(auth.ambulance.driver_name, "Meera Das");

    let sent = state.last_body();
    assert_eq!(sent["hospital_name"], "Medicare Hospital");
    assert_eq!(sent["ambulance_type"], "advanced");
}

#[tokio::test]
async fn test_register_duplicate_surfaces_backend_message() {
    let (client, _state) = common::stub_backend().await;

    let err = client
        .register_ambulance(&registration(common::AMBULANCE_NUMBER))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.friendly_message(), "Ambulance number already registered");
}

#[tokio::test]
async fn test_hospitals_from_backend() {
    let (client, _state) = common::stub_backend().await;

    let hospitals = client.hospitals_or_fallback().await;
    assert_eq!(hospitals.len(), 1);
    assert_eq!(hospitals[0].name, "St. Mary's Hospital");
}

#[tokio::test]
async fn test_hospitals_fall_back_when_backend_fails() {
    let (client, state) = common::stub_backend().await;
    state.set_hospitals_down(true);

    let err = client.hospitals().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InternalError);

    assert_eq!(client.hospitals_or_fallback().await, fallback_hospitals());
}

#[tokio::test]
async fn test_hospitals_fall_back_when_backend_unreachable() {
    let client = common::dead_backend().await;
    assert_eq!(client.hospitals_or_fallback().await, fallback_hospitals());
}
