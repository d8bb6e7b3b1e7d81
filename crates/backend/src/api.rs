use reqwest::{multipart, Method, RequestBuilder, Url};
use serde::{de::DeserializeOwned, Serialize};
use shared_types::{
    fallback_hospitals, Ack, ActiveEmergenciesResponse, AmbulanceAuthResponse,
    AmbulanceEmergencyStatus, AmbulanceLoginRequest, AnalysisResult, AppError,
    EmergenciesByJunctionResponse, EmergencyRecord, ForceEmergencyRequest, Hospital,
    HospitalsResponse, Junction, JunctionEmergenciesResponse, JunctionStatusMap,
    JunctionsResponse, RegisterAmbulanceRequest, SetDurationRequest, StartEmergencyRequest,
    TogglePriorityRequest,
};

use crate::config::config;
use crate::error_convert::{status_to_app_error, ReqwestErrorExt};

/// Typed client for the traffic backend.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Client for the configured backend.
    pub fn from_config() -> Self {
        Self::new(config().backend.base_url.clone())
    }

    /// Same backend, authenticated as an ambulance.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            token: Some(token.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Request plumbing ──────────────────────────────────

    /// Join path segments onto the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AppError::internal(format!("Invalid backend URL {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| AppError::internal(format!("Backend URL {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, AppError> {
        Ok(self.http.request(method, self.endpoint(segments)?))
    }

    /// Request carrying the ambulance bearer token. Fails without a network
    /// call when the client has no token.
    fn authorized(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, AppError> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| AppError::unauthorized("Token is missing"))?;
        Ok(self.request(method, segments)?.bearer_auth(token))
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, AppError> {
        let response = request.send().await.map_err(|e| e.into_app_error())?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_to_app_error(status.as_u16(), &body));
        }
        response.json::<T>().await.map_err(|e| e.into_app_error())
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, AppError> {
        Self::send(self.request(Method::GET, segments)?).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, AppError> {
        Self::send(self.request(Method::POST, segments)?.json(body)).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, AppError> {
        Self::send(self.request(Method::POST, segments)?).await
    }

    // ── Junctions & signals ───────────────────────────────

    pub async fn junctions(&self) -> Result<Vec<Junction>, AppError> {
        let body: JunctionsResponse = self.get(&["junctions"]).await?;
        Ok(body.junctions)
    }

    pub async fn all_junctions_status(&self) -> Result<JunctionStatusMap, AppError> {
        self.get(&["all-junctions-status"]).await
    }

    // ── Emergencies ───────────────────────────────────────

    pub async fn active_emergencies(&self) -> Result<Vec<EmergencyRecord>, AppError> {
        let body: ActiveEmergenciesResponse = self.get(&["emergencies", "active"]).await?;
        Ok(body.emergencies)
    }

    pub async fn emergencies_by_junction(&self) -> Result<EmergenciesByJunctionResponse, AppError> {
        self.get(&["emergencies", "by-junction"]).await
    }

    pub async fn junction_emergencies(
        &self,
        junction: &str,
    ) -> Result<JunctionEmergenciesResponse, AppError> {
        self.get(&["emergencies", "junction", junction]).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn clear_emergency(&self, id: i64) -> Result<Ack, AppError> {
        let id = id.to_string();
        self.post_empty(&["emergencies", "clear", id.as_str()]).await
    }

    // ── Admin controls ────────────────────────────────────

    #[tracing::instrument(skip(self))]
    pub async fn force_emergency(&self, junction: &str, lane: &str) -> Result<Ack, AppError> {
        let body = ForceEmergencyRequest {
            lane: lane.to_string(),
            junction: junction.to_string(),
        };
        self.post(&["admin", "force-emergency"], &body).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn set_priority_duration(&self, seconds: u32) -> Result<Ack, AppError> {
        self.post(&["admin", "set-duration"], &SetDurationRequest { seconds })
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn reset_all(&self) -> Result<Ack, AppError> {
        self.post_empty(&["admin", "reset"]).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn toggle_priority(&self, enabled: bool) -> Result<Ack, AppError> {
        self.post(&["admin", "toggle-priority"], &TogglePriorityRequest { enabled })
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn reset_junction(&self, junction: &str) -> Result<Ack, AppError> {
        self.post_empty(&["reset-junction", junction]).await
    }

    // ── Video analysis ────────────────────────────────────

    /// Upload a junction video for analysis. Can take a long time.
    #[tracing::instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn analyze_video(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        junction: &str,
    ) -> Result<AnalysisResult, AppError> {
        let form = multipart::Form::new()
            .part("video", multipart::Part::bytes(bytes).file_name(file_name.to_string()))
            .text("junction", junction.to_string());
        Self::send(self.request(Method::POST, &["analyze"])?.multipart(form)).await
    }

    // ── Ambulance accounts ────────────────────────────────

    #[tracing::instrument(skip(self, password))]
    pub async fn ambulance_login(
        &self,
        ambulance_number: &str,
        password: &str,
    ) -> Result<AmbulanceAuthResponse, AppError> {
        let body = AmbulanceLoginRequest {
            ambulance_number: ambulance_number.to_string(),
            password: password.to_string(),
        };
        self.post(&["ambulance", "login"], &body).await
    }

    #[tracing::instrument(skip_all, fields(ambulance_number = %request.ambulance_number))]
    pub async fn register_ambulance(
        &self,
        request: &RegisterAmbulanceRequest,
    ) -> Result<AmbulanceAuthResponse, AppError> {
        self.post(&["ambulance", "register"], request).await
    }

    pub async fn hospitals(&self) -> Result<Vec<Hospital>, AppError> {
        let body: HospitalsResponse = self.get(&["ambulance", "hospitals"]).await?;
        Ok(body.hospitals)
    }

    /// Hospital list for the registration form; never empty.
    pub async fn hospitals_or_fallback(&self) -> Vec<Hospital> {
        match self.hospitals().await {
            Ok(hospitals) if !hospitals.is_empty() => hospitals,
            Ok(_) => fallback_hospitals(),
            Err(e) => {
                tracing::warn!(error = %e, "hospital list unavailable, using built-in list");
                fallback_hospitals()
            }
        }
    }

    // ── Ambulance emergencies (bearer token) ──────────────

    pub async fn ambulance_junctions(&self) -> Result<Vec<Junction>, AppError> {
        let body: JunctionsResponse =
            Self::send(self.authorized(Method::GET, &["ambulance", "junctions"])?).await?;
        Ok(body.junctions)
    }

    #[tracing::instrument(skip_all, fields(stops = request.route_data.junctions.len()))]
    pub async fn start_emergency(&self, request: &StartEmergencyRequest) -> Result<Ack, AppError> {
        Self::send(
            self.authorized(Method::POST, &["ambulance", "emergency", "start"])?
                .json(request),
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn stop_emergency(&self) -> Result<Ack, AppError> {
        Self::send(self.authorized(Method::POST, &["ambulance", "emergency", "stop"])?).await
    }

    pub async fn emergency_status(&self) -> Result<AmbulanceEmergencyStatus, AppError> {
        Self::send(self.authorized(Method::GET, &["ambulance", "emergency", "status"])?).await
    }
}
