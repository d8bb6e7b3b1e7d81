use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp layout the backend uses for `emergency_start_time`.
const BACKEND_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One junction along an emergency route and whether it has been cleared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteProgress {
    pub junction_name: String,
    pub lane_number: u32,
    #[serde(default)]
    pub is_cleared: bool,
}

/// An active emergency request as reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmergencyRecord {
    pub id: i64,
    pub ambulance_number: String,
    #[serde(default)]
    pub current_location: String,
    #[serde(default)]
    pub destination_location: String,
    #[serde(default)]
    pub next_junction: Option<String>,
    #[serde(default)]
    pub lane_to_clear: Option<u32>,
    #[serde(default)]
    pub current_junction_index: u32,
    #[serde(default)]
    pub total_junctions: u32,
    #[serde(default)]
    pub emergency_start_time: String,
    #[serde(default)]
    pub pending_junctions: Vec<RouteProgress>,
}

impl EmergencyRecord {
    /// Fraction of the route already cleared, in `0.0..=1.0`.
    pub fn progress_ratio(&self) -> f64 {
        if self.total_junctions == 0 {
            return 0.0;
        }
        (self.current_junction_index as f64 / self.total_junctions as f64).min(1.0)
    }

    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.current_junction_index, self.total_junctions)
    }

    pub fn started_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.emergency_start_time, BACKEND_TIMESTAMP_FORMAT).ok()
    }

    /// Start time as `HH:MM:SS`, or the raw backend value if it does not parse.
    pub fn started_time_label(&self) -> String {
        self.started_at()
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| self.emergency_start_time.clone())
    }
}

/// Body of `GET /emergencies/active`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ActiveEmergenciesResponse {
    #[serde(default)]
    pub emergencies: Vec<EmergencyRecord>,
}

/// A junction with uncleared emergencies, from `GET /emergencies/by-junction`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JunctionEmergencySummary {
    pub junction_name: String,
    #[serde(default)]
    pub active_emergencies: u32,
    #[serde(default)]
    pub ambulance_numbers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EmergenciesByJunctionResponse {
    #[serde(default)]
    pub junctions_with_emergencies: Vec<JunctionEmergencySummary>,
}

impl EmergenciesByJunctionResponse {
    /// True when `junction` has at least one uncleared emergency.
    pub fn has_emergency_at(&self, junction: &str) -> bool {
        self.junctions_with_emergencies
            .iter()
            .any(|j| j.junction_name == junction && j.active_emergencies > 0)
    }
}

/// Body of `GET /emergencies/junction/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct JunctionEmergenciesResponse {
    #[serde(default)]
    pub junction: String,
    #[serde(default)]
    pub active_emergencies: Vec<EmergencyRecord>,
    #[serde(default)]
    pub count: u32,
}

impl JunctionEmergenciesResponse {
    /// The earliest scheduled emergency waiting at this junction.
    pub fn scheduled(&self) -> Option<ScheduledEmergency> {
        let first = self.active_emergencies.first()?;
        Some(ScheduledEmergency {
            junction: self.junction.clone(),
            ambulance_number: first.ambulance_number.clone(),
            lane: first.lane_to_clear,
            from: first.current_location.clone(),
            to: first.destination_location.clone(),
            progress: first.progress_label(),
        })
    }
}

/// Summary of the next emergency expected at the selected junction.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledEmergency {
    pub junction: String,
    pub ambulance_number: String,
    pub lane: Option<u32>,
    pub from: String,
    pub to: String,
    pub progress: String,
}

/// Body of `GET /ambulance/emergency/status`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AmbulanceEmergencyStatus {
    #[serde(default)]
    pub emergency_active: bool,
    #[serde(default)]
    pub request_id: Option<i64>,
    #[serde(default)]
    pub current_location: Option<String>,
    #[serde(default)]
    pub destination_location: Option<String>,
    #[serde(default)]
    pub current_junction_index: u32,
    #[serde(default)]
    pub total_junctions: u32,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub junctions: Vec<RouteProgress>,
}

/// One stop on a not-yet-submitted emergency route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteJunction {
    pub junction_id: i64,
    pub junction_name: String,
    pub lane_to_clear: u32,
    /// 1-based position along the route.
    pub order: u32,
}

/// Ambulance-side route being assembled before it is sent to the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmergencyRouteDraft {
    pub current_location: String,
    pub destination_location: String,
    pub junctions: Vec<RouteJunction>,
}

impl EmergencyRouteDraft {
    /// Both locations filled in and a route generated.
    pub fn is_ready(&self) -> bool {
        !self.current_location.trim().is_empty()
            && !self.destination_location.trim().is_empty()
            && !self.junctions.is_empty()
    }

    /// Hand the draft over as the body of `POST /ambulance/emergency/start`.
    pub fn into_request(self) -> StartEmergencyRequest {
        StartEmergencyRequest {
            current_location: self.current_location.trim().to_string(),
            destination_location: self.destination_location.trim().to_string(),
            route_data: RouteData {
                junctions: self.junctions,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteData {
    pub junctions: Vec<RouteJunction>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StartEmergencyRequest {
    pub current_location: String,
    pub destination_location: String,
    pub route_data: RouteData,
}

/// Body of `POST /admin/force-emergency`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForceEmergencyRequest {
    pub lane: String,
    pub junction: String,
}

/// Body of `POST /admin/set-duration`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetDurationRequest {
    pub seconds: u32,
}

/// Body of `POST /admin/toggle-priority`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TogglePriorityRequest {
    pub enabled: bool,
}

/// Generic acknowledgement returned by backend mutations.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Set when the mutation created an emergency request.
    #[serde(default)]
    pub request_id: Option<i64>,
}
