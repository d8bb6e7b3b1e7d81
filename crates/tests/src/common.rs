use axum::{
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use backend::BackendClient;
use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use tokio::net::TcpListener;

/// Ambulance the stub backend knows about.
pub const AMBULANCE_NUMBER: &str = "AMB001";
pub const AMBULANCE_PASSWORD: &str = "siren123";
pub const AMBULANCE_TOKEN: &str = "token-AMB001";

/// Mutable state behind the stub backend, shared with the test body.
#[derive(Default)]
pub struct StubState {
    /// `METHOD /path` of every request that reached a handler, in order.
    pub calls: Mutex<Vec<String>>,
    /// JSON bodies of every mutation, in order.
    pub bodies: Mutex<Vec<Value>>,
    pub emergencies: Mutex<Vec<Value>>,
    /// Route declared through `/ambulance/emergency/start`.
    pub ambulance_route: Mutex<Option<Value>>,
    pub hospitals_down: AtomicBool,
}

impl StubState {
    fn record(&self, call: &str, body: Option<Value>) {
        self.calls.lock().unwrap().push(call.to_string());
        if let Some(body) = body {
            self.bodies.lock().unwrap().push(body);
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_body(&self) -> Value {
        self.bodies.lock().unwrap().last().cloned().unwrap_or(Value::Null)
    }

    pub fn set_hospitals_down(&self, down: bool) {
        self.hospitals_down.store(down, Ordering::SeqCst);
    }
}

type Shared = Arc<StubState>;

/// Serve `router` on an ephemeral port and return a client pointed at it.
pub async fn spawn_router(router: Router) -> BackendClient {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Failed to read stub address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    BackendClient::new(format!("http://{addr}"))
}

/// Start the stub traffic backend seeded with two emergencies.
pub async fn stub_backend() -> (BackendClient, Shared) {
    let state: Shared = Arc::new(StubState::default());
    *state.emergencies.lock().unwrap() = vec![
        emergency(1, "AMB001", "Main Square Junction", 2),
        emergency(2, "AMB003", "Park Street Crossing", 4),
    ];
    let client = spawn_router(stub_router(state.clone())).await;
    (client, state)
}

/// An address nothing is listening on.
pub async fn dead_backend() -> BackendClient {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read probe address");
    drop(listener);
    BackendClient::new(format!("http://{addr}"))
}

pub fn emergency(id: i64, number: &str, next_junction: &str, lane: u32) -> Value {
    json!({
        "id": id,
        "ambulance_number": number,
        "current_location": "City Hospital",
        "destination_location": "Highway Exit 5",
        "next_junction": next_junction,
        "lane_to_clear": lane,
        "current_junction_index": 1,
        "total_junctions": 3,
        "emergency_start_time": "2026-10-15 09:41:07",
        "pending_junctions": [
            {"junction_name": next_junction, "lane_number": lane, "is_cleared": false}
        ]
    })
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn check_bearer(headers: &HeaderMap) -> Result<(), Response> {
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        None => Err(error(StatusCode::UNAUTHORIZED, "Token is missing")),
        Some(value) if value == format!("Bearer {AMBULANCE_TOKEN}") => Ok(()),
        Some(_) => Err(error(StatusCode::UNAUTHORIZED, "Token is invalid")),
    }
}

pub fn stub_router(state: Shared) -> Router {
    Router::new()
        .route("/junctions", get(junctions))
        .route("/all-junctions-status", get(all_junctions_status))
        .route("/emergencies/active", get(active_emergencies))
        .route("/emergencies/by-junction", get(emergencies_by_junction))
        .route("/emergencies/junction/{name}", get(junction_emergencies))
        .route("/emergencies/clear/{id}", post(clear_emergency))
        .route("/admin/force-emergency", post(force_emergency))
        .route("/admin/set-duration", post(set_duration))
        .route("/admin/reset", post(reset_all))
        .route("/admin/toggle-priority", post(toggle_priority))
        .route("/reset-junction/{name}", post(reset_junction))
        .route("/analyze", post(analyze))
        .route("/ambulance/login", post(ambulance_login))
        .route("/ambulance/register", post(ambulance_register))
        .route("/ambulance/hospitals", get(hospitals))
        .route("/ambulance/junctions", get(ambulance_junctions))
        .route("/ambulance/emergency/start", post(start_emergency))
        .route("/ambulance/emergency/stop", post(stop_emergency))
        .route("/ambulance/emergency/status", get(emergency_status))
        .with_state(state)
}

fn junction_list() -> Value {
    json!({"junctions": [
        {"id": 1, "name": "Main Square Junction", "location": "City Center", "lanes": 4},
        {"id": 2, "name": "Park Street Crossing", "location": "North Zone", "lanes": 4},
        {"id": 3, "name": "Ring Road Interchange", "location": "East Zone", "lanes": 3}
    ]})
}

async fn junctions(State(state): State<Shared>) -> Json<Value> {
    state.record("GET /junctions", None);
    Json(junction_list())
}

async fn all_junctions_status(State(state): State<Shared>) -> Json<Value> {
    state.record("GET /all-junctions-status", None);
    Json(json!({
        "Main Square Junction": {
            "mode": "EMERGENCY",
            "signals": {"LANE_1": "RED", "LANE_2": "GREEN", "LANE_3": "RED", "LANE_4": "RED"},
            "emergency_lane": "LANE_2"
        },
        "Park Street Crossing": {
            "mode": "NORMAL",
            "signals": {"LANE_1": "GREEN", "LANE_2": "RED", "LANE_3": "RED", "LANE_4": "RED"},
            "emergency_lane": null
        }
    }))
}

async fn active_emergencies(State(state): State<Shared>) -> Json<Value> {
    state.record("GET /emergencies/active", None);
    let emergencies = state.emergencies.lock().unwrap().clone();
    Json(json!({ "emergencies": emergencies }))
}

async fn emergencies_by_junction(State(state): State<Shared>) -> Json<Value> {
    state.record("GET /emergencies/by-junction", None);
    let emergencies = state.emergencies.lock().unwrap().clone();
    let mut summaries: Vec<Value> = Vec::new();
    for e in &emergencies {
        let name = e["next_junction"].as_str().unwrap_or_default();
        let number = e["ambulance_number"].clone();
        match summaries.iter_mut().find(|s| s["junction_name"] == name) {
            Some(summary) => {
                let count = summary["active_emergencies"].as_u64().unwrap_or(0) + 1;
                summary["active_emergencies"] = json!(count);
                summary["ambulance_numbers"]
                    .as_array_mut()
                    .unwrap()
                    .push(number);
            }
            None => summaries.push(json!({
                "junction_name": name,
                "active_emergencies": 1,
                "ambulance_numbers": [number]
            })),
        }
    }
    Json(json!({ "junctions_with_emergencies": summaries }))
}

async fn junction_emergencies(
    State(state): State<Shared>,
    Path(name): Path<String>,
) -> Json<Value> {
    state.record(&format!("GET /emergencies/junction/{name}"), None);
    let matching: Vec<Value> = state
        .emergencies
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e["next_junction"] == name.as_str())
        .cloned()
        .collect();
    Json(json!({
        "junction": name,
        "count": matching.len(),
        "active_emergencies": matching
    }))
}

async fn clear_emergency(State(state): State<Shared>, Path(id): Path<i64>) -> Json<Value> {
    state.record(&format!("POST /emergencies/clear/{id}"), None);
    state.emergencies.lock().unwrap().retain(|e| e["id"] != id);
    Json(json!({ "message": "Emergency cleared" }))
}

async fn force_emergency(State(state): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    state.record("POST /admin/force-emergency", Some(body.clone()));
    Json(json!({
        "status": "EMERGENCY ACTIVATED",
        "lane": body["lane"],
        "junction": body["junction"]
    }))
}

async fn set_duration(State(state): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    state.record("POST /admin/set-duration", Some(body.clone()));
    Json(json!({ "priority_duration": body["seconds"] }))
}

async fn reset_all(State(state): State<Shared>) -> Json<Value> {
    state.record("POST /admin/reset", None);
    Json(json!({ "status": "RESET TO NORMAL" }))
}

async fn toggle_priority(State(state): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    state.record("POST /admin/toggle-priority", Some(body.clone()));
    Json(json!({ "priority_enabled": body["enabled"] }))
}

async fn reset_junction(State(state): State<Shared>, Path(name): Path<String>) -> Json<Value> {
    state.record(&format!("POST /reset-junction/{name}"), None);
    Json(json!({
        "message": format!("Junction {name} reset to normal"),
        "junction": name
    }))
}

async fn analyze(State(state): State<Shared>, mut multipart: Multipart) -> Response {
    let mut junction = String::from("Main Square Junction");
    let mut video: Option<(String, usize)> = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("video") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let size = field.bytes().await.map(|b| b.len()).unwrap_or(0);
                video = Some((file_name, size));
            }
            Some("junction") => {
                if let Ok(text) = field.text().await {
                    junction = text;
                }
            }
            _ => {}
        }
    }
    state.record("POST /analyze", None);
    let Some((file_name, size)) = video else {
        return error(StatusCode::BAD_REQUEST, "No video uploaded");
    };
    Json(json!({
        "emergency": true,
        "vehicle_type": "ambulance",
        "ambulance_number": "AMB001",
        "junction": junction,
        "lane_to_clear": 2,
        "confidence": 0.87,
        "signal": "GREEN for LANE 2",
        "output_video": format!("/output/{size}-{file_name}"),
        "has_active_request": true,
        "is_scheduled": true,
        "message": "Scheduled emergency processed for ambulance AMB001"
    }))
    .into_response()
}

async fn ambulance_login(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    state.record("POST /ambulance/login", None);
    let number = body["ambulance_number"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    if number.is_empty() || password.is_empty() {
        return error(StatusCode::BAD_REQUEST, "Ambulance number and password required");
    }
    if number != AMBULANCE_NUMBER || password != AMBULANCE_PASSWORD {
        return error(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    Json(json!({
        "message": "Login successful",
        "token": AMBULANCE_TOKEN,
        "ambulance": {
            "id": 1,
            "ambulance_number": AMBULANCE_NUMBER,
            "driver_name": "Ravi Kumar",
            "hospital_name": "City General Hospital"
        }
    }))
    .into_response()
}

async fn ambulance_register(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    state.record("POST /ambulance/register", Some(body.clone()));
    let number = body["ambulance_number"].as_str().unwrap_or_default().to_string();
    if number == AMBULANCE_NUMBER {
        return error(StatusCode::BAD_REQUEST, "Ambulance number already registered");
    }
    (
        StatusCode::CREATED,
        Json(json!({
            "message": "Ambulance registered successfully",
            "token": format!("token-{number}"),
            "ambulance": {
                "id": 9,
                "ambulance_number": number,
                "driver_name": body["driver_name"]
            }
        })),
    )
        .into_response()
}

async fn hospitals(State(state): State<Shared>) -> Response {
    state.record("GET /ambulance/hospitals", None);
    if state.hospitals_down.load(Ordering::SeqCst) {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "database is locked");
    }
    Json(json!({"hospitals": [
        {"id": 10, "name": "St. Mary's Hospital", "location": "South Zone"}
    ]}))
    .into_response()
}

async fn ambulance_junctions(State(state): State<Shared>, headers: HeaderMap) -> Response {
    state.record("GET /ambulance/junctions", None);
    if let Err(rejection) = check_bearer(&headers) {
        return rejection;
    }
    Json(junction_list()).into_response()
}

async fn start_emergency(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.record("POST /ambulance/emergency/start", Some(body.clone()));
    if let Err(rejection) = check_bearer(&headers) {
        return rejection;
    }
    *state.ambulance_route.lock().unwrap() = Some(body);
    (
        StatusCode::CREATED,
        Json(json!({
            "message": "Emergency mode activated",
            "request_id": 42,
            "ambulance_number": AMBULANCE_NUMBER,
            "status": "active"
        })),
    )
        .into_response()
}

async fn stop_emergency(State(state): State<Shared>, headers: HeaderMap) -> Response {
    state.record("POST /ambulance/emergency/stop", None);
    if let Err(rejection) = check_bearer(&headers) {
        return rejection;
    }
    *state.ambulance_route.lock().unwrap() = None;
    Json(json!({ "message": "Emergency mode deactivated" })).into_response()
}

async fn emergency_status(State(state): State<Shared>, headers: HeaderMap) -> Response {
    state.record("GET /ambulance/emergency/status", None);
    if let Err(rejection) = check_bearer(&headers) {
        return rejection;
    }
    let route = state.ambulance_route.lock().unwrap().clone();
    match route {
        None => Json(json!({ "emergency_active": false })).into_response(),
        Some(body) => {
            let stops: Vec<Value> = body["route_data"]["junctions"]
                .as_array()
                .cloned()
                .unwrap_or_default()
                .into_iter()
                .map(|j| {
                    json!({
                        "junction_name": j["junction_name"],
                        "lane_number": j["lane_to_clear"],
                        "is_cleared": false
                    })
                })
                .collect();
            Json(json!({
                "emergency_active": true,
                "request_id": 42,
                "current_location": body["current_location"],
                "destination_location": body["destination_location"],
                "current_junction_index": 0,
                "total_junctions": stops.len(),
                "start_time": "2026-10-15 09:41:07",
                "junctions": stops
            }))
            .into_response()
        }
    }
}
