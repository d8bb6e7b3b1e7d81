use serde::{Deserialize, Serialize};

/// Outcome of `POST /analyze` for one uploaded junction video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AnalysisResult {
    /// Whether an emergency vehicle was seen at all.
    #[serde(default)]
    pub emergency: bool,
    #[serde(default)]
    pub vehicle_type: String,
    #[serde(default)]
    pub ambulance_number: String,
    #[serde(default)]
    pub junction: String,
    /// Lane given priority, when the detection matched a scheduled emergency.
    #[serde(default)]
    pub lane_to_clear: Option<u32>,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub signal: String,
    /// Backend-relative path of the annotated video.
    #[serde(default)]
    pub output_video: Option<String>,
    #[serde(default)]
    pub is_scheduled: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl AnalysisResult {
    /// Confidence as a percentage with one decimal, e.g. `87.0%`.
    pub fn confidence_label(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }

    /// Absolute URL of the annotated video on the given backend.
    pub fn output_video_url(&self, base_url: &str) -> Option<String> {
        self.output_video
            .as_deref()
            .map(|path| format!("{}{}", base_url.trim_end_matches('/'), path))
    }
}
