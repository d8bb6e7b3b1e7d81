use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A named intersection with a fixed number of lanes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Junction {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: String,
    /// Number of lanes; lanes are numbered from 1.
    pub lanes: u32,
}

/// Body of `GET /junctions` and `GET /ambulance/junctions`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct JunctionsResponse {
    #[serde(default)]
    pub junctions: Vec<Junction>,
}

/// Signal colour of a single lane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalColor {
    Red,
    Yellow,
    Green,
}

impl SignalColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalColor::Red => "RED",
            SignalColor::Yellow => "YELLOW",
            SignalColor::Green => "GREEN",
        }
    }

    /// CSS modifier used by the signal lamp widgets.
    pub fn css_class(&self) -> &'static str {
        match self {
            SignalColor::Red => "red",
            SignalColor::Yellow => "yellow",
            SignalColor::Green => "green",
        }
    }
}

impl fmt::Display for SignalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operating mode of a junction controller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum JunctionMode {
    #[default]
    Normal,
    Emergency,
}

impl JunctionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            JunctionMode::Normal => "NORMAL",
            JunctionMode::Emergency => "EMERGENCY",
        }
    }

    pub fn is_emergency(&self) -> bool {
        matches!(self, JunctionMode::Emergency)
    }
}

impl fmt::Display for JunctionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live state of one junction as reported by `GET /all-junctions-status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct JunctionStatus {
    #[serde(default)]
    pub mode: JunctionMode,
    /// Lane name (`LANE_1` ...) to colour.
    #[serde(default)]
    pub signals: BTreeMap<String, SignalColor>,
    #[serde(default)]
    pub emergency_lane: Option<String>,
}

impl JunctionStatus {
    /// Lanes currently showing green.
    pub fn green_lanes(&self) -> impl Iterator<Item = &str> {
        self.signals
            .iter()
            .filter(|(_, color)| **color == SignalColor::Green)
            .map(|(lane, _)| lane.as_str())
    }
}

/// Junction name to status, the full body of `GET /all-junctions-status`.
pub type JunctionStatusMap = BTreeMap<String, JunctionStatus>;

/// Extract the lane number from a lane key such as `LANE_3`.
pub fn lane_number(lane: &str) -> Option<u32> {
    lane.rsplit_once('_')?.1.parse().ok()
}

/// Lane key for a lane number, the inverse of [`lane_number`].
pub fn lane_key(number: u32) -> String {
    format!("LANE_{number}")
}

/// Human-readable lane label (`LANE_2` becomes `LANE 2`).
pub fn lane_label(lane: &str) -> String {
    lane.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_all_junctions_status_body() {
        let body = r#"{
            "Main Square Junction": {
                "mode": "EMERGENCY",
                "signals": {"LANE_1": "RED", "LANE_2": "GREEN", "LANE_3": "RED", "LANE_4": "RED"},
                "emergency_lane": "LANE_2"
            },
            "Park Street Crossing": {
                "mode": "NORMAL",
                "signals": {"LANE_1": "YELLOW", "LANE_2": "RED"},
                "emergency_lane": null
            }
        }"#;
        let map: JunctionStatusMap = serde_json::from_str(body).unwrap();
        assert_eq!(map.len(), 2);

        let main = &map["Main Square Junction"];
        assert!(main.mode.is_emergency());
        assert_eq!(main.emergency_lane.as_deref(), Some("LANE_2"));
        assert_eq!(main.green_lanes().collect::<Vec<_>>(), vec!["LANE_2"]);

        let park = &map["Park Street Crossing"];
        assert_eq!(park.mode, JunctionMode::Normal);
        assert_eq!(park.signals["LANE_1"], SignalColor::Yellow);
        assert_eq!(park.emergency_lane, None);
    }

    #[test]
    fn parses_junction_list() {
        let body = r#"{"junctions": [{"id": 1, "name": "Main Square Junction", "lanes": 4, "location": "City Center"}]}"#;
        let parsed: JunctionsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.junctions,
            vec![Junction {
                id: 1,
                name: "Main Square Junction".into(),
                location: "City Center".into(),
                lanes: 4,
            }]
        );
    }

    #[test]
    fn missing_junction_list_is_empty() {
        let parsed: JunctionsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.junctions.is_empty());
    }

    #[test]
    fn lane_helpers() {
        assert_eq!(lane_number("LANE_3"), Some(3));
        assert_eq!(lane_number("LANE_x"), None);
        assert_eq!(lane_number("LANE"), None);
        assert_eq!(lane_key(4), "LANE_4");
        assert_eq!(lane_label("LANE_1"), "LANE 1");
    }
}
