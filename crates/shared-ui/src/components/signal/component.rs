use dioxus::prelude::*;
use shared_types::{lane_label, JunctionStatus, SignalColor};

use crate::ModeBadge;

/// A single lane's traffic light.
#[component]
pub fn SignalLamp(
    #[props(into)] lane: String,
    color: SignalColor,
    /// Highlight the lane currently cleared for an ambulance.
    #[props(default)]
    priority: bool,
) -> Element {
    let label = lane_label(&lane);
    let priority_class = if priority { "priority" } else { "" };
    let color_class = color.css_class();
    rsx! {
        div { class: "signal-lamp {priority_class}",
            div { class: "signal-light {color_class}" }
            span { class: "signal-lane", "{label}" }
            span { class: "signal-state", "{color}" }
        }
    }
}

/// Every lane of one junction plus its mode.
#[component]
pub fn SignalGrid(#[props(into)] junction: String, status: JunctionStatus) -> Element {
    let emergency_lane = status.emergency_lane.clone();
    let priority_note = emergency_lane.as_deref().map(lane_label);
    rsx! {
        div { class: "signal-grid",
            div { class: "signal-grid-header",
                h4 { class: "signal-grid-title", "{junction}" }
                ModeBadge { mode: status.mode }
            }
            div { class: "signal-grid-lanes",
                for (lane, color) in status.signals.iter() {
                    SignalLamp {
                        key: "{lane}",
                        lane: lane.clone(),
                        color: *color,
                        priority: emergency_lane.as_deref() == Some(lane.as_str()),
                    }
                }
            }
            if let Some(note) = priority_note {
                p { class: "signal-grid-note", "Priority: {note}" }
            }
        }
    }
}
