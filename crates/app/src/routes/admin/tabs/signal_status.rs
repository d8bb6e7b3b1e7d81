use dioxus::prelude::*;
use shared_types::{lane_label, JunctionStatusMap};
use shared_ui::SignalGrid;

#[component]
pub fn SignalStatusTab(statuses: JunctionStatusMap, on_reset_junction: EventHandler<String>) -> Element {
    let updated = chrono::Local::now().format("%H:%M:%S").to_string();

    rsx! {
        div { class: "tab-panel",
            div { class: "panel-header",
                h2 { class: "panel-title", "Live Signal Status" }
                span { class: "last-update", "Last updated: {updated}" }
            }

            if statuses.is_empty() {
                p { class: "empty-state", "Waiting for signal data..." }
            }

            div { class: "signals-grid",
                for (name, status) in statuses {
                    {
                        let prioritized = status.emergency_lane.as_deref().map(lane_label);
                        let target = name.clone();
                        rsx! {
                            div { key: "{name}", class: "signal-card",
                                SignalGrid { junction: name.clone(), status }
                                div { class: "signal-footer",
                                    if let Some(lane) = prioritized {
                                        span { class: "emergency-alert", "{lane} prioritized" }
                                    }
                                    button {
                                        class: "button secondary signal-reset-btn",
                                        onclick: move |_| on_reset_junction.call(target.clone()),
                                        "Reset Junction"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{JunctionMode, JunctionStatus, SignalColor};
    use std::collections::BTreeMap;

    #[test]
    fn prioritized_lane_is_called_out() {
        let mut dom = VirtualDom::new(|| {
            let mut signals = BTreeMap::new();
            signals.insert("LANE_1".to_string(), SignalColor::Red);
            signals.insert("LANE_2".to_string(), SignalColor::Green);
            let mut statuses = JunctionStatusMap::new();
            statuses.insert(
                "Park Street Crossing".to_string(),
                JunctionStatus {
                    mode: JunctionMode::Emergency,
                    signals,
                    emergency_lane: Some("LANE_2".to_string()),
                },
            );
            rsx! { SignalStatusTab { statuses, on_reset_junction: |_| {} } }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Park Street Crossing"));
        assert!(html.contains("LANE 2 prioritized"));
        assert!(html.contains("Reset Junction"));
    }
}
