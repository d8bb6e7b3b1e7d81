use crate::routes::control_center::DEFAULT_JUNCTION;
use dioxus::prelude::*;
use shared_types::{lane_key, lane_label, Junction, JunctionStatusMap};
use shared_ui::{Card, CardContent, CardHeader, CardTitle, ModeBadge};

/// Lanes offered when the selected junction is not in the junction list yet.
const FALLBACK_LANES: u32 = 4;

/// Junctions listed in the quick-reset card before collapsing.
const JUNCTION_CONTROL_LIMIT: usize = 3;

/// Lane keys the operator can force on `junction`.
pub fn lane_choices(junctions: &[Junction], junction: &str) -> Vec<String> {
    let lanes = junctions
        .iter()
        .find(|j| j.name == junction)
        .map(|j| j.lanes)
        .filter(|&lanes| lanes > 0)
        .unwrap_or(FALLBACK_LANES);
    (1..=lanes).map(lane_key).collect()
}

#[component]
pub fn ManualControlTab(
    junctions: Vec<Junction>,
    statuses: JunctionStatusMap,
    priority_enabled: bool,
    busy: bool,
    on_force: EventHandler<(String, String)>,
    on_reset_all: EventHandler<()>,
    on_toggle_priority: EventHandler<()>,
    on_reset_junction: EventHandler<String>,
    on_refresh: EventHandler<()>,
) -> Element {
    let mut junction = use_signal(|| DEFAULT_JUNCTION.to_string());
    let mut lane = use_signal(|| lane_key(1));

    let selected_junction = junction();
    let selected_lane = lane();
    let lanes = lane_choices(&junctions, &selected_junction);
    let toggle_label = if priority_enabled { "Disable Priority" } else { "Enable Priority" };
    let hidden = statuses.len().saturating_sub(JUNCTION_CONTROL_LIMIT);
    let shown: Vec<_> = statuses.into_iter().take(JUNCTION_CONTROL_LIMIT).collect();

    rsx! {
        div { class: "tab-panel",
            div { class: "panel-header",
                h2 { class: "panel-title", "Manual Signal Control" }
            }

            div { class: "control-grid",
                Card { class: "control-card",
                    CardHeader { CardTitle { "Force Emergency" } }
                    CardContent {
                        div { class: "auth-field",
                            label { r#for: "force_junction", "Junction" }
                            select {
                                id: "force_junction",
                                value: selected_junction.clone(),
                                onchange: move |e: FormEvent| {
                                    junction.set(e.value());
                                    lane.set(lane_key(1));
                                },
                                for j in junctions.iter() {
                                    option { key: "{j.id}", value: j.name.clone(), "{j.name}" }
                                }
                            }
                        }
                        div { class: "lane-buttons",
                            for key in lanes {
                                {
                                    let label = lane_label(&key);
                                    let lane_class = if key == selected_lane { "lane-btn active" } else { "lane-btn" };
                                    let choice = key.clone();
                                    rsx! {
                                        button {
                                            key: "{key}",
                                            class: lane_class,
                                            onclick: move |_| lane.set(choice.clone()),
                                            "{label}"
                                        }
                                    }
                                }
                            }
                        }
                        button {
                            class: "button destructive force-btn",
                            disabled: busy,
                            onclick: move |_| on_force.call((junction(), lane())),
                            if busy { "Forcing..." } else { "Force Emergency Mode" }
                        }
                    }
                }

                Card { class: "control-card",
                    CardHeader { CardTitle { "Quick Actions" } }
                    CardContent {
                        div { class: "quick-actions",
                            button {
                                class: "button secondary",
                                onclick: move |_| on_reset_all.call(()),
                                "Reset All Signals"
                            }
                            button {
                                class: "button secondary",
                                onclick: move |_| on_toggle_priority.call(()),
                                "{toggle_label}"
                            }
                            button {
                                class: "button secondary",
                                onclick: move |_| on_refresh.call(()),
                                "Refresh Status"
                            }
                        }
                    }
                }

                Card { class: "control-card",
                    CardHeader { CardTitle { "Junction Control" } }
                    CardContent {
                        ul { class: "junctions-control",
                            for (name, status) in shown {
                                {
                                    let target = name.clone();
                                    rsx! {
                                        li { key: "{name}", class: "junction-control-item",
                                            span { class: "junction-name", "{name}" }
                                            ModeBadge { mode: status.mode }
                                            button {
                                                class: "button secondary",
                                                onclick: move |_| on_reset_junction.call(target.clone()),
                                                "Reset"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        if hidden > 0 {
                            p { class: "more-junctions", "+{hidden} more junctions..." }
                        }
                    }
                }
            }
        }
    }
}
