use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, CardTitle};

pub const DEFAULT_PRIORITY_SECS: u32 = 15;
pub const MIN_PRIORITY_SECS: u32 = 5;
pub const MAX_PRIORITY_SECS: u32 = 60;

/// Slider value to seconds, kept inside the allowed range.
pub fn parse_priority_secs(raw: &str) -> Option<u32> {
    let secs: u32 = raw.trim().parse().ok()?;
    Some(secs.clamp(MIN_PRIORITY_SECS, MAX_PRIORITY_SECS))
}

#[component]
pub fn SettingsTab(
    duration: u32,
    priority_enabled: bool,
    junction_count: usize,
    emergency_count: usize,
    on_duration_change: EventHandler<u32>,
    on_save_duration: EventHandler<()>,
    on_toggle_priority: EventHandler<()>,
) -> Element {
    let toggle_class = if priority_enabled { "on" } else { "off" };
    let toggle_label = if priority_enabled { "Disable System" } else { "Enable System" };
    let mode = if priority_enabled { "Enabled" } else { "Disabled" };

    rsx! {
        div { class: "tab-panel",
            div { class: "panel-header",
                h2 { class: "panel-title", "System Configuration" }
            }

            div { class: "settings-grid",
                Card { class: "settings-card",
                    CardHeader { CardTitle { "Priority Duration" } }
                    CardContent {
                        div { class: "duration-control",
                            input {
                                r#type: "range",
                                class: "duration-slider",
                                min: "{MIN_PRIORITY_SECS}",
                                max: "{MAX_PRIORITY_SECS}",
                                value: "{duration}",
                                oninput: move |e: FormEvent| {
                                    if let Some(secs) = parse_priority_secs(&e.value()) {
                                        on_duration_change.call(secs);
                                    }
                                },
                            }
                            div { class: "duration-value",
                                span { class: "value", "{duration}" }
                                span { class: "unit", " seconds" }
                            }
                        }
                        p { class: "settings-description",
                            "Duration for emergency signal priority when an ambulance is detected"
                        }
                        button {
                            class: "button save-btn",
                            onclick: move |_| on_save_duration.call(()),
                            "Save Duration"
                        }
                    }
                }

                Card { class: "settings-card",
                    CardHeader { CardTitle { "System Mode" } }
                    CardContent {
                        div { class: "mode-toggle",
                            span { class: "toggle-label", "Emergency Priority System" }
                            div { class: "toggle-switch {toggle_class}",
                                div { class: "toggle-slider" }
                            }
                        }
                        button {
                            class: "button toggle-btn",
                            onclick: move |_| on_toggle_priority.call(()),
                            "{toggle_label}"
                        }
                        p { class: "settings-description",
                            "When enabled, signals along an ambulance route are prioritized automatically"
                        }
                    }
                }

                Card { class: "settings-card",
                    CardHeader { CardTitle { "System Information" } }
                    CardContent {
                        dl { class: "info-grid",
                            dt { "Total Junctions" }
                            dd { "{junction_count}" }
                            dt { "Active Emergencies" }
                            dd { "{emergency_count}" }
                            dt { "Priority Duration" }
                            dd { "{duration}s" }
                            dt { "Priority System" }
                            dd { "{mode}" }
                        }
                    }
                }
            }
        }
    }
}
