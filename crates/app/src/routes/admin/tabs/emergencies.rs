use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCircleCheck;
use dioxus_free_icons::Icon;
use shared_types::EmergencyRecord;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, ProgressBar};

#[component]
pub fn EmergenciesTab(emergencies: Vec<EmergencyRecord>, on_clear: EventHandler<i64>) -> Element {
    let count = emergencies.len();
    let count_variant = if count > 0 { BadgeVariant::Destructive } else { BadgeVariant::Secondary };

    rsx! {
        div { class: "tab-panel",
            div { class: "panel-header",
                h2 { class: "panel-title", "Active Emergencies" }
                Badge { variant: count_variant, "{count} active" }
            }

            if emergencies.is_empty() {
                div { class: "empty-state",
                    Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 32, height: 32 }
                    h3 { "No Active Emergencies" }
                    p { "All traffic signals are operating normally" }
                }
            } else {
                div { class: "emergencies-grid",
                    for emergency in emergencies {
                        {
                            let id = emergency.id;
                            rsx! { EmergencyCard { key: "{id}", emergency, on_clear } }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EmergencyCard(emergency: EmergencyRecord, on_clear: EventHandler<i64>) -> Element {
    let id = emergency.id;
    let next = emergency.next_junction.clone().unwrap_or_else(|| "N/A".to_string());
    let lane = emergency
        .lane_to_clear
        .map(|l| l.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let progress = emergency.progress_ratio();
    let progress_label = format!("{} junctions", emergency.progress_label());
    let started = emergency.started_time_label();

    rsx! {
        Card { class: "emergency-card",
            CardHeader {
                CardTitle { "{emergency.ambulance_number}" }
                Badge { variant: BadgeVariant::Destructive, "ACTIVE" }
            }
            CardContent {
                dl { class: "emergency-details",
                    dt { "From" }
                    dd { "{emergency.current_location}" }
                    dt { "To" }
                    dd { "{emergency.destination_location}" }
                    dt { "Next Junction" }
                    dd { "{next}" }
                    dt { "Lane" }
                    dd { class: "lane-highlight", "LANE {lane}" }
                    dt { "Started" }
                    dd { "{started}" }
                }
                ProgressBar { value: progress, label: progress_label }
                button {
                    class: "button destructive clear-btn",
                    onclick: move |_| on_clear.call(id),
                    "Clear Emergency"
                }
            }
        }
    }
}
