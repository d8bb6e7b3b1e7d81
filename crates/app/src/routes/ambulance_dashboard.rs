use crate::auth::use_session;
use crate::flash::{use_flash, FlashOutlet};
use crate::route_draft::random_route;
use crate::sync::{use_polled, use_poller};
use backend::config::config;
use backend::BackendClient;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCircleCheck, LdClock, LdLogOut, LdSiren};
use dioxus_free_icons::Icon;
use shared_types::{EmergencyRouteDraft, RouteJunction, RouteProgress};
use shared_ui::{Card, CardContent, CardHeader, CardTitle, ConfirmBar, ProgressBar};

const INCOMPLETE_DRAFT: &str = "Please fill all fields and generate route";
const STOP_PROMPT: &str = "Are you sure you want to stop emergency mode?";

/// Emergency setup and live route progress for the signed-in ambulance.
#[component]
pub fn AmbulanceDashboard() -> Element {
    let session = use_session();
    let base: BackendClient = use_context();
    let client = session.ambulance_client(&base);
    let poller = use_poller(config().polling.ambulance_interval());
    let flash = use_flash();

    let mut draft = use_signal(EmergencyRouteDraft::default);
    let mut loading = use_signal(|| false);
    let mut confirm_stop = use_signal(|| false);

    let c = client.clone();
    let junctions = use_polled(&poller, "ambulance_junctions", move || {
        let c = c.clone();
        async move { c.ambulance_junctions().await }
    });
    let c = client.clone();
    let status = use_polled(&poller, "emergency_status", move || {
        let c = c.clone();
        async move { c.emergency_status().await }
    });

    let handle_generate = move |_: MouseEvent| {
        let available = junctions.read().snapshot();
        match random_route(&available, &mut rand::thread_rng()) {
            Ok(route) => {
                tracing::info!(stops = route.len(), "route generated");
                draft.write().junctions = route;
            }
            Err(e) => flash.error("generate route", &e),
        }
    };

    let start_client = client.clone();
    let start_poller = poller.clone();
    let handle_start = move |_: MouseEvent| {
        let client = start_client.clone();
        let poller = start_poller.clone();
        async move {
            let current = draft.read().clone();
            if !current.is_ready() {
                flash.info(INCOMPLETE_DRAFT);
                return;
            }
            loading.set(true);
            match client.start_emergency(&current.into_request()).await {
                Ok(ack) => {
                    tracing::info!(request_id = ?ack.request_id, "emergency started");
                    flash.success(
                        "Emergency mode activated! Traffic signals will be prioritized along your route.",
                    );
                    poller.refresh();
                }
                Err(e) => flash.error("start emergency", &e),
            }
            loading.set(false);
        }
    };

    let stop_client = client.clone();
    let stop_poller = poller.clone();
    let handle_stop = move |_: MouseEvent| {
        let client = stop_client.clone();
        let poller = stop_poller.clone();
        spawn(async move {
            loading.set(true);
            match client.stop_emergency().await {
                Ok(_) => {
                    tracing::info!("emergency stopped");
                    draft.set(EmergencyRouteDraft::default());
                    flash.success("Emergency mode deactivated");
                    poller.refresh();
                }
                Err(e) => flash.error("stop emergency", &e),
            }
            loading.set(false);
            confirm_stop.set(false);
        });
    };

    let logout_session = session.clone();
    let handle_logout = move |_: MouseEvent| {
        if let Some(target) = logout_session.logout() {
            navigator().replace(target);
        }
    };

    let profile = session.profile().unwrap_or_default();
    let current_status = status.read().snapshot();
    let active = current_status.emergency_active;
    let current_draft = draft.read().clone();
    let junction_count = junctions.read().snapshot().len();
    let from = current_status.current_location.clone().unwrap_or_default();
    let to = current_status.destination_location.clone().unwrap_or_default();
    let cleared = current_status.current_junction_index;
    let total = current_status.total_junctions;
    let progress_text = format!("{cleared} of {total} junctions cleared");
    let stops = current_status.junctions.clone();

    rsx! {
        div { class: "ambulance-dashboard",
            header { class: "dashboard-header",
                h1 { class: "dashboard-title", "Emergency Vehicle Control Panel" }
                div { class: "ambulance-info",
                    span { class: "info-chip",
                        small { "AMBULANCE" }
                        strong { "{profile.ambulance_number}" }
                    }
                    span { class: "info-chip",
                        small { "DRIVER" }
                        strong { "{profile.driver_name}" }
                    }
                    button { class: "logout-btn button secondary", onclick: handle_logout,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        " Logout"
                    }
                }
            }

            FlashOutlet { flash }

            if active {
                Card { class: "emergency-active-card",
                    CardHeader {
                        CardTitle {
                            Icon::<LdSiren> { icon: LdSiren, width: 20, height: 20 }
                            " EMERGENCY MODE ACTIVE"
                        }
                        button {
                            class: "button destructive stop-emergency-btn",
                            disabled: loading(),
                            onclick: move |_| confirm_stop.set(true),
                            if loading() { "Stopping..." } else { "Stop Emergency" }
                        }
                    }
                    CardContent {
                        if confirm_stop() {
                            ConfirmBar {
                                prompt: STOP_PROMPT,
                                busy: loading(),
                                confirm_label: "Stop",
                                on_confirm: handle_stop,
                                on_cancel: move |_| confirm_stop.set(false),
                            }
                        }
                        dl { class: "emergency-details",
                            dt { "Current Location" }
                            dd { "{from}" }
                            dt { "Destination" }
                            dd { "{to}" }
                        }
                        ProgressBar { value: progress_ratio(cleared, total), label: progress_text }
                        RouteProgressList { stops }
                    }
                }
            } else {
                Card { class: "emergency-setup-card",
                    CardHeader { CardTitle { "Activate Emergency Response" } }
                    CardContent {
                        div { class: "auth-field",
                            label { r#for: "current_location", "Current Location" }
                            input {
                                id: "current_location",
                                r#type: "text",
                                placeholder: "Enter your current location (e.g., City Hospital)",
                                value: current_draft.current_location.clone(),
                                oninput: move |e: FormEvent| draft.write().current_location = e.value(),
                            }
                        }
                        div { class: "auth-field",
                            label { r#for: "destination", "Destination" }
                            input {
                                id: "destination",
                                r#type: "text",
                                placeholder: "Enter destination (e.g., Accident Site - Highway Exit 5)",
                                value: current_draft.destination_location.clone(),
                                oninput: move |e: FormEvent| draft.write().destination_location = e.value(),
                            }
                        }

                        div { class: "junctions-section",
                            div { class: "section-header",
                                h3 { "Generated Emergency Route" }
                                button {
                                    r#type: "button",
                                    class: "button secondary auto-route-btn",
                                    disabled: junction_count == 0,
                                    onclick: handle_generate,
                                    "Generate Route"
                                }
                            }
                            DraftRoute { stops: current_draft.junctions.clone() }
                        }

                        button {
                            class: "button destructive activate-btn",
                            disabled: loading() || current_draft.junctions.is_empty(),
                            onclick: handle_start,
                            Icon::<LdSiren> { icon: LdSiren, width: 18, height: 18 }
                            if loading() { " Activating Emergency..." } else { " ACTIVATE EMERGENCY MODE" }
                        }
                        p { class: "note",
                            "This notifies traffic control and prioritizes signals along your route. "
                            "Use only in genuine emergencies."
                        }
                    }
                }
            }
        }
    }
}

fn progress_ratio(done: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    done as f64 / total as f64
}

#[component]
fn DraftRoute(stops: Vec<RouteJunction>) -> Element {
    rsx! {
        if stops.is_empty() {
            div { class: "route-placeholder",
                p { "Click \"Generate Route\" to build an emergency route" }
            }
        } else {
            ol { class: "junction-list",
                for stop in stops {
                    li { key: "{stop.junction_id}", class: "junction-item",
                        h4 { "Junction {stop.order}: {stop.junction_name}" }
                        span { class: "lane-badge", "LANE {stop.lane_to_clear}" }
                    }
                }
            }
        }
    }
}

#[component]
fn RouteProgressList(stops: Vec<RouteProgress>) -> Element {
    rsx! {
        div { class: "junctions-progress",
            h3 { "Route Progress" }
            for (idx, stop) in stops.into_iter().enumerate() {
                {
                    let state = if stop.is_cleared { "cleared" } else { "pending" };
                    rsx! {
                        div { key: "{idx}", class: "junction-status {state}",
                            span { "{stop.junction_name} - Lane {stop.lane_number}" }
                            if stop.is_cleared {
                                span { class: "stop-state",
                                    Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 14, height: 14 }
                                    " Cleared"
                                }
                            } else {
                                span { class: "stop-state",
                                    Icon::<LdClock> { icon: LdClock, width: 14, height: 14 }
                                    " Pending"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
