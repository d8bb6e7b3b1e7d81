use crate::flash::{use_flash, FlashOutlet};
use crate::sync::{use_polled, use_poller, Slot};
use backend::config::config;
use backend::BackendClient;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdRadio, LdSearch, LdSiren, LdUpload, LdX};
use dioxus_free_icons::Icon;
use shared_types::{AnalysisResult, AppError, JunctionEmergencySummary, ScheduledEmergency};
use shared_ui::{Card, CardContent, CardHeader, CardTitle, FlashKind, SignalGrid, StatCard};

/// Junction shown before the operator picks one.
pub(crate) const DEFAULT_JUNCTION: &str = "Main Square Junction";

/// Ambulance numbers listed per junction before collapsing into "+n more".
const AMBULANCE_TAG_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
struct SelectedVideo {
    name: String,
    bytes: Vec<u8>,
}

/// Live view of every junction plus video analysis for the selected one.
#[component]
pub fn ControlCenter() -> Element {
    let client: BackendClient = use_context();
    let poller = use_poller(config().polling.dashboard_interval());
    let flash = use_flash();

    let mut selected = use_signal(|| DEFAULT_JUNCTION.to_string());
    let mut video = use_signal(|| Option::<SelectedVideo>::None);
    let mut analyzing = use_signal(|| false);
    let mut analysis = use_signal(|| Option::<AnalysisResult>::None);

    let c = client.clone();
    let junctions = use_polled(&poller, "junctions", move || {
        let c = c.clone();
        async move { c.junctions().await }
    });
    let c = client.clone();
    let statuses = use_polled(&poller, "junction_status", move || {
        let c = c.clone();
        async move { c.all_junctions_status().await }
    });
    let c = client.clone();
    let by_junction = use_polled(&poller, "emergencies_by_junction", move || {
        let c = c.clone();
        async move { c.emergencies_by_junction().await }
    });
    let c = client.clone();
    let scheduled = use_polled(&poller, "scheduled_emergency", move || {
        let c = c.clone();
        let junction = selected();
        async move { Ok::<_, AppError>(c.junction_emergencies(&junction).await?.scheduled()) }
    });

    let handle_file = move |evt: FormEvent| async move {
        let files = evt.files();
        if let Some(f) = files.first() {
            let name = f.name();
            match f.read_bytes().await {
                Ok(bytes) => video.set(Some(SelectedVideo {
                    name,
                    bytes: bytes.to_vec(),
                })),
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "could not read video");
                    flash.show(FlashKind::Error, "Failed to read file.");
                }
            }
        }
    };

    let analyze_client = client.clone();
    let analyze_poller = poller.clone();
    let handle_analyze = move |_: MouseEvent| {
        let client = analyze_client.clone();
        let poller = analyze_poller.clone();
        async move {
            let Some(file) = video.read().clone() else {
                flash.info("Please select a video first");
                return;
            };
            let junction = selected.read().clone();
            analyzing.set(true);
            analysis.set(None);
            match client.analyze_video(&file.name, file.bytes, &junction).await {
                Ok(result) => {
                    tracing::info!(junction = %junction, emergency = result.emergency, "video analysed");
                    analysis.set(Some(result));
                    poller.refresh();
                }
                Err(e) => flash.error("analyze video", &e),
            }
            analyzing.set(false);
        }
    };

    let junction_list = junctions.read().snapshot();
    let status_map = statuses.read().snapshot();
    let emergencies_now = by_junction.read().snapshot();
    let summaries = emergencies_now.junctions_with_emergencies.clone();
    let selected_name = selected();
    let scheduled_now = scheduled_for(&scheduled.read(), &selected_name);
    let statuses_loaded = statuses.read().is_loaded();

    let selected_location = junction_list
        .iter()
        .find(|j| j.name == selected_name)
        .map(|j| j.location.clone())
        .unwrap_or_default();
    let selected_status = status_map.get(&selected_name).cloned();
    let emergency_count = summaries.len();
    let emergency_label = if emergency_count == 1 { "Active Emergency" } else { "Active Emergencies" };
    let online_count = status_map.len();
    let file_label = video.read().as_ref().map(|v| {
        format!("{} ({:.2} MB)", v.name, v.bytes.len() as f64 / (1024.0 * 1024.0))
    });
    let base_url = client.base_url().to_string();

    rsx! {
        div { class: "control-center",
            header { class: "dashboard-header",
                h1 { class: "dashboard-title", "Smart Traffic Control Center" }
                p { class: "dashboard-subtitle", "Real-time multi-junction traffic management" }
            }

            FlashOutlet { flash }

            div { class: "stat-row",
                StatCard { label: "Junctions Online", value: online_count.to_string() }
                StatCard { label: emergency_label, value: emergency_count.to_string(), alert: emergency_count > 0 }
            }

            div { class: "main-content-split",
                section { class: "control-section",
                    Card {
                        CardHeader { CardTitle { "Select Junction" } }
                        CardContent {
                            select {
                                class: "junction-dropdown",
                                value: selected_name.clone(),
                                onchange: move |e: FormEvent| selected.set(e.value()),
                                for junction in junction_list.iter() {
                                    option {
                                        key: "{junction.id}",
                                        value: junction.name.clone(),
                                        "{junction.name} • {junction.location}"
                                    }
                                }
                            }
                            if !selected_location.is_empty() {
                                p { class: "junction-location", "{selected_location}" }
                            }
                        }
                    }

                    Card {
                        CardHeader { CardTitle { "Video Analysis" } }
                        CardContent {
                            label { class: "video-upload-area",
                                Icon::<LdUpload> { icon: LdUpload, width: 24, height: 24 }
                                span { class: "upload-text", "Choose CCTV footage (MP4, AVI, MOV)" }
                                input {
                                    r#type: "file",
                                    accept: "video/*",
                                    class: "file-input",
                                    disabled: analyzing(),
                                    onchange: handle_file,
                                }
                            }
                            if let Some(label) = file_label {
                                div { class: "file-selected",
                                    span { class: "file-name", "{label}" }
                                    button {
                                        class: "remove-file",
                                        aria_label: "Remove video",
                                        onclick: move |_| video.set(None),
                                        Icon::<LdX> { icon: LdX, width: 14, height: 14 }
                                    }
                                }
                            }
                            button {
                                class: "analyze-button button",
                                disabled: analyzing() || video.read().is_none(),
                                onclick: handle_analyze,
                                Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                                if analyzing() {
                                    span { class: "spinner" }
                                    "Processing {selected_name}..."
                                } else {
                                    "Analyze Junction Video"
                                }
                            }
                        }
                    }

                    if let Some(emergency) = scheduled_now {
                        ScheduledCard { emergency }
                    }

                    if !summaries.is_empty() {
                        EmergencyList {
                            summaries,
                            selected: selected_name.clone(),
                            on_select: move |name: String| selected.set(name),
                        }
                    }
                }

                section { class: "monitoring-section",
                    div { class: "section-header",
                        Icon::<LdRadio> { icon: LdRadio, width: 18, height: 18 }
                        h2 { class: "section-title", "Live Signal Monitoring" }
                    }
                    if let Some(status) = selected_status {
                        div { class: "main-junction-display",
                            SignalGrid { junction: selected_name.clone(), status }
                        }
                    } else {
                        p { class: "empty-state", "Waiting for signal data for {selected_name}..." }
                    }

                    h3 { class: "overview-title", "All Junctions" }
                    if !statuses_loaded {
                        p { class: "empty-state", "Connecting to the signal controller..." }
                    }
                    div { class: "junctions-grid",
                        for (name, status) in status_map.into_iter() {
                            {
                                let has_emergency = emergencies_now.has_emergency_at(&name);
                                let selected_class = if name == selected_name { "selected" } else { "" };
                                rsx! {
                                    div { key: "{name}", class: "junction-card {selected_class}",
                                        SignalGrid { junction: name.clone(), status }
                                        if has_emergency {
                                            div { class: "emergency-alert",
                                                Icon::<LdSiren> { icon: LdSiren, width: 14, height: 14 }
                                                " Emergency Active"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(result) = analysis() {
                AnalysisPanel { result, base_url }
            }
        }
    }
}

/// Last scheduled emergency, but only if it was fetched for `junction`.
/// A failed fetch after a selection change keeps the old value in the slot.
fn scheduled_for(slot: &Slot<Option<ScheduledEmergency>>, junction: &str) -> Option<ScheduledEmergency> {
    slot.value()
        .and_then(Option::as_ref)
        .filter(|e| e.junction == junction)
        .cloned()
}

#[component]
fn ScheduledCard(emergency: ScheduledEmergency) -> Element {
    let ScheduledEmergency {
        ambulance_number,
        lane,
        from,
        to,
        progress,
        ..
    } = emergency;
    let lane = lane.map(|l| l.to_string()).unwrap_or_else(|| "-".to_string());
    rsx! {
        Card { class: "emergency-card",
            CardHeader {
                CardTitle {
                    Icon::<LdSiren> { icon: LdSiren, width: 18, height: 18 }
                    " Scheduled Emergency"
                }
            }
            CardContent {
                dl { class: "emergency-details",
                    dt { "Ambulance" }
                    dd { class: "highlight", "{ambulance_number}" }
                    dt { "Route" }
                    dd { "{from} → {to}" }
                    dt { "Priority Lane" }
                    dd { class: "lane-highlight", "LANE {lane}" }
                    dt { "Progress" }
                    dd { "{progress} junctions cleared" }
                }
                p { class: "action-required", "Upload video from this junction to clear the emergency" }
            }
        }
    }
}

#[component]
fn EmergencyList(
    summaries: Vec<JunctionEmergencySummary>,
    #[props(into)] selected: String,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        Card { class: "emergencies-overview",
            CardHeader { CardTitle { "Active Emergencies" } }
            CardContent {
                ul { class: "emergencies-list",
                    for summary in summaries {
                        {
                            let name = summary.junction_name.clone();
                            let active = if name == selected { "active" } else { "" };
                            let count = summary.active_emergencies;
                            let noun = if count == 1 { "ambulance" } else { "ambulances" };
                            let extra = summary.ambulance_numbers.len().saturating_sub(AMBULANCE_TAG_LIMIT);
                            let tags: Vec<String> = summary
                                .ambulance_numbers
                                .into_iter()
                                .take(AMBULANCE_TAG_LIMIT)
                                .collect();
                            let target = name.clone();
                            rsx! {
                                li {
                                    key: "{name}",
                                    class: "emergency-item {active}",
                                    onclick: move |_| on_select.call(target.clone()),
                                    div { class: "emergency-item-header",
                                        span { class: "emergency-junction", "{name}" }
                                        span { class: "emergency-count", "{count} {noun}" }
                                    }
                                    div { class: "emergency-ambulances",
                                        for tag in tags {
                                            span { key: "{tag}", class: "ambulance-tag", "{tag}" }
                                        }
                                        if extra > 0 {
                                            span { class: "more-tag", "+{extra} more" }
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
}

#[component]
fn AnalysisPanel(result: AnalysisResult, #[props(into)] base_url: String) -> Element {
    let detected = if result.emergency { "Detected" } else { "Not detected" };
    let detected_class = if result.emergency { "detected" } else { "not-detected" };
    let status = if result.is_scheduled { "Scheduled" } else { "Random" };
    let title = if result.is_scheduled {
        "Scheduled emergency processed"
    } else {
        "Vehicle detected"
    };
    let confidence = result.confidence_label();
    let video_url = result.output_video_url(&base_url);
    let AnalysisResult {
        emergency,
        vehicle_type,
        ambulance_number,
        junction,
        lane_to_clear,
        message,
        ..
    } = result;

    rsx! {
        section { class: "results-section",
            h2 { class: "section-title", "Analysis Results" }
            div { class: "results-grid",
                div { class: "result-card primary",
                    div { class: "result-label", "Emergency" }
                    div { class: "result-value {detected_class}", "{detected}" }
                }
                if emergency {
                    div { class: "result-card",
                        div { class: "result-label", "Vehicle Type" }
                        div { class: "result-value", "{vehicle_type}" }
                    }
                    div { class: "result-card",
                        div { class: "result-label", "Ambulance" }
                        div { class: "result-value", "{ambulance_number}" }
                    }
                    div { class: "result-card",
                        div { class: "result-label", "Status" }
                        div { class: "result-value", "{status}" }
                    }
                    if let Some(lane) = lane_to_clear {
                        div { class: "result-card",
                            div { class: "result-label", "Priority Lane" }
                            div { class: "result-value lane", "LANE {lane}" }
                        }
                    }
                    div { class: "result-card",
                        div { class: "result-label", "Confidence" }
                        div { class: "result-value", "{confidence}" }
                    }
                }
            }
            if let Some(message) = message {
                div { class: "result-message",
                    h4 { class: "message-title", "{title}" }
                    p { class: "message-text", "{message}" }
                }
            }
            if let Some(url) = video_url {
                div { class: "video-result",
                    p { class: "video-info", "Junction: {junction}" }
                    video { class: "result-video", src: "{url}", controls: true }
                    a { class: "video-link", href: "{url}", target: "_blank", "Open annotated video" }
                }
            }
        }
    }
}
