pub mod tabs;

use crate::flash::{use_flash, FlashOutlet};
use crate::sync::{use_polled, use_poller};
use backend::config::config;
use backend::BackendClient;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSettings;
use dioxus_free_icons::Icon;
use shared_ui::{ConfirmBar, StatCard};

use tabs::emergencies::EmergenciesTab;
use tabs::manual_control::ManualControlTab;
use tabs::settings::{SettingsTab, DEFAULT_PRIORITY_SECS};
use tabs::signal_status::SignalStatusTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Emergencies,
    Control,
    Signals,
    System,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Emergencies,
        AdminTab::Control,
        AdminTab::Signals,
        AdminTab::System,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Emergencies => "Active Emergencies",
            AdminTab::Control => "Manual Control",
            AdminTab::Signals => "Signal Status",
            AdminTab::System => "System Settings",
        }
    }
}

/// A destructive action waiting for the operator to confirm it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    ClearEmergency(i64),
    ResetAll,
}

impl PendingAction {
    pub fn prompt(&self) -> &'static str {
        match self {
            PendingAction::ClearEmergency(_) => "Are you sure you want to clear this emergency?",
            PendingAction::ResetAll => "Reset all traffic signals to normal mode?",
        }
    }
}

/// Operator console: emergencies, manual overrides, signal state and settings.
#[component]
pub fn AdminPanel() -> Element {
    let client: BackendClient = use_context();
    let poller = use_poller(config().polling.admin_interval());
    let flash = use_flash();

    let mut active_tab = use_signal(AdminTab::default);
    let mut pending = use_signal(|| Option::<PendingAction>::None);
    let mut busy = use_signal(|| false);
    let mut priority_enabled = use_signal(|| true);
    let mut duration = use_signal(|| DEFAULT_PRIORITY_SECS);

    let c = client.clone();
    let emergencies = use_polled(&poller, "active_emergencies", move || {
        let c = c.clone();
        async move { c.active_emergencies().await }
    });
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

    let confirm_client = client.clone();
    let confirm_poller = poller.clone();
    let handle_confirm = move |_: MouseEvent| {
        let Some(action) = pending() else {
            return;
        };
        let client = confirm_client.clone();
        let poller = confirm_poller.clone();
        spawn(async move {
            busy.set(true);
            match action {
                PendingAction::ClearEmergency(id) => match client.clear_emergency(id).await {
                    Ok(_) => {
                        tracing::info!(id, "emergency cleared");
                        flash.success("Emergency cleared successfully");
                    }
                    Err(e) => flash.error("clear emergency", &e),
                },
                PendingAction::ResetAll => match client.reset_all().await {
                    Ok(_) => {
                        tracing::info!("all signals reset");
                        flash.success("All signals reset to normal mode");
                    }
                    Err(e) => flash.error("reset all signals", &e),
                },
            }
            busy.set(false);
            pending.set(None);
            poller.refresh();
        });
    };

    let force_client = client.clone();
    let force_poller = poller.clone();
    let handle_force = move |(junction, lane): (String, String)| {
        let client = force_client.clone();
        let poller = force_poller.clone();
        spawn(async move {
            busy.set(true);
            match client.force_emergency(&junction, &lane).await {
                Ok(_) => {
                    tracing::info!(junction = %junction, lane = %lane, "emergency forced");
                    flash.success(format!("Emergency forced on {lane} at {junction}"));
                    poller.refresh();
                }
                Err(e) => flash.error("force emergency", &e),
            }
            busy.set(false);
        });
    };

    let toggle_client = client.clone();
    let handle_toggle = move |_: ()| {
        let client = toggle_client.clone();
        spawn(async move {
            let enable = !priority_enabled();
            match client.toggle_priority(enable).await {
                Ok(_) => {
                    priority_enabled.set(enable);
                    let state = if enable { "enabled" } else { "disabled" };
                    flash.success(format!("System priority {state}"));
                }
                Err(e) => flash.error("toggle priority", &e),
            }
        });
    };

    let reset_client = client.clone();
    let reset_poller = poller.clone();
    let handle_reset_junction = move |junction: String| {
        let client = reset_client.clone();
        let poller = reset_poller.clone();
        spawn(async move {
            match client.reset_junction(&junction).await {
                Ok(_) => {
                    flash.success(format!("{junction} reset to normal mode"));
                    poller.refresh();
                }
                Err(e) => flash.error("reset junction", &e),
            }
        });
    };

    let duration_client = client.clone();
    let handle_save_duration = move |_: ()| {
        let client = duration_client.clone();
        spawn(async move {
            let seconds = duration();
            match client.set_priority_duration(seconds).await {
                Ok(_) => flash.success(format!("Priority duration updated to {seconds} seconds")),
                Err(e) => flash.error("update duration", &e),
            }
        });
    };

    let refresh_poller = poller.clone();

    let emergency_list = emergencies.read().snapshot();
    let junction_list = junctions.read().snapshot();
    let status_map = statuses.read().snapshot();
    let emergency_count = emergency_list.len();
    let junction_count = junction_list.len();
    let priority_label = if priority_enabled() { "ON" } else { "OFF" };
    let current_tab = active_tab();

    rsx! {
        div { class: "admin-container",
            header { class: "admin-header",
                div { class: "admin-title",
                    Icon::<LdSettings> { icon: LdSettings, width: 24, height: 24 }
                    h1 { "Admin Control Panel" }
                }
                div { class: "stat-row",
                    StatCard { label: "Active Emergencies", value: emergency_count.to_string(), alert: emergency_count > 0 }
                    StatCard { label: "Junctions", value: junction_count.to_string() }
                    StatCard { label: "Priority Mode", value: priority_label }
                }
            }

            FlashOutlet { flash }

            if let Some(action) = pending() {
                ConfirmBar {
                    prompt: action.prompt(),
                    busy: busy(),
                    on_confirm: handle_confirm,
                    on_cancel: move |_| pending.set(None),
                }
            }

            nav { class: "admin-tabs", role: "tablist",
                for tab in AdminTab::ALL {
                    {
                        let label = tab.label();
                        let selected = tab == current_tab;
                        let tab_class = if selected { "admin-tab active" } else { "admin-tab" };
                        rsx! {
                            button {
                                key: "{label}",
                                role: "tab",
                                class: tab_class,
                                aria_selected: selected,
                                onclick: move |_| active_tab.set(tab),
                                "{label}"
                            }
                        }
                    }
                }
            }

            div { class: "admin-tab-panel",
                match current_tab {
                    AdminTab::Emergencies => rsx! {
                        EmergenciesTab {
                            emergencies: emergency_list,
                            on_clear: move |id: i64| pending.set(Some(PendingAction::ClearEmergency(id))),
                        }
                    },
                    AdminTab::Control => rsx! {
                        ManualControlTab {
                            junctions: junction_list,
                            statuses: status_map,
                            priority_enabled: priority_enabled(),
                            busy: busy(),
                            on_force: handle_force,
                            on_reset_all: move |_| pending.set(Some(PendingAction::ResetAll)),
                            on_toggle_priority: handle_toggle,
                            on_reset_junction: handle_reset_junction,
                            on_refresh: move |_| refresh_poller.refresh(),
                        }
                    },
                    AdminTab::Signals => rsx! {
                        SignalStatusTab {
                            statuses: status_map,
                            on_reset_junction: handle_reset_junction,
                        }
                    },
                    AdminTab::System => rsx! {
                        SettingsTab {
                            duration: duration(),
                            priority_enabled: priority_enabled(),
                            junction_count,
                            emergency_count,
                            on_duration_change: move |secs: u32| duration.set(secs),
                            on_save_duration: handle_save_duration,
                            on_toggle_priority: handle_toggle,
                        }
                    },
                }
            }
        }
    }
}
