use dioxus::prelude::*;

/// Large number with a caption, used in dashboard summary rows.
#[component]
pub fn StatCard(
    #[props(into)] label: String,
    #[props(into)] value: String,
    #[props(default)] alert: bool,
) -> Element {
    let alert_class = if alert { "alert" } else { "" };
    rsx! {
        div { class: "stat-card {alert_class}",
            div { class: "stat-value", "{value}" }
            div { class: "stat-label", "{label}" }
        }
    }
}
