use dioxus::prelude::*;

/// Horizontal progress bar; `value` is a fraction in `0.0..=1.0`.
#[component]
pub fn ProgressBar(value: f64, #[props(into, default)] label: String) -> Element {
    let percent = (value.clamp(0.0, 1.0) * 100.0).round();
    rsx! {
        div { class: "progress",
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {percent}%" }
            }
            if !label.is_empty() {
                span { class: "progress-label", "{label}" }
            }
        }
    }
}
