use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCircleAlert, LdCircleCheck, LdInfo};
use dioxus_free_icons::Icon;

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
    Info,
}

impl FlashKind {
    pub fn class(&self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
            FlashKind::Info => "info",
        }
    }
}

/// A notice shown above a form or panel.
#[component]
pub fn FlashBanner(kind: FlashKind, #[props(into)] message: String) -> Element {
    let kind_class = kind.class();
    let icon = match kind {
        FlashKind::Success => rsx! { Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 18, height: 18 } },
        FlashKind::Error => rsx! { Icon::<LdCircleAlert> { icon: LdCircleAlert, width: 18, height: 18 } },
        FlashKind::Info => rsx! { Icon::<LdInfo> { icon: LdInfo, width: 18, height: 18 } },
    };
    rsx! {
        div { class: "flash flash-{kind_class}", role: "alert",
            span { class: "flash-icon", {icon} }
            span { class: "flash-message", "{message}" }
        }
    }
}
