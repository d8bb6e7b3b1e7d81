use dioxus::prelude::*;
use shared_types::JunctionMode;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Success,
    Outline,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Success => "success",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Inline label for statuses and counts.
#[component]
pub fn Badge(#[props(default)] variant: BadgeVariant, children: Element) -> Element {
    rsx! {
        span { class: "badge", "data-style": variant.class(), {children} }
    }
}

/// Badge for a junction's operating mode.
#[component]
pub fn ModeBadge(mode: JunctionMode) -> Element {
    let variant = if mode.is_emergency() {
        BadgeVariant::Destructive
    } else {
        BadgeVariant::Success
    };
    rsx! {
        Badge { variant, "{mode}" }
    }
}
