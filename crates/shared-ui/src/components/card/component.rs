use dioxus::prelude::*;

/// A panel container. Extra classes are appended to `card`.
#[component]
pub fn Card(#[props(into, default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card {class}", {children} }
    }
}

/// Header section of a Card.
#[component]
pub fn CardHeader(#[props(into, default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card-header {class}", {children} }
    }
}

/// Title element within a CardHeader.
#[component]
pub fn CardTitle(#[props(into, default)] class: String, children: Element) -> Element {
    rsx! {
        h3 { class: "card-title {class}", {children} }
    }
}

/// Description text within a CardHeader.
#[component]
pub fn CardDescription(#[props(into, default)] class: String, children: Element) -> Element {
    rsx! {
        p { class: "card-description {class}", {children} }
    }
}

/// Main content section of a Card.
#[component]
pub fn CardContent(#[props(into, default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card-content {class}", {children} }
    }
}

/// Footer section of a Card.
#[component]
pub fn CardFooter(#[props(into, default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card-footer {class}", {children} }
    }
}
