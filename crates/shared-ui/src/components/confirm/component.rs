use dioxus::prelude::*;

/// Inline confirmation for a destructive action.
#[component]
pub fn ConfirmBar(
    #[props(into)] prompt: String,
    #[props(default)] busy: bool,
    #[props(into, default = "Confirm".to_string())] confirm_label: String,
    on_confirm: EventHandler<MouseEvent>,
    on_cancel: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div { class: "confirm-bar", role: "alertdialog",
            span { class: "confirm-prompt", "{prompt}" }
            div { class: "confirm-actions",
                button {
                    class: "button secondary",
                    disabled: busy,
                    onclick: move |e| on_cancel.call(e),
                    "Cancel"
                }
                button {
                    class: "button destructive",
                    disabled: busy,
                    onclick: move |e| on_confirm.call(e),
                    if busy { "Working..." } else { "{confirm_label}" }
                }
            }
        }
    }
}
