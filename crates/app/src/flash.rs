use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{FlashBanner, FlashKind};
use std::time::Duration;

use crate::sync::sleep;

/// How long a notice stays on screen.
pub const FLASH_TTL: Duration = Duration::from_secs(3);

/// View-local notice that clears itself after [`FLASH_TTL`].
#[derive(Clone, Copy, PartialEq)]
pub struct Flash {
    notice: Signal<Option<(FlashKind, String)>>,
    generation: Signal<u64>,
}

impl Flash {
    pub fn show(&self, kind: FlashKind, message: impl Into<String>) {
        let mut notice = self.notice;
        let mut generation = self.generation;
        notice.set(Some((kind, message.into())));
        *generation.write() += 1;
        let shown = *generation.peek();
        spawn(async move {
            sleep(FLASH_TTL).await;
            // A newer notice restarts the clock.
            if *generation.peek() == shown {
                notice.set(None);
            }
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(FlashKind::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(FlashKind::Info, message);
    }

    /// Log the failure of a user action and show its friendly message.
    pub fn error(&self, action: &'static str, err: &AppError) {
        tracing::error!(action, error = %err, "action failed");
        self.show(FlashKind::Error, err.friendly_message());
    }

    pub fn current(&self) -> Option<(FlashKind, String)> {
        self.notice.read().clone()
    }
}

pub fn use_flash() -> Flash {
    let notice = use_signal(|| None);
    let generation = use_signal(|| 0u64);
    Flash { notice, generation }
}

/// Renders the current notice, if any.
#[component]
pub fn FlashOutlet(flash: Flash) -> Element {
    rsx! {
        if let Some((kind, message)) = flash.current() {
            FlashBanner { kind, message }
        }
    }
}

