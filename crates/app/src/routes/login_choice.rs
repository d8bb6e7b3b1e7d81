use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdShield, LdSiren};
use dioxus_free_icons::Icon;

#[component]
pub fn LoginChoice() -> Element {
    rsx! {
        div { class: "choice-page",
            h1 { "Smart Traffic Management System" }
            div { class: "choice-buttons",
                Link { to: Route::Login {}, class: "choice-btn admin-btn",
                    Icon::<LdShield> { icon: LdShield, width: 32, height: 32 }
                    h3 { "Admin Login" }
                    p { "Traffic Control Center" }
                }
                Link { to: Route::AmbulanceLogin {}, class: "choice-btn ambulance-btn",
                    Icon::<LdSiren> { icon: LdSiren, width: 32, height: 32 }
                    h3 { "Ambulance Login" }
                    p { "Emergency Vehicle Access" }
                }
            }
        }
    }
}
