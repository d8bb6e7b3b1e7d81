use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdTrafficCone;
use dioxus_free_icons::Icon;

use crate::auth::{home_route, use_session};
use crate::routes::Route;
use crate::session::Role;

/// Catch-all for paths outside the route table. Sends signed-in users back
/// to their own home and everyone else to the login choice.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let session = use_session();
    let missing = format!("/{}", route.join("/"));
    let (target, action) = match session.role() {
        Role::Guest => (Route::LoginChoice {}, "Choose a login"),
        role => (home_route(role), "Back to your dashboard"),
    };

    rsx! {
        div { class: "not-found-page",
            div { class: "not-found-card",
                Icon::<LdTrafficCone> { icon: LdTrafficCone, width: 48, height: 48 }
                div { class: "not-found-code", "404" }
                h2 { "Wrong turn" }
                p { class: "not-found-message",
                    "No junction at "
                    code { "{missing}" }
                }
                Link { to: target, class: "not-found-link", "{action}" }
            }
        }
    }
}
