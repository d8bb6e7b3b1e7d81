use dioxus::prelude::*;

mod auth;
mod flash;
mod route_draft;
mod routes;
mod session;
mod sync;

use auth::SessionState;
use backend::BackendClient;
use routes::Route;
use session::SessionStore;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("logger already initialised: {e}");
    }
    backend::config::load_config();
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_hook(|| tracing::info!(platform = client_platform(), "console starting"));

    // Session first: guards and the nav shell read it on their first render.
    use_context_provider(|| SessionState::new(SessionStore::platform()));
    use_context_provider(BackendClient::from_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
