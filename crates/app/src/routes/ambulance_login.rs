use crate::auth::use_session;
use crate::routes::Route;
use crate::session::Role;
use backend::BackendClient;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSiren;
use dioxus_free_icons::Icon;
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};

/// Ambulance driver login against the backend.
#[component]
pub fn AmbulanceLogin() -> Element {
    let session = use_session();
    let client: BackendClient = use_context();
    let mut ambulance_number = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if session.role() == Role::Ambulance {
        navigator().replace(Route::AmbulanceDashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        let client = client.clone();
        let session = session.clone();
        async move {
            evt.prevent_default();
            let number = ambulance_number.read().trim().to_uppercase();
            let secret = password.read().clone();
            if number.is_empty() || secret.is_empty() {
                error_msg.set(Some("Please enter ambulance number and password".to_string()));
                return;
            }

            loading.set(true);
            error_msg.set(None);
            let result = client.ambulance_login(&number, &secret).await;
            loading.set(false);

            match result.and_then(|auth| session.sign_in_ambulance(&auth)) {
                Ok(()) => {
                    navigator().replace(Route::AmbulanceDashboard {});
                }
                Err(e) => {
                    tracing::warn!(ambulance_number = %number, error = %e, "ambulance login failed");
                    error_msg.set(Some(e.friendly_message()));
                }
            }
        }
    };

    rsx! {
        div { class: "auth-page",
            Card {
                class: "auth-card ambulance",

                CardHeader {
                    div { class: "auth-icon",
                        Icon::<LdSiren> { icon: LdSiren, width: 32, height: 32 }
                    }
                    CardTitle { "Ambulance Login" }
                    CardDescription { "Sign in to declare an emergency route" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            label { r#for: "ambulance_number", "Ambulance Number" }
                            input {
                                id: "ambulance_number",
                                r#type: "text",
                                placeholder: "AMB001",
                                value: ambulance_number(),
                                oninput: move |e: FormEvent| ambulance_number.set(e.value()),
                            }
                        }

                        div { class: "auth-field",
                            label { r#for: "password", "Password" }
                            input {
                                id: "password",
                                r#type: "password",
                                placeholder: "Password",
                                autocomplete: "current-password",
                                value: password(),
                                oninput: move |e: FormEvent| password.set(e.value()),
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-footer-text",
                        "New ambulance? "
                        Link { to: Route::AmbulanceRegister {}, class: "auth-link", "Register here" }
                    }
                    p { class: "auth-footer-text",
                        Link { to: Route::Login {}, class: "auth-link", "Admin login" }
                    }
                }
            }
        }
    }
}
