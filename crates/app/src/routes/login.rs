use crate::auth::use_session;
use crate::routes::Route;
use crate::session::Role;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff, LdShield};
use dioxus_free_icons::Icon;
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};

/// Admin login with the demo credentials. Nothing is sent to the backend.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    // Already signed in as admin
    if session.role() == Role::Admin {
        navigator().replace(Route::ControlCenter {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error_msg.set(None);
        match session.sign_in_admin(username.read().trim(), &password.read()) {
            Ok(()) => {
                navigator().replace(Route::ControlCenter {});
            }
            Err(e) => error_msg.set(Some(e.friendly_message())),
        }
    };

    let input_type = if show_password() { "text" } else { "password" };

    rsx! {
        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    div { class: "auth-icon",
                        Icon::<LdShield> { icon: LdShield, width: 32, height: 32 }
                    }
                    CardTitle { "Traffic Control Center" }
                    CardDescription { "Sign in to monitor and control junction signals" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            label { r#for: "username", "Username" }
                            input {
                                id: "username",
                                r#type: "text",
                                placeholder: "admin",
                                autocomplete: "username",
                                value: username(),
                                oninput: move |e: FormEvent| username.set(e.value()),
                            }
                        }

                        div { class: "auth-field",
                            label { r#for: "password", "Password" }
                            div { class: "password-row",
                                input {
                                    id: "password",
                                    r#type: input_type,
                                    placeholder: "Password",
                                    autocomplete: "current-password",
                                    value: password(),
                                    oninput: move |e: FormEvent| password.set(e.value()),
                                }
                                button {
                                    r#type: "button",
                                    class: "password-toggle",
                                    aria_label: if show_password() { "Hide password" } else { "Show password" },
                                    onclick: move |_| show_password.toggle(),
                                    if show_password() {
                                        Icon::<LdEyeOff> { icon: LdEyeOff, width: 16, height: 16 }
                                    } else {
                                        Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                                    }
                                }
                            }
                        }

                        button { r#type: "submit", class: "auth-submit button", "Sign In" }
                    }

                    p { class: "auth-hint", "Demo credentials: admin / admin123" }
                }

                CardFooter {
                    p { class: "auth-footer-text",
                        "Driving an ambulance? "
                        Link { to: Route::AmbulanceLogin {}, class: "auth-link", "Ambulance login" }
                    }
                }
            }
        }
    }
}
