use crate::auth::use_session;
use crate::routes::Route;
use crate::sync::sleep;
use backend::BackendClient;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUserPlus;
use dioxus_free_icons::Icon;
use shared_types::{AmbulanceType, RegisterAmbulanceForm, CUSTOM_HOSPITAL_OPTION};
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
use std::collections::HashMap;
use std::time::Duration;

/// Pause between a successful registration and the dashboard.
const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Ambulance self-registration. Signs the new ambulance in on success.
#[component]
pub fn AmbulanceRegister() -> Element {
    let session = use_session();
    let client: BackendClient = use_context();

    let mut form = use_signal(RegisterAmbulanceForm::default);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut success_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let hospitals_client = client.clone();
    let hospitals = use_resource(move || {
        let client = hospitals_client.clone();
        async move { client.hospitals_or_fallback().await }
    });
    let hospital_names: Vec<String> = hospitals
        .read()
        .iter()
        .flatten()
        .map(|h| h.name.clone())
        .collect();

    let handle_submit = move |evt: FormEvent| {
        let client = client.clone();
        let session = session.clone();
        async move {
            evt.prevent_default();
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let submitted = form.read().clone();
            if let Err(e) = submitted.check() {
                error_msg.set(Some(e.message.clone()));
                field_errors.set(e.field_errors);
                return;
            }

            loading.set(true);
            let request = submitted.into_request();
            let result = client.register_ambulance(&request).await;
            loading.set(false);

            match result.and_then(|auth| session.sign_in_ambulance(&auth)) {
                Ok(()) => {
                    success_msg.set(Some("Registration successful! Opening your dashboard...".to_string()));
                    sleep(REDIRECT_DELAY).await;
                    navigator().push(Route::AmbulanceDashboard {});
                }
                Err(e) => {
                    tracing::warn!(ambulance_number = %request.ambulance_number, error = %e, "registration failed");
                    error_msg.set(Some(e.friendly_message()));
                }
            }
        }
    };

    let current = form.read().clone();
    let custom_hospital = current.hospital_name == CUSTOM_HOSPITAL_OPTION;
    let field_error = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        div { class: "auth-page",
            Card {
                class: "auth-card register-card",

                CardHeader {
                    div { class: "auth-icon",
                        Icon::<LdUserPlus> { icon: LdUserPlus, width: 32, height: 32 }
                    }
                    CardTitle { "Register Ambulance" }
                    CardDescription { "Create an account for your emergency vehicle" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }
                    if let Some(msg) = success_msg() {
                        div { class: "auth-success", "{msg}" }
                    }

                    form { onsubmit: handle_submit,
                        div { class: "form-grid",
                            div { class: "auth-field",
                                label { r#for: "ambulance_number", "Ambulance Number *" }
                                input {
                                    id: "ambulance_number",
                                    r#type: "text",
                                    placeholder: "AMB001",
                                    value: current.ambulance_number.clone(),
                                    oninput: move |e: FormEvent| form.write().ambulance_number = e.value(),
                                }
                                if let Some(msg) = field_error("ambulance_number") {
                                    span { class: "field-error", "{msg}" }
                                }
                            }

                            div { class: "auth-field",
                                label { r#for: "driver_name", "Driver Name *" }
                                input {
                                    id: "driver_name",
                                    r#type: "text",
                                    placeholder: "John Doe",
                                    value: current.driver_name.clone(),
                                    oninput: move |e: FormEvent| form.write().driver_name = e.value(),
                                }
                                if let Some(msg) = field_error("driver_name") {
                                    span { class: "field-error", "{msg}" }
                                }
                            }

                            div { class: "auth-field",
                                label { r#for: "phone_number", "Phone Number *" }
                                input {
                                    id: "phone_number",
                                    r#type: "tel",
                                    placeholder: "9876543210",
                                    value: current.phone_number.clone(),
                                    oninput: move |e: FormEvent| form.write().phone_number = e.value(),
                                }
                                if let Some(msg) = field_error("phone_number") {
                                    span { class: "field-error", "{msg}" }
                                }
                            }

                            div { class: "auth-field",
                                label { r#for: "license_number", "License Number" }
                                input {
                                    id: "license_number",
                                    r#type: "text",
                                    placeholder: "Optional",
                                    value: current.license_number.clone(),
                                    oninput: move |e: FormEvent| form.write().license_number = e.value(),
                                }
                            }

                            div { class: "auth-field",
                                label { r#for: "hospital_name", "Hospital *" }
                                select {
                                    id: "hospital_name",
                                    value: current.hospital_name.clone(),
                                    onchange: move |e: FormEvent| form.write().hospital_name = e.value(),
                                    option { value: "", "Choose a hospital..." }
                                    for name in hospital_names {
                                        option { key: "{name}", value: name.clone(), "{name}" }
                                    }
                                    option { value: CUSTOM_HOSPITAL_OPTION, "Other (Enter manually)" }
                                }
                                if custom_hospital {
                                    input {
                                        r#type: "text",
                                        placeholder: "Enter hospital name",
                                        value: current.custom_hospital.clone(),
                                        oninput: move |e: FormEvent| form.write().custom_hospital = e.value(),
                                    }
                                }
                                if let Some(msg) = field_error("hospital_name") {
                                    span { class: "field-error", "{msg}" }
                                }
                            }

                            div { class: "auth-field",
                                label { r#for: "ambulance_type", "Ambulance Type" }
                                select {
                                    id: "ambulance_type",
                                    value: current.ambulance_type.as_str(),
                                    onchange: move |e: FormEvent| {
                                        form.write().ambulance_type = AmbulanceType::from_key(&e.value());
                                    },
                                    option { value: AmbulanceType::Basic.as_str(), "Basic Life Support" }
                                    option { value: AmbulanceType::Advanced.as_str(), "Advanced Life Support" }
                                }
                            }

                            div { class: "auth-field",
                                label { r#for: "password", "Password *" }
                                input {
                                    id: "password",
                                    r#type: "password",
                                    placeholder: "Create password",
                                    autocomplete: "new-password",
                                    value: current.password.clone(),
                                    oninput: move |e: FormEvent| form.write().password = e.value(),
                                }
                                if let Some(msg) = field_error("password") {
                                    span { class: "field-error", "{msg}" }
                                }
                            }

                            div { class: "auth-field",
                                label { r#for: "confirm_password", "Confirm Password *" }
                                input {
                                    id: "confirm_password",
                                    r#type: "password",
                                    placeholder: "Confirm password",
                                    autocomplete: "new-password",
                                    value: current.confirm_password.clone(),
                                    oninput: move |e: FormEvent| form.write().confirm_password = e.value(),
                                }
                                if let Some(msg) = field_error("confirm_password") {
                                    span { class: "field-error", "{msg}" }
                                }
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Registering..." } else { "Register Ambulance" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-footer-text",
                        "Already registered? "
                        Link { to: Route::AmbulanceLogin {}, class: "auth-link", "Login here" }
                    }
                }
            }
        }
    }
}
