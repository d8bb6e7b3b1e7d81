pub mod about;
pub mod admin;
pub mod ambulance_dashboard;
pub mod ambulance_login;
pub mod control_center;
pub mod login;
pub mod login_choice;
pub mod not_found;
pub mod register;

use crate::auth::{home_route, is_active, nav_links, use_session, GuardDecision, GuardKind};
use crate::session::Role;
use crate::sync::sleep;
use chrono::Local;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdClock, LdInfo, LdLayoutDashboard, LdLogOut, LdSettings, LdShield, LdSiren, LdTrafficCone,
    LdUserPlus,
};
use dioxus_free_icons::Icon;
use shared_types::AmbulanceProfile;
use std::time::Duration;

use about::About;
use admin::AdminPanel;
use ambulance_dashboard::AmbulanceDashboard;
use ambulance_login::AmbulanceLogin;
use control_center::ControlCenter;
use login::Login;
use login_choice::LoginChoice;
use not_found::NotFound;
use register::AmbulanceRegister;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(NavShell)]
    #[route("/", Login)]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/ambulance-login")]
    AmbulanceLogin {},
    #[route("/login-choice")]
    LoginChoice {},
    #[route("/ambulance-register")]
    AmbulanceRegister {},
    #[layout(AdminGuard)]
    #[route("/home")]
    ControlCenter {},
    #[route("/admin")]
    AdminPanel {},
    #[route("/about")]
    About {},
    #[end_layout]
    #[layout(AmbulanceGuard)]
    #[route("/ambulance-dashboard")]
    AmbulanceDashboard {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Admin-only area. Anyone else is sent to the admin login.
#[component]
fn AdminGuard() -> Element {
    guarded(GuardKind::Admin)
}

/// Ambulance-only area. Anyone else is sent to the ambulance login.
#[component]
fn AmbulanceGuard() -> Element {
    guarded(GuardKind::Ambulance)
}

/// Re-checked on every render, so a session cleared elsewhere is caught on
/// the next one. Redirects replace the history entry.
fn guarded(kind: GuardKind) -> Element {
    let session = use_session();
    match kind.decide(session.role()) {
        GuardDecision::Allow => rsx! { Outlet::<Route> {} },
        GuardDecision::Redirect(target) => {
            navigator().replace(target);
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
    }
}

fn nav_icon(route: &Route) -> Element {
    match route {
        Route::ControlCenter {} => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        Route::AdminPanel {} => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        Route::About {} => rsx! { Icon::<LdInfo> { icon: LdInfo, width: 18, height: 18 } },
        Route::Login {} => rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
        Route::AmbulanceRegister {} => rsx! { Icon::<LdUserPlus> { icon: LdUserPlus, width: 18, height: 18 } },
        _ => rsx! { Icon::<LdSiren> { icon: LdSiren, width: 18, height: 18 } },
    }
}

/// Wall clock for the navbar, refreshed every half minute.
fn use_clock() -> Signal<String> {
    let mut now = use_signal(clock_label);
    use_future(move || async move {
        loop {
            sleep(Duration::from_secs(30)).await;
            now.set(clock_label());
        }
    });
    now
}

fn clock_label() -> String {
    Local::now().format("%H:%M").to_string()
}

/// Top navigation around every page.
#[component]
fn NavShell() -> Element {
    let route: Route = use_route();
    let session = use_session();
    let clock = use_clock();

    let role = session.role();
    let profile = session.profile();
    let signed_in = role != Role::Guest;
    let current_path = route.to_string();
    let brand = home_route(role);
    let links = nav_links(role);

    let logout = move |_: MouseEvent| {
        if let Some(target) = session.logout() {
            navigator().replace(target);
        }
    };

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-container",
                Link { to: brand, class: "navbar-logo",
                    span { class: "logo-icon",
                        Icon::<LdTrafficCone> { icon: LdTrafficCone, width: 24, height: 24 }
                    }
                    div { class: "logo-text",
                        span { class: "logo-title", "SMART TRAFFIC" }
                        span { class: "logo-subtitle", "Control System" }
                    }
                }

                div { class: "nav-links",
                    for link in links {
                        {
                            let path = link.to.to_string();
                            let active = if is_active(&current_path, &path) { "active" } else { "" };
                            let label = link.label;
                            rsx! {
                                Link { key: "{path}", to: link.to.clone(), class: "nav-link {active}",
                                    span { class: "nav-icon", {nav_icon(&link.to)} }
                                    span { class: "nav-text", "{label}" }
                                }
                            }
                        }
                    }
                }

                div { class: "nav-controls",
                    if let Some(profile) = profile {
                        DriverChip { profile }
                    }
                    if role == Role::Admin {
                        SystemStatus {}
                    }
                    if signed_in {
                        button { class: "logout-btn", onclick: logout,
                            Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                            span { class: "logout-text", "Logout" }
                        }
                    }
                    div { class: "time-display",
                        Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                        span { class: "time-text", "{clock}" }
                    }
                }
            }
        }

        main { class: "page",
            Outlet::<Route> {}
        }
    }
}

/// Driver identity shown while an ambulance is signed in.
#[component]
pub fn DriverChip(profile: AmbulanceProfile) -> Element {
    let AmbulanceProfile {
        ambulance_number,
        driver_name,
        ..
    } = profile;
    rsx! {
        div { class: "user-info",
            span { class: "user-icon",
                Icon::<LdSiren> { icon: LdSiren, width: 18, height: 18 }
            }
            div { class: "user-details",
                span { class: "user-name", "{driver_name}" }
                span { class: "user-role", "{ambulance_number}" }
            }
        }
    }
}

#[component]
pub fn SystemStatus() -> Element {
    rsx! {
        div { class: "system-status",
            div { class: "status-indicator online" }
            span { class: "status-text", "System Online" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn route_table_paths() {
        assert_eq!(Route::Root {}.to_string(), "/");
        assert_eq!(Route::Login {}.to_string(), "/login");
        assert_eq!(Route::AmbulanceLogin {}.to_string(), "/ambulance-login");
        assert_eq!(Route::LoginChoice {}.to_string(), "/login-choice");
        assert_eq!(Route::AmbulanceRegister {}.to_string(), "/ambulance-register");
        assert_eq!(Route::ControlCenter {}.to_string(), "/home");
        assert_eq!(Route::AdminPanel {}.to_string(), "/admin");
        assert_eq!(Route::About {}.to_string(), "/about");
        assert_eq!(Route::AmbulanceDashboard {}.to_string(), "/ambulance-dashboard");
    }

    #[test]
    fn paths_parse_back_to_routes() {
        assert_eq!("/home".parse::<Route>().ok(), Some(Route::ControlCenter {}));
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Root {}));
        assert_eq!(
            "/ambulance-dashboard".parse::<Route>().ok(),
            Some(Route::AmbulanceDashboard {})
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route = "/signals/live".parse::<Route>().ok();
        assert_eq!(
            route,
            Some(Route::NotFound {
                route: vec!["signals".to_string(), "live".to_string()]
            })
        );
    }

    #[test]
    fn driver_chip_shows_identity() {
        let html = render(|| {
            rsx! {
                DriverChip {
                    profile: AmbulanceProfile {
                        ambulance_number: "AMB001".to_string(),
                        driver_name: "Ravi Kumar".to_string(),
                        id: None,
                        hospital_name: None,
                    }
                }
            }
        });
        assert!(html.contains("Ravi Kumar"));
        assert!(html.contains("AMB001"));
    }

    #[test]
    fn system_status_reads_online() {
        let html = render(|| rsx! { SystemStatus {} });
        assert!(html.contains("System Online"));
    }
}
