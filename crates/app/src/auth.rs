use backend::BackendClient;
use dioxus::prelude::*;
use shared_types::{AmbulanceAuthResponse, AmbulanceProfile, AppError};

use crate::routes::Route;
use crate::session::{Role, SessionStore};

/// Demo credentials for the admin console. Checked locally, never sent.
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const INVALID_ADMIN_CREDENTIALS: &str = "Invalid username or password. Try admin/admin123";

/// Global session state.
///
/// Storage is the source of truth; `revision` only exists so components that
/// read the role re-render after a login or logout.
#[derive(Clone)]
pub struct SessionState {
    store: SessionStore,
    revision: Signal<u64>,
}

impl SessionState {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            revision: Signal::new(0),
        }
    }

    fn touch(&self) {
        let mut revision = self.revision;
        *revision.write() += 1;
    }

    pub fn role(&self) -> Role {
        let _ = self.revision.read();
        self.store.current_role()
    }

    pub fn profile(&self) -> Option<AmbulanceProfile> {
        let _ = self.revision.read();
        self.store.ambulance_profile()
    }

    pub fn token(&self) -> Option<String> {
        let _ = self.revision.read();
        self.store.ambulance_token()
    }

    pub fn sign_in_admin(&self, username: &str, password: &str) -> Result<(), AppError> {
        admin_sign_in(&self.store, username, password)?;
        self.touch();
        Ok(())
    }

    pub fn sign_in_ambulance(&self, auth: &AmbulanceAuthResponse) -> Result<(), AppError> {
        ambulance_sign_in(&self.store, auth)?;
        self.touch();
        Ok(())
    }

    /// Clear the session; returns where the signed-out user should go.
    pub fn logout(&self) -> Option<Route> {
        let target = end_session(&self.store);
        self.touch();
        target
    }

    /// `base` carrying the ambulance token, when there is one.
    pub fn ambulance_client(&self, base: &BackendClient) -> BackendClient {
        match self.token() {
            Some(token) => base.with_token(token),
            None => base.clone(),
        }
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

pub fn admin_sign_in(store: &SessionStore, username: &str, password: &str) -> Result<(), AppError> {
    if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
        return Err(AppError::unauthorized(INVALID_ADMIN_CREDENTIALS));
    }
    store.set_admin_session()?;
    tracing::info!("admin signed in");
    Ok(())
}

pub fn ambulance_sign_in(store: &SessionStore, auth: &AmbulanceAuthResponse) -> Result<(), AppError> {
    store.set_ambulance_session(&auth.token, &auth.ambulance)?;
    tracing::info!(ambulance_number = %auth.ambulance.ambulance_number, "ambulance signed in");
    Ok(())
}

/// Clear every role marker and pick the login page of the role that was
/// active. A guest has nowhere to go.
pub fn end_session(store: &SessionStore) -> Option<Route> {
    let role = store.current_role();
    store.clear_session();
    if role != Role::Guest {
        tracing::info!(role = role.as_str(), "signed out");
    }
    logout_target(role)
}

pub fn logout_target(role: Role) -> Option<Route> {
    match role {
        Role::Admin => Some(Route::Login {}),
        Role::Ambulance => Some(Route::AmbulanceLogin {}),
        Role::Guest => None,
    }
}

/// Landing page for a role; also the brand link target.
pub fn home_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::ControlCenter {},
        Role::Ambulance => Route::AmbulanceDashboard {},
        Role::Guest => Route::Root {},
    }
}

/// Which protected area a guard covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKind {
    Admin,
    Ambulance,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    Allow,
    Redirect(Route),
}

impl GuardKind {
    pub fn required_role(self) -> Role {
        match self {
            GuardKind::Admin => Role::Admin,
            GuardKind::Ambulance => Role::Ambulance,
        }
    }

    pub fn login_route(self) -> Route {
        match self {
            GuardKind::Admin => Route::Login {},
            GuardKind::Ambulance => Route::AmbulanceLogin {},
        }
    }

    pub fn decide(self, role: Role) -> GuardDecision {
        if role == self.required_role() {
            GuardDecision::Allow
        } else {
            GuardDecision::Redirect(self.login_route())
        }
    }
}

/// One entry of the top navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub to: Route,
}

pub fn nav_links(role: Role) -> Vec<NavLink> {
    let link = |label, to| NavLink { label, to };
    match role {
        Role::Admin => vec![
            link("Control Center", Route::ControlCenter {}),
            link("Admin Panel", Route::AdminPanel {}),
            link("About", Route::About {}),
        ],
        Role::Ambulance => vec![link("Emergency Dashboard", Route::AmbulanceDashboard {})],
        Role::Guest => vec![
            link("Admin Login", Route::Login {}),
            link("Ambulance Login", Route::AmbulanceLogin {}),
            link("Register Ambulance", Route::AmbulanceRegister {}),
        ],
    }
}

/// Prefix match on paths; `/` only matches itself.
pub fn is_active(current_path: &str, link_path: &str) -> bool {
    if link_path == "/" {
        current_path == "/"
    } else {
        current_path.starts_with(link_path)
    }
}
