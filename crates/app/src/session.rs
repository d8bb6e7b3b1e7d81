//! Persistent record of who is signed in.
//!
//! The browser build keeps the session in `localStorage` so it survives a
//! reload; other targets and tests use an in-memory map. Admin and ambulance
//! sessions are mutually exclusive: establishing one removes the other's keys.

use shared_types::{AmbulanceProfile, AppError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const ADMIN_FLAG_KEY: &str = "isAuthenticated";
pub const AMBULANCE_TOKEN_KEY: &str = "ambulance_token";
pub const AMBULANCE_PROFILE_KEY: &str = "ambulance_data";

const ADMIN_FLAG_VALUE: &str = "true";

/// Who the current tab is acting as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Guest,
    Admin,
    Ambulance,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Admin => "admin",
            Role::Ambulance => "ambulance",
        }
    }
}

/// String key/value storage backing the session.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str);
}

/// Process-local storage. Nothing outlives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let storage =
            Self::storage().ok_or_else(|| AppError::internal("localStorage is unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|_| AppError::internal(format!("Could not write {key} to localStorage")))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(key).is_err() {
                tracing::warn!(key, "could not remove localStorage entry");
            }
        }
    }
}

/// Typed view of the session keys over any [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(inner: Rc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    /// In-memory store, for native builds and tests.
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStore::default()))
    }

    /// The store the running platform persists sessions in.
    pub fn platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(Rc::new(BrowserStore))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::in_memory()
        }
    }

    pub fn set_admin_session(&self) -> Result<(), AppError> {
        self.clear_ambulance();
        self.inner.set(ADMIN_FLAG_KEY, ADMIN_FLAG_VALUE)
    }

    /// Persist token and profile together. If either write fails neither
    /// remains stored.
    pub fn set_ambulance_session(
        &self,
        token: &str,
        profile: &AmbulanceProfile,
    ) -> Result<(), AppError> {
        let profile_json = serde_json::to_string(profile)
            .map_err(|e| AppError::internal(format!("Could not encode ambulance profile: {e}")))?;
        self.inner.remove(ADMIN_FLAG_KEY);
        self.inner.set(AMBULANCE_TOKEN_KEY, token)?;
        if let Err(e) = self.inner.set(AMBULANCE_PROFILE_KEY, &profile_json) {
            self.inner.remove(AMBULANCE_TOKEN_KEY);
            return Err(e);
        }
        Ok(())
    }

    /// Remove every role marker. Safe to call with no session.
    pub fn clear_session(&self) {
        self.inner.remove(ADMIN_FLAG_KEY);
        self.clear_ambulance();
    }

    fn clear_ambulance(&self) {
        self.inner.remove(AMBULANCE_TOKEN_KEY);
        self.inner.remove(AMBULANCE_PROFILE_KEY);
    }

    /// Admin flag first, then a non-empty ambulance token.
    pub fn current_role(&self) -> Role {
        if self.inner.get(ADMIN_FLAG_KEY).as_deref() == Some(ADMIN_FLAG_VALUE) {
            Role::Admin
        } else if self.ambulance_token().is_some() {
            Role::Ambulance
        } else {
            Role::Guest
        }
    }

    pub fn ambulance_token(&self) -> Option<String> {
        self.inner
            .get(AMBULANCE_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    /// Stored profile; `None` without a token or when the entry is unreadable.
    pub fn ambulance_profile(&self) -> Option<AmbulanceProfile> {
        self.ambulance_token()?;
        let raw = self.inner.get(AMBULANCE_PROFILE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!(error = %e, "stored ambulance profile is unreadable");
                None
            }
        }
    }
}
