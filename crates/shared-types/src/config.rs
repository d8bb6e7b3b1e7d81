use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Address of the traffic backend used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Where the traffic backend lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

/// Refresh intervals, in whole seconds, for each polling view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PollingConfig {
    /// Control center (`/home`).
    #[serde(default = "default_dashboard_secs")]
    pub dashboard_secs: u64,
    /// Admin panel (`/admin`).
    #[serde(default = "default_admin_secs")]
    pub admin_secs: u64,
    /// Ambulance dashboard emergency status.
    #[serde(default = "default_ambulance_secs")]
    pub ambulance_secs: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            dashboard_secs: default_dashboard_secs(),
            admin_secs: default_admin_secs(),
            ambulance_secs: default_ambulance_secs(),
        }
    }
}

fn default_dashboard_secs() -> u64 {
    2
}

fn default_admin_secs() -> u64 {
    3
}

fn default_ambulance_secs() -> u64 {
    5
}

impl PollingConfig {
    pub fn dashboard_interval(&self) -> Duration {
        Duration::from_secs(self.dashboard_secs.max(1))
    }

    pub fn admin_interval(&self) -> Duration {
        Duration::from_secs(self.admin_secs.max(1))
    }

    pub fn ambulance_interval(&self) -> Duration {
        Duration::from_secs(self.ambulance_secs.max(1))
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub polling: PollingConfig,
}
