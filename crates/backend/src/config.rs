use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the runtime config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding `[backend] base_url`.
pub const API_URL_ENV: &str = "TRAFFIC_API_URL";

/// Defaults compiled into the binary so the browser build has a config too.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse a config document, logging and falling back to defaults on error.
pub fn parse_config(source: &str, contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(source, error = %e, "invalid config, using defaults");
        AppConfig::default()
    })
}

/// Layer the sources in precedence order: embedded defaults, then a runtime
/// file, then an explicit API URL.
pub fn resolve_config(
    embedded: &str,
    runtime_file: Option<&str>,
    api_url: Option<String>,
) -> AppConfig {
    let mut config = match runtime_file {
        Some(contents) => parse_config(CONFIG_SOURCE_FILE, contents),
        None => parse_config(CONFIG_SOURCE_EMBEDDED, embedded),
    };
    if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
        config.backend.base_url = url.trim().to_string();
    }
    config
}

const CONFIG_SOURCE_FILE: &str = "config.toml";
const CONFIG_SOURCE_EMBEDDED: &str = "embedded";

#[cfg(not(target_arch = "wasm32"))]
fn read_runtime_file() -> Option<String> {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => Some(contents),
        Err(e) => {
            tracing::debug!(path = CONFIG_PATH, error = %e, "no runtime config file");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_file() -> Option<String> {
    None
}

fn api_url_override() -> Option<String> {
    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(url) = std::env::var(API_URL_ENV) {
        return Some(url);
    }
    option_env!("TRAFFIC_API_URL").map(str::to_string)
}

/// Resolve the configuration and store it in the global `OnceLock`.
/// Only the first call has an effect.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = resolve_config(EMBEDDED_CONFIG, read_runtime_file().as_deref(), api_url_override());
        tracing::info!(
            base_url = %config.backend.base_url,
            dashboard_secs = config.polling.dashboard_secs,
            admin_secs = config.polling.admin_secs,
            ambulance_secs = config.polling.ambulance_secs,
            "configuration loaded"
        );
        config
    })
}

/// The loaded configuration, loading it on first use.
pub fn config() -> &'static AppConfig {
    CONFIG.get().unwrap_or_else(load_config)
}
