use serde::Deserialize;
use shared_types::AppError;

/// Error body the backend sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Convert a reqwest::Error into an AppError.
///
/// A body that failed to deserialize is a `Decode` error; anything else
/// means the backend was never reached.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if err.is_decode() {
        AppError::decode(err.to_string())
    } else {
        AppError::network(err.to_string())
    }
}

/// Build an AppError from a non-success status and the raw response body.
pub fn status_to_app_error(status: u16, body: &str) -> AppError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.or(b.message))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status {status}"));
    AppError::from_status(status, message)
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}
