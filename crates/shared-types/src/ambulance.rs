use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use crate::AppError;
#[cfg(feature = "validation")]
use regex::Regex;
#[cfg(feature = "validation")]
use std::{collections::HashMap, sync::LazyLock};
#[cfg(feature = "validation")]
use validator::Validate;

/// Identity of a logged-in ambulance, persisted alongside its token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AmbulanceProfile {
    pub ambulance_number: String,
    pub driver_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_name: Option<String>,
}

/// Body of `POST /ambulance/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AmbulanceLoginRequest {
    pub ambulance_number: String,
    pub password: String,
}

/// Successful login or registration: a bearer token and the ambulance it names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AmbulanceAuthResponse {
    pub token: String,
    pub ambulance: AmbulanceProfile,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hospital {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: String,
}

/// Body of `GET /ambulance/hospitals`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HospitalsResponse {
    #[serde(default)]
    pub hospitals: Vec<Hospital>,
}

/// Hospitals offered when the backend list cannot be loaded.
pub fn fallback_hospitals() -> Vec<Hospital> {
    [
        (1, "City General Hospital", "Downtown"),
        (2, "Medicare Hospital", "North Zone"),
        (3, "Emergency Care Center", "East Zone"),
        (4, "Trauma Speciality Hospital", "West Zone"),
    ]
    .into_iter()
    .map(|(id, name, location)| Hospital {
        id,
        name: name.to_string(),
        location: location.to_string(),
    })
    .collect()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AmbulanceType {
    #[default]
    Basic,
    Advanced,
}

impl AmbulanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AmbulanceType::Basic => "basic",
            AmbulanceType::Advanced => "advanced",
        }
    }

    pub fn from_key(s: &str) -> Self {
        match s {
            "advanced" => AmbulanceType::Advanced,
            _ => AmbulanceType::Basic,
        }
    }
}

/// Select value meaning "type the hospital name by hand".
pub const CUSTOM_HOSPITAL_OPTION: &str = "other";

/// Field order used to pick the single message shown above the form.
pub const REGISTRATION_FIELD_ORDER: &[&str] = &[
    "ambulance_number",
    "driver_name",
    "phone_number",
    "password",
    "confirm_password",
    "hospital_name",
];

#[cfg(feature = "validation")]
static AMBULANCE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^AMB\d{3,}$").expect("ambulance number pattern"));

#[cfg(feature = "validation")]
static PHONE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10}$").expect("phone number pattern"));

/// Raw contents of the ambulance registration form.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct RegisterAmbulanceForm {
    #[cfg_attr(
        feature = "validation",
        validate(regex(
            path = *AMBULANCE_NUMBER_RE,
            message = "Ambulance number must start with 'AMB' followed by numbers (e.g., AMB001)"
        ))
    )]
    pub ambulance_number: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, message = "Driver name must be at least 3 characters"))
    )]
    pub driver_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(regex(path = *PHONE_NUMBER_RE, message = "Phone number must be 10 digits"))
    )]
    pub phone_number: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 6, message = "Password must be at least 6 characters"))
    )]
    pub password: String,
    pub confirm_password: String,
    /// Selected hospital, or [`CUSTOM_HOSPITAL_OPTION`].
    pub hospital_name: String,
    pub custom_hospital: String,
    pub license_number: String,
    pub ambulance_type: AmbulanceType,
}

impl RegisterAmbulanceForm {
    /// The hospital the ambulance will be registered under, if one was given.
    pub fn hospital(&self) -> Option<String> {
        let custom = self.custom_hospital.trim();
        if !custom.is_empty() {
            return Some(custom.to_string());
        }
        let selected = self.hospital_name.trim();
        if selected.is_empty() || selected == CUSTOM_HOSPITAL_OPTION {
            None
        } else {
            Some(selected.to_string())
        }
    }

    /// Run every client-side check; nothing is sent unless this passes.
    ///
    /// The error message is the first failing field in form order; every
    /// failing field is listed in `field_errors`.
    #[cfg(feature = "validation")]
    pub fn check(&self) -> Result<(), AppError> {
        let mut field_errors = match self.validate() {
            Ok(()) => HashMap::new(),
            Err(errors) => AppError::from(errors).field_errors,
        };
        if self.password != self.confirm_password {
            field_errors.insert(
                "confirm_password".to_string(),
                "Passwords do not match".to_string(),
            );
        }
        if self.hospital().is_none() {
            field_errors.insert(
                "hospital_name".to_string(),
                "Please select or enter a hospital name".to_string(),
            );
        }
        if field_errors.is_empty() {
            return Ok(());
        }
        let mut err = AppError::validation("Validation failed", field_errors);
        if let Some(first) = err.first_field_error(REGISTRATION_FIELD_ORDER) {
            err.message = first.to_string();
        }
        Err(err)
    }

    pub fn into_request(self) -> RegisterAmbulanceRequest {
        let hospital_name = self.hospital();
        RegisterAmbulanceRequest {
            ambulance_number: self.ambulance_number.to_uppercase(),
            driver_name: self.driver_name,
            phone_number: self.phone_number,
            password: self.password,
            hospital_name,
            license_number: self.license_number,
            ambulance_type: self.ambulance_type,
        }
    }
}

/// Body of `POST /ambulance/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterAmbulanceRequest {
    pub ambulance_number: String,
    pub driver_name: String,
    pub phone_number: String,
    pub password: String,
    pub hospital_name: Option<String>,
    pub license_number: String,
    pub ambulance_type: AmbulanceType,
}
