#[cfg(test)]
mod common;

#[cfg(test)]
mod junction_tests;

#[cfg(test)]
mod emergency_tests;

#[cfg(test)]
mod admin_control_tests;

#[cfg(test)]
mod ambulance_auth_tests;

#[cfg(test)]
mod ambulance_emergency_tests;

#[cfg(test)]
mod analyze_tests;

#[cfg(test)]
mod error_mapping_tests;
