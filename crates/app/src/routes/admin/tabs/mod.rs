pub mod emergencies;
pub mod manual_control;
pub mod settings;
pub mod signal_status;
