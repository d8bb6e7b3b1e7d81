//! Presentational components for the traffic control console.
//!
//! Components carry no state of their own beyond what their props describe;
//! styling comes from the application stylesheet.

pub mod components;

pub use components::*;
