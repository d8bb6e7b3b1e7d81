//! HTTP access to the traffic backend.
//!
//! One typed function per endpoint lives in [`api`]; everything returns
//! `Result<T, shared_types::AppError>`.

pub mod api;
pub mod config;
pub mod error_convert;

pub use api::BackendClient;
