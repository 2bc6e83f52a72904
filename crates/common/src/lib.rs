//! Shared value types, error taxonomy, and configuration for Courier.

pub mod config;
pub mod error;
pub mod types;
