//! Notely API Library
//!
//! This crate provides the HTTP API handlers and application setup.

mod handlers;

// Public modules
pub mod error;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::ErrorResponse;
