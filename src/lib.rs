//! Skyhall - A lightweight operator client for the SkyHall service API.
//!
//! This crate implements the authentication and profile lifecycle against the
//! SkyHall backend: credential login, secure token persistence, session
//! re-establishment by token, and profile retrieval with transparent
//! session-expiry recovery.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing core services and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "skyhall";
