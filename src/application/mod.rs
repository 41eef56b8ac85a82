//! Application layer services implementing business logic.
//!
//! Services consume the repository trait and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::registration_service::RegistrationService`] - Idempotent URL registration
//! - [`services::redirect_service::RedirectService`] - Short code resolution

pub mod services;
