//! Business logic services for the application layer.

pub mod redirect_service;
pub mod registration_service;

pub use redirect_service::RedirectService;
pub use registration_service::RegistrationService;
