//! Middleware: optional bearer-token gate for the card routes.

pub mod auth;

pub use auth::require_bearer;
