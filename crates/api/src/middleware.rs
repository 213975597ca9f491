/// Bearer sessions and role extractors
pub mod auth;
/// Mapping of domain errors to HTTP responses
pub mod error_handling;
