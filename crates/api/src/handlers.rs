/// Platform administration and CSV exports
pub mod admin;
/// Login, logout and self-registration
pub mod auth;
/// Read-only catalogue and prayer timetable
pub mod catalog;
/// Instructor class management
pub mod instructor;
/// Student self-service
pub mod student;
