/// Administration endpoints
pub mod admin;
/// Login and registration endpoints
pub mod auth;
/// Catalogue and prayer timetable endpoints
pub mod catalog;
/// Liveness and version endpoints
pub mod health;
/// Instructor endpoints
pub mod instructor;
/// Student endpoints
pub mod student;
