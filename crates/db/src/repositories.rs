pub mod announcement;
pub mod catalog;
pub mod credentials;
pub mod instructor;
pub mod student;
