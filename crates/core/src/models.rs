pub mod announcement;
pub mod catalog;
pub mod instructor;
pub mod prayer;
pub mod session;
pub mod state;
pub mod student;
