use serde::{Deserialize, Serialize};

use super::{
    announcement::Announcement,
    catalog::{Badge, MarketItem, WeeklyTask},
    instructor::Instructor,
    student::Student,
};

/// The whole application state: six independently persisted collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub students: Vec<Student>,
    pub instructors: Vec<Instructor>,
    pub market_items: Vec<MarketItem>,
    pub tasks: Vec<WeeklyTask>,
    pub announcements: Vec<Announcement>,
    pub badges: Vec<Badge>,
}

impl AppState {
    pub fn student(&self, id: i64) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn student_mut(&mut self, id: i64) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id == id)
    }

    pub fn instructor(&self, id: i64) -> Option<&Instructor> {
        self.instructors.iter().find(|i| i.id == id)
    }

    pub fn instructor_mut(&mut self, id: i64) -> Option<&mut Instructor> {
        self.instructors.iter_mut().find(|i| i.id == id)
    }

    /// True if any instructor has issued `code`.
    pub fn class_code_exists(&self, code: &str) -> bool {
        self.instructors.iter().any(|i| i.owns_code(code))
    }
}
