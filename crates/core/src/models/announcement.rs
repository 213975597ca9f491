use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub message: String,
    /// Display date in `dd.mm.yyyy` form.
    pub date: String,
    /// `None` reaches every class.
    #[serde(default)]
    pub class_code: Option<String>,
}

impl Announcement {
    pub fn is_visible_to(&self, class_code: &str) -> bool {
        match &self.class_code {
            Some(code) => code == class_code,
            None => true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub message: String,
    pub target_group: String,
}

pub fn display_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
