use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::catalog::Currency;

/// Group label every new registration lands in.
pub const DEFAULT_GROUP: &str = "Kaşif Grubu";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    Pending,
    Approved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceMark {
    Present,
    Absent,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingMark {
    Passed,
    Study,
    Failed,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemorizationMark {
    Passed,
    Repeat,
    None,
}

/// Solitary (`tek`) or congregational (`cemaat`) prayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerKind {
    Tek,
    Cemaat,
}

impl PrayerKind {
    /// NP credited the first time a prayer is logged for a day.
    pub fn bonus(self) -> i64 {
        match self {
            PrayerKind::Tek => 10,
            PrayerKind::Cemaat => 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerStatus {
    #[serde(rename = "type")]
    pub kind: PrayerKind,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub password_hash: String,
    pub group: String,
    pub status: StudentStatus,
    pub class_code: String,
    pub points: i64,
    pub namaz_points: i64,
    #[serde(default)]
    pub inventory: Vec<String>,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub completed_tasks: Vec<i64>,
    #[serde(default)]
    pub attendance: BTreeMap<NaiveDate, AttendanceMark>,
    #[serde(default)]
    pub reading: BTreeMap<NaiveDate, ReadingMark>,
    #[serde(default)]
    pub memorization: BTreeMap<String, MemorizationMark>,
    #[serde(default)]
    pub prayers: BTreeMap<String, PrayerStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_phone: Option<String>,
}

impl Student {
    pub fn balance(&self, currency: Currency) -> i64 {
        match currency {
            Currency::Gp => self.points,
            Currency::Np => self.namaz_points,
        }
    }

    pub fn balance_mut(&mut self, currency: Currency) -> &mut i64 {
        match currency {
            Currency::Gp => &mut self.points,
            Currency::Np => &mut self.namaz_points,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == StudentStatus::Approved
    }

    /// Public view without the credential hash.
    pub fn profile(&self) -> StudentProfile {
        StudentProfile {
            id: self.id,
            name: self.name.clone(),
            username: self.username.clone(),
            group: self.group.clone(),
            status: self.status,
            class_code: self.class_code.clone(),
            points: self.points,
            namaz_points: self.namaz_points,
            inventory: self.inventory.clone(),
            badges: self.badges.clone(),
            completed_tasks: self.completed_tasks.clone(),
            attendance: self.attendance.clone(),
            reading: self.reading.clone(),
            memorization: self.memorization.clone(),
            prayers: self.prayers.clone(),
            parent_phone: self.parent_phone.clone(),
            student_phone: self.student_phone.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub group: String,
    pub status: StudentStatus,
    pub class_code: String,
    pub points: i64,
    pub namaz_points: i64,
    pub inventory: Vec<String>,
    pub badges: Vec<String>,
    pub completed_tasks: Vec<i64>,
    pub attendance: BTreeMap<NaiveDate, AttendanceMark>,
    pub reading: BTreeMap<NaiveDate, ReadingMark>,
    pub memorization: BTreeMap<String, MemorizationMark>,
    pub prayers: BTreeMap<String, PrayerStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStudentRequest {
    pub full_name: String,
    pub username: String,
    pub password: String,
    pub class_code: String,
    #[serde(default)]
    pub parent_phone: Option<String>,
    #[serde(default)]
    pub student_phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPrayerRequest {
    pub prayer_id: String,
    #[serde(rename = "type")]
    pub kind: PrayerKind,
    /// Only today (UTC) is accepted; omitted means today.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceRequest {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub mark: AttendanceMark,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadingRequest {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub mark: ReadingMark,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkMemorizationRequest {
    pub surah_id: String,
    pub mark: MemorizationMark,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardBadgeRequest {
    pub badge_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultRequest {
    pub score: i64,
}

/// Result of an event applied to a student record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentUpdateResponse {
    pub outcome: crate::rules::Outcome,
    pub student: StudentProfile,
}
