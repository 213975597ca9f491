use chrono::NaiveDate;

use crate::{
    errors::{KasifError, KasifResult},
    models::student::{AttendanceMark, MemorizationMark, ReadingMark, Student},
    seed::is_known_surah,
};

// Latest write for a key wins; keys are never removed.

pub fn mark_attendance(student: &mut Student, date: NaiveDate, mark: AttendanceMark) {
    student.attendance.insert(date, mark);
}

pub fn mark_reading(student: &mut Student, date: NaiveDate, mark: ReadingMark) {
    student.reading.insert(date, mark);
}

pub fn mark_memorization(
    student: &mut Student,
    surah_id: &str,
    mark: MemorizationMark,
) -> KasifResult<()> {
    if !is_known_surah(surah_id) {
        return Err(KasifError::Validation(format!("Unknown surah: {}", surah_id)));
    }
    student.memorization.insert(surah_id.to_string(), mark);
    Ok(())
}
