use crate::{
    errors::{KasifError, KasifResult},
    models::student::{Student, StudentStatus},
};

use super::Outcome;

/// Moves a pending student to approved. Touches nothing but `status`.
pub fn approve(student: &mut Student) -> Outcome {
    if student.is_approved() {
        return Outcome::Unchanged;
    }
    student.status = StudentStatus::Approved;
    Outcome::Applied
}

/// Only pending registrations may be rejected, which deletes them.
pub fn ensure_rejectable(student: &Student) -> KasifResult<()> {
    match student.status {
        StudentStatus::Pending => Ok(()),
        StudentStatus::Approved => Err(KasifError::Validation(format!(
            "Student {} is already approved and cannot be rejected",
            student.id
        ))),
    }
}
