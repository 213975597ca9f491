//! Registration and login gating.
//!
//! Credential hashing happens in the store; these checks only see field contents and the
//! current state.

use std::collections::BTreeMap;

use crate::{
    errors::{KasifError, KasifResult},
    models::{
        instructor::{Instructor, RegisterInstructorRequest, UpdateCredentialsRequest},
        state::AppState,
        student::{RegisterStudentRequest, Student, StudentStatus, DEFAULT_GROUP},
    },
};

fn all_filled(fields: &[&str]) -> KasifResult<()> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(KasifError::Validation("Please fill in all fields".to_string()));
    }
    Ok(())
}

pub fn validate_student_registration(
    state: &AppState,
    req: &RegisterStudentRequest,
) -> KasifResult<()> {
    all_filled(&[&req.full_name, &req.username, &req.password, &req.class_code])?;

    if !state.class_code_exists(req.class_code.trim()) {
        return Err(KasifError::Validation(format!(
            "Class code {} is not registered",
            req.class_code.trim()
        )));
    }

    if state.students.iter().any(|s| s.username == req.username.trim()) {
        return Err(KasifError::Conflict(format!(
            "Username {} is already taken",
            req.username.trim()
        )));
    }

    Ok(())
}

/// Builds a pending student with empty balances.
pub fn new_student(id: i64, req: &RegisterStudentRequest, password_hash: String) -> Student {
    Student {
        id,
        name: req.full_name.trim().to_string(),
        username: req.username.trim().to_string(),
        password_hash,
        group: DEFAULT_GROUP.to_string(),
        status: StudentStatus::Pending,
        class_code: req.class_code.trim().to_string(),
        points: 0,
        namaz_points: 0,
        inventory: Vec::new(),
        badges: Vec::new(),
        completed_tasks: Vec::new(),
        attendance: BTreeMap::new(),
        reading: BTreeMap::new(),
        memorization: BTreeMap::new(),
        prayers: BTreeMap::new(),
        parent_phone: req.parent_phone.clone().filter(|p| !p.trim().is_empty()),
        student_phone: req.student_phone.clone().filter(|p| !p.trim().is_empty()),
    }
}

pub fn validate_instructor_registration(
    state: &AppState,
    req: &RegisterInstructorRequest,
) -> KasifResult<()> {
    all_filled(&[&req.full_name, &req.username, &req.password])?;

    if state.instructors.iter().any(|i| i.username == req.username.trim()) {
        return Err(KasifError::Conflict(format!(
            "Username {} is already taken",
            req.username.trim()
        )));
    }

    Ok(())
}

/// Instructors start without class codes and must generate one.
pub fn new_instructor(id: i64, req: &RegisterInstructorRequest, password_hash: String) -> Instructor {
    Instructor {
        id,
        name: req.full_name.trim().to_string(),
        username: req.username.trim().to_string(),
        password_hash,
        class_codes: Vec::new(),
    }
}

/// A new username may not belong to a different instructor.
pub fn validate_credentials_update(
    state: &AppState,
    instructor_id: i64,
    req: &UpdateCredentialsRequest,
) -> KasifResult<()> {
    if req.username.trim().is_empty() || req.password.is_empty() {
        return Err(KasifError::Validation(
            "Username and password cannot be empty".to_string(),
        ));
    }

    let taken = state
        .instructors
        .iter()
        .any(|i| i.username == req.username.trim() && i.id != instructor_id);
    if taken {
        return Err(KasifError::Conflict(format!(
            "Username {} is used by another instructor",
            req.username.trim()
        )));
    }

    Ok(())
}

/// Pending accounts may not log in.
pub fn ensure_student_can_login(student: &Student) -> KasifResult<()> {
    match student.status {
        StudentStatus::Approved => Ok(()),
        StudentStatus::Pending => Err(KasifError::Authentication(
            "Account is awaiting instructor approval".to_string(),
        )),
    }
}
