use chrono::NaiveDate;
use kasif_core::{
    errors::{KasifError, KasifResult},
    ids,
    models::{
        announcement::Announcement,
        state::AppState,
        student::{
            AttendanceMark, MemorizationMark, PrayerKind, ReadingMark, RegisterStudentRequest,
            Student,
        },
    },
    rules::{approval, economy, registration, tracking, Outcome},
};

use crate::{repositories::credentials, schema::Collection, Database};

fn student_mut(state: &mut AppState, id: i64) -> KasifResult<&mut Student> {
    state
        .student_mut(id)
        .ok_or_else(|| KasifError::NotFound(format!("Student with ID {} not found", id)))
}

/// Resolves a student the instructor is allowed to act on.
fn scoped_student_mut(
    state: &mut AppState,
    instructor_id: i64,
    student_id: i64,
) -> KasifResult<&mut Student> {
    let codes = state
        .instructor(instructor_id)
        .map(|i| i.class_codes.clone())
        .ok_or_else(|| {
            KasifError::NotFound(format!("Instructor with ID {} not found", instructor_id))
        })?;

    let student = student_mut(state, student_id)?;
    if !codes.contains(&student.class_code) {
        return Err(KasifError::Authorization(format!(
            "Student {} is not in one of your groups",
            student_id
        )));
    }
    Ok(student)
}

pub async fn register(db: &Database, req: &RegisterStudentRequest) -> KasifResult<Student> {
    {
        let state = db.read().await;
        registration::validate_student_registration(&state, req)?;
    }

    let password_hash = credentials::hash_password(&req.password)?;

    let student = db
        .mutate(&[Collection::Students], |state| {
            // Re-check under the write lock; the hash was computed without it.
            registration::validate_student_registration(state, req)?;
            let student = registration::new_student(ids::next_id(), req, password_hash);
            state.students.push(student.clone());
            Ok(student)
        })
        .await?;

    tracing::info!(
        "Registered student {} ({}) for class {}",
        student.id,
        student.username,
        student.class_code
    );
    Ok(student)
}

pub async fn authenticate(db: &Database, username: &str, password: &str) -> KasifResult<Student> {
    let state = db.read().await;
    let student = state
        .students
        .iter()
        .find(|s| s.username == username)
        .filter(|s| credentials::verify_password(&s.password_hash, password))
        .ok_or_else(|| KasifError::Authentication("Invalid username or password".to_string()))?;

    registration::ensure_student_can_login(student)?;
    Ok(student.clone())
}

pub async fn get(db: &Database, id: i64) -> KasifResult<Student> {
    db.read()
        .await
        .student(id)
        .cloned()
        .ok_or_else(|| KasifError::NotFound(format!("Student with ID {} not found", id)))
}

pub async fn list_all(db: &Database) -> Vec<Student> {
    db.read().await.students.clone()
}

/// Students in the instructor's classes, optionally narrowed to one class code.
pub async fn list_for_instructor(
    db: &Database,
    instructor_id: i64,
    group: Option<&str>,
) -> KasifResult<Vec<Student>> {
    let state = db.read().await;
    let instructor = state.instructor(instructor_id).ok_or_else(|| {
        KasifError::NotFound(format!("Instructor with ID {} not found", instructor_id))
    })?;

    Ok(state
        .students
        .iter()
        .filter(|s| instructor.owns_code(&s.class_code))
        .filter(|s| group.is_none_or(|g| s.class_code == g))
        .cloned()
        .collect())
}

pub async fn approve(
    db: &Database,
    instructor_id: i64,
    student_id: i64,
) -> KasifResult<(Outcome, Student)> {
    db.mutate(&[Collection::Students], |state| {
        let student = scoped_student_mut(state, instructor_id, student_id)?;
        let outcome = approval::approve(student);
        Ok((outcome, student.clone()))
    })
    .await
}

/// Deletes a pending registration.
pub async fn reject(db: &Database, instructor_id: i64, student_id: i64) -> KasifResult<()> {
    db.mutate(&[Collection::Students], |state| {
        let student = scoped_student_mut(state, instructor_id, student_id)?;
        approval::ensure_rejectable(student)?;
        state.students.retain(|s| s.id != student_id);
        Ok(())
    })
    .await?;

    tracing::info!("Instructor {} rejected student {}", instructor_id, student_id);
    Ok(())
}

pub async fn mark_attendance(
    db: &Database,
    instructor_id: i64,
    student_id: i64,
    date: NaiveDate,
    mark: AttendanceMark,
) -> KasifResult<Student> {
    db.mutate(&[Collection::Students], |state| {
        let student = scoped_student_mut(state, instructor_id, student_id)?;
        tracking::mark_attendance(student, date, mark);
        Ok(student.clone())
    })
    .await
}

pub async fn mark_reading(
    db: &Database,
    instructor_id: i64,
    student_id: i64,
    date: NaiveDate,
    mark: ReadingMark,
) -> KasifResult<Student> {
    db.mutate(&[Collection::Students], |state| {
        let student = scoped_student_mut(state, instructor_id, student_id)?;
        tracking::mark_reading(student, date, mark);
        Ok(student.clone())
    })
    .await
}

pub async fn mark_memorization(
    db: &Database,
    instructor_id: i64,
    student_id: i64,
    surah_id: &str,
    mark: MemorizationMark,
) -> KasifResult<Student> {
    db.mutate(&[Collection::Students], |state| {
        let student = scoped_student_mut(state, instructor_id, student_id)?;
        tracking::mark_memorization(student, surah_id, mark)?;
        Ok(student.clone())
    })
    .await
}

pub async fn award_badge(
    db: &Database,
    instructor_id: i64,
    student_id: i64,
    badge_id: &str,
) -> KasifResult<(Outcome, Student)> {
    db.mutate(&[Collection::Students], |state| {
        let badge = state
            .badges
            .iter()
            .find(|b| b.id == badge_id)
            .cloned()
            .ok_or_else(|| KasifError::NotFound(format!("Badge {} not found", badge_id)))?;
        let student = scoped_student_mut(state, instructor_id, student_id)?;
        let outcome = economy::award_badge(student, &badge)?;
        Ok((outcome, student.clone()))
    })
    .await
}

pub async fn record_prayer(
    db: &Database,
    student_id: i64,
    date: NaiveDate,
    prayer_id: &str,
    kind: PrayerKind,
    now_ms: i64,
) -> KasifResult<(Outcome, Student)> {
    db.mutate(&[Collection::Students], |state| {
        let student = student_mut(state, student_id)?;
        let outcome = economy::record_prayer(student, date, prayer_id, kind, now_ms)?;
        Ok((outcome, student.clone()))
    })
    .await
}

pub async fn complete_task(
    db: &Database,
    student_id: i64,
    task_id: i64,
) -> KasifResult<(Outcome, Student)> {
    db.mutate(&[Collection::Students], |state| {
        let task = state
            .tasks
            .iter()
            .find(|t| t.id == task_id)
            .cloned()
            .ok_or_else(|| KasifError::NotFound(format!("Task {} not found", task_id)))?;
        let student = student_mut(state, student_id)?;
        let outcome = economy::complete_task(student, &task)?;
        Ok((outcome, student.clone()))
    })
    .await
}

pub async fn purchase(db: &Database, student_id: i64, item_id: &str) -> KasifResult<Student> {
    let student = db
        .mutate(&[Collection::Students], |state| {
            let item = state
                .market_items
                .iter()
                .find(|i| i.id == item_id)
                .cloned()
                .ok_or_else(|| KasifError::NotFound(format!("Market item {} not found", item_id)))?;
            let student = student_mut(state, student_id)?;
            economy::purchase(student, &item)?;
            Ok(student.clone())
        })
        .await?;

    tracing::info!("Student {} bought {}", student_id, item_id);
    Ok(student)
}

pub async fn credit_quiz(
    db: &Database,
    student_id: i64,
    score: i64,
) -> KasifResult<(Outcome, Student)> {
    db.mutate(&[Collection::Students], |state| {
        let student = student_mut(state, student_id)?;
        let outcome = economy::credit_quiz_score(student, score)?;
        Ok((outcome, student.clone()))
    })
    .await
}

/// Announcements for the student's class plus global ones, newest first.
pub async fn announcements(db: &Database, student_id: i64) -> KasifResult<Vec<Announcement>> {
    let state = db.read().await;
    let student = state
        .student(student_id)
        .ok_or_else(|| KasifError::NotFound(format!("Student with ID {} not found", student_id)))?;

    Ok(state
        .announcements
        .iter()
        .filter(|a| a.is_visible_to(&student.class_code))
        .cloned()
        .collect())
}
