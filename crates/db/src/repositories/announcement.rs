use chrono::NaiveDate;
use kasif_core::{
    errors::{KasifError, KasifResult},
    ids,
    models::announcement::{display_date, Announcement, CreateAnnouncementRequest},
};

use crate::{schema::Collection, Database};

/// Announcements addressed to any of the instructor's classes, plus global ones.
pub async fn list_for_instructor(
    db: &Database,
    instructor_id: i64,
) -> KasifResult<Vec<Announcement>> {
    let state = db.read().await;
    let instructor = state.instructor(instructor_id).ok_or_else(|| {
        KasifError::NotFound(format!("Instructor with ID {} not found", instructor_id))
    })?;

    Ok(state
        .announcements
        .iter()
        .filter(|a| match &a.class_code {
            Some(code) => instructor.owns_code(code),
            None => true,
        })
        .cloned()
        .collect())
}

/// Posts an announcement to one of the instructor's own classes. Newest first.
pub async fn create(
    db: &Database,
    instructor_id: i64,
    req: &CreateAnnouncementRequest,
    today: NaiveDate,
) -> KasifResult<Announcement> {
    if [&req.title, &req.message, &req.target_group]
        .iter()
        .any(|f| f.trim().is_empty())
    {
        return Err(KasifError::Validation("Please fill in all fields".to_string()));
    }

    let announcement = db
        .mutate(&[Collection::Announcements], |state| {
            let instructor = state.instructor(instructor_id).ok_or_else(|| {
                KasifError::NotFound(format!("Instructor with ID {} not found", instructor_id))
            })?;
            if !instructor.owns_code(req.target_group.trim()) {
                return Err(KasifError::Authorization(format!(
                    "Class code {} does not belong to you",
                    req.target_group.trim()
                )));
            }

            let announcement = Announcement {
                id: ids::next_id(),
                title: req.title.trim().to_string(),
                message: req.message.trim().to_string(),
                date: display_date(today),
                class_code: Some(req.target_group.trim().to_string()),
            };
            state.announcements.insert(0, announcement.clone());
            Ok(announcement)
        })
        .await?;

    tracing::info!(
        "Instructor {} posted announcement {} to {:?}",
        instructor_id,
        announcement.id,
        announcement.class_code
    );
    Ok(announcement)
}
