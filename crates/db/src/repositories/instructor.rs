use kasif_core::{
    errors::{KasifError, KasifResult},
    ids,
    models::{
        instructor::{Instructor, RegisterInstructorRequest, UpdateCredentialsRequest},
        state::AppState,
    },
    rules::{class_code, registration},
};

use crate::{repositories::credentials, schema::Collection, Database};

fn instructor_mut(state: &mut AppState, id: i64) -> KasifResult<&mut Instructor> {
    state
        .instructor_mut(id)
        .ok_or_else(|| KasifError::NotFound(format!("Instructor with ID {} not found", id)))
}

/// Creates an instructor account. Used by self-registration and by the admin panel.
pub async fn register(db: &Database, req: &RegisterInstructorRequest) -> KasifResult<Instructor> {
    {
        let state = db.read().await;
        registration::validate_instructor_registration(&state, req)?;
    }

    let password_hash = credentials::hash_password(&req.password)?;

    let instructor = db
        .mutate(&[Collection::Instructors], |state| {
            registration::validate_instructor_registration(state, req)?;
            let instructor = registration::new_instructor(ids::next_id(), req, password_hash);
            state.instructors.push(instructor.clone());
            Ok(instructor)
        })
        .await?;

    tracing::info!("Registered instructor {} ({})", instructor.id, instructor.username);
    Ok(instructor)
}

pub async fn authenticate(
    db: &Database,
    username: &str,
    password: &str,
) -> KasifResult<Instructor> {
    let state = db.read().await;
    state
        .instructors
        .iter()
        .find(|i| i.username == username)
        .filter(|i| credentials::verify_password(&i.password_hash, password))
        .cloned()
        .ok_or_else(|| KasifError::Authentication("Invalid username or password".to_string()))
}

pub async fn get(db: &Database, id: i64) -> KasifResult<Instructor> {
    db.read()
        .await
        .instructor(id)
        .cloned()
        .ok_or_else(|| KasifError::NotFound(format!("Instructor with ID {} not found", id)))
}

/// Case-insensitive substring match on name or username; `None` lists everyone.
pub async fn list(db: &Database, search: Option<&str>) -> Vec<Instructor> {
    let needle = search.map(str::to_lowercase).unwrap_or_default();
    db.read()
        .await
        .instructors
        .iter()
        .filter(|i| {
            needle.is_empty()
                || i.name.to_lowercase().contains(&needle)
                || i.username.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Issues a fresh class code to the instructor and returns it.
pub async fn generate_class_code(db: &Database, id: i64) -> KasifResult<(String, Instructor)> {
    let (code, instructor) = db
        .mutate(&[Collection::Instructors], |state| {
            let instructor = instructor_mut(state, id)?;
            let code =
                class_code::generate_class_code(&instructor.class_codes, &mut rand::thread_rng());
            instructor.class_codes.push(code.clone());
            Ok((code, instructor.clone()))
        })
        .await?;

    tracing::info!("Instructor {} generated class code {}", id, code);
    Ok((code, instructor))
}

pub async fn update_credentials(
    db: &Database,
    id: i64,
    req: &UpdateCredentialsRequest,
) -> KasifResult<Instructor> {
    {
        let state = db.read().await;
        registration::validate_credentials_update(&state, id, req)?;
    }

    let password_hash = credentials::hash_password(&req.password)?;

    db.mutate(&[Collection::Instructors], |state| {
        registration::validate_credentials_update(state, id, req)?;
        let instructor = instructor_mut(state, id)?;
        instructor.username = req.username.trim().to_string();
        instructor.password_hash = password_hash;
        Ok(instructor.clone())
    })
    .await
}

pub async fn reset_password(db: &Database, id: i64, password: &str) -> KasifResult<Instructor> {
    if password.is_empty() {
        return Err(KasifError::Validation("Password cannot be empty".to_string()));
    }

    let password_hash = credentials::hash_password(password)?;

    db.mutate(&[Collection::Instructors], |state| {
        let instructor = instructor_mut(state, id)?;
        instructor.password_hash = password_hash;
        Ok(instructor.clone())
    })
    .await
}

/// Removes the instructor. Students in their classes are kept.
pub async fn delete(db: &Database, id: i64) -> KasifResult<()> {
    db.mutate(&[Collection::Instructors], |state| {
        let before = state.instructors.len();
        state.instructors.retain(|i| i.id != id);
        if state.instructors.len() == before {
            return Err(KasifError::NotFound(format!("Instructor with ID {} not found", id)));
        }
        Ok(())
    })
    .await?;

    tracing::info!("Deleted instructor {}", id);
    Ok(())
}

pub async fn delete_class_code(db: &Database, id: i64, code: &str) -> KasifResult<Instructor> {
    db.mutate(&[Collection::Instructors], |state| {
        let instructor = instructor_mut(state, id)?;
        if !instructor.owns_code(code) {
            return Err(KasifError::NotFound(format!(
                "Instructor {} has no class code {}",
                id, code
            )));
        }
        instructor.class_codes.retain(|c| c != code);
        Ok(instructor.clone())
    })
    .await
}
