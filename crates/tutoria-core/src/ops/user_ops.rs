use chrono::Utc;

use super::store::Store;
use crate::errors::{Result, TutoriaError};
use crate::model::{generate_id, NewUser, User, UserUpdate};

/// Register a new user
///
/// Email uniqueness is the only create-time rejection in the store. The
/// email is trimmed before the check and before storing.
///
/// # Returns
/// The ID of the newly created user
///
/// # Errors
/// * `DuplicateEmail` - If a user with the same email exists; the store is
///   left unchanged
pub fn create_user(store: &mut Store, new_user: NewUser) -> Result<String> {
    let email = new_user.email.trim().to_string();

    if store.has_user(&email) {
        return Err(TutoriaError::DuplicateEmail { email });
    }

    let id = generate_id();
    tracing::debug!(user_id = %id, email = %email, role = %new_user.role, "registering user");

    store.insert_user(User {
        id: id.clone(),
        given_names: new_user.given_names,
        surnames: new_user.surnames,
        email,
        password: new_user.password,
        role: new_user.role,
        faculty: new_user.faculty,
        major: new_user.major,
        specialty: new_user.specialty,
        security_question: new_user.security_question,
        security_answer: new_user.security_answer,
        registered_at: Utc::now(),
    });

    Ok(id)
}

/// Insert or replace a full user record, matched by email
pub fn save_user(store: &mut Store, user: User) {
    let users = store.users_mut();
    match users.iter_mut().find(|u| u.email == user.email) {
        Some(existing) => *existing = user,
        None => users.push(user),
    }
}

/// Apply a profile edit to the user with `email`
///
/// Silently does nothing when no user matches.
pub fn update_user(store: &mut Store, email: &str, update: UserUpdate) -> Result<()> {
    if update.is_empty() || !store.has_user(email) {
        return Ok(());
    }

    if let Some(user) = store.users_mut().iter_mut().find(|u| u.email == email) {
        update.apply_to(user);
    }
    Ok(())
}

/// Delete a user and everything that references them
///
/// Removes sessions where the user is student or tutor, their topics and
/// files, and assignments on either side. Notifications are kept. Unknown
/// emails are a no-op.
pub fn delete_user(store: &mut Store, email: &str) -> Result<()> {
    if !store.has_user(email) {
        return Ok(());
    }

    store.users_mut().retain(|u| u.email != email);

    if store.sessions().iter().any(|s| s.involves(email)) {
        store.sessions_mut().retain(|s| !s.involves(email));
    }
    if store.topics().iter().any(|t| t.student_email == email) {
        store.topics_mut().retain(|t| t.student_email != email);
    }
    if store.files().iter().any(|f| f.student_email == email) {
        store.files_mut().retain(|f| f.student_email != email);
    }
    if store.assignments().iter().any(|a| a.involves(email)) {
        store.assignments_mut().retain(|a| !a.involves(email));
    }

    tracing::debug!(email, "user deleted with dependents");
    Ok(())
}

/// True iff a user with `email` exists and its password equals `password`
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub fn validate_credentials(store: &Store, email: &str, password: &str) -> bool {
    store
        .find_user(email)
        .map(|u| u.password.expose() == password)
        .unwrap_or(false)
}

/// Compare a recovery answer, ignoring case and surrounding whitespace
pub fn verify_security_answer(store: &Store, email: &str, answer: &str) -> bool {
    store
        .find_user(email)
        .map(|u| answers_match(u.security_answer.expose(), answer))
        .unwrap_or(false)
}

/// Reset a password after a correct security answer
///
/// # Errors
/// * `UserNotFound` - If no user has this email
/// * `SecurityAnswerMismatch` - If the answer does not match
/// * `InvalidInput` - If the new password is empty
pub fn recover_password(
    store: &mut Store,
    email: &str,
    answer: &str,
    new_password: &str,
) -> Result<()> {
    let user = store
        .find_user(email)
        .ok_or_else(|| TutoriaError::UserNotFound {
            email: email.to_string(),
        })?;

    if !answers_match(user.security_answer.expose(), answer) {
        return Err(TutoriaError::SecurityAnswerMismatch {
            email: email.to_string(),
        });
    }

    if new_password.is_empty() {
        return Err(TutoriaError::InvalidInput {
            field: "password".to_string(),
            reason: "password cannot be empty".to_string(),
        });
    }

    update_user(store, email, UserUpdate::new().password(new_password))
}

fn answers_match(stored: &str, given: &str) -> bool {
    stored.trim().to_lowercase() == given.trim().to_lowercase()
}
