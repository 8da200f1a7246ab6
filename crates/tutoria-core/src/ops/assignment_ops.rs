use chrono::Utc;

use super::notification_ops::create_notification;
use super::store::Store;
use crate::errors::Result;
use crate::model::{generate_id, Assignment, NotificationPayload};

/// Pair a student with a tutor, replacing any previous pairing
///
/// Exactly one assignment exists for the student afterwards. The student
/// receives a `TutorAssigned` notification.
///
/// # Returns
/// The ID of the new assignment
pub fn assign_tutor_to_student(
    store: &mut Store,
    student_email: &str,
    tutor_email: &str,
) -> Result<String> {
    let student_email = student_email.trim().to_string();
    let tutor_email = tutor_email.trim().to_string();

    let id = generate_id();
    let assignments = store.assignments_mut();
    assignments.retain(|a| a.student_email != student_email);
    assignments.push(Assignment {
        id: id.clone(),
        student_email: student_email.clone(),
        tutor_email: tutor_email.clone(),
        assigned_at: Utc::now(),
    });

    tracing::debug!(assignment_id = %id, student_email = %student_email, tutor_email = %tutor_email, "tutor assigned");
    create_notification(
        store,
        &student_email,
        "Se te ha asignado un tutor para tu proceso de titulación",
        NotificationPayload::TutorAssigned { tutor_email },
    );

    Ok(id)
}

/// Drop the student's current pairing, if any
pub fn remove_assignment(store: &mut Store, student_email: &str) -> Result<()> {
    if store
        .assignments()
        .iter()
        .any(|a| a.student_email == student_email)
    {
        store
            .assignments_mut()
            .retain(|a| a.student_email != student_email);
    }
    Ok(())
}

/// Remove an assignment by id; unknown ids are a no-op
pub fn delete_assignment(store: &mut Store, assignment_id: &str) -> Result<()> {
    if store.assignments().iter().any(|a| a.id == assignment_id) {
        store.assignments_mut().retain(|a| a.id != assignment_id);
    }
    Ok(())
}
