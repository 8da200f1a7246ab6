use chrono::Utc;

use super::store::Store;
use crate::errors::{Result, TutoriaError};
use crate::model::{generate_id, Notification, NotificationPayload};
use crate::rules::require_non_blank;

/// Append an unread notification for `user_email`
///
/// Always succeeds. The recipient is not checked against the user list.
///
/// # Returns
/// The ID of the new notification
pub fn create_notification(
    store: &mut Store,
    user_email: &str,
    message: impl Into<String>,
    payload: NotificationPayload,
) -> String {
    let id = generate_id();
    tracing::debug!(
        notification_id = %id,
        user_email,
        kind = payload.kind(),
        "notification queued"
    );

    store.insert_notification(Notification {
        id: id.clone(),
        user_email: user_email.to_string(),
        message: message.into(),
        payload,
        read: false,
        created_at: Utc::now(),
    });

    id
}

/// Free-text message from a tutor to a student
///
/// The tutor's display name is resolved when the tutor is a known user.
///
/// # Errors
/// * `InvalidInput` - If the message is blank
pub fn send_tutor_message(
    store: &mut Store,
    tutor_email: &str,
    student_email: &str,
    message: &str,
) -> Result<String> {
    let text = require_non_blank(message).ok_or_else(|| TutoriaError::InvalidInput {
        field: "message".to_string(),
        reason: "message cannot be empty".to_string(),
    })?;

    let tutor_name = store.find_user(tutor_email).map(|u| u.full_name());
    let payload = NotificationPayload::TutorMessage {
        tutor_email: tutor_email.to_string(),
        tutor_name,
    };

    Ok(create_notification(
        store,
        student_email,
        format!("Mensaje de tu tutor: {}", text),
        payload,
    ))
}

/// Flip one notification to read
///
/// Idempotent; unknown ids are ignored. The slot is only marked dirty when
/// something changed.
pub fn mark_as_read(store: &mut Store, notification_id: &str) {
    let unread = store
        .notifications()
        .iter()
        .any(|n| n.id == notification_id && !n.read);
    if !unread {
        return;
    }

    for n in store.notifications_mut() {
        if n.id == notification_id {
            n.read = true;
        }
    }
}

/// Mark every notification addressed to `user_email` as read
///
/// # Returns
/// How many notifications changed state (0 on a repeated call)
pub fn mark_all_as_read(store: &mut Store, user_email: &str) -> usize {
    let pending = store
        .notifications()
        .iter()
        .filter(|n| n.user_email == user_email && !n.read)
        .count();
    if pending == 0 {
        return 0;
    }

    for n in store.notifications_mut() {
        if n.user_email == user_email {
            n.read = true;
        }
    }
    pending
}
