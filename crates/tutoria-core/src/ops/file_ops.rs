use chrono::Utc;

use super::notification_ops::create_notification;
use super::store::Store;
use crate::errors::Result;
use crate::model::{generate_id, FileRecord, NewFile, NotificationPayload};
use crate::queries::relationship_queries::assigned_tutor;

/// Store an uploaded file inline
///
/// Notifies the student's assigned tutor, if one resolves; otherwise no
/// notification is created. Content is stored as given and only decoded
/// on export.
pub fn create_file(store: &mut Store, new_file: NewFile) -> Result<String> {
    let name = new_file.name;
    let student_email = new_file.student_email.trim().to_string();

    let id = generate_id();
    let tutor_email = assigned_tutor(store, &student_email).map(|t| t.email.clone());

    store.insert_file(FileRecord {
        id: id.clone(),
        name: name.clone(),
        mime_type: new_file.mime_type,
        size: new_file.size,
        content: new_file.content,
        student_email: student_email.clone(),
        uploaded_at: Utc::now(),
    });

    match tutor_email {
        Some(tutor_email) => {
            create_notification(
                store,
                &tutor_email,
                format!("El estudiante ha subido un nuevo archivo: {}", name),
                NotificationPayload::FileUploaded {
                    file_id: id.clone(),
                    file_name: name,
                    student_email,
                },
            );
        }
        None => tracing::debug!(file_id = %id, "no assigned tutor; upload not announced"),
    }

    Ok(id)
}

/// Remove a file; unknown ids are a no-op
pub fn delete_file(store: &mut Store, file_id: &str) -> Result<()> {
    if store.files().iter().any(|f| f.id == file_id) {
        store.files_mut().retain(|f| f.id != file_id);
    }
    Ok(())
}
