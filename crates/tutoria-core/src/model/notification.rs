use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Typed payload of a notification, one variant per event kind
///
/// Serialized adjacently tagged: `{"kind": "NUEVA_SOLICITUD", "data": {...}}`.
/// The tag strings are the persisted kind names and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum NotificationPayload {
    #[serde(rename = "NUEVA_SOLICITUD")]
    NewSessionRequest { session_id: String, subject: String },

    #[serde(rename = "TUTORIA_ACEPTADA")]
    SessionAccepted { session_id: String, subject: String },

    #[serde(rename = "TUTORIA_RECHAZADA")]
    SessionRejected {
        session_id: String,
        subject: String,
        reason: String,
    },

    #[serde(rename = "TUTORIA_COMPLETADA")]
    SessionCompleted {
        session_id: String,
        subject: String,
        grade: String,
    },

    #[serde(rename = "TEMA_APROBADO")]
    TopicApproved {
        topic_id: String,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        observations: Option<String>,
    },

    #[serde(rename = "TEMA_RECHAZADO")]
    TopicRejected {
        topic_id: String,
        title: String,
        observations: String,
    },

    #[serde(rename = "TUTOR_ASIGNADO")]
    TutorAssigned { tutor_email: String },

    #[serde(rename = "ARCHIVO_SUBIDO")]
    FileUploaded {
        file_id: String,
        file_name: String,
        student_email: String,
    },

    #[serde(rename = "MENSAJE_TUTOR")]
    TutorMessage {
        tutor_email: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tutor_name: Option<String>,
    },
}

impl NotificationPayload {
    /// Persisted kind tag
    pub fn kind(&self) -> &'static str {
        match self {
            NotificationPayload::NewSessionRequest { .. } => "NUEVA_SOLICITUD",
            NotificationPayload::SessionAccepted { .. } => "TUTORIA_ACEPTADA",
            NotificationPayload::SessionRejected { .. } => "TUTORIA_RECHAZADA",
            NotificationPayload::SessionCompleted { .. } => "TUTORIA_COMPLETADA",
            NotificationPayload::TopicApproved { .. } => "TEMA_APROBADO",
            NotificationPayload::TopicRejected { .. } => "TEMA_RECHAZADO",
            NotificationPayload::TutorAssigned { .. } => "TUTOR_ASIGNADO",
            NotificationPayload::FileUploaded { .. } => "ARCHIVO_SUBIDO",
            NotificationPayload::TutorMessage { .. } => "MENSAJE_TUTOR",
        }
    }
}

/// An inbox entry addressed to a user by email
///
/// Created only as a side effect of other mutations or by explicit
/// messaging. Only `read` ever changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_email: String,
    pub message: String,
    pub payload: NotificationPayload,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn kind(&self) -> &'static str {
        self.payload.kind()
    }
}
