use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TutoriaError;

/// Tutoring session lifecycle state
///
/// `Pending` is the initial state. `Rejected` and `Completed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SessionStatus {
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "aceptada")]
    Accepted,
    #[serde(rename = "rechazada")]
    Rejected,
    #[serde(rename = "completada")]
    Completed,
}

impl SessionStatus {
    pub const ALL: [SessionStatus; 4] = [
        SessionStatus::Pending,
        SessionStatus::Accepted,
        SessionStatus::Rejected,
        SessionStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Pending => "pendiente",
            SessionStatus::Accepted => "aceptada",
            SessionStatus::Rejected => "rechazada",
            SessionStatus::Completed => "completada",
        }
    }

    /// No transition leaves a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Rejected | SessionStatus::Completed)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionStatus {
    type Err = TutoriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SessionStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TutoriaError::InvalidInput {
                field: "status".to_string(),
                reason: format!("unknown session status '{}'", s),
            })
    }
}

/// A requested tutoring session between a student and a tutor
///
/// Both emails are foreign keys into `User.email` and are not validated at
/// write time. `observations`, `grade` and `rejection_reason` are filled in
/// only by the transitions out of `Pending`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutoringSession {
    pub id: String,
    pub student_email: String,
    pub tutor_email: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub subject: String,
    pub description: String,
    pub status: SessionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TutoringSession {
    pub fn involves(&self, email: &str) -> bool {
        self.student_email == email || self.tutor_email == email
    }
}

/// Session request input; created sessions always start as `Pending`
#[derive(Debug, Clone, PartialEq)]
pub struct NewSession {
    pub student_email: String,
    pub tutor_email: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub subject: String,
    pub description: String,
}

/// Reschedule or re-describe a session that is not yet terminal
///
/// Status and outcome fields change only through the transition operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionUpdate {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub subject: Option<String>,
    pub description: Option<String>,
}

impl SessionUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn apply_to(self, session: &mut TutoringSession) {
        if let Some(v) = self.date {
            session.date = v;
        }
        if let Some(v) = self.time {
            session.time = v;
        }
        if let Some(v) = self.subject {
            session.subject = v;
        }
        if let Some(v) = self.description {
            session.description = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tags_round_trip_through_from_str() {
        for status in SessionStatus::ALL {
            assert_eq!(status.as_str().parse::<SessionStatus>().unwrap(), status);
        }
        assert!("cancelada".parse::<SessionStatus>().is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!SessionStatus::Pending.is_terminal());
        assert!(!SessionStatus::Accepted.is_terminal());
        assert!(SessionStatus::Rejected.is_terminal());
        assert!(SessionStatus::Completed.is_terminal());
    }

    #[test]
    fn test_session_json_shape() {
        let session = TutoringSession {
            id: "t1".to_string(),
            student_email: "maria.gonzalez@live.uleam.edu.ec".to_string(),
            tutor_email: "carlos.rodriguez@uleam.edu.ec".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
            time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            subject: "Desarrollo del Prototipo".to_string(),
            description: "Revisión del avance".to_string(),
            status: SessionStatus::Accepted,
            observations: None,
            grade: None,
            rejection_reason: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["status"], "aceptada");
        assert_eq!(json["date"], "2024-02-20");
        assert_eq!(json["time"], "14:00:00");
        assert!(json.get("grade").is_none());
        assert!(session.involves("carlos.rodriguez@uleam.edu.ec"));
        assert!(!session.involves("juan.perez@live.uleam.edu.ec"));
    }
}
