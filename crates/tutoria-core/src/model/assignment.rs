use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current student-to-tutor pairing, linked by email
///
/// At most one assignment exists per student; assigning again replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub student_email: String,
    pub tutor_email: String,
    pub assigned_at: DateTime<Utc>,
}

impl Assignment {
    pub fn involves(&self, email: &str) -> bool {
        self.student_email == email || self.tutor_email == email
    }
}
