use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A thesis topic proposed by a student
///
/// A student has at most one topic in every query path; the store does not
/// enforce it structurally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub student_email: String,
    pub title: String,
    pub description: String,
    pub approved: bool,
    /// Reviewer feedback written by the last review
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    /// Free-form notes from the student
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub registered_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl Topic {
    /// Review state derived from `reviewed_at` and `approved`
    pub fn review_state(&self) -> TopicReviewState {
        match (self.reviewed_at, self.approved) {
            (_, true) => TopicReviewState::Approved,
            (Some(_), false) => TopicReviewState::Rejected,
            (None, false) => TopicReviewState::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicReviewState {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTopic {
    pub student_email: String,
    pub title: String,
    pub description: String,
    pub comments: Option<String>,
}

/// Edit of the student-owned topic fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub comments: Option<String>,
}

impl TopicUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    pub(crate) fn apply_to(self, topic: &mut Topic) {
        if let Some(v) = self.title {
            topic.title = v;
        }
        if let Some(v) = self.description {
            topic.description = v;
        }
        if let Some(v) = self.comments {
            topic.comments = Some(v);
        }
    }
}

/// Tutor decision on a topic
#[derive(Debug, Clone, PartialEq)]
pub enum TopicReview {
    Approve { observations: Option<String> },
    /// Rejection must tell the student what to revise
    Reject { observations: String },
}

impl TopicReview {
    pub fn is_approval(&self) -> bool {
        matches!(self, TopicReview::Approve { .. })
    }
}
