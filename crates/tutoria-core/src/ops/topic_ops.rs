use chrono::Utc;

use super::notification_ops::create_notification;
use super::store::Store;
use crate::errors::{Result, TutoriaError};
use crate::model::{generate_id, NewTopic, NotificationPayload, Topic, TopicReview, TopicUpdate};
use crate::rules::require_non_blank;

/// Propose a thesis topic
///
/// New topics are unapproved and unreviewed. Creation never fails.
pub fn create_topic(store: &mut Store, new_topic: NewTopic) -> Result<String> {
    let title = new_topic.title;
    let student_email = new_topic.student_email.trim().to_string();

    let id = generate_id();
    store.insert_topic(Topic {
        id: id.clone(),
        student_email,
        title,
        description: new_topic.description,
        approved: false,
        observations: None,
        comments: new_topic.comments,
        registered_at: Utc::now(),
        reviewed_at: None,
    });
    Ok(id)
}

/// Edit title, description or comments; unknown ids are a no-op
pub fn update_topic(store: &mut Store, topic_id: &str, update: TopicUpdate) -> Result<()> {
    if !store.topics().iter().any(|t| t.id == topic_id) {
        return Ok(());
    }

    if let Some(topic) = store.topics_mut().iter_mut().find(|t| t.id == topic_id) {
        update.apply_to(topic);
    }
    Ok(())
}

/// Record a tutor's decision on a topic and notify the student
///
/// Every review stamps `reviewed_at`, so a rejected topic stays
/// distinguishable from one never reviewed. Unknown ids are a no-op.
///
/// # Errors
/// * `MissingTopicObservations` - If a rejection carries blank observations
pub fn review_topic(store: &mut Store, topic_id: &str, review: TopicReview) -> Result<()> {
    let Some(current) = store.topics().iter().find(|t| t.id == topic_id) else {
        return Ok(());
    };
    let (student_email, title) = (current.student_email.clone(), current.title.clone());

    let (approved, observations) = match review {
        TopicReview::Approve { observations } => (
            true,
            observations.as_deref().and_then(require_non_blank),
        ),
        TopicReview::Reject { observations } => {
            let obs = require_non_blank(&observations).ok_or_else(|| {
                TutoriaError::MissingTopicObservations {
                    topic_id: topic_id.to_string(),
                }
            })?;
            (false, Some(obs))
        }
    };

    if let Some(topic) = store.topics_mut().iter_mut().find(|t| t.id == topic_id) {
        topic.approved = approved;
        topic.observations = observations.clone();
        topic.reviewed_at = Some(Utc::now());
    }

    let (message, payload) = if approved {
        (
            format!("Tu tema \"{}\" ha sido aprobado por tu tutor", title),
            NotificationPayload::TopicApproved {
                topic_id: topic_id.to_string(),
                title,
                observations,
            },
        )
    } else {
        (
            format!("Tu tema \"{}\" necesita revisión", title),
            NotificationPayload::TopicRejected {
                topic_id: topic_id.to_string(),
                title,
                observations: observations.unwrap_or_default(),
            },
        )
    };
    create_notification(store, &student_email, message, payload);
    Ok(())
}

/// Remove a topic; unknown ids are a no-op
pub fn delete_topic(store: &mut Store, topic_id: &str) -> Result<()> {
    if store.topics().iter().any(|t| t.id == topic_id) {
        store.topics_mut().retain(|t| t.id != topic_id);
    }
    Ok(())
}
