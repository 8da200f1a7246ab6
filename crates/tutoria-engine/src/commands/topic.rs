#![allow(clippy::result_large_err)]

use crate::system::TutoringSystem;
use tutoria_core::{Command, NewTopic, TopicReview, TopicUpdate};
use tutoria_core_types::RequestContext;
use tutoria_store::errors::Result;
use tutoria_store::SlotStorage;

impl<S: SlotStorage> TutoringSystem<S> {
    /// # Errors
    ///
    /// `ERR_PERSISTENCE` if write-back failed.
    pub fn create_topic(&mut self, topic: NewTopic, ctx: &RequestContext) -> Result<String> {
        let applied = self.execute(Command::TopicCreate { topic }, ctx)?;
        Ok(applied.created_id.unwrap_or_default())
    }

    /// # Errors
    ///
    /// `ERR_PERSISTENCE` if write-back failed.
    pub fn update_topic(
        &mut self,
        topic_id: &str,
        update: TopicUpdate,
        ctx: &RequestContext,
    ) -> Result<()> {
        self.execute(
            Command::TopicUpdate {
                topic_id: topic_id.to_string(),
                update,
            },
            ctx,
        )
        .map(|_| ())
    }

    /// Approve or reject a topic; the student is notified
    ///
    /// # Errors
    ///
    /// `ERR_MISSING_FIELD` when rejecting without observations.
    pub fn review_topic(
        &mut self,
        topic_id: &str,
        review: TopicReview,
        ctx: &RequestContext,
    ) -> Result<()> {
        self.execute(
            Command::TopicReview {
                topic_id: topic_id.to_string(),
                review,
            },
            ctx,
        )
        .map(|_| ())
    }

    /// # Errors
    ///
    /// `ERR_PERSISTENCE` if write-back failed.
    pub fn delete_topic(&mut self, topic_id: &str, ctx: &RequestContext) -> Result<()> {
        self.execute(
            Command::TopicDelete {
                topic_id: topic_id.to_string(),
            },
            ctx,
        )
        .map(|_| ())
    }
}
