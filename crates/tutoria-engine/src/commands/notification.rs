#![allow(clippy::result_large_err)]

use crate::system::TutoringSystem;
use tutoria_core::{Command, NotificationPayload};
use tutoria_core_types::RequestContext;
use tutoria_store::errors::Result;
use tutoria_store::SlotStorage;

impl<S: SlotStorage> TutoringSystem<S> {
    /// # Errors
    ///
    /// `ERR_PERSISTENCE` if write-back failed.
    pub fn create_notification(
        &mut self,
        user_email: &str,
        message: &str,
        payload: NotificationPayload,
        ctx: &RequestContext,
    ) -> Result<String> {
        let applied = self.execute(
            Command::NotificationCreate {
                user_email: user_email.to_string(),
                message: message.to_string(),
                payload,
            },
            ctx,
        )?;
        Ok(applied.created_id.unwrap_or_default())
    }

    /// # Errors
    ///
    /// `ERR_INVALID_INPUT` on a blank message.
    pub fn send_tutor_message(
        &mut self,
        tutor_email: &str,
        student_email: &str,
        message: &str,
        ctx: &RequestContext,
    ) -> Result<String> {
        let applied = self.execute(
            Command::TutorMessage {
                tutor_email: tutor_email.to_string(),
                student_email: student_email.to_string(),
                message: message.to_string(),
            },
            ctx,
        )?;
        Ok(applied.created_id.unwrap_or_default())
    }

    /// # Errors
    ///
    /// `ERR_PERSISTENCE` if write-back failed.
    pub fn mark_as_read(&mut self, notification_id: &str, ctx: &RequestContext) -> Result<()> {
        self.execute(
            Command::NotificationMarkRead {
                notification_id: notification_id.to_string(),
            },
            ctx,
        )
        .map(|_| ())
    }

    /// Returns how many notifications flipped to read
    ///
    /// # Errors
    ///
    /// `ERR_PERSISTENCE` if write-back failed.
    pub fn mark_all_as_read(&mut self, user_email: &str, ctx: &RequestContext) -> Result<usize> {
        let applied = self.execute(
            Command::NotificationMarkAllRead {
                user_email: user_email.to_string(),
            },
            ctx,
        )?;
        Ok(applied.affected)
    }
}
