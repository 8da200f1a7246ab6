#![allow(clippy::result_large_err)]

use crate::system::TutoringSystem;
use tutoria_core::Command;
use tutoria_core_types::RequestContext;
use tutoria_store::errors::Result;
use tutoria_store::SlotStorage;

impl<S: SlotStorage> TutoringSystem<S> {
    /// Pair a student with a tutor, replacing any earlier pairing
    ///
    /// Returns the new assignment id.
    ///
    /// # Errors
    ///
    /// `ERR_PERSISTENCE` if write-back failed.
    pub fn assign_tutor_to_student(
        &mut self,
        student_email: &str,
        tutor_email: &str,
        ctx: &RequestContext,
    ) -> Result<String> {
        let applied = self.execute(
            Command::AssignTutor {
                student_email: student_email.to_string(),
                tutor_email: tutor_email.to_string(),
            },
            ctx,
        )?;
        Ok(applied.created_id.unwrap_or_default())
    }

    /// # Errors
    ///
    /// `ERR_PERSISTENCE` if write-back failed.
    pub fn remove_assignment(&mut self, student_email: &str, ctx: &RequestContext) -> Result<()> {
        self.execute(
            Command::AssignmentRemove {
                student_email: student_email.to_string(),
            },
            ctx,
        )
        .map(|_| ())
    }

    /// # Errors
    ///
    /// `ERR_PERSISTENCE` if write-back failed.
    pub fn delete_assignment(&mut self, assignment_id: &str, ctx: &RequestContext) -> Result<()> {
        self.execute(
            Command::AssignmentDelete {
                assignment_id: assignment_id.to_string(),
            },
            ctx,
        )
        .map(|_| ())
    }
}
