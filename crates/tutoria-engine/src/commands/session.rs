//! Tutoring session requests and their review transitions

#![allow(clippy::result_large_err)]

use crate::system::TutoringSystem;
use tutoria_core::{Command, NewSession, SessionUpdate};
use tutoria_core_types::RequestContext;
use tutoria_store::errors::Result;
use tutoria_store::SlotStorage;

impl<S: SlotStorage> TutoringSystem<S> {
    /// Request a session; the tutor is notified
    ///
    /// # Errors
    ///
    /// `ERR_PERSISTENCE` if write-back failed.
    pub fn create_session(&mut self, session: NewSession, ctx: &RequestContext) -> Result<String> {
        let applied = self.execute(Command::SessionCreate { session }, ctx)?;
        Ok(applied.created_id.unwrap_or_default())
    }

    /// # Errors
    ///
    /// `ERR_TERMINAL_STATE` if the session was rejected or completed.
    pub fn update_session(
        &mut self,
        session_id: &str,
        update: SessionUpdate,
        ctx: &RequestContext,
    ) -> Result<()> {
        self.execute(
            Command::SessionUpdate {
                session_id: session_id.to_string(),
                update,
            },
            ctx,
        )
        .map(|_| ())
    }

    /// pending → accepted
    ///
    /// # Errors
    ///
    /// `ERR_ILLEGAL_TRANSITION` / `ERR_TERMINAL_STATE` from any other state.
    pub fn accept_session(
        &mut self,
        session_id: &str,
        observations: Option<String>,
        ctx: &RequestContext,
    ) -> Result<()> {
        self.execute(
            Command::SessionAccept {
                session_id: session_id.to_string(),
                observations,
            },
            ctx,
        )
        .map(|_| ())
    }

    /// pending → rejected
    ///
    /// # Errors
    ///
    /// `ERR_MISSING_FIELD` on a blank reason, plus the transition errors.
    pub fn reject_session(
        &mut self,
        session_id: &str,
        reason: &str,
        ctx: &RequestContext,
    ) -> Result<()> {
        self.execute(
            Command::SessionReject {
                session_id: session_id.to_string(),
                reason: reason.to_string(),
            },
            ctx,
        )
        .map(|_| ())
    }

    /// accepted → completed
    ///
    /// # Errors
    ///
    /// `ERR_MISSING_FIELD` on a blank grade, plus the transition errors.
    pub fn complete_session(
        &mut self,
        session_id: &str,
        grade: &str,
        observations: Option<String>,
        ctx: &RequestContext,
    ) -> Result<()> {
        self.execute(
            Command::SessionComplete {
                session_id: session_id.to_string(),
                grade: grade.to_string(),
                observations,
            },
            ctx,
        )
        .map(|_| ())
    }

    /// # Errors
    ///
    /// `ERR_PERSISTENCE` if write-back failed.
    pub fn delete_session(&mut self, session_id: &str, ctx: &RequestContext) -> Result<()> {
        self.execute(
            Command::SessionDelete {
                session_id: session_id.to_string(),
            },
            ctx,
        )
        .map(|_| ())
    }
}
