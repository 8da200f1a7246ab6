//! User registration, profile edits and password recovery

#![allow(clippy::result_large_err)]

use crate::system::TutoringSystem;
use tutoria_core::{Command, NewUser, User, UserUpdate};
use tutoria_core_types::{RequestContext, Sensitive};
use tutoria_store::errors::Result;
use tutoria_store::SlotStorage;

impl<S: SlotStorage> TutoringSystem<S> {
    /// Register a user and return its id
    ///
    /// # Errors
    ///
    /// - `ERR_ALREADY_EXISTS`: the email is taken
    /// - `ERR_PERSISTENCE`: write-back failed
    pub fn create_user(&mut self, user: NewUser, ctx: &RequestContext) -> Result<String> {
        let applied = self.execute(Command::UserCreate { user }, ctx)?;
        Ok(applied.created_id.unwrap_or_default())
    }

    /// Insert or replace a full user record, keyed by email
    ///
    /// # Errors
    ///
    /// `ERR_PERSISTENCE` if write-back failed.
    pub fn save_user(&mut self, user: User, ctx: &RequestContext) -> Result<()> {
        self.execute(Command::UserSave { user }, ctx).map(|_| ())
    }

    /// # Errors
    ///
    /// `ERR_PERSISTENCE` if write-back failed.
    pub fn update_user(
        &mut self,
        email: &str,
        update: UserUpdate,
        ctx: &RequestContext,
    ) -> Result<()> {
        self.execute(
            Command::UserUpdate {
                email: email.to_string(),
                update,
            },
            ctx,
        )
        .map(|_| ())
    }

    /// Delete a user and everything that references them, except notifications
    ///
    /// # Errors
    ///
    /// `ERR_PERSISTENCE` if write-back failed.
    pub fn delete_user(&mut self, email: &str, ctx: &RequestContext) -> Result<()> {
        self.execute(
            Command::UserDelete {
                email: email.to_string(),
            },
            ctx,
        )
        .map(|_| ())
    }

    /// Set a new password after checking the security answer
    ///
    /// # Errors
    ///
    /// - `ERR_NOT_FOUND`: unknown email
    /// - `ERR_CREDENTIAL_MISMATCH`: wrong answer
    pub fn recover_password(
        &mut self,
        email: &str,
        answer: &str,
        new_password: &str,
        ctx: &RequestContext,
    ) -> Result<()> {
        self.execute(
            Command::PasswordRecover {
                email: email.to_string(),
                answer: answer.to_string(),
                new_password: Sensitive::new(new_password.to_string()),
            },
            ctx,
        )
        .map(|_| ())
    }
}
