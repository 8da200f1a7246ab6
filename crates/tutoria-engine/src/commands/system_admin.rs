//! Reset and seeding

#![allow(clippy::result_large_err)]

use crate::system::TutoringSystem;
use tutoria_core::Command;
use tutoria_core_types::RequestContext;
use tutoria_store::errors::Result;
use tutoria_store::SlotStorage;

impl<S: SlotStorage> TutoringSystem<S> {
    /// Empty every collection; nothing is reseeded until the next open
    ///
    /// # Errors
    ///
    /// `ERR_PERSISTENCE` if write-back failed.
    pub fn reset_system(&mut self, ctx: &RequestContext) -> Result<()> {
        self.execute(Command::SystemReset, ctx).map(|_| ())
    }

    /// Seed the default dataset if there are no users; returns whether it did
    ///
    /// # Errors
    ///
    /// `ERR_PERSISTENCE` if write-back failed.
    pub fn ensure_default_data(&mut self, ctx: &RequestContext) -> Result<bool> {
        let applied = self.execute(Command::EnsureDefaultData, ctx)?;
        Ok(applied.affected > 0)
    }

    /// Clear everything and write the default dataset
    ///
    /// # Errors
    ///
    /// `ERR_PERSISTENCE` if write-back failed.
    pub fn force_recreate_default_data(&mut self, ctx: &RequestContext) -> Result<()> {
        self.execute(Command::ForceRecreateDefaultData, ctx)
            .map(|_| ())
    }
}
