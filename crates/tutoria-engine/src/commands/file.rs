#![allow(clippy::result_large_err)]

use crate::system::TutoringSystem;
use tutoria_core::{Command, NewFile};
use tutoria_core_types::RequestContext;
use tutoria_store::errors::Result;
use tutoria_store::SlotStorage;

impl<S: SlotStorage> TutoringSystem<S> {
    /// Store an uploaded file; the student's tutor, if any, is notified
    ///
    /// Content is kept as given and only decoded on export.
    ///
    /// # Errors
    ///
    /// `ERR_PERSISTENCE` if write-back failed.
    pub fn create_file(&mut self, file: NewFile, ctx: &RequestContext) -> Result<String> {
        let applied = self.execute(Command::FileCreate { file }, ctx)?;
        Ok(applied.created_id.unwrap_or_default())
    }

    /// # Errors
    ///
    /// `ERR_PERSISTENCE` if write-back failed.
    pub fn delete_file(&mut self, file_id: &str, ctx: &RequestContext) -> Result<()> {
        self.execute(
            Command::FileDelete {
                file_id: file_id.to_string(),
            },
            ctx,
        )
        .map(|_| ())
    }
}
