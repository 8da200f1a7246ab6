//! The store object shared by every caller in a process
//!
//! ## Logging Ownership
//!
//! The engine owns lifecycle logging for every mutation:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

#![allow(clippy::result_large_err)]

use std::path::Path;
use std::time::Instant;

use tutoria_core::{apply, log_op_end, log_op_error, log_op_start, Applied, Command, Store};
use tutoria_core_types::RequestContext;
use tutoria_store::errors::Result;
use tutoria_store::{
    hydrate, persist_dirty, MemorySlotStorage, SlotStorage, SqliteSlotStorage,
};

/// Hydrated store plus the storage it persists to
///
/// Constructed once at startup and passed by reference. Reads go straight
/// to the in-memory store; mutations go through `execute`.
pub struct TutoringSystem<S: SlotStorage> {
    storage: S,
    store: Store,
}

impl TutoringSystem<SqliteSlotStorage> {
    /// Open (or create) a SQLite-backed system at `path`
    ///
    /// # Errors
    ///
    /// Fails if the database cannot be opened, a slot does not decode, or
    /// seeding cannot be written back.
    pub fn open_sqlite<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open(SqliteSlotStorage::open(path)?)
    }
}

impl TutoringSystem<MemorySlotStorage> {
    /// System over fresh in-memory storage, seeded with the default dataset
    ///
    /// # Errors
    ///
    /// Same as `open`.
    pub fn in_memory() -> Result<Self> {
        Self::open(MemorySlotStorage::new())
    }
}

impl<S: SlotStorage> TutoringSystem<S> {
    /// Load every slot once, then seed the default dataset if there are no users
    ///
    /// # Errors
    ///
    /// Fails on a storage error or a slot payload that does not decode.
    pub fn open(storage: S) -> Result<Self> {
        let store = hydrate(&storage)?;
        let mut system = Self { storage, store };
        system.execute(Command::EnsureDefaultData, &RequestContext::new())?;
        Ok(system)
    }

    /// Apply a command, write back the dirty slots, then publish the new state
    ///
    /// The published store only changes when both the command and the
    /// write-back succeed.
    ///
    /// # Errors
    ///
    /// Returns the command's domain error (as `ExError`) or a persistence
    /// error. Either way the error carries the op name and request id.
    pub fn execute(&mut self, cmd: Command, ctx: &RequestContext) -> Result<Applied> {
        let op = cmd.name();
        log_op_start!(op, ctx);
        let started = Instant::now();

        let applied = self.execute_impl(cmd).map_err(|e| {
            let e = if e.op().is_none() { e.with_op(op) } else { e };
            let e = e.with_request_id(ctx.request_id.clone());
            log_op_error!(op, ctx, started, e.clone());
            e
        })?;

        log_op_end!(op, ctx, started);
        Ok(applied)
    }

    // The clone is shallow; `Store` copies a collection only when the
    // command first mutates it.
    fn execute_impl(&mut self, cmd: Command) -> Result<Applied> {
        let (mut next, applied) = apply(self.store.clone(), cmd)?;
        let written = persist_dirty(&mut self.storage, &mut next)?;
        tracing::debug!(slots = written, "write-back complete");
        self.store = next;
        Ok(applied)
    }

    /// Read-only view of the current state
    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
