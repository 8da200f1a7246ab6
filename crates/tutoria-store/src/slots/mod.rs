//! Slot storage backends
//!
//! A slot is one named JSON document. Backends store whole payloads and know
//! nothing about the entities inside them.

#![allow(clippy::result_large_err)]

mod memory;
mod sqlite;

pub use memory::MemorySlotStorage;
pub use sqlite::SqliteSlotStorage;

use crate::errors::Result;
use tutoria_core::Slot;

/// Key-value persistence for the six collection slots
pub trait SlotStorage {
    /// Read a slot's payload; `None` if it was never written
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the backend cannot be read.
    fn read_slot(&self, slot: Slot) -> Result<Option<String>>;

    /// Write several slots atomically: either all land or none do
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the write fails; nothing is written.
    fn write_slots(&mut self, entries: &[(Slot, String)]) -> Result<()>;

    /// Write a single slot
    ///
    /// # Errors
    ///
    /// Same as `write_slots`.
    fn write_slot(&mut self, slot: Slot, payload: String) -> Result<()> {
        self.write_slots(&[(slot, payload)])
    }
}
