//! Tutoria Store - persisted key-value layer for the tutoring store
//!
//! Provides:
//! - Six named slots, one JSON array per entity collection
//! - `SlotStorage` with a SQLite backend (embedded, checksummed migrations)
//!   and an in-memory backend for tests
//! - Hydration of a `Store` from slots and write-back of dirty slots

pub mod db;
pub mod errors;
pub mod hydration;
pub mod migrations;
pub mod slots;

// Re-export key types
pub use errors::Result;
pub use hydration::{hydrate, persist_dirty};
pub use slots::{MemorySlotStorage, SlotStorage, SqliteSlotStorage};
