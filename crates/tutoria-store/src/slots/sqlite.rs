use std::path::Path;

use rusqlite::{Connection, OptionalExtension};

use super::SlotStorage;
use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::migrations::apply_migrations;
use tutoria_core::Slot;

/// Slot storage in a SQLite `slots` table
pub struct SqliteSlotStorage {
    conn: Connection,
}

impl SqliteSlotStorage {
    /// Open a database file, configuring it and applying migrations
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened or a migration fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_connection(db::open(path)?)
    }

    /// In-memory database (for testing)
    ///
    /// # Errors
    ///
    /// Fails if migrations cannot be applied.
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Result<Self> {
        db::configure(&conn)?;
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Underlying connection (for inspection in tests and tooling)
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl SlotStorage for SqliteSlotStorage {
    fn read_slot(&self, slot: Slot) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT payload FROM slots WHERE name = ?",
                [slot.key()],
                |row| row.get(0),
            )
            .optional()
            .map_err(from_rusqlite)
    }

    fn write_slots(&mut self, entries: &[(Slot, String)]) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        let tx = self.conn.transaction().map_err(from_rusqlite)?;

        for (slot, payload) in entries {
            tx.execute(
                "INSERT INTO slots (name, payload, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(name) DO UPDATE SET payload = excluded.payload, updated_at = excluded.updated_at",
                rusqlite::params![slot.key(), payload, now],
            )
            .map_err(from_rusqlite)?;
        }

        tx.commit().map_err(from_rusqlite)?;
        tracing::debug!(slots = entries.len(), "slots written");
        Ok(())
    }
}
