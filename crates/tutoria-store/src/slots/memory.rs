use std::collections::BTreeMap;

use super::SlotStorage;
use crate::errors::Result;
use tutoria_core::Slot;

/// Slot storage held in a map; nothing survives the process
#[derive(Debug, Default, Clone)]
pub struct MemorySlotStorage {
    slots: BTreeMap<Slot, String>,
    writes: usize,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slot payloads written so far
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read_slot(&self, slot: Slot) -> Result<Option<String>> {
        Ok(self.slots.get(&slot).cloned())
    }

    fn write_slots(&mut self, entries: &[(Slot, String)]) -> Result<()> {
        for (slot, payload) in entries {
            self.slots.insert(*slot, payload.clone());
        }
        self.writes += entries.len();
        Ok(())
    }
}
