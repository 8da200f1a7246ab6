//! Loading a `Store` from slot storage and writing changes back

#![allow(clippy::result_large_err)]

use crate::errors::{slot_decode_error, Result};
use crate::slots::SlotStorage;
use tutoria_core::{Slot, Store};

/// Build a store from every slot; missing slots load as empty collections
///
/// # Errors
///
/// Fails on a storage error or a payload that does not decode.
pub fn hydrate<S: SlotStorage + ?Sized>(storage: &S) -> Result<Store> {
    let mut store = Store::new();

    for slot in Slot::ALL {
        if let Some(payload) = storage.read_slot(slot)? {
            store
                .load_slot_json(slot, &payload)
                .map_err(|e| slot_decode_error(slot, e))?;
        }
    }

    tracing::debug!(
        users = store.users().len(),
        sessions = store.sessions().len(),
        "store hydrated"
    );
    Ok(store)
}

/// Write back the slots the store marked dirty, in one atomic batch
///
/// The dirty set is drained only once the write succeeds, so a failed write
/// leaves the store ready to retry. Returns the number of slots written.
///
/// # Errors
///
/// Fails on a serialization or storage error.
pub fn persist_dirty<S: SlotStorage + ?Sized>(storage: &mut S, store: &mut Store) -> Result<usize> {
    let mut entries = Vec::new();
    for slot in store.dirty_slots() {
        entries.push((slot, store.slot_json(slot)?));
    }

    if entries.is_empty() {
        return Ok(0);
    }

    storage.write_slots(&entries)?;
    store.take_dirty();
    Ok(entries.len())
}
