use super::store::Store;
use crate::seed;

/// Empty all six collections; nothing is reseeded
pub fn reset_system(store: &mut Store) {
    store.clear();
    tracing::debug!("store reset");
}

/// Seed the fixed dataset if there are no users
///
/// # Returns
/// `true` if the dataset was written
pub fn ensure_default_data(store: &mut Store) -> bool {
    if !store.users().is_empty() {
        return false;
    }
    force_recreate_default_data(store);
    true
}

/// Clear everything and write the fixed dataset
pub fn force_recreate_default_data(store: &mut Store) {
    store.clear();
    seed::populate_defaults(store);
    tracing::debug!(users = store.users().len(), "default data written");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Slot;

    #[test]
    fn test_ensure_seeds_only_empty_user_list() {
        let mut store = Store::new();
        assert!(ensure_default_data(&mut store));
        let users = store.users().len();
        assert!(!ensure_default_data(&mut store));
        assert_eq!(store.users().len(), users);
    }

    #[test]
    fn test_reset_does_not_reseed() {
        let mut store = Store::new();
        ensure_default_data(&mut store);
        store.take_dirty();

        reset_system(&mut store);

        assert!(store.is_empty());
        for slot in Slot::ALL {
            assert!(store.is_dirty(slot));
        }
    }

    #[test]
    fn test_force_recreate_discards_extra_records() {
        let mut store = Store::new();
        ensure_default_data(&mut store);
        crate::ops::notification_ops::send_tutor_message(
            &mut store,
            "carlos.rodriguez@uleam.edu.ec",
            "maria.gonzalez@live.uleam.edu.ec",
            "Hola",
        )
        .unwrap();

        force_recreate_default_data(&mut store);

        assert_eq!(store.notifications().len(), 4);
    }
}
