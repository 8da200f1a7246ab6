use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::errors::Result;
use crate::model::{Assignment, FileRecord, Notification, Topic, TutoringSession, User};

/// One persisted collection
///
/// Each slot is written back as a JSON array under its stable key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Users,
    Sessions,
    Topics,
    Files,
    Assignments,
    Notifications,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::Users,
        Slot::Sessions,
        Slot::Topics,
        Slot::Files,
        Slot::Assignments,
        Slot::Notifications,
    ];

    /// Storage key of the slot
    pub fn key(&self) -> &'static str {
        match self {
            Slot::Users => "users",
            Slot::Sessions => "sessions",
            Slot::Topics => "topics",
            Slot::Files => "files",
            Slot::Assignments => "assignments",
            Slot::Notifications => "notifications",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// In-memory store for all six entity collections
///
/// Designed for a single writer. Every mutable accessor marks its slot
/// dirty so the persistence layer writes back only what changed.
/// Collections keep insertion order.
///
/// Collections are shared copy-on-write: cloning a `Store` is six reference
/// bumps, and a collection is deep-copied only when a clone first mutates it.
#[derive(Debug, Clone, Default)]
pub struct Store {
    users: Arc<Vec<User>>,
    sessions: Arc<Vec<TutoringSession>>,
    topics: Arc<Vec<Topic>>,
    files: Arc<Vec<FileRecord>>,
    assignments: Arc<Vec<Assignment>>,
    notifications: Arc<Vec<Notification>>,
    dirty: BTreeSet<Slot>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn sessions(&self) -> &[TutoringSession] {
        &self.sessions
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub(crate) fn users_mut(&mut self) -> &mut Vec<User> {
        self.dirty.insert(Slot::Users);
        Arc::make_mut(&mut self.users)
    }

    pub(crate) fn sessions_mut(&mut self) -> &mut Vec<TutoringSession> {
        self.dirty.insert(Slot::Sessions);
        Arc::make_mut(&mut self.sessions)
    }

    pub(crate) fn topics_mut(&mut self) -> &mut Vec<Topic> {
        self.dirty.insert(Slot::Topics);
        Arc::make_mut(&mut self.topics)
    }

    pub(crate) fn files_mut(&mut self) -> &mut Vec<FileRecord> {
        self.dirty.insert(Slot::Files);
        Arc::make_mut(&mut self.files)
    }

    pub(crate) fn assignments_mut(&mut self) -> &mut Vec<Assignment> {
        self.dirty.insert(Slot::Assignments);
        Arc::make_mut(&mut self.assignments)
    }

    pub(crate) fn notifications_mut(&mut self) -> &mut Vec<Notification> {
        self.dirty.insert(Slot::Notifications);
        Arc::make_mut(&mut self.notifications)
    }

    /// Find a user by email (exact match)
    pub fn find_user(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn find_user_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn has_user(&self, email: &str) -> bool {
        self.find_user(email).is_some()
    }

    /// Insert a user without the uniqueness check
    ///
    /// Used by seeding and test helpers; regular registration goes through
    /// `user_ops::create_user`.
    pub fn insert_user(&mut self, user: User) {
        self.users_mut().push(user);
    }

    pub fn insert_session(&mut self, session: TutoringSession) {
        self.sessions_mut().push(session);
    }

    pub fn insert_topic(&mut self, topic: Topic) {
        self.topics_mut().push(topic);
    }

    pub fn insert_file(&mut self, file: FileRecord) {
        self.files_mut().push(file);
    }

    pub fn insert_assignment(&mut self, assignment: Assignment) {
        self.assignments_mut().push(assignment);
    }

    pub fn insert_notification(&mut self, notification: Notification) {
        self.notifications_mut().push(notification);
    }

    /// Number of records in a slot
    pub fn slot_len(&self, slot: Slot) -> usize {
        match slot {
            Slot::Users => self.users.len(),
            Slot::Sessions => self.sessions.len(),
            Slot::Topics => self.topics.len(),
            Slot::Files => self.files.len(),
            Slot::Assignments => self.assignments.len(),
            Slot::Notifications => self.notifications.len(),
        }
    }

    /// True when every collection is empty
    pub fn is_empty(&self) -> bool {
        Slot::ALL.iter().all(|slot| self.slot_len(*slot) == 0)
    }

    /// Empty all six collections, marking every slot dirty
    pub fn clear(&mut self) {
        self.users_mut().clear();
        self.sessions_mut().clear();
        self.topics_mut().clear();
        self.files_mut().clear();
        self.assignments_mut().clear();
        self.notifications_mut().clear();
    }

    /// Serialize one collection as a JSON array
    pub fn slot_json(&self, slot: Slot) -> Result<String> {
        let json = match slot {
            Slot::Users => serde_json::to_string(self.users.as_slice())?,
            Slot::Sessions => serde_json::to_string(self.sessions.as_slice())?,
            Slot::Topics => serde_json::to_string(self.topics.as_slice())?,
            Slot::Files => serde_json::to_string(self.files.as_slice())?,
            Slot::Assignments => serde_json::to_string(self.assignments.as_slice())?,
            Slot::Notifications => serde_json::to_string(self.notifications.as_slice())?,
        };
        Ok(json)
    }

    /// Replace one collection from its persisted JSON array
    ///
    /// Loading does not mark the slot dirty.
    pub fn load_slot_json(&mut self, slot: Slot, json: &str) -> Result<()> {
        match slot {
            Slot::Users => self.users = Arc::new(serde_json::from_str(json)?),
            Slot::Sessions => self.sessions = Arc::new(serde_json::from_str(json)?),
            Slot::Topics => self.topics = Arc::new(serde_json::from_str(json)?),
            Slot::Files => self.files = Arc::new(serde_json::from_str(json)?),
            Slot::Assignments => self.assignments = Arc::new(serde_json::from_str(json)?),
            Slot::Notifications => self.notifications = Arc::new(serde_json::from_str(json)?),
        }
        Ok(())
    }

    pub fn is_dirty(&self, slot: Slot) -> bool {
        self.dirty.contains(&slot)
    }

    pub fn dirty_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.dirty.iter().copied()
    }

    /// Drain the dirty set after a successful write-back
    pub fn take_dirty(&mut self) -> BTreeSet<Slot> {
        std::mem::take(&mut self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use chrono::Utc;
    use tutoria_core_types::Sensitive;

    fn user(email: &str) -> User {
        User {
            id: email.to_string(),
            given_names: "Ana".to_string(),
            surnames: "López".to_string(),
            email: email.to_string(),
            password: Sensitive::new("estudiante123".to_string()),
            role: Role::Student,
            faculty: None,
            major: None,
            specialty: None,
            security_question: "escuela".to_string(),
            security_answer: Sensitive::new("san jose".to_string()),
            registered_at: Utc::now(),
        }
    }

    #[test]
    fn test_new_store_is_empty_and_clean() {
        let store = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.dirty_slots().count(), 0);
    }

    #[test]
    fn test_insert_marks_only_its_slot_dirty() {
        let mut store = Store::new();
        store.insert_user(user("ana.lopez@live.uleam.edu.ec"));

        assert!(store.is_dirty(Slot::Users));
        assert!(!store.is_dirty(Slot::Sessions));
        assert_eq!(store.take_dirty().len(), 1);
        assert_eq!(store.dirty_slots().count(), 0);
    }

    #[test]
    fn test_slot_json_round_trip_does_not_mark_dirty() {
        let mut store = Store::new();
        store.insert_user(user("ana.lopez@live.uleam.edu.ec"));
        let json = store.slot_json(Slot::Users).unwrap();

        let mut loaded = Store::new();
        loaded.load_slot_json(Slot::Users, &json).unwrap();

        assert_eq!(loaded.users(), store.users());
        assert!(!loaded.is_dirty(Slot::Users));
    }

    #[test]
    fn test_load_slot_rejects_malformed_json() {
        let mut store = Store::new();
        assert!(store.load_slot_json(Slot::Topics, "{not json").is_err());
    }

    #[test]
    fn test_clear_marks_every_slot_dirty() {
        let mut store = Store::new();
        store.insert_user(user("ana.lopez@live.uleam.edu.ec"));
        store.take_dirty();

        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.dirty_slots().count(), Slot::ALL.len());
    }

    #[test]
    fn test_clone_copies_only_the_mutated_collection() {
        let mut store = Store::new();
        store.insert_user(user("ana.lopez@live.uleam.edu.ec"));
        store.take_dirty();

        let mut next = store.clone();
        assert!(Arc::ptr_eq(&store.users, &next.users));
        assert!(Arc::ptr_eq(&store.files, &next.files));

        next.insert_user(user("juan.perez@live.uleam.edu.ec"));

        assert!(!Arc::ptr_eq(&store.users, &next.users));
        assert!(Arc::ptr_eq(&store.files, &next.files));
        assert_eq!(store.users().len(), 1);
        assert_eq!(next.users().len(), 2);
    }

    #[test]
    fn test_slot_keys() {
        let keys: Vec<_> = Slot::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(
            keys,
            vec!["users", "sessions", "topics", "files", "assignments", "notifications"]
        );
    }
}
