use crate::model::{
    Assignment, FileRecord, Notification, Role, Topic, TutoringSession, User,
};
use crate::ops::Store;

pub fn get_user<'a>(store: &'a Store, email: &str) -> Option<&'a User> {
    store.find_user(email)
}

pub fn users_by_role(store: &Store, role: Role) -> Vec<&User> {
    store.users().iter().filter(|u| u.role == role).collect()
}

pub fn get_session<'a>(store: &'a Store, session_id: &str) -> Option<&'a TutoringSession> {
    store.sessions().iter().find(|s| s.id == session_id)
}

pub fn sessions_by_student<'a>(store: &'a Store, email: &str) -> Vec<&'a TutoringSession> {
    store
        .sessions()
        .iter()
        .filter(|s| s.student_email == email)
        .collect()
}

pub fn sessions_by_tutor<'a>(store: &'a Store, email: &str) -> Vec<&'a TutoringSession> {
    store
        .sessions()
        .iter()
        .filter(|s| s.tutor_email == email)
        .collect()
}

pub fn get_topic<'a>(store: &'a Store, topic_id: &str) -> Option<&'a Topic> {
    store.topics().iter().find(|t| t.id == topic_id)
}

/// First topic registered for the student
pub fn topic_by_student<'a>(store: &'a Store, email: &str) -> Option<&'a Topic> {
    store.topics().iter().find(|t| t.student_email == email)
}

pub fn get_file<'a>(store: &'a Store, file_id: &str) -> Option<&'a FileRecord> {
    store.files().iter().find(|f| f.id == file_id)
}

pub fn files_by_student<'a>(store: &'a Store, email: &str) -> Vec<&'a FileRecord> {
    store
        .files()
        .iter()
        .filter(|f| f.student_email == email)
        .collect()
}

pub fn assignment_by_student<'a>(store: &'a Store, email: &str) -> Option<&'a Assignment> {
    store
        .assignments()
        .iter()
        .find(|a| a.student_email == email)
}

pub fn assignments_by_tutor<'a>(store: &'a Store, email: &str) -> Vec<&'a Assignment> {
    store
        .assignments()
        .iter()
        .filter(|a| a.tutor_email == email)
        .collect()
}

/// Inbox for `email`, newest first
///
/// Ties on `created_at` go to the later insertion.
pub fn notifications_for<'a>(store: &'a Store, email: &str) -> Vec<&'a Notification> {
    let mut inbox: Vec<&Notification> = store
        .notifications()
        .iter()
        .rev()
        .filter(|n| n.user_email == email)
        .collect();
    // stable sort keeps the reversed insertion order on ties
    inbox.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    inbox
}

pub fn unread_count(store: &Store, email: &str) -> usize {
    store
        .notifications()
        .iter()
        .filter(|n| n.user_email == email && !n.read)
        .count()
}
