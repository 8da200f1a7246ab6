//! Read-only query surface
//!
//! Queries read the in-memory store directly and return owned copies, so
//! callers can hold results across later mutations.

use crate::system::TutoringSystem;
use tutoria_core::ops::user_ops;
use tutoria_core::queries::{self, entity_queries};
use tutoria_core::rules;
use tutoria_core::{
    Assignment, FileRecord, Notification, Role, SystemStats, Topic, TutoringSession, User,
};
use tutoria_store::SlotStorage;

impl<S: SlotStorage> TutoringSystem<S> {
    // ---------------------------------------------------------------------
    // Users and credentials
    // ---------------------------------------------------------------------

    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        entity_queries::get_user(self.store(), email).cloned()
    }

    pub fn list_users(&self) -> Vec<User> {
        self.store().users().to_vec()
    }

    pub fn list_users_by_role(&self, role: Role) -> Vec<User> {
        owned(entity_queries::users_by_role(self.store(), role))
    }

    /// True iff a user with this email and password exists
    pub fn validate_credentials(&self, email: &str, password: &str) -> bool {
        user_ops::validate_credentials(self.store(), email, password)
    }

    pub fn verify_security_answer(&self, email: &str, answer: &str) -> bool {
        user_ops::verify_security_answer(self.store(), email, answer)
    }

    /// Role implied by the email's institutional domain
    pub fn validate_email_domain(&self, email: &str) -> Option<Role> {
        rules::validate_email_domain(email)
    }

    // ---------------------------------------------------------------------
    // Sessions
    // ---------------------------------------------------------------------

    pub fn get_session(&self, session_id: &str) -> Option<TutoringSession> {
        entity_queries::get_session(self.store(), session_id).cloned()
    }

    pub fn list_sessions(&self) -> Vec<TutoringSession> {
        self.store().sessions().to_vec()
    }

    pub fn get_sessions_by_student(&self, email: &str) -> Vec<TutoringSession> {
        owned(entity_queries::sessions_by_student(self.store(), email))
    }

    pub fn get_sessions_by_tutor(&self, email: &str) -> Vec<TutoringSession> {
        owned(entity_queries::sessions_by_tutor(self.store(), email))
    }

    // ---------------------------------------------------------------------
    // Topics and files
    // ---------------------------------------------------------------------

    pub fn get_topic(&self, topic_id: &str) -> Option<Topic> {
        entity_queries::get_topic(self.store(), topic_id).cloned()
    }

    /// First topic registered by the student
    pub fn get_topic_by_student(&self, email: &str) -> Option<Topic> {
        entity_queries::topic_by_student(self.store(), email).cloned()
    }

    pub fn list_topics(&self) -> Vec<Topic> {
        self.store().topics().to_vec()
    }

    pub fn get_file(&self, file_id: &str) -> Option<FileRecord> {
        entity_queries::get_file(self.store(), file_id).cloned()
    }

    pub fn get_files_by_student(&self, email: &str) -> Vec<FileRecord> {
        owned(entity_queries::files_by_student(self.store(), email))
    }

    pub fn list_files(&self) -> Vec<FileRecord> {
        self.store().files().to_vec()
    }

    // ---------------------------------------------------------------------
    // Assignments
    // ---------------------------------------------------------------------

    pub fn get_assignment_by_student(&self, email: &str) -> Option<Assignment> {
        entity_queries::assignment_by_student(self.store(), email).cloned()
    }

    pub fn get_assignments_by_tutor(&self, email: &str) -> Vec<Assignment> {
        owned(entity_queries::assignments_by_tutor(self.store(), email))
    }

    pub fn list_assignments(&self) -> Vec<Assignment> {
        self.store().assignments().to_vec()
    }

    /// Tutor user currently paired with the student, if every hop resolves
    pub fn get_assigned_tutor(&self, student_email: &str) -> Option<User> {
        queries::assigned_tutor(self.store(), student_email).cloned()
    }

    pub fn get_assigned_students(&self, tutor_email: &str) -> Vec<User> {
        owned(queries::assigned_students(self.store(), tutor_email))
    }

    // ---------------------------------------------------------------------
    // Notifications and stats
    // ---------------------------------------------------------------------

    /// Inbox for a user, newest first
    pub fn get_notifications(&self, email: &str) -> Vec<Notification> {
        owned(entity_queries::notifications_for(self.store(), email))
    }

    pub fn unread_count(&self, email: &str) -> usize {
        entity_queries::unread_count(self.store(), email)
    }

    pub fn list_notifications(&self) -> Vec<Notification> {
        self.store().notifications().to_vec()
    }

    pub fn get_system_stats(&self) -> SystemStats {
        queries::system_stats(self.store())
    }
}

fn owned<T: Clone>(items: Vec<&T>) -> Vec<T> {
    items.into_iter().cloned().collect()
}
