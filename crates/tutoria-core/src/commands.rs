//! Command inventory for every store mutation
//!
//! Each variant is applied by `apply()`. Read-only queries are not commands.

use tutoria_core_types::Sensitive;

use crate::model::{
    NewFile, NewSession, NewTopic, NewUser, NotificationPayload, SessionUpdate, TopicReview,
    TopicUpdate, User, UserUpdate,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Register a user; fails on a duplicate email
    UserCreate { user: NewUser },

    /// Insert or replace a full user record by email
    UserSave { user: User },

    UserUpdate { email: String, update: UserUpdate },

    /// Delete a user and their sessions, topics, files and assignments
    UserDelete { email: String },

    /// Reset a password after checking the security answer
    PasswordRecover {
        email: String,
        answer: String,
        new_password: Sensitive<String>,
    },

    /// Request a session; notifies the tutor
    SessionCreate { session: NewSession },

    SessionUpdate {
        session_id: String,
        update: SessionUpdate,
    },

    SessionAccept {
        session_id: String,
        observations: Option<String>,
    },

    SessionReject { session_id: String, reason: String },

    SessionComplete {
        session_id: String,
        grade: String,
        observations: Option<String>,
    },

    SessionDelete { session_id: String },

    TopicCreate { topic: NewTopic },

    TopicUpdate { topic_id: String, update: TopicUpdate },

    /// Approve or reject a topic; notifies the student
    TopicReview { topic_id: String, review: TopicReview },

    TopicDelete { topic_id: String },

    /// Upload a file; notifies the assigned tutor if any
    FileCreate { file: NewFile },

    FileDelete { file_id: String },

    /// Pair a student with a tutor, replacing any previous pairing
    AssignTutor {
        student_email: String,
        tutor_email: String,
    },

    AssignmentRemove { student_email: String },

    AssignmentDelete { assignment_id: String },

    NotificationCreate {
        user_email: String,
        message: String,
        payload: NotificationPayload,
    },

    TutorMessage {
        tutor_email: String,
        student_email: String,
        message: String,
    },

    NotificationMarkRead { notification_id: String },

    NotificationMarkAllRead { user_email: String },

    /// Empty every collection without reseeding
    SystemReset,

    /// Seed the fixed dataset only when there are no users
    EnsureDefaultData,

    /// Clear and reseed unconditionally
    ForceRecreateDefaultData,
}

impl Command {
    /// Operation name used in log events and errors
    pub fn name(&self) -> &'static str {
        match self {
            Command::UserCreate { .. } => "create_user",
            Command::UserSave { .. } => "save_user",
            Command::UserUpdate { .. } => "update_user",
            Command::UserDelete { .. } => "delete_user",
            Command::PasswordRecover { .. } => "recover_password",
            Command::SessionCreate { .. } => "create_session",
            Command::SessionUpdate { .. } => "update_session",
            Command::SessionAccept { .. } => "accept_session",
            Command::SessionReject { .. } => "reject_session",
            Command::SessionComplete { .. } => "complete_session",
            Command::SessionDelete { .. } => "delete_session",
            Command::TopicCreate { .. } => "create_topic",
            Command::TopicUpdate { .. } => "update_topic",
            Command::TopicReview { .. } => "review_topic",
            Command::TopicDelete { .. } => "delete_topic",
            Command::FileCreate { .. } => "create_file",
            Command::FileDelete { .. } => "delete_file",
            Command::AssignTutor { .. } => "assign_tutor_to_student",
            Command::AssignmentRemove { .. } => "remove_assignment",
            Command::AssignmentDelete { .. } => "delete_assignment",
            Command::NotificationCreate { .. } => "create_notification",
            Command::TutorMessage { .. } => "send_tutor_message",
            Command::NotificationMarkRead { .. } => "mark_as_read",
            Command::NotificationMarkAllRead { .. } => "mark_all_as_read",
            Command::SystemReset => "reset_system",
            Command::EnsureDefaultData => "ensure_default_data",
            Command::ForceRecreateDefaultData => "force_recreate_default_data",
        }
    }
}
