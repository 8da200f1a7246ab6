//! Tutoria Core - in-memory domain store for thesis tutoring
//!
//! This crate provides the data structures and operations behind the
//! tutoring system:
//! - User, TutoringSession, Topic, FileRecord, Assignment and Notification models
//! - Per-entity CRUD operations over a single `Store`
//! - Relationship queries (assigned tutor / assigned students) and statistics
//! - Session and topic review rules enforced inside the store
//! - Notification emission as a side effect of domain mutations
//! - The fixed default dataset and reset routines
//! - A command inventory applied atomically through `apply()`
//!
//! Nothing here performs I/O. Persistence lives in `tutoria-store`.

pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod rules;
mod seed;

// Re-export commonly used types
pub use apply::{apply, Applied};
pub use commands::Command;
pub use errors::{ExError, ExErrorKind, Result, TutoriaError};
pub use model::{
    Assignment, FileRecord, NewFile, NewSession, NewTopic, NewUser, Notification,
    NotificationPayload, Role, SessionStatus, SessionUpdate, Topic, TopicReview,
    TopicReviewState, TopicUpdate, TutoringSession, User, UserUpdate,
};
pub use ops::{Slot, Store};
pub use queries::{SessionCounts, SystemStats};
