//! Read-only queries over the store
//!
//! Queries borrow from the store; callers that need to keep results across
//! mutations clone them.

pub mod entity_queries;
pub mod relationship_queries;
pub mod stats;

pub use relationship_queries::{assigned_students, assigned_tutor};
pub use stats::{system_stats, SessionCounts, SystemStats};
