pub mod assignment;
pub mod file;
pub mod notification;
pub mod session;
pub mod topic;
pub mod user;

pub use assignment::Assignment;
pub use file::{encode_data_url, FileRecord, NewFile};
pub use notification::{Notification, NotificationPayload};
pub use session::{NewSession, SessionStatus, SessionUpdate, TutoringSession};
pub use topic::{NewTopic, Topic, TopicReview, TopicReviewState, TopicUpdate};
pub use user::{NewUser, Role, User, UserUpdate};

use uuid::Uuid;

/// Generate a record identifier
///
/// UUID v7: a millisecond timestamp followed by random bits, so ids sort
/// roughly by creation time.
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}
