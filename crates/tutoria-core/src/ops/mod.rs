pub mod assignment_ops;
pub mod file_ops;
pub mod notification_ops;
pub mod session_ops;
pub mod store;
pub mod system_ops;
pub mod topic_ops;
pub mod user_ops;

pub use store::{Slot, Store};
