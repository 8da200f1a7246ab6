//! Structured logging facility
//!
//! - One initialization point, `init(profile)`
//! - Lifecycle macros `log_op_start!`, `log_op_end!`, `log_op_error!`
//! - In-memory capture for test assertions
//!
//! The engine owns lifecycle events: every store mutation logs exactly one
//! start and one end (or end_error). Core operations and the persistence
//! layer only emit `debug!` detail.
//!
//! ```rust
//! use tutoria_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
