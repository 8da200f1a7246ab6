//! Typed mutation entry points
//!
//! Each method builds a core `Command` and runs it through
//! `TutoringSystem::execute`, so every mutation gets the same atomicity,
//! write-back and lifecycle logging.

pub mod assignment;
pub mod file;
pub mod notification;
pub mod session;
pub mod system_admin;
pub mod topic;
pub mod user;
