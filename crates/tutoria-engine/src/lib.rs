//! Tutoria Engine - orchestration layer
//!
//! Owns the process-wide `TutoringSystem`: the hydrated in-memory store plus
//! the slot storage it writes back to. Every mutation enters through
//! `TutoringSystem::execute`, which applies a core `Command` atomically,
//! writes the dirty slots and emits lifecycle logs.

pub mod commands;
pub mod queries;
pub mod system;

pub use system::TutoringSystem;
