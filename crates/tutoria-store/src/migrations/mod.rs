//! Migration framework
//!
//! - Embedded SQL migrations, applied in order
//! - `schema_version` ledger with a SHA-256 checksum per migration
//! - Idempotent re-application; edited migrations are refused

mod checksums;
mod embedded;
mod runner;

pub use runner::apply_migrations;
