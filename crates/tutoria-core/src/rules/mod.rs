//! Domain rules that do not need the store
//!
//! Email-domain role classification and the tutoring session state machine.

pub mod email_domain;
pub mod transitions;

pub use email_domain::{validate_email_domain, DOMAIN_TABLE};
pub use transitions::{check_session_transition, require_non_blank};
