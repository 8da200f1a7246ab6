use crate::errors::{Result, TutoriaError};
use crate::model::SessionStatus;

/// Check that `from -> to` is an edge of the session state machine
///
/// Edges: pending → accepted, pending → rejected, accepted → completed.
/// Any move out of a terminal state reports `SessionTerminal`; any other
/// missing edge reports `IllegalSessionTransition`.
pub fn check_session_transition(
    session_id: &str,
    from: SessionStatus,
    to: SessionStatus,
) -> Result<()> {
    use SessionStatus::*;

    if from.is_terminal() {
        return Err(TutoriaError::SessionTerminal {
            session_id: session_id.to_string(),
            status: from,
        });
    }

    match (from, to) {
        (Pending, Accepted) | (Pending, Rejected) | (Accepted, Completed) => Ok(()),
        _ => Err(TutoriaError::IllegalSessionTransition {
            session_id: session_id.to_string(),
            from,
            to,
        }),
    }
}

/// Trimmed value, or `None` if blank
pub fn require_non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
