//! Lifecycle logging macros for commands executed against the store
//!
//! Every macro takes the op name and the caller's `RequestContext`, so the
//! `request_id` and `actor` fields are always present and a request can be
//! followed from start to end. End events take the `Instant` captured at
//! start and compute `duration_ms` themselves.
//!
//! Field names match `tutoria_core_types::schema`; callers need that crate
//! as a dependency.

/// Log the start of a command
///
/// ```
/// # use tutoria_core::log_op_start;
/// # use tutoria_core_types::RequestContext;
/// let ctx = RequestContext::new().with_actor("carlos.rodriguez@uleam.edu.ec");
/// log_op_start!("accept_session", &ctx);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr, $ctx:expr) => {{
        let ctx: &tutoria_core_types::RequestContext = $ctx;
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = tutoria_core_types::schema::EVENT_START,
            request_id = ctx.request_id.as_str(),
            actor = ctx.actor_email.as_deref(),
        );
    }};
}

/// Log a command that completed and was written back
///
/// ```
/// # use tutoria_core::log_op_end;
/// # use tutoria_core_types::RequestContext;
/// let started = std::time::Instant::now();
/// log_op_end!("accept_session", &RequestContext::new(), started);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, $ctx:expr, $started:expr) => {{
        let ctx: &tutoria_core_types::RequestContext = $ctx;
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = tutoria_core_types::schema::EVENT_END,
            request_id = ctx.request_id.as_str(),
            duration_ms = $started.elapsed().as_millis() as u64,
        );
    }};
}

/// Log a failed command with its stable error code and the record it hit
///
/// `$err` is anything convertible into `ExError`.
///
/// ```
/// # use tutoria_core::{log_op_error, TutoriaError};
/// # use tutoria_core_types::RequestContext;
/// let started = std::time::Instant::now();
/// let err = TutoriaError::MissingGrade { session_id: "s1".to_string() };
/// log_op_error!("complete_session", &RequestContext::new(), started, err);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $ctx:expr, $started:expr, $err:expr) => {{
        let ctx: &tutoria_core_types::RequestContext = $ctx;
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = tutoria_core_types::schema::EVENT_END_ERROR,
            request_id = ctx.request_id.as_str(),
            duration_ms = $started.elapsed().as_millis() as u64,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            entity_id = ex_err.entity_id(),
        );
    }};
}
