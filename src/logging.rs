//! Logging utilities for guarded-run
//!
//! Re-exports tracing macros with log_* naming convention, plus the span
//! every guarded run executes inside.

pub use tracing::{
    debug as log_debug,
    error as log_error,
    info as log_info,
    trace as log_trace,
    warn as log_warn,
};

use crate::error::{Failure, Severity};
use uuid::Uuid;

/// Span wrapping a single guarded run so nested logs carry the run id
pub(crate) fn run_span(run_id: &Uuid) -> tracing::Span {
    tracing::debug_span!("guarded_run", run_id = %run_id)
}

/// Log a failure that is leaving a guarded run at its own severity
pub(crate) fn log_escaping(failure: &Failure) {
    let category = failure.category();
    match failure.severity() {
        Severity::Critical | Severity::Error => log_error!(
            category = %category,
            code = ?failure.code(),
            message = %failure.message(),
            "Unhandled failure"
        ),
        Severity::Warning => log_warn!(
            category = %category,
            code = ?failure.code(),
            message = %failure.message(),
            "Unhandled failure"
        ),
        Severity::Info => log_info!(
            category = %category,
            code = ?failure.code(),
            message = %failure.message(),
            "Unhandled failure"
        ),
    }
}
