//! Fallible operation executor
//!
//! Runs a unit of work and captures exactly one [`Outcome`]. Failures the
//! work returns pass through untouched; panics become `Panic` failures when
//! capture is enabled.

use crate::error::{Failure, Outcome};
use crate::logging::log_warn;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Execute `operation`, optionally converting a panic into a failure.
///
/// With `capture_panics` disabled a panic unwinds to the caller unchanged.
pub fn attempt<T, F>(operation: F, capture_panics: bool) -> Outcome<T>
where
    F: FnOnce() -> Outcome<T>,
{
    if !capture_panics {
        return operation();
    }

    // The closure's captures are either consumed or dropped on unwind, and
    // nothing observes them afterwards.
    match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(outcome) => outcome,
        Err(payload) => Err(panic_failure(payload.as_ref())),
    }
}

/// Build a `Panic` failure from a caught panic payload.
pub(crate) fn panic_failure(payload: &(dyn Any + Send)) -> Failure {
    let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "panic with a non-string payload".to_string()
    };

    log_warn!(
        error_type = "panic",
        message = %message,
        "Captured panic in guarded code"
    );

    Failure::panic(message)
}
