//! Guaranteed cleanup
//!
//! The cleanup action runs exactly once per guarded run, after the attempt
//! and any handler. A failing cleanup overrides whatever outcome was
//! pending; a succeeding one leaves it untouched.

use crate::config::GuardConfig;
use crate::error::{Failure, Outcome};
use crate::internals::executor::{attempt, panic_failure};
use crate::logging::{log_debug, log_error, log_warn};

use std::panic::{self, AssertUnwindSafe};

/// Action bound to a guarded run and executed unconditionally after it.
///
/// Implemented for every `FnMut() -> Outcome<()>` closure.
#[cfg_attr(test, mockall::automock)]
pub trait CleanupAction {
    fn cleanup(&mut self) -> Outcome<()>;
}

impl<F> CleanupAction for F
where
    F: FnMut() -> Outcome<()>,
{
    fn cleanup(&mut self) -> Outcome<()> {
        self()
    }
}

/// Cleanup that does nothing and never fails.
pub fn noop_cleanup() -> Outcome<()> {
    Ok(())
}

/// Run `cleanup` once and resolve it against the `pending` outcome.
pub fn finalize<T, C>(pending: Outcome<T>, cleanup: &mut C, config: &GuardConfig) -> Outcome<T>
where
    C: CleanupAction + ?Sized,
{
    let cleanup_result = attempt(|| cleanup.cleanup(), config.capture_panics);
    settle(pending, cleanup_result, config.chain_suppressed).0
}

/// Combine the pending outcome with the cleanup's result.
///
/// The flag is `true` when the cleanup failure replaced the pending outcome.
pub(crate) fn settle<T>(
    pending: Outcome<T>,
    cleanup_result: Outcome<()>,
    chain_suppressed: bool,
) -> (Outcome<T>, bool) {
    let cleanup_failure = match cleanup_result {
        Ok(()) => {
            log_debug!(pending_ok = pending.is_ok(), "Cleanup completed");
            return (pending, false);
        }
        Err(failure) => failure,
    };

    match pending {
        Ok(_discarded) => {
            log_warn!(
                category = %cleanup_failure.category(),
                message = %cleanup_failure.message(),
                "Cleanup failed, discarding successful result"
            );
            (Err(cleanup_failure), true)
        }
        Err(original) => {
            log_warn!(
                category = %cleanup_failure.category(),
                original_category = %original.category(),
                chained = chain_suppressed,
                "Cleanup failed, overriding pending failure"
            );
            if chain_suppressed {
                (Err(cleanup_failure.with_suppressed(original)), true)
            } else {
                (Err(cleanup_failure), true)
            }
        }
    }
}

/// Holds the cleanup action for the duration of a run.
///
/// Normally consumed by [`CleanupGuard::run`]. If the run unwinds first, the
/// action runs from `Drop` instead, so it executes exactly once either way.
pub(crate) struct CleanupGuard<'a> {
    action: Option<Box<dyn CleanupAction + 'a>>,
    capture_panics: bool,
}

impl<'a> CleanupGuard<'a> {
    pub(crate) fn new(action: Box<dyn CleanupAction + 'a>, capture_panics: bool) -> Self {
        Self {
            action: Some(action),
            capture_panics,
        }
    }

    pub(crate) fn run(mut self) -> Outcome<()> {
        match self.action.take() {
            Some(mut action) => attempt(|| action.cleanup(), self.capture_panics),
            None => Ok(()),
        }
    }
}

impl Drop for CleanupGuard<'_> {
    fn drop(&mut self) {
        let Some(mut action) = self.action.take() else {
            return;
        };

        log_warn!("Running cleanup while unwinding from a panic in guarded code");

        // A second panic during unwinding would abort the process.
        match panic::catch_unwind(AssertUnwindSafe(|| action.cleanup())) {
            Ok(Ok(())) => {}
            Ok(Err(failure)) => log_cleanup_lost(&failure),
            Err(payload) => log_cleanup_lost(&panic_failure(payload.as_ref())),
        }
    }
}

fn log_cleanup_lost(failure: &Failure) {
    log_error!(
        category = %failure.category(),
        message = %failure.message(),
        "Cleanup failed while unwinding; the panic continues"
    );
}
