//! Guarded runs: attempt, recover, clean up.
//!
//! [`Guard`] is the builder form; [`run`] is the three-argument form taking
//! a prebuilt [`HandlerTable`].
//!
//! # Example
//!
//! ```rust
//! use guarded_run::{builtins::checked_div, Category, Guard, Outcome};
//!
//! let outcome = Guard::attempt(|| checked_div(10, 0))
//!     .catch(Category::ARITHMETIC, |_| Ok(-1))
//!     .finally(|| -> Outcome<()> { Ok(()) })
//!     .run();
//!
//! assert_eq!(outcome, Ok(-1));
//! ```

use crate::config::GuardConfig;
use crate::core_types::phase::PhaseTracker;
use crate::core_types::{Category, Phase, RunReport};
use crate::error::{Failure, Outcome};
use crate::internals::cleanup::{noop_cleanup, settle, CleanupAction, CleanupGuard};
use crate::internals::dispatch::{Catch, Dispatch, HandlerTable};
use crate::internals::executor::attempt;
use crate::logging::{log_debug, log_escaping, run_span};

use uuid::Uuid;

type Operation<'a, T> = Box<dyn FnOnce() -> Outcome<T> + 'a>;
type SuccessAction<'a, T> = Box<dyn FnOnce(T) -> Outcome<T> + 'a>;

/// Run `operation`, recover through `handlers`, then run `cleanup`.
///
/// Returns the cleanup's failure if it fails; otherwise the operation's
/// value, the matched handler's outcome, or the unhandled failure.
pub fn run<'a, T, F, C>(operation: F, handlers: HandlerTable<'a, T>, cleanup: C) -> Outcome<T>
where
    F: FnOnce() -> Outcome<T> + 'a,
    C: CleanupAction + 'a,
{
    Guard::attempt(operation)
        .with_handlers(handlers)
        .finally(cleanup)
        .run()
}

/// Builder for a single guarded run.
pub struct Guard<'a, T> {
    operation: Operation<'a, T>,
    handlers: HandlerTable<'a, T>,
    on_success: Option<SuccessAction<'a, T>>,
    cleanup: Box<dyn CleanupAction + 'a>,
    config: GuardConfig,
}

impl<'a, T> Guard<'a, T> {
    /// Start a guard around `operation` with no handlers and a no-op cleanup.
    pub fn attempt(operation: impl FnOnce() -> Outcome<T> + 'a) -> Self {
        Self {
            operation: Box::new(operation),
            handlers: HandlerTable::new(),
            on_success: None,
            cleanup: Box::new(noop_cleanup),
            config: GuardConfig::default(),
        }
    }

    /// Recover from failures of `category` or any specialization of it.
    pub fn catch(
        mut self,
        category: Category,
        handler: impl FnOnce(Failure) -> Outcome<T> + 'a,
    ) -> Self {
        self.handlers.push(Catch::Category(category), handler);
        self
    }

    /// One handler for several categories.
    pub fn catch_any_of(
        mut self,
        categories: impl IntoIterator<Item = Category>,
        handler: impl FnOnce(Failure) -> Outcome<T> + 'a,
    ) -> Self {
        let categories = categories.into_iter().collect();
        self.handlers.push(Catch::AnyOf(categories), handler);
        self
    }

    /// Recover from any failure not matched by an earlier entry.
    pub fn catch_all(mut self, handler: impl FnOnce(Failure) -> Outcome<T> + 'a) -> Self {
        self.handlers.push(Catch::All, handler);
        self
    }

    /// Replace the handler table.
    pub fn with_handlers(mut self, handlers: HandlerTable<'a, T>) -> Self {
        self.handlers = handlers;
        self
    }

    /// Run `action` on the operation's value when it succeeds.
    ///
    /// Failures from `action` are not offered to the handlers; they become
    /// the pending outcome for cleanup.
    pub fn on_success(mut self, action: impl FnOnce(T) -> Outcome<T> + 'a) -> Self {
        self.on_success = Some(Box::new(action));
        self
    }

    pub fn finally(mut self, cleanup: impl CleanupAction + 'a) -> Self {
        self.cleanup = Box::new(cleanup);
        self
    }

    pub fn with_config(mut self, config: GuardConfig) -> Self {
        self.config = config;
        self
    }

    pub fn run(self) -> Outcome<T> {
        self.run_with_report().into_outcome()
    }

    /// Run and return the outcome along with the phases passed through.
    pub fn run_with_report(self) -> RunReport<T> {
        let run_id = Uuid::new_v4();
        let span = run_span(&run_id);
        let _entered = span.enter();

        let Guard {
            operation,
            handlers,
            on_success,
            cleanup,
            config,
        } = self;
        let capture = config.capture_panics;

        log_debug!(
            handlers = handlers.len(),
            has_success_action = on_success.is_some(),
            capture_panics = capture,
            "Starting guarded run"
        );

        let mut tracker = PhaseTracker::start();
        let cleanup = CleanupGuard::new(cleanup, capture);
        let mut handler_index = None;

        let pending = match attempt(operation, capture) {
            Ok(value) => {
                tracker.advance(Phase::Succeeded);
                match on_success {
                    Some(action) => attempt(move || action(value), capture),
                    None => Ok(value),
                }
            }
            Err(failure) => {
                tracker.advance(Phase::Failed);
                tracker.advance(Phase::Handling);
                match handlers.dispatch_with(failure, capture) {
                    Dispatch::Handled { index, outcome } => {
                        tracker.advance(Phase::Recovered);
                        handler_index = Some(index);
                        outcome
                    }
                    Dispatch::Unhandled(failure) => {
                        tracker.advance(Phase::Unhandled);
                        Err(failure)
                    }
                }
            }
        };

        tracker.advance(Phase::CleaningUp);
        let (outcome, cleanup_overrode) = settle(pending, cleanup.run(), config.chain_suppressed);

        match &outcome {
            Ok(_) => tracker.advance(Phase::FinalSuccess),
            Err(failure) => {
                log_escaping(failure);
                tracker.advance(Phase::FinalFailure);
            }
        }

        RunReport {
            run_id,
            phases: tracker.into_phases(),
            handler_index,
            cleanup_overrode,
            outcome,
        }
    }
}
