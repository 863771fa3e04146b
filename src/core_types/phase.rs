//! Lifecycle of a single guarded run.

use crate::error::Outcome;
use crate::logging::log_trace;
use serde::Serialize;
use uuid::Uuid;

/// Phases a guarded run moves through.
///
/// ```text
/// Attempting -> Succeeded | Failed
/// Failed     -> Handling -> Recovered | Unhandled
/// *          -> CleaningUp -> FinalSuccess | FinalFailure
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    Attempting,
    Succeeded,
    Failed,
    Handling,
    /// A handler matched and ran; its own outcome may still be a failure.
    Recovered,
    /// No handler matched.
    Unhandled,
    CleaningUp,
    FinalSuccess,
    FinalFailure,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::FinalSuccess | Self::FinalFailure)
    }

    /// Whether `next` is a legal successor of `self`.
    pub fn can_advance_to(self, next: Phase) -> bool {
        use Phase::*;
        matches!(
            (self, next),
            (Attempting, Succeeded)
                | (Attempting, Failed)
                | (Failed, Handling)
                | (Handling, Recovered)
                | (Handling, Unhandled)
                | (Succeeded, CleaningUp)
                | (Recovered, CleaningUp)
                | (Unhandled, CleaningUp)
                | (CleaningUp, FinalSuccess)
                | (CleaningUp, FinalFailure)
        )
    }
}

/// Records the phases of one run, checking each transition.
#[derive(Debug)]
pub(crate) struct PhaseTracker {
    phases: Vec<Phase>,
}

impl PhaseTracker {
    pub(crate) fn start() -> Self {
        log_trace!(phase = ?Phase::Attempting, "Guarded run started");
        Self {
            phases: vec![Phase::Attempting],
        }
    }

    pub(crate) fn current(&self) -> Phase {
        // Never empty: `start` seeds `Attempting`.
        self.phases.last().copied().unwrap_or(Phase::Attempting)
    }

    pub(crate) fn advance(&mut self, next: Phase) {
        let current = self.current();
        debug_assert!(
            current.can_advance_to(next),
            "illegal phase transition {current:?} -> {next:?}"
        );
        log_trace!(from = ?current, to = ?next, "Phase transition");
        self.phases.push(next);
    }

    pub(crate) fn into_phases(self) -> Vec<Phase> {
        self.phases
    }
}

/// Final outcome of a guarded run together with the path it took.
#[derive(Debug, Serialize)]
pub struct RunReport<T> {
    pub run_id: Uuid,
    pub phases: Vec<Phase>,
    pub handler_index: Option<usize>,
    pub cleanup_overrode: bool,
    pub outcome: Outcome<T>,
}

impl<T> RunReport<T> {
    pub fn final_phase(&self) -> Option<Phase> {
        self.phases.last().copied()
    }

    pub fn passed_through(&self, phase: Phase) -> bool {
        self.phases.contains(&phase)
    }

    pub fn into_outcome(self) -> Outcome<T> {
        self.outcome
    }
}
