//! Test helper utilities for guarded-run unit tests
//!
//! Shared fixtures: the validation category hierarchy and a cleanup action
//! that counts its invocations.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use crate::core_types::Category;
use crate::error::Outcome;

use std::cell::Cell;

pub fn validation_error() -> Category {
    Category::domain("ValidationError")
}

pub fn minor_validation_error() -> Category {
    validation_error().specialize("MinorValidationError")
}

pub fn failing_division() -> Outcome<i64> {
    crate::builtins::checked_div(10, 0)
}

/// Cleanup closure that bumps `counter` and then returns `result`.
pub fn counting_cleanup<'a>(
    counter: &'a Cell<u32>,
    result: Outcome<()>,
) -> impl FnMut() -> Outcome<()> + 'a {
    let mut result = Some(result);
    move || {
        counter.set(counter.get() + 1);
        result.take().unwrap_or(Ok(()))
    }
}
