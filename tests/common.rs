//! Shared helpers for guarded-run integration tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use guarded_run::{Category, Failure, Outcome};
use std::cell::RefCell;

/// Records the order in which guarded code ran.
#[derive(Debug, Default)]
pub struct Journal {
    entries: RefCell<Vec<String>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, entry: impl Into<String>) {
        self.entries.borrow_mut().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    pub fn count(&self, entry: &str) -> usize {
        self.entries.borrow().iter().filter(|e| *e == entry).count()
    }
}

pub fn validation_error() -> Category {
    Category::domain("ValidationError")
}

pub fn minor_validation_error() -> Category {
    validation_error().specialize("MinorValidationError")
}

/// Raises `ValidationError [1001]` for ages outside (0, 120).
pub fn validate_age(age: i64) -> Outcome<i64> {
    if !(1..120).contains(&age) {
        return Err(Failure::new(validation_error(), "Invalid age").with_code(1001));
    }
    Ok(age)
}
