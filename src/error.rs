//! Failure types for guarded runs.
//!
//! Every fallible step inside a guarded run produces an [`Outcome`]: either a
//! value or a [`Failure`] tagged with exactly one [`Category`].
//!
//! # Example
//!
//! ```rust
//! use guarded_run::{Category, Failure, Outcome};
//!
//! fn validate_age(age: u32) -> Outcome<u32> {
//!     if !(1..120).contains(&age) {
//!         let validation = Category::domain("ValidationError");
//!         return Err(Failure::new(validation, "Invalid age").with_code(1001));
//!     }
//!     Ok(age)
//! }
//!
//! let err = validate_age(150).unwrap_err();
//! assert_eq!(err.to_string(), "ValidationError [1001]: Invalid age");
//! ```

use crate::core_types::{BuiltinCategory, Category};
use crate::logging::log_debug;
use serde::Serialize;
use thiserror::Error;

use std::path::Path;

/// Severity level for logging failures that leave a guarded run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// Guarded code panicked; the invariants of the caller may be broken.
    Critical,
    /// Environment failures (I/O).
    Error,
    /// Built-in value failures (arithmetic, conversion, bounds, lookup).
    Warning,
    /// Domain failures raised deliberately by application code.
    Info,
}

/// Result of one fallible step.
pub type Outcome<T> = std::result::Result<T, Failure>;

/// A categorized failure.
///
/// Carries exactly one category, a message, and optionally a numeric code
/// and a structured payload. When a failing cleanup displaces an earlier
/// failure, the earlier one is kept as [`suppressed`](Self::suppressed) and
/// reported through [`std::error::Error::source`].
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{category}{}: {message}", code_tag(.code))]
pub struct Failure {
    category: Category,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<serde_json::Value>,
    #[source]
    #[serde(skip_serializing_if = "Option::is_none")]
    suppressed: Option<Box<Failure>>,
}

fn code_tag(code: &Option<i64>) -> String {
    code.map(|code| format!(" [{code}]")).unwrap_or_default()
}

impl Failure {
    /// Raise a failure of any category, typically a domain one.
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        let message = message.into();
        log_debug!(
            category = %category,
            message = %message,
            "Failure raised"
        );
        Self {
            category,
            message,
            code: None,
            payload: None,
            suppressed: None,
        }
    }

    pub fn arithmetic(message: impl Into<String>) -> Self {
        Self::new(Category::ARITHMETIC, message)
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::new(Category::CONVERSION, message)
    }

    pub fn bounds(message: impl Into<String>) -> Self {
        Self::new(Category::BOUNDS, message)
    }

    pub fn lookup(message: impl Into<String>) -> Self {
        Self::new(Category::LOOKUP, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(Category::IO, message)
    }

    pub fn panic(message: impl Into<String>) -> Self {
        Self::new(Category::PANIC, message)
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Attach the failure this one displaced, at the end of any existing
    /// suppressed chain.
    pub fn with_suppressed(mut self, suppressed: Failure) -> Self {
        self.suppressed = Some(Box::new(match self.suppressed.take() {
            Some(existing) => existing.with_suppressed(suppressed),
            None => suppressed,
        }));
        self
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<i64> {
        self.code
    }

    pub fn payload(&self) -> Option<&serde_json::Value> {
        self.payload.as_ref()
    }

    pub fn suppressed(&self) -> Option<&Failure> {
        self.suppressed.as_deref()
    }

    /// Whether this failure's category is `category` or specializes it.
    pub fn is(&self, category: &Category) -> bool {
        self.category.is_a(category)
    }

    /// Severity derived from the root of the failure's category.
    ///
    /// A domain category specializing a built-in inherits the built-in's
    /// severity; root domain categories are [`Severity::Info`].
    pub fn severity(&self) -> Severity {
        let root = self.category.ancestors().last().unwrap_or(&self.category);
        match root {
            Category::Builtin(BuiltinCategory::Panic) => Severity::Critical,
            Category::Builtin(BuiltinCategory::Io) => Severity::Error,
            Category::Builtin(_) => Severity::Warning,
            Category::Domain(_) => Severity::Info,
        }
    }
}

impl From<std::num::ParseIntError> for Failure {
    fn from(err: std::num::ParseIntError) -> Self {
        Self::conversion(err.to_string())
    }
}

impl From<std::num::ParseFloatError> for Failure {
    fn from(err: std::num::ParseFloatError) -> Self {
        Self::conversion(err.to_string())
    }
}

impl From<std::num::TryFromIntError> for Failure {
    fn from(err: std::num::TryFromIntError) -> Self {
        Self::bounds(err.to_string())
    }
}

impl Failure {
    /// `Io` failure for `err`, naming `path` in the message and payload when given.
    pub(crate) fn from_io(err: std::io::Error, path: Option<&Path>) -> Self {
        let kind = format!("{:?}", err.kind());
        match path {
            Some(path) => Self::io(format!("{}: {err}", path.display())).with_payload(
                serde_json::json!({ "kind": kind, "path": path.display().to_string() }),
            ),
            None => Self::io(err.to_string()).with_payload(serde_json::json!({ "kind": kind })),
        }
    }
}

impl From<std::io::Error> for Failure {
    fn from(err: std::io::Error) -> Self {
        Self::from_io(err, None)
    }
}
