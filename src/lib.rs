//! # guarded-run
//!
//! Structured failure propagation and recovery: run a fallible operation,
//! recover through an ordered table of category handlers, and always run a
//! cleanup action afterwards.
//!
//! ## Key Features
//!
//! - **Categorized failures**: every [`Failure`] carries exactly one [`Category`]
//! - **Hierarchical domain categories**: a handler for a general category
//!   also catches its specializations
//! - **First-match dispatch**: handlers are tried in declaration order and at
//!   most one fires
//! - **Guaranteed cleanup**: runs exactly once on every path, panics included;
//!   a failing cleanup overrides the pending outcome and keeps the displaced
//!   failure as its source
//!
//! ## Example
//!
//! ```rust
//! use guarded_run::{Category, Failure, Guard};
//!
//! let validation = Category::domain("ValidationError");
//! let minor = validation.specialize("MinorValidationError");
//!
//! let outcome = Guard::attempt(|| -> guarded_run::Outcome<&str> {
//!         Err(Failure::new(minor.clone(), "Minor issue").with_code(1002))
//!     })
//!     .catch(validation.clone(), |failure| {
//!         assert_eq!(failure.code(), Some(1002));
//!         Ok("continued")
//!     })
//!     .run();
//!
//! assert_eq!(outcome, Ok("continued"));
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

pub mod core_types;

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod builtins;
pub mod config;
pub mod error;
pub mod guard;
pub mod internals;

#[cfg(test)]
pub mod tests;

pub use config::GuardConfig;
pub use core_types::{BuiltinCategory, Category, Phase, RunReport};
pub use error::{Failure, Outcome, Severity};
pub use guard::{run, Guard};
pub use internals::cleanup::{finalize, noop_cleanup, CleanupAction};
pub use internals::dispatch::{Catch, Dispatch, HandlerTable};
pub use internals::executor::attempt;
