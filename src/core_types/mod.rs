//! Core types shared by the executor, dispatcher and cleanup runner
//!
//! ## Organization
//! - `category` - Built-in and domain error categories
//! - `phase` - Run lifecycle phases and the report returned to callers

pub mod category;
pub mod phase;

pub use category::{Ancestors, BuiltinCategory, Category, DomainCategory};
pub use phase::{Phase, RunReport};
