//! Execution machinery for guarded runs
//!
//! One module per stage: `executor` attempts the operation, `dispatch`
//! selects a recovery handler, `cleanup` runs the guaranteed cleanup and
//! resolves overrides. [`crate::guard`] wires them together.

pub mod cleanup;
pub mod dispatch;
pub mod executor;
