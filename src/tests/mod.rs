// Test modules for guarded-run
//
// Test organization follows the template pattern where each source file
// has a corresponding test file that focuses on behaviour verification.

// Test helper utilities
pub mod helpers;

// Core unit tests
pub mod builtins;
pub mod category;
