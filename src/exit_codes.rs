//! Exit code constants for the planck launcher.
//!
//! - 0: Success
//! - 1: Usage error (bad or conflicting options, invalid values) or an
//!   unreadable input
//!
//! Any other code is reported by the evaluator and passed through unchanged.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Usage error: unknown option, conflicting options, or invalid value.
pub const USER_ERROR: i32 = 1;
