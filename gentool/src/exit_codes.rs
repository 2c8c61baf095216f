//! Stable exit codes for gentool commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// The tool ran and reported failure (see its log lines).
pub const FAILED: i32 = 1;
/// Configuration could not be loaded or written, or another setup error.
pub const INVALID: i32 = 2;
