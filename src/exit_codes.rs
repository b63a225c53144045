//! Exit code constants for the trellis CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad path syntax, missing file)
//! - 2: Decode failure (document is not valid YAML or not object-shaped)
//! - 3: Edit failure (duplicate key on rename)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, bad path syntax, or file I/O failure.
pub const USER_ERROR: i32 = 1;

/// Decode failure: the document could not be turned into a value tree.
pub const DECODE_FAILURE: i32 = 2;

/// Edit failure: the requested edit would lose data (duplicate key).
pub const EDIT_FAILURE: i32 = 3;
