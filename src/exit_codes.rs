//! Exit code constants for the iidcheck CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid config)
//! - 2: IID violation (an interface changed without a new IID)
//! - 3: Self-test failure (output differs from the reference file)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// At least one changed interface still needs a new IID.
pub const IID_VIOLATION: i32 = 2;

/// Self-test output did not match the reference file.
pub const SELF_TEST_FAILURE: i32 = 3;
