/// Exit code indicating success.
pub const SUCCESS: i32 = 0;

/// Exit code for general errors.
pub const GENERAL_ERROR: i32 = 1;
