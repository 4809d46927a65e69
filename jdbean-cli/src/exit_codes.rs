/// Exit codes for CI/automation.
pub const SUCCESS: i32 = 0;
pub const COOKIES_INVALID: i32 = 2;
pub const RUN_FAILED: i32 = 3;
pub const RUNTIME_ERROR: i32 = 4;
