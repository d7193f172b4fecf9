/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shortest valid code length, in digits.
pub const MIN_CODE_LEN: usize = 2;

/// Longest valid code length, in digits.
pub const MAX_CODE_LEN: usize = 8;

/// Codes grow one hierarchy level per this many digits.
pub const LEVEL_WIDTH: usize = 2;

/// Description reported for codes absent from the catalog.
pub const DESCRIPTION_NOT_FOUND: &str = "not found";

/// Final rule-trail message for a fully valid code.
pub const FINAL_VALID_MESSAGE: &str = "Code is valid";

/// Final rule-trail message for a code that failed any rule.
pub const FINAL_INVALID_MESSAGE: &str = "Code is invalid";
