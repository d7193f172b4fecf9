//! Stable error codes for adapter responses.

/// Maps an error to a stable, machine-readable code string.
///
/// Adapters (tool calls, RPC handlers) put this code in their error payloads
/// so callers can branch without parsing the display message.
pub trait HsnErrorCode {
    /// Returns the error code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_CATALOG: &str = "INVALID_CATALOG";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const NO_CATALOG: &str = "NO_CATALOG";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const UNSUPPORTED_CATALOG: &str = "UNSUPPORTED_CATALOG";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONCURRENCY_ERROR: &str = "CONCURRENCY_ERROR";
