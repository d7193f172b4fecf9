use crate::errors::HsnResult;
use crate::models::{BatchResult, ValidationOutcome};

/// Code validation contract exposed to adapters (tool calls, RPC handlers).
pub trait ICodeValidator: Send + Sync {
    /// Validate a single code.
    fn validate(&self, code: &str) -> HsnResult<ValidationOutcome>;

    /// Validate codes in order, one outcome per input.
    fn validate_many(&self, codes: &[String]) -> HsnResult<BatchResult>;
}
