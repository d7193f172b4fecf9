use serde::{Deserialize, Serialize};

use super::ValidationOutcome;

/// Outcomes for a batch, one per input code, in input order.
///
/// `completed` is false only when the batch was cancelled; `outcomes` then
/// holds the prefix produced before cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    pub outcomes: Vec<ValidationOutcome>,
    pub completed: bool,
}

impl BatchResult {
    pub fn new(outcomes: Vec<ValidationOutcome>, completed: bool) -> Self {
        Self {
            outcomes,
            completed,
        }
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationOutcome> {
        self.outcomes.iter()
    }

    pub fn valid_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_valid).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.len() - self.valid_count()
    }

    /// Aggregate verdict: every code in a completed batch is valid.
    pub fn all_valid(&self) -> bool {
        self.completed && self.outcomes.iter().all(|o| o.is_valid)
    }
}

impl<'a> IntoIterator for &'a BatchResult {
    type Item = &'a ValidationOutcome;
    type IntoIter = std::slice::Iter<'a, ValidationOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}
