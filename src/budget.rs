//! Step budget for a single `sample` call.

use crate::error::SampleError;

/// Counts down traversal steps and fails once the allowance is spent.
#[derive(Debug, Clone)]
pub struct Budget {
    allowance: usize,
    remaining: usize,
}

impl Budget {
    pub fn new(allowance: usize) -> Self {
        Self {
            allowance,
            remaining: allowance,
        }
    }

    /// Consume one step.
    ///
    /// # Errors
    ///
    /// Returns `SampleError::SchemaSizeExceeded` when no steps are left.
    pub fn tick(&mut self) -> Result<(), SampleError> {
        if self.remaining == 0 {
            return Err(SampleError::SchemaSizeExceeded {
                ticks: self.allowance,
            });
        }
        self.remaining -= 1;
        Ok(())
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn used(&self) -> usize {
        self.allowance - self.remaining
    }
}
