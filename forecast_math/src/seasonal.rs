//! Circular storage for multiplicative seasonal factors
//!
//! Holt-Winters reads the factor set one period earlier (absolute index
//! `t - L`) and then produces the factor for index `t`. Both share the phase
//! `t mod L`, so a buffer of exactly `L` slots is enough: every read happens
//! before the write that replaces it.

use crate::{MathError, Result};

/// Seasonal factors for one cycle, addressed by absolute time index
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalFactors {
    slots: Vec<f64>,
    /// Absolute index the next pushed factor belongs to
    next: usize,
}

impl SeasonalFactors {
    /// Seed the buffer with the factors of the first cycle
    pub fn from_cycle(factors: Vec<f64>) -> Result<Self> {
        if factors.is_empty() {
            return Err(MathError::InvalidInput(
                "Seasonal cycle must contain at least one factor".to_string(),
            ));
        }

        let next = factors.len();
        Ok(Self {
            slots: factors,
            next,
        })
    }

    /// Number of phases in one cycle
    pub fn period(&self) -> usize {
        self.slots.len()
    }

    /// Total number of factors produced so far, including the seed cycle
    pub fn len_pushed(&self) -> usize {
        self.next
    }

    /// Factor stored for absolute index `index`
    ///
    /// Only the most recent cycle is retained: indices before
    /// `len_pushed() - period()` were overwritten and give `None`. Larger
    /// indices resolve to the latest factor of the same phase, which is what
    /// forecasting past one cycle needs.
    pub fn get(&self, index: usize) -> Option<f64> {
        if index + self.period() < self.next {
            return None;
        }
        Some(self.latest_of_phase(index))
    }

    /// Latest factor sharing the phase of `index`
    pub(crate) fn latest_of_phase(&self, index: usize) -> f64 {
        self.slots[index % self.period()]
    }

    /// Append the factor for the next absolute index
    pub fn push(&mut self, factor: f64) {
        let slot = self.next % self.period();
        self.slots[slot] = factor;
        self.next += 1;
    }

    /// Factors of the last completed cycle, oldest first
    pub fn latest_cycle(&self) -> Vec<f64> {
        let start = self.next - self.period();
        (start..self.next)
            .map(|index| self.latest_of_phase(index))
            .collect()
    }
}
