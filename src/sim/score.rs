//! Score ledger

use serde::{Deserialize, Serialize};

/// Monotonic point counter for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    value: u32,
    /// Frozen final value once the run has ended
    final_value: Option<u32>,
}

impl ScoreLedger {
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Score reported at game over, if the run has ended
    pub fn final_value(&self) -> Option<u32> {
        self.final_value
    }

    /// Record one scored zone. Returns the new total.
    ///
    /// Ignored after [`ScoreLedger::close`].
    pub fn record(&mut self) -> u32 {
        if self.final_value.is_none() {
            self.value += 1;
        }
        self.value
    }

    /// Start a new run at zero
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Freeze the total for end-of-session reporting
    pub fn close(&mut self) -> u32 {
        *self.final_value.get_or_insert(self.value)
    }
}
