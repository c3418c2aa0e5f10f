//! Rule variations that callers may tune.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How move generation treats a target square holding the enemy king.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KingCapturePolicy {
    /// King squares are never reported as targets.
    #[default]
    Forbid,
    /// If a piece can reach the enemy king, that capture is its only target.
    Force,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RulesConfig {
    pub king_capture: KingCapturePolicy,
    /// Minimum number of own pieces before `legal_moves_parallel` spawns threads
    pub parallel_threshold: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            king_capture: KingCapturePolicy::Forbid,
            parallel_threshold: 6,
        }
    }
}

impl RulesConfig {
    #[must_use]
    pub const fn with_king_capture(mut self, policy: KingCapturePolicy) -> Self {
        self.king_capture = policy;
        self
    }

    #[must_use]
    pub const fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
