use serde::{Deserialize, Serialize};

/// Small seeded generator for roster synthesis.
///
/// Same seed, same sequence, on every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    /// Next pseudo-random `u64`; the high bits are the well-mixed ones.
    pub const fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state >> 16
    }

    /// Next value in `[0, upper_exclusive)`; `0` when the range is empty.
    pub const fn next_bounded(&mut self, upper_exclusive: u64) -> u64 {
        if upper_exclusive == 0 {
            return 0;
        }
        self.next_u64() % upper_exclusive
    }

    /// Next length in `[0, max_inclusive]`.
    pub fn next_len(&mut self, max_inclusive: usize) -> usize {
        let upper = u64::try_from(max_inclusive).map_or(u64::MAX, |m| m.saturating_add(1));
        usize::try_from(self.next_bounded(upper)).unwrap_or(max_inclusive)
    }

    /// Bernoulli trial with integer percent.
    pub fn hit_rate_percent(&mut self, percent: u8) -> bool {
        if percent == 0 {
            return false;
        }
        if percent >= 100 {
            return true;
        }
        self.next_bounded(100) < u64::from(percent)
    }
}
