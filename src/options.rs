use crate::error::{Error, Result};

/// Default maximum height of a skip list. LevelDB uses 12.
pub const MAX_LEVEL: usize = 12;

/// Default promotion probability. LevelDB uses 1/4, not 1/2:
/// fewer levels per node means less memory for the same expected search cost.
pub const PROBABILITY: f64 = 0.25;

/// Construction parameters for a [`SkipList`](crate::SkipList).
///
/// `max_level` bounds the span of every node (and of the header).
/// `probability` is the chance a node reaching level `i` also reaches `i + 1`.
/// `seed` pins the level generator's RNG; `None` seeds it from OS entropy.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub max_level: usize,
    pub probability: f64,
    pub seed: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_level: MAX_LEVEL,
            probability: PROBABILITY,
            seed: None,
        }
    }
}

impl Options {
    /// Options with the given bounds and an entropy-seeded RNG.
    pub fn new(max_level: usize, probability: f64) -> Self {
        Options {
            max_level,
            probability,
            seed: None,
        }
    }

    /// Pin the RNG seed so level draws are reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject parameters that would make traversal meaningless.
    ///
    /// NaN fails the range check as well, since every comparison with it is false.
    pub fn validate(&self) -> Result<()> {
        if self.max_level == 0 {
            return Err(Error::InvalidConfig("max_level must be > 0".into()));
        }
        if !(self.probability > 0.0 && self.probability < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "probability must be in (0, 1), got {}",
                self.probability
            )));
        }
        Ok(())
    }
}
