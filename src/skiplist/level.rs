use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Decides how many levels a freshly inserted node spans.
///
/// Spans follow a geometric distribution truncated at `max_level`:
/// a node reaching level `i` reaches `i + 1` with chance `probability`.
/// With p = 1/4 roughly one node in four appears on level 1, one in
/// sixteen on level 2, and so on. That thinning is what keeps the
/// expected search path at O(log n) with no rebalancing.
pub struct LevelGenerator {
    max_level: usize,
    probability: f64,
    rng: StdRng,
}

impl LevelGenerator {
    /// Callers validate `max_level > 0` and `probability` in (0, 1) first.
    pub fn new(max_level: usize, probability: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        LevelGenerator {
            max_level,
            probability,
            rng,
        }
    }

    /// Draw a span in `[1, max_level]`.
    pub fn random_level(&mut self) -> usize {
        let mut span = 1;
        while span < self.max_level && self.rng.r#gen::<f64>() < self.probability {
            span += 1;
        }
        span
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_within_bounds() {
        let mut lg = LevelGenerator::new(4, 0.9, Some(7));
        for _ in 0..10_000 {
            let span = lg.random_level();
            assert!((1..=4).contains(&span));
        }
    }

    #[test]
    fn test_single_level_always_one() {
        let mut lg = LevelGenerator::new(1, 0.99, Some(7));
        for _ in 0..1_000 {
            assert_eq!(lg.random_level(), 1);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = LevelGenerator::new(12, 0.5, Some(42));
        let mut b = LevelGenerator::new(12, 0.5, Some(42));
        let xs: Vec<usize> = (0..256).map(|_| a.random_level()).collect();
        let ys: Vec<usize> = (0..256).map(|_| b.random_level()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_distribution_roughly_geometric() {
        // With p = 0.5, about half the draws should stop at span 1.
        let mut lg = LevelGenerator::new(16, 0.5, Some(1));
        let n = 20_000;
        let ones = (0..n).filter(|_| lg.random_level() == 1).count();
        let ratio = ones as f64 / n as f64;
        assert!(ratio > 0.45 && ratio < 0.55, "ratio of span 1 was {ratio}");
    }
}
