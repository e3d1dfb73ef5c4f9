//! Randomness seam for behavior draws and placement.
//!
//! Production code uses any `rand::Rng`; tests script exact draws.

use rand::Rng;

/// Source of the random values the pet logic consumes.
pub trait RandomSource {
    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform index in `[0, len)`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform integer in `[lo, hi]`, inclusive.
    fn between(&mut self, lo: i32, hi: i32) -> i32;

    /// Fair coin.
    fn coin(&mut self) -> bool {
        self.index(2) == 1
    }
}

impl<R: Rng> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn between(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.gen_range(lo..=hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rng_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
            assert!(rng.index(3) < 3);
            let v = rng.between(50, 130);
            assert!((50..=130).contains(&v));
        }
    }

    #[test]
    fn degenerate_range_returns_low_bound() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(rng.between(10, 10), 10);
        assert_eq!(rng.between(10, 3), 10);
    }
}
