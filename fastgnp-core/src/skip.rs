//! Geometric skip sampling shared by the PZER and PPreZER algorithms.

use rand::{Rng, distributions::Standard, rngs::SmallRng};

/// Outcome of drawing the distance to the next included edge position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Skip {
    /// Advance the scan cursor by this many positions (always at least 1).
    Advance(u64),
    /// No further edge can occur; the scan is over.
    Exhausted,
}

/// Draws a Geometric(p) skip length via inverse-CDF sampling.
///
/// Support is `{1, 2, ...}` with `P(X = i) = (1 - p)^(i-1) * p`. The
/// boundaries collapse the distribution: `p <= 0` yields
/// [`Skip::Exhausted`] and `p >= 1` pins every skip to 1.
pub(crate) fn geometric_skip(p: f64, rng: &mut SmallRng) -> Skip {
    if p <= 0.0 {
        return Skip::Exhausted;
    }
    if p >= 1.0 {
        return Skip::Advance(1);
    }

    let u: f64 = rng.sample(Standard);
    let raw = ((1.0 - u).ln() / (1.0 - p).ln()).floor();
    // A raw value below zero is a floating-point artifact near the
    // boundaries; the saturating cast clamps it and the support stays >= 1.
    Skip::Advance((raw as u64).saturating_add(1))
}

/// Cumulative probabilities for the first `depth` geometric skip lengths.
///
/// Resolves the common short-skip case with one uniform draw and a linear
/// scan; the tail mass past the table falls back to [`geometric_skip`] with
/// a fresh draw.
#[derive(Debug, Clone)]
pub(crate) struct SkipTable {
    p: f64,
    cumulative: Vec<f64>,
}

impl SkipTable {
    /// Builds the table for `0 < p < 1`. Rebuilt once per generation call.
    pub(crate) fn new(p: f64, depth: usize) -> Self {
        debug_assert!(p > 0.0 && p < 1.0, "table requires 0 < p < 1");
        let mut cumulative = Vec::with_capacity(depth);
        let mut acc = 0.0_f64;
        for exponent in 0..depth {
            acc += (1.0 - p).powi(exponent as i32) * p;
            cumulative.push(acc);
        }
        Self { p, cumulative }
    }

    pub(crate) fn sample(&self, rng: &mut SmallRng) -> Skip {
        let u: f64 = rng.sample(Standard);
        for (slot, threshold) in self.cumulative.iter().enumerate() {
            if u <= *threshold {
                return Skip::Advance(slot as u64 + 1);
            }
        }
        geometric_skip(self.p, rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn zero_probability_exhausts_the_scan() {
        assert_eq!(geometric_skip(0.0, &mut rng()), Skip::Exhausted);
        assert_eq!(geometric_skip(-0.5, &mut rng()), Skip::Exhausted);
    }

    #[test]
    fn full_probability_pins_the_skip_to_one() {
        assert_eq!(geometric_skip(1.0, &mut rng()), Skip::Advance(1));
    }

    #[test]
    fn skips_never_fall_below_one() {
        // Near-one densities exercise the clamp against precision artifacts.
        let mut rng = rng();
        for _ in 0..1_000 {
            match geometric_skip(1.0 - 1e-12, &mut rng) {
                Skip::Advance(step) => assert!(step >= 1),
                Skip::Exhausted => panic!("positive density must keep scanning"),
            }
        }
    }

    #[test]
    fn table_accumulates_the_geometric_cdf() {
        let table = SkipTable::new(0.5, 3);
        let expected = [0.5, 0.75, 0.875];
        assert_eq!(table.cumulative.len(), 3);
        for (value, expected) in table.cumulative.iter().zip(expected) {
            assert!((value - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn table_samples_stay_in_the_support() {
        let table = SkipTable::new(0.3, 5);
        let mut rng = rng();
        for _ in 0..1_000 {
            match table.sample(&mut rng) {
                Skip::Advance(step) => assert!(step >= 1),
                Skip::Exhausted => panic!("0 < p < 1 cannot exhaust"),
            }
        }
    }

    #[test]
    fn empty_table_always_falls_back() {
        let table = SkipTable::new(0.4, 0);
        let mut rng = rng();
        assert!(matches!(table.sample(&mut rng), Skip::Advance(_)));
    }
}
