//! PPreZER: PZER with a precomputed table for short skips.

use std::num::NonZeroU64;

use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    algo::position_count,
    result::EdgeIndex,
    skip::{Skip, SkipTable},
};

/// Same scan as PZER, but each skip resolves against the cumulative table
/// before falling back to the logarithmic sampler.
///
/// The degenerate densities never enter the loop: `p <= 0` produces no
/// edges and `p >= 1` produces the complete range outright.
pub(crate) fn run(
    vertices: NonZeroU64,
    p: f64,
    seed: u64,
    table_depth: usize,
) -> Vec<EdgeIndex> {
    let total = position_count(vertices);
    if p <= 0.0 {
        return Vec::new();
    }
    if p >= 1.0 {
        return (0..total).map(EdgeIndex::new).collect();
    }

    let table = SkipTable::new(p, table_depth);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut edges = Vec::new();
    let mut cursor = 0_u64;
    while cursor < total {
        match table.sample(&mut rng) {
            Skip::Exhausted => break,
            Skip::Advance(step) => {
                cursor = cursor.saturating_add(step);
                if cursor <= total {
                    edges.push(EdgeIndex::new(cursor - 1));
                }
            }
        }
    }
    edges
}
