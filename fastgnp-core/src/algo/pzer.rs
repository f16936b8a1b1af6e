//! PZER: geometric skips between consecutive edges.

use std::num::NonZeroU64;

use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    algo::position_count,
    result::EdgeIndex,
    skip::{Skip, geometric_skip},
};

/// Walks the `n^2` position space by Geometric(p) jumps, recording the
/// position just before each landing point.
///
/// Work is proportional to the number of edges produced rather than to
/// `n^2`, which favours sparse densities. The scan ends when a skip reports
/// [`Skip::Exhausted`] or the cursor passes the end of the matrix.
pub(crate) fn run(vertices: NonZeroU64, p: f64, seed: u64) -> Vec<EdgeIndex> {
    let total = position_count(vertices);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut edges = Vec::new();
    let mut cursor = 0_u64;
    while cursor < total {
        match geometric_skip(p, &mut rng) {
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
