//! The three edge-generation algorithms.
//!
//! Each routine is a pure function from validated parameters to the ordered
//! edge-index list; [`crate::Generator`] owns dispatch and timing.

pub(crate) mod per;
pub(crate) mod pprezer;
pub(crate) mod pzer;

use std::num::NonZeroU64;

/// Size of the scanned position space: the full adjacency matrix,
/// self-loops included.
pub(crate) const fn position_count(vertices: NonZeroU64) -> u64 {
    vertices.get().saturating_mul(vertices.get())
}
