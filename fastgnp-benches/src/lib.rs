//! Shared sweep parameters for the fastgnp benchmark suite.

use fastgnp_core::{Algorithm, Generator, GeneratorBuilder, Result};

/// Seed used for all benchmark generation.
pub const SEED: u64 = 42;

/// Vertex counts to sweep.
pub const VERTEX_COUNTS: &[u64] = &[100, 500, 1_000];

/// Edge probabilities to sweep, from sparse to dense. The sparse points are
/// where the skip-based algorithms separate from PER's Θ(n²) scan.
pub const EDGE_PROBABILITIES: &[f64] = &[0.001, 0.1, 0.5];

/// Builds a generator for one sweep point.
///
/// # Errors
/// Returns the core validation error when the sweep point is invalid.
pub fn build_generator(vertices: u64, p: f64, algorithm: Algorithm) -> Result<Generator> {
    GeneratorBuilder::new()
        .with_vertices(vertices)
        .with_edge_probability(p)
        .with_algorithm(algorithm)
        .with_seed(SEED)
        .build()
}
