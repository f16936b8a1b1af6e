//! Graph generation orchestration.
//!
//! Provides the [`Generator`] entry point that dispatches to the selected
//! algorithm, times the call, and packages the outcome.

use std::{num::NonZeroU64, time::Instant};

use tracing::{info, instrument};

use crate::{
    Result,
    algo,
    builder::{Algorithm, GeneratorBuilder},
    result::GraphResult,
};

/// Validated parameter set for G(n, p) generation.
///
/// Constructed through [`GeneratorBuilder`]; once built, generation cannot
/// fail — there is no I/O and nothing transient inside the core, so every
/// failure mode is an invalid input caught at build time.
///
/// # Examples
/// ```
/// use fastgnp_core::{Algorithm, GeneratorBuilder};
///
/// let generator = GeneratorBuilder::new()
///     .with_vertices(4)
///     .with_edge_probability(1.0)
///     .with_algorithm(Algorithm::Pzer)
///     .build()
///     .expect("configuration is valid");
/// let result = generator.generate();
/// assert_eq!(result.edge_count(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    vertices: NonZeroU64,
    edge_probability: f64,
    algorithm: Algorithm,
    seed: u64,
    skip_table_depth: usize,
}

impl Generator {
    pub(crate) const fn new(
        vertices: NonZeroU64,
        edge_probability: f64,
        algorithm: Algorithm,
        seed: u64,
        skip_table_depth: usize,
    ) -> Self {
        Self {
            vertices,
            edge_probability,
            algorithm,
            seed,
            skip_table_depth,
        }
    }

    /// Returns the vertex count generation will use.
    #[must_use]
    pub const fn vertices(&self) -> NonZeroU64 {
        self.vertices
    }

    /// Returns the configured edge probability.
    #[must_use]
    pub const fn edge_probability(&self) -> f64 {
        self.edge_probability
    }

    /// Returns the algorithm generation will run.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the configured seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Runs the configured algorithm and packages the outcome.
    ///
    /// Each call owns a private random state rebuilt from the stored seed,
    /// so repeated calls are independent and return identical results.
    ///
    /// # Examples
    /// ```
    /// use fastgnp_core::{Algorithm, GeneratorBuilder};
    ///
    /// let generator = GeneratorBuilder::new()
    ///     .with_vertices(50)
    ///     .with_edge_probability(0.2)
    ///     .with_algorithm(Algorithm::PPreZer)
    ///     .build()
    ///     .expect("configuration is valid");
    /// assert_eq!(generator.generate().edges(), generator.generate().edges());
    /// ```
    #[instrument(
        name = "core.generate",
        skip(self),
        fields(
            n = self.vertices.get(),
            p = self.edge_probability,
            algorithm = %self.algorithm,
            seed = self.seed,
        ),
    )]
    pub fn generate(&self) -> GraphResult {
        let started = Instant::now();
        let edges = match self.algorithm {
            Algorithm::Per => algo::per::run(self.vertices, self.edge_probability, self.seed),
            Algorithm::Pzer => algo::pzer::run(self.vertices, self.edge_probability, self.seed),
            Algorithm::PPreZer => algo::pprezer::run(
                self.vertices,
                self.edge_probability,
                self.seed,
                self.skip_table_depth,
            ),
        };
        let elapsed = started.elapsed();
        info!(
            edges = edges.len(),
            elapsed_us = elapsed.as_micros() as u64,
            "generation completed"
        );

        GraphResult::new(
            self.vertices,
            self.edge_probability,
            self.algorithm,
            self.seed,
            elapsed,
            edges,
        )
    }
}

/// Generates a graph in one call: builds, validates, and runs.
///
/// This is the convenience surface over [`GeneratorBuilder`] for callers
/// that have all four parameters in hand.
///
/// # Errors
/// Returns [`crate::GnpError::InvalidVertexCount`] or
/// [`crate::GnpError::InvalidProbability`] when validation rejects the
/// parameters; no random state is consumed on the failure path.
///
/// # Examples
/// ```
/// use fastgnp_core::{Algorithm, generate_graph};
///
/// let result = generate_graph(3, 1.0, Algorithm::Per, 7)?;
/// let indices: Vec<u64> = result.edges().iter().map(|edge| edge.get()).collect();
/// assert_eq!(indices, (0..9).collect::<Vec<u64>>());
/// # Ok::<(), fastgnp_core::GnpError>(())
/// ```
pub fn generate_graph(
    vertices: u64,
    edge_probability: f64,
    algorithm: Algorithm,
    seed: u64,
) -> Result<GraphResult> {
    GeneratorBuilder::new()
        .with_vertices(vertices)
        .with_edge_probability(edge_probability)
        .with_algorithm(algorithm)
        .with_seed(seed)
        .build()
        .map(|generator| generator.generate())
}
