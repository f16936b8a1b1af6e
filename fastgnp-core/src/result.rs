//! Result types for graph generation.
//!
//! Provides the linear edge-index representation and the immutable record
//! packaged at the end of each generation call.

use std::{num::NonZeroU64, time::Duration};

use crate::builder::Algorithm;

/// Linear index of one directed edge in the row-major n×n adjacency matrix.
///
/// Indices run over the full matrix, self-loops included: index `i` denotes
/// the edge from vertex `i / n` to vertex `i % n`.
///
/// # Examples
/// ```
/// use std::num::NonZeroU64;
/// use fastgnp_core::EdgeIndex;
///
/// let n = NonZeroU64::new(3).expect("non-zero");
/// let edge = EdgeIndex::new(7);
/// assert_eq!(edge.get(), 7);
/// assert_eq!(edge.endpoints(n), (2, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeIndex(u64);

impl EdgeIndex {
    /// Creates a new edge index.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(index: u64) -> Self { Self(index) }

    /// Returns the underlying linear index.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }

    /// Projects the linear index onto its `(source, target)` vertex pair.
    #[must_use]
    pub const fn endpoints(self, vertices: NonZeroU64) -> (u64, u64) {
        (self.0 / vertices.get(), self.0 % vertices.get())
    }
}

/// Represents the outcome of one [`crate::Generator::generate`] invocation.
///
/// Created atomically at the end of a generation call and never mutated.
/// The edge sequence is ordered: strictly ascending for the skip-based
/// algorithms, ascending scan order for PER.
///
/// # Examples
/// ```
/// use fastgnp_core::{Algorithm, generate_graph};
///
/// let result = generate_graph(3, 1.0, Algorithm::Per, 7)?;
/// assert_eq!(result.edge_count(), 9);
/// assert_eq!(result.edge_pairs().next(), Some((0, 0)));
/// # Ok::<(), fastgnp_core::GnpError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphResult {
    vertices: NonZeroU64,
    edge_probability: f64,
    algorithm: Algorithm,
    seed: u64,
    elapsed: Duration,
    edges: Vec<EdgeIndex>,
}

impl GraphResult {
    pub(crate) fn new(
        vertices: NonZeroU64,
        edge_probability: f64,
        algorithm: Algorithm,
        seed: u64,
        elapsed: Duration,
        edges: Vec<EdgeIndex>,
    ) -> Self {
        Self {
            vertices,
            edge_probability,
            algorithm,
            seed,
            elapsed,
            edges,
        }
    }

    /// Returns the vertex count the graph was generated for.
    #[must_use]
    pub const fn vertices(&self) -> NonZeroU64 {
        self.vertices
    }

    /// Returns the edge probability the graph was generated with.
    #[must_use]
    pub const fn edge_probability(&self) -> f64 {
        self.edge_probability
    }

    /// Returns the algorithm that produced this result.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the seed the run consumed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the wall time the generation call took.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the ordered edge indices.
    #[must_use]
    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }

    /// Counts the edges in the result.
    ///
    /// # Examples
    /// ```
    /// use fastgnp_core::{Algorithm, generate_graph};
    ///
    /// let result = generate_graph(10, 0.0, Algorithm::Pzer, 7)?;
    /// assert_eq!(result.edge_count(), 0);
    /// # Ok::<(), fastgnp_core::GnpError>(())
    /// ```
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates the edges as `(source, target)` vertex pairs.
    pub fn edge_pairs(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        let vertices = self.vertices;
        self.edges.iter().map(move |edge| edge.endpoints(vertices))
    }
}
