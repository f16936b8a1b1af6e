//! Builder utilities for configuring graph generation.
//!
//! Exposes the algorithm selection surface and the parameter validation
//! performed before constructing [`Generator`] instances.

use std::{fmt, num::NonZeroU64, str::FromStr};

use crate::{Result, error::GnpError, generator::Generator};

/// Depth of the cumulative skip-probability table precomputed by PPreZER.
pub const DEFAULT_SKIP_TABLE_DEPTH: usize = 10;

const DEFAULT_VERTICES: u64 = 1;
const DEFAULT_EDGE_PROBABILITY: f64 = 0.5;
const DEFAULT_SEED: u64 = 7;

/// Selects which edge-generation algorithm [`Generator::generate`] runs.
///
/// The enumeration is closed: once a selector has parsed, dispatch cannot
/// fail. Rogue selector strings are rejected at the parsing seam with
/// [`GnpError::UnknownAlgorithm`].
///
/// # Examples
/// ```
/// use fastgnp_core::Algorithm;
///
/// let algorithm: Algorithm = "pzer".parse()?;
/// assert_eq!(algorithm, Algorithm::Pzer);
/// assert_eq!(algorithm.to_string(), "pzer");
/// # Ok::<(), fastgnp_core::GnpError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// One independent Bernoulli(p) trial per potential edge.
    Per,
    /// Geometric skips between consecutive edges.
    Pzer,
    /// Geometric skips resolved against a precomputed table.
    PPreZer,
}

impl Algorithm {
    /// Lowercase tag used on the command line and in log output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Per => "per",
            Self::Pzer => "pzer",
            Self::PPreZer => "pprezer",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = GnpError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "per" => Ok(Self::Per),
            "pzer" => Ok(Self::Pzer),
            "pprezer" => Ok(Self::PPreZer),
            other => Err(GnpError::UnknownAlgorithm {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Configures and constructs [`Generator`] instances.
///
/// # Examples
/// ```
/// use fastgnp_core::{Algorithm, GeneratorBuilder};
///
/// let generator = GeneratorBuilder::new()
///     .with_vertices(100)
///     .with_edge_probability(0.1)
///     .with_algorithm(Algorithm::Pzer)
///     .with_seed(7)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.vertices().get(), 100);
/// assert_eq!(generator.algorithm(), Algorithm::Pzer);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    vertices: u64,
    edge_probability: f64,
    algorithm: Algorithm,
    seed: u64,
    skip_table_depth: usize,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            vertices: DEFAULT_VERTICES,
            edge_probability: DEFAULT_EDGE_PROBABILITY,
            algorithm: Algorithm::Per,
            seed: DEFAULT_SEED,
            skip_table_depth: DEFAULT_SKIP_TABLE_DEPTH,
        }
    }
}

impl GeneratorBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use fastgnp_core::{Algorithm, GeneratorBuilder};
    ///
    /// let builder = GeneratorBuilder::new();
    /// assert_eq!(builder.vertices(), 1);
    /// assert_eq!(builder.algorithm(), Algorithm::Per);
    /// assert_eq!(builder.seed(), 7);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the vertex count.
    #[must_use]
    pub fn with_vertices(mut self, vertices: u64) -> Self {
        self.vertices = vertices;
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    pub fn vertices(&self) -> u64 {
        self.vertices
    }

    /// Overrides the edge probability.
    #[must_use]
    pub fn with_edge_probability(mut self, p: f64) -> Self {
        self.edge_probability = p;
        self
    }

    /// Returns the configured edge probability.
    #[must_use]
    pub fn edge_probability(&self) -> f64 {
        self.edge_probability
    }

    /// Sets the algorithm to run.
    ///
    /// # Examples
    /// ```
    /// use fastgnp_core::{Algorithm, GeneratorBuilder};
    ///
    /// let builder = GeneratorBuilder::new().with_algorithm(Algorithm::PPreZer);
    /// assert_eq!(builder.algorithm(), Algorithm::PPreZer);
    /// ```
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Returns the currently selected algorithm.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Sets the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Overrides the PPreZER skip-table depth.
    #[must_use]
    pub fn with_skip_table_depth(mut self, depth: usize) -> Self {
        self.skip_table_depth = depth;
        self
    }

    /// Returns the configured skip-table depth.
    #[must_use]
    pub fn skip_table_depth(&self) -> usize {
        self.skip_table_depth
    }

    /// Validates the configuration and constructs a [`Generator`].
    ///
    /// Validation runs before any random state exists: a rejected call never
    /// consumes entropy.
    ///
    /// # Errors
    /// Returns [`GnpError::InvalidVertexCount`] when the vertex count is
    /// zero and [`GnpError::InvalidProbability`] when the probability falls
    /// outside `[0, 1]` (NaN included).
    ///
    /// # Examples
    /// ```
    /// use fastgnp_core::{GeneratorBuilder, GnpError};
    ///
    /// let err = GeneratorBuilder::new()
    ///     .with_vertices(10)
    ///     .with_edge_probability(1.5)
    ///     .build()
    ///     .expect_err("out-of-range probability must be rejected");
    /// assert!(matches!(err, GnpError::InvalidProbability { .. }));
    /// ```
    pub fn build(self) -> Result<Generator> {
        let vertices =
            NonZeroU64::new(self.vertices).ok_or(GnpError::InvalidVertexCount {
                got: self.vertices,
            })?;
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(GnpError::InvalidProbability {
                got: self.edge_probability,
            });
        }

        Ok(Generator::new(
            vertices,
            self.edge_probability,
            self.algorithm,
            self.seed,
            self.skip_table_depth,
        ))
    }
}
