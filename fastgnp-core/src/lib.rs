//! FASTGNP core library.
//!
//! Generates Erdős–Rényi random directed graphs G(n, p) over the full n×n
//! index space, self-loops included, with one of three sequential
//! algorithms: per-edge Bernoulli trials (PER), geometric-skip sampling
//! (PZER), and table-accelerated geometric-skip sampling (PPreZER).

mod algo;
mod builder;
mod error;
mod generator;
mod lcg;
mod result;
mod skip;

pub use crate::{
    builder::{Algorithm, DEFAULT_SKIP_TABLE_DEPTH, GeneratorBuilder},
    error::{GnpError, GnpErrorCode, Result},
    generator::{Generator, generate_graph},
    result::{EdgeIndex, GraphResult},
};
