//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic graph generators and parameter types used by
//! the Criterion benchmarks that compare the Prim and Kruskal engines and
//! the batch runner.

pub mod error;
pub mod params;
pub mod source;
