//! Property-based tests for the Prim and Kruskal engines.
//!
//! Checks both engines against a plain sequential oracle, validates the
//! structural shape of each spanning forest, and confirms that repeated runs
//! over the same graph report identical edges and operation counts.

mod determinism;
mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
