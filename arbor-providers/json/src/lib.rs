//! JSON input and output for arbor batches.
//!
//! Reads graph descriptions from a JSON document and writes the per-graph
//! comparison reports back out as pretty-printed JSON.

mod document;
mod errors;
mod ingest;
mod output;

pub use errors::{JsonProviderError, JsonProviderErrorCode};
pub use ingest::{read_graphs, read_graphs_from_path};
pub use output::{write_results, write_results_to_path};
