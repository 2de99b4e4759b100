//! Writing batch reports as JSON.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use arbor_core::BatchReport;
use tracing::instrument;

use crate::{document::OutputDocument, errors::JsonProviderError};

/// Writes `batch` to `writer` as a pretty-printed `{"results": [...]}`
/// document.
///
/// Each result lists `graph_id`, `input_stats` and a `prim` and `kruskal`
/// entry with `mst_edges`, `total_cost`, `operations_count` and
/// `execution_time_ms` in fractional milliseconds. Graphs skipped by the
/// batch appear under `skipped` only when there are any.
///
/// # Errors
/// Returns [`JsonProviderError::Serialise`] when writing fails.
pub fn write_results(
    batch: &BatchReport,
    mut writer: impl Write,
) -> Result<(), JsonProviderError> {
    serde_json::to_writer_pretty(&mut writer, &OutputDocument::new(batch))
        .map_err(JsonProviderError::Serialise)
}

/// Creates or truncates `path` and writes `batch` to it.
///
/// # Errors
/// Returns [`JsonProviderError::Io`] when the file cannot be created or
/// flushed and [`JsonProviderError::Serialise`] when writing fails.
#[instrument(name = "json.write", err, skip(batch, path), fields(path = %path.display()))]
pub fn write_results_to_path(batch: &BatchReport, path: &Path) -> Result<(), JsonProviderError> {
    let io_error = |source| JsonProviderError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    write_results(batch, &mut writer)?;
    writer.flush().map_err(io_error)
}
