//! Reading graph batches from JSON.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use arbor_core::GraphSpec;
use tracing::{debug, instrument};

use crate::{document::InputDocument, errors::JsonProviderError};

/// Parses a batch of graph descriptions from `reader`.
///
/// The document is either a top-level array of graph objects or an object
/// whose `graphs` field holds that array. Each graph object needs an integer
/// `id`, a `nodes` array of strings and an `edges` array of
/// `{from, to, weight}` objects with integer weights. Unknown fields are
/// ignored.
///
/// Node and edge validity is not checked here; [`arbor_core::Graph`] does
/// that per graph.
///
/// # Errors
/// Returns [`JsonProviderError::Read`] when `reader` fails and
/// [`JsonProviderError::MalformedInput`] when the document does not have
/// either shape.
///
/// # Examples
/// ```
/// let graphs = arbor_providers_json::read_graphs(
///     br#"{"graphs": [{"id": 1, "nodes": ["A", "B"], "edges": [{"from": "A", "to": "B", "weight": 4}]}]}"#
///         .as_slice(),
/// )?;
/// assert_eq!(graphs.len(), 1);
/// assert_eq!(graphs[0].edges[0].weight, 4);
/// # Ok::<(), arbor_providers_json::JsonProviderError>(())
/// ```
pub fn read_graphs(reader: impl Read) -> Result<Vec<GraphSpec>, JsonProviderError> {
    let document: InputDocument = serde_json::from_reader(reader).map_err(|source| {
        if source.is_io() {
            JsonProviderError::Read {
                source: source.into(),
            }
        } else {
            JsonProviderError::MalformedInput { source }
        }
    })?;
    let graphs = document.into_specs();
    debug!(graphs = graphs.len(), "input document parsed");
    Ok(graphs)
}

/// Opens `path` and parses it with [`read_graphs`].
///
/// # Errors
/// Returns [`JsonProviderError::Io`] when the file cannot be opened or read
/// and [`JsonProviderError::MalformedInput`] when its content is not a valid
/// input document.
#[instrument(name = "json.read", err, skip(path), fields(path = %path.display()))]
pub fn read_graphs_from_path(path: &Path) -> Result<Vec<GraphSpec>, JsonProviderError> {
    let file = File::open(path).map_err(|source| JsonProviderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_graphs(BufReader::new(file)).map_err(|err| match err {
        JsonProviderError::Read { source } => JsonProviderError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}
