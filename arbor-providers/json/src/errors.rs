use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Failures raised while reading or writing JSON documents.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JsonProviderError {
    /// The input is not an array of graphs or an object with a `graphs`
    /// array, or one of its graph objects is structurally invalid.
    #[error("malformed input document: {source}")]
    MalformedInput {
        /// Parser failure.
        #[source]
        source: serde_json::Error,
    },
    /// The reader failed before a complete document was received.
    #[error("failed to read input document: {source}")]
    Read {
        /// Underlying failure.
        #[source]
        source: io::Error,
    },
    /// A file could not be opened, read, created or flushed.
    #[error("i/o error on `{}`: {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: io::Error,
    },
    /// The output document could not be written.
    #[error("failed to serialise results: {0}")]
    Serialise(#[source] serde_json::Error),
}

/// Stable codes describing [`JsonProviderError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum JsonProviderErrorCode {
    /// See [`JsonProviderError::MalformedInput`].
    MalformedInput,
    /// See [`JsonProviderError::Read`].
    Read,
    /// See [`JsonProviderError::Io`].
    Io,
    /// See [`JsonProviderError::Serialise`].
    Serialise,
}

impl JsonProviderErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MalformedInput => "JSON_MALFORMED_INPUT",
            Self::Read => "JSON_READ",
            Self::Io => "JSON_IO",
            Self::Serialise => "JSON_SERIALISE",
        }
    }
}

impl fmt::Display for JsonProviderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonProviderError {
    /// Retrieve the stable [`JsonProviderErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> JsonProviderErrorCode {
        match self {
            Self::MalformedInput { .. } => JsonProviderErrorCode::MalformedInput,
            Self::Read { .. } => JsonProviderErrorCode::Read,
            Self::Io { .. } => JsonProviderErrorCode::Io,
            Self::Serialise(_) => JsonProviderErrorCode::Serialise,
        }
    }
}
