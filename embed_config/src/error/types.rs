//! Primary error enum for embedded configuration reads.

use thiserror::Error;

/// Errors that can occur while reading and merging embedded configuration.
///
/// Every failure mode surfaces through this one type so callers see a single
/// failure surface; the underlying parser or I/O error is preserved as the
/// `source` of the variant rather than flattened into a string.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EmbedError {
    /// A resolved resource name is absent from the artifact.
    ///
    /// Raised when an ordering manifest names a fragment that was never
    /// embedded, or when a listed resource vanishes between enumeration and
    /// read.
    #[error("the resource '{name}' is missing from the artifact '{artifact}'")]
    MissingResource {
        /// Full name of the absent resource.
        name: String,
        /// Identity of the artifact that was searched.
        artifact: String,
    },

    /// A resource exists but its bytes could not be read.
    #[error("failed to read embedded resource '{name}': {source}")]
    Resource {
        /// Full name of the resource being read.
        name: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The ordering manifest exists but is not well-formed markup.
    #[error("malformed ordering manifest '{name}': {source}")]
    Manifest {
        /// Full name of the manifest resource.
        name: String,
        /// Underlying parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A fragment exists but does not parse into a configuration document.
    #[error("malformed configuration fragment '{name}': {source}")]
    Fragment {
        /// Full name of the fragment resource.
        name: String,
        /// Underlying parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The merged document could not be serialised or extracted.
    #[error("failed to finalise merged configuration: {source}")]
    Merge {
        /// Underlying serialisation failure.
        #[source]
        source: serde_json::Error,
    },
}
