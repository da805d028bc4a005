//! Constructors shared by the reader pipeline.

use std::error::Error;
use std::io;

use super::EmbedError;

impl EmbedError {
    /// Construct a [`EmbedError::MissingResource`] for `name` in `artifact`.
    ///
    /// # Examples
    ///
    /// ```
    /// use embed_config::EmbedError;
    /// let err = EmbedError::missing_resource("App.Config.a.json", "App");
    /// assert!(err.to_string().contains("App.Config.a.json"));
    /// ```
    #[must_use]
    pub fn missing_resource(name: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self::MissingResource {
            name: name.into(),
            artifact: artifact.into(),
        }
    }

    /// Construct a [`EmbedError::Resource`] for a failed read of `name`.
    #[must_use]
    pub fn resource(name: impl Into<String>, source: io::Error) -> Self {
        Self::Resource {
            name: name.into(),
            source,
        }
    }

    /// Construct a [`EmbedError::Manifest`] for the manifest resource `name`.
    #[must_use]
    pub fn manifest(
        name: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self::Manifest {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Construct a [`EmbedError::Fragment`] for the fragment resource `name`.
    #[must_use]
    pub fn fragment(
        name: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self::Fragment {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Construct a [`EmbedError::Merge`] from a serialisation failure.
    #[must_use]
    pub fn merge(source: serde_json::Error) -> Self {
        Self::Merge { source }
    }

    /// Classify an I/O failure raised while opening `name`.
    ///
    /// [`io::ErrorKind::NotFound`] marks the resource as missing from the
    /// artifact; anything else is reported as a read failure.
    pub(crate) fn open_failure(name: &str, artifact: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::missing_resource(name, artifact)
        } else {
            Self::resource(name, source)
        }
    }
}
