//! Resource capabilities consumed by the merge pipeline.
//!
//! The reader never touches an artifact directly; it works through a
//! [`ResourceProvider`], so the merge logic can be exercised against
//! in-memory fixtures and reused across embedding mechanisms.

use std::io::{self, Read};

/// Access to the named resources embedded in a compiled artifact.
pub trait ResourceProvider {
    /// Identity of the hosting artifact, without a trailing separator.
    ///
    /// Used to derive the default namespace prefix and to label missing
    /// resources in errors.
    fn artifact_name(&self) -> &str;

    /// Every resource name available in the artifact.
    ///
    /// The order is implementation defined but must be stable across calls:
    /// it becomes the merge order when no ordering manifest is present.
    fn resource_names(&self) -> Vec<String>;

    /// Open the resource `name` for reading.
    ///
    /// The returned stream is read to completion and released before the
    /// next resource is opened.
    ///
    /// # Errors
    ///
    /// Fails with [`io::ErrorKind::NotFound`] when no resource with that
    /// exact name exists, or with whatever [`io::Error`] the underlying
    /// storage reports.
    fn open_resource(&self, name: &str) -> io::Result<Box<dyn Read + '_>>;
}

/// An ordered, in-memory [`ResourceProvider`].
///
/// Resources are enumerated in insertion order. Suitable for tests and for
/// hosts that assemble their resources at startup, for example from
/// `include_bytes!` items.
///
/// # Examples
///
/// ```rust
/// use embed_config::resource::{MemoryResources, ResourceProvider};
///
/// let provider = MemoryResources::new("Acme.Client")
///     .resource("Acme.Client.Config.EmbeddedByBuild.a.json", b"{}".to_vec());
/// assert_eq!(provider.resource_names().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    artifact: String,
    entries: Vec<(String, Vec<u8>)>,
}

impl MemoryResources {
    /// Create an empty resource set for the artifact `artifact`.
    #[must_use]
    pub fn new(artifact: impl Into<String>) -> Self {
        Self {
            artifact: artifact.into(),
            entries: Vec::new(),
        }
    }

    /// Add a resource, keeping insertion order for enumeration.
    ///
    /// Duplicate names are not rejected; lookups return the first entry.
    #[must_use]
    pub fn resource(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.entries.push((name.into(), bytes.into()));
        self
    }
}

impl ResourceProvider for MemoryResources {
    fn artifact_name(&self) -> &str {
        &self.artifact
    }

    fn resource_names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    fn open_resource(&self, name: &str) -> io::Result<Box<dyn Read + '_>> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, bytes)| Box::new(bytes.as_slice()) as Box<dyn Read + '_>)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no embedded resource named '{name}'"),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::{MemoryResources, ResourceProvider};

    #[test]
    fn enumeration_preserves_insertion_order() {
        let provider = MemoryResources::new("App")
            .resource("App.z.json", b"{}".to_vec())
            .resource("App.a.json", b"{}".to_vec());
        assert_eq!(provider.resource_names(), ["App.z.json", "App.a.json"]);
    }

    #[test]
    fn open_returns_the_stored_bytes() {
        let provider = MemoryResources::new("App").resource("App.a.json", b"{\"x\":1}".to_vec());
        let mut stream = provider.open_resource("App.a.json").expect("resource exists");
        let mut bytes = Vec::new();
        stream.read_to_end(&mut bytes).expect("stream is readable");
        assert_eq!(bytes, b"{\"x\":1}");
    }

    #[test]
    fn absent_names_report_not_found() {
        let provider = MemoryResources::new("App");
        let err = provider
            .open_resource("App.missing.json")
            .err()
            .expect("nothing was added");
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
