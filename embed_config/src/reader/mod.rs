//! Merge pipeline turning embedded resources into one configuration document.
//!
//! The pipeline is a single pass: enumerate resource names, determine the
//! fragment order, read and parse each fragment, fold-merge it into the
//! accumulator, and serialise the result. Order comes from the `config.xml`
//! manifest when one exists under the search prefix; otherwise every
//! resource whose name starts with the prefix (compared case-insensitively)
//! is merged in the provider's enumeration order.

use std::io::Read;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use uncased::UncasedStr;

use crate::error::{EmbedError, EmbedResult};
use crate::manifest::{self, MANIFEST_NAME};
use crate::merge::merge_value;
use crate::resource::ResourceProvider;

/// Dot-separated path under which configuration fragments live, relative to
/// the namespace prefix.
pub const DEFAULT_RESOURCE_PATH: &str = "Config.EmbeddedByBuild.";

/// Reader for configuration fragments embedded in a compiled artifact.
///
/// Both knobs have defaults that fit build pipelines which embed fragments
/// under `<artifact>.Config.EmbeddedByBuild.`; override them when the hosting
/// artifact lays its resources out differently.
///
/// # Examples
///
/// ```rust
/// use embed_config::ConfigReader;
/// use embed_config::resource::MemoryResources;
///
/// let provider = MemoryResources::new("Acme.Client").resource(
///     "Vendor.Settings.defaults.json",
///     br#"{"retries": 3}"#.to_vec(),
/// );
///
/// let merged = ConfigReader::new(&provider)
///     .namespace("Vendor.")
///     .resource_path("Settings.")
///     .read()?;
/// assert_eq!(merged.as_deref(), Some(r#"{"retries":3}"#));
/// # Ok::<_, embed_config::EmbedError>(())
/// ```
#[derive(Debug)]
pub struct ConfigReader<'a, P> {
    provider: &'a P,
    resource_path: String,
    namespace: Option<String>,
}

impl<'a, P: ResourceProvider> ConfigReader<'a, P> {
    /// Create a reader over `provider` with the default resource path and a
    /// namespace derived from the provider's artifact name.
    #[must_use]
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            resource_path: DEFAULT_RESOURCE_PATH.to_owned(),
            namespace: None,
        }
    }

    /// Override the dot-separated path under which fragments live.
    ///
    /// Include the trailing separator; the value is concatenated verbatim
    /// onto the namespace prefix.
    #[must_use]
    pub fn resource_path(mut self, path: impl Into<String>) -> Self {
        self.resource_path = path.into();
        self
    }

    /// Override the namespace prefix prepended to the resource path.
    ///
    /// Include the trailing separator. When unset, the prefix is the
    /// provider's artifact name followed by `.`.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Read, merge, and serialise the embedded configuration.
    ///
    /// Returns `None` when no fragment matched the search prefix and no
    /// manifest declared any.
    ///
    /// # Errors
    ///
    /// Returns an [`EmbedError`] when a resource is missing or unreadable,
    /// the manifest or a fragment fails to parse, or the merged document
    /// cannot be serialised. No partial document is ever returned.
    pub fn read(&self) -> EmbedResult<Option<String>> {
        self.read_value()?
            .map(|value| serde_json::to_string(&value).map_err(EmbedError::merge))
            .transpose()
    }

    /// Read and merge the embedded configuration, extracting it into `T`.
    ///
    /// # Errors
    ///
    /// As for [`ConfigReader::read`], plus [`EmbedError::Merge`] when the
    /// merged document does not deserialise into `T`.
    pub fn read_as<T: DeserializeOwned>(&self) -> EmbedResult<Option<T>> {
        self.read_value()?
            .map(|value| serde_json::from_value(value).map_err(EmbedError::merge))
            .transpose()
    }

    /// Read and merge the embedded configuration as a document tree.
    ///
    /// # Errors
    ///
    /// As for [`ConfigReader::read`], except serialisation cannot fail here.
    pub fn read_value(&self) -> EmbedResult<Option<Value>> {
        let full_prefix = self.full_prefix();
        let fragments = self.ordered_fragments(&full_prefix)?;

        let mut merged: Option<Value> = None;
        for name in &fragments {
            let fragment = self.read_fragment(name)?;
            match &mut merged {
                Some(acc) => merge_value(acc, fragment),
                None => merged = Some(fragment),
            }
        }
        Ok(merged)
    }

    /// Resolve the full names of the fragments to merge, in merge order.
    ///
    /// The manifest membership test is exact; only the prefix scan ignores
    /// case.
    fn ordered_fragments(&self, full_prefix: &str) -> EmbedResult<Vec<String>> {
        let names = self.provider.resource_names();
        let manifest_resource = format!("{full_prefix}{MANIFEST_NAME}");

        if names.iter().any(|name| name == &manifest_resource) {
            let bytes = self.read_resource(&manifest_resource)?;
            let declared = manifest::fragment_names(&manifest_resource, &bytes)?;
            debug!(
                manifest = %manifest_resource,
                fragments = declared.len(),
                "merging fragments in declared order"
            );
            Ok(declared
                .into_iter()
                .map(|name| format!("{full_prefix}{name}"))
                .collect())
        } else {
            let matched: Vec<String> = names
                .into_iter()
                .filter(|name| UncasedStr::new(name).starts_with(full_prefix))
                .collect();
            debug!(
                prefix = %full_prefix,
                fragments = matched.len(),
                "merging fragments in enumeration order"
            );
            Ok(matched)
        }
    }

    fn full_prefix(&self) -> String {
        self.namespace.as_ref().map_or_else(
            || format!("{}.{}", self.provider.artifact_name(), self.resource_path),
            |namespace| format!("{namespace}{}", self.resource_path),
        )
    }

    /// Read a resource to completion, releasing the stream before returning.
    fn read_resource(&self, name: &str) -> EmbedResult<Vec<u8>> {
        let mut stream = self
            .provider
            .open_resource(name)
            .map_err(|e| EmbedError::open_failure(name, self.provider.artifact_name(), e))?;
        let mut bytes = Vec::new();
        stream
            .read_to_end(&mut bytes)
            .map_err(|e| EmbedError::resource(name, e))?;
        Ok(bytes)
    }

    fn read_fragment(&self, name: &str) -> EmbedResult<Value> {
        let bytes = self.read_resource(name)?;
        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| EmbedError::fragment(name, e))?;
        if !value.is_object() {
            return Err(EmbedError::fragment(
                name,
                std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "fragment root is not a JSON object",
                ),
            ));
        }
        Ok(value)
    }
}

/// Read and merge the embedded configuration of `provider` using the default
/// resource path and namespace.
///
/// Equivalent to `ConfigReader::new(provider).read()`.
///
/// # Errors
///
/// Returns an [`EmbedError`] under the same conditions as
/// [`ConfigReader::read`].
pub fn read_embedded_config<P: ResourceProvider>(provider: &P) -> EmbedResult<Option<String>> {
    ConfigReader::new(provider).read()
}
