//! Test fixtures shared across crates.
//!
//! Builders for manifest and fragment resource bytes, plus pre-assembled
//! in-memory resource sets placed under the default search prefix of a
//! fixed fixture artifact.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use test_helpers::{fragment_bytes, provider};
//!
//! let resources = provider([("a.json", fragment_bytes(&json!({"x": 1})))]);
//! let merged = embed_config::read_embedded_config(&resources).expect("fragment is well-formed");
//! assert_eq!(merged.as_deref(), Some(r#"{"x":1}"#));
//! ```

use embed_config::DEFAULT_RESOURCE_PATH;
use embed_config::resource::MemoryResources;
use serde_json::Value;

/// Artifact name used by fixture resource sets.
pub const ARTIFACT: &str = "Acme.Client";

/// Full search prefix for [`ARTIFACT`] with the default resource path.
#[must_use]
pub fn full_prefix() -> String {
    format!("{ARTIFACT}.{DEFAULT_RESOURCE_PATH}")
}

/// Serialise `value` into fragment resource bytes.
#[must_use]
pub fn fragment_bytes(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).expect("fixture value serialises")
}

/// Render an ordering manifest naming `names` in sequence.
#[must_use]
pub fn manifest_bytes(names: &[&str]) -> Vec<u8> {
    let mut doc = String::from("<Root>\n");
    for name in names {
        doc.push_str("  <Resource>");
        doc.push_str(name);
        doc.push_str("</Resource>\n");
    }
    doc.push_str("</Root>\n");
    doc.into_bytes()
}

/// Assemble a provider for [`ARTIFACT`] from `(relative name, bytes)` pairs.
///
/// Each name is placed under the full search prefix, in iteration order.
#[must_use = "the provider does nothing until a reader consumes it"]
pub fn provider<I, N>(entries: I) -> MemoryResources
where
    I: IntoIterator<Item = (N, Vec<u8>)>,
    N: AsRef<str>,
{
    let prefix = full_prefix();
    entries
        .into_iter()
        .fold(MemoryResources::new(ARTIFACT), |resources, (name, bytes)| {
            resources.resource(format!("{prefix}{}", name.as_ref()), bytes)
        })
}
