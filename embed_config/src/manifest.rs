//! Ordering manifest parsing.
//!
//! An artifact may embed a `config.xml` resource next to its fragments to
//! pin the merge order explicitly. The manifest is a minimal XML document
//! whose `Resource` elements carry bare fragment names:
//!
//! ```xml
//! <Root>
//!   <Resource>defaults.json</Resource>
//!   <Resource>overrides.json</Resource>
//! </Root>
//! ```

use roxmltree::Document;

use crate::error::{EmbedError, EmbedResult};

/// Name of the optional ordering manifest, resolved under the full search
/// prefix.
pub const MANIFEST_NAME: &str = "config.xml";

/// Extract the fragment names an ordering manifest declares.
///
/// Names are returned in document order and taken verbatim; surrounding
/// whitespace inside a `Resource` element is part of the name. `resource` is
/// the manifest's own full name and is only used for error reporting.
pub(crate) fn fragment_names(resource: &str, bytes: &[u8]) -> EmbedResult<Vec<String>> {
    let text = std::str::from_utf8(bytes).map_err(|e| EmbedError::manifest(resource, e))?;
    let doc = Document::parse(text).map_err(|e| EmbedError::manifest(resource, e))?;
    Ok(doc
        .descendants()
        .filter(|node| node.has_tag_name("Resource"))
        .map(|node| node.text().unwrap_or_default().to_owned())
        .collect())
}
