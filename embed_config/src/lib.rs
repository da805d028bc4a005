//! Merge configuration fragments embedded in a compiled artifact.
//!
//! Build pipelines often embed partial configuration documents (fragments)
//! as named resources inside the artifact they produce. This crate discovers
//! those fragments through an injected [`resource::ResourceProvider`],
//! determines their merge order, and folds them into a single document in
//! which later fragments override earlier ones: object fields are
//! overwritten, arrays are unioned.
//!
//! Merge order is declared explicitly by an optional `config.xml` manifest
//! naming fragments in sequence, or, when no manifest exists, inferred from
//! the provider's enumeration order filtered by a namespace prefix.
//!
//! The merge is all-or-nothing: a missing resource or a malformed manifest
//! or fragment fails the whole read, and no partially merged document is
//! ever returned.
//!
//! # Examples
//!
//! ```rust
//! use embed_config::resource::MemoryResources;
//!
//! let provider = MemoryResources::new("Acme.Client")
//!     .resource(
//!         "Acme.Client.Config.EmbeddedByBuild.defaults.json",
//!         br#"{"region": "eu-west-1", "features": ["alpha"]}"#.to_vec(),
//!     )
//!     .resource(
//!         "Acme.Client.Config.EmbeddedByBuild.overrides.json",
//!         br#"{"region": "us-east-1", "features": ["beta"]}"#.to_vec(),
//!     );
//!
//! let merged = embed_config::read_embedded_config(&provider)?;
//! assert_eq!(
//!     merged.as_deref(),
//!     Some(r#"{"region":"us-east-1","features":["alpha","beta"]}"#),
//! );
//! # Ok::<_, embed_config::EmbedError>(())
//! ```

mod error;
mod manifest;
pub mod merge;
mod reader;
pub mod resource;

pub use error::{EmbedError, EmbedResult};
pub use manifest::MANIFEST_NAME;
pub use reader::{ConfigReader, DEFAULT_RESOURCE_PATH, read_embedded_config};
