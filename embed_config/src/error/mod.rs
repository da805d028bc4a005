//! Error types produced by the embedded configuration reader.

mod constructors;
mod types;

pub use types::EmbedError;

/// Result alias used throughout the crate.
pub type EmbedResult<T> = Result<T, EmbedError>;
