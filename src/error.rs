//! Error types for registry operations.

use thiserror::Error;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors surfaced by the language registry.
///
/// The registry performs no internal retries and no silent suppression:
/// every failure carries the offending tag so the caller can diagnose it.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Discovery ran and found nothing to register. This is a fatal startup
    /// condition; the registry never serves from an empty table.
    #[error("no language plugin registrations found")]
    PluginDiscovery,

    /// Lookup for a tag absent from the populated registry. Recoverable by
    /// the caller (e.g. by falling back to a default language).
    #[error("unknown language tag: '{tag}'")]
    UnknownLanguage {
        /// The tag that was requested.
        tag: String,
    },

    /// A plugin's own initialization failed. The plugin's error is carried
    /// unmodified as the source; the registry contributes only the tag.
    #[error("failed to construct plugin for '{tag}'")]
    PluginConstruction {
        /// The tag whose plugin failed to construct.
        tag: &'static str,
        #[source]
        source: anyhow::Error,
    },
}
