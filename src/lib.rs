//! Process-wide registry of pluggable per-locale lemma renderers.
//!
//! Each language plugin satisfies the [`LanguagePlugin`] contract and is bound
//! to a locale tag such as `"de-DE"`. The registry starts empty, populates
//! itself exactly once from the builtin registration table on first access,
//! and then serves lookups and instantiation for the rest of the process.
//!
//! # Architecture
//!
//! - `plugin`: the plugin contract, registration types, and lang-code derivation
//! - `registry`: the tag → plugin map and its lazily-populated global instance
//! - `languages`: the builtin registration table, one module per locale
//! - `error`: typed errors for discovery, lookup, and construction failures
//!
//! # Example
//!
//! ```rust
//! use lemma_render::Registry;
//!
//! # fn main() -> lemma_render::Result<()> {
//! let registry = Registry::global()?;
//! assert!(registry.supported_languages().contains("de-DE"));
//!
//! let german = registry.get_instance("de-DE")?;
//! assert_eq!(german.render("Haus"), "rendered (DE): Haus");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod languages;
pub mod plugin;
pub mod registry;

pub use error::{RegistryError, Result};
pub use plugin::{lang_code, LanguagePlugin, PluginEntry, PluginFactory, PluginRegistration};
pub use registry::Registry;
