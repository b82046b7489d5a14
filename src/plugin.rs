//! Plugin contract: the capability interface every language implementation
//! must satisfy, plus the registration types the registry populates from.
//!
//! Plugins do not register themselves as a load-time side effect. Each
//! language module exposes a [`PluginRegistration`] (tag + factory), and the
//! registry inserts them explicitly during discovery. Shared base behavior
//! that must not occupy a registry slot lives in the trait's default method
//! instead of a registered type.

use crate::error::{RegistryError, Result};

/// Capability interface for a language plugin.
///
/// The default `render` is the fallback shared by languages without their own
/// rendering rules; concrete plugins override it to produce language-specific
/// output.
pub trait LanguagePlugin: Send + Sync {
    /// Render `lemma` for this plugin's language.
    fn render(&self, lemma: &str) -> String {
        format!("rendered: {lemma}")
    }
}

impl std::fmt::Debug for dyn LanguagePlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("LanguagePlugin")
    }
}

/// Constructor for a plugin instance.
///
/// Factories take no arguments; any plugin-internal setup (e.g. loading a
/// language model) happens here, and its failure is returned to the
/// instantiation caller.
pub type PluginFactory = fn() -> anyhow::Result<Box<dyn LanguagePlugin>>;

/// A plugin as declared by its language module, before registration.
#[derive(Debug, Clone, Copy)]
pub struct PluginRegistration {
    /// Language tag this plugin binds to, e.g. `"de-DE"`. Case-sensitive;
    /// the unique key in the registry.
    pub tag: &'static str,

    /// Constructor invoked by `get_instance`.
    pub factory: PluginFactory,
}

/// A registered plugin: its tag, the lang code derived from it, and the
/// factory that builds instances.
#[derive(Debug)]
pub struct PluginEntry {
    tag: &'static str,
    lang_code: String,
    factory: PluginFactory,
}

impl PluginEntry {
    pub(crate) fn new(registration: PluginRegistration) -> Self {
        Self {
            tag: registration.tag,
            lang_code: lang_code(registration.tag),
            factory: registration.factory,
        }
    }

    /// The language tag this entry is registered under.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// The lowercase primary subtag, e.g. `"de"` for `"de-DE"`.
    pub fn lang_code(&self) -> &str {
        &self.lang_code
    }

    /// Construct a plugin instance. A factory failure surfaces as
    /// [`RegistryError::PluginConstruction`] with the plugin's own error as
    /// the source.
    pub fn instantiate(&self) -> Result<Box<dyn LanguagePlugin>> {
        (self.factory)().map_err(|source| RegistryError::PluginConstruction {
            tag: self.tag,
            source,
        })
    }
}

/// Derive the lang code from a language tag: the text before the first `-`
/// (or the whole tag when there is none), lowercased.
pub fn lang_code(tag: &str) -> String {
    tag.split('-').next().unwrap_or(tag).to_lowercase()
}
