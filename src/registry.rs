//! Language registry: single source of truth for all registered plugins.
//!
//! The global registry starts empty and is populated exactly once, on first
//! access, from the builtin registration table. Population is guarded by a
//! `OnceCell`, so concurrent first callers block until discovery finishes and
//! later callers read the map without synchronization overhead. Once
//! populated, the map is read-only for the rest of the process.

use std::collections::{HashMap, HashSet};

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::error::{RegistryError, Result};
use crate::languages;
use crate::plugin::{LanguagePlugin, PluginEntry, PluginRegistration};

/// Process-wide map from language tag to registered plugin.
#[derive(Debug)]
pub struct Registry {
    entries: HashMap<&'static str, PluginEntry>,
}

/// Global registry instance (populated lazily on first access)
static REGISTRY: OnceCell<Registry> = OnceCell::new();

impl Registry {
    /// Get the global registry, populating it from the builtin registration
    /// table on first call.
    ///
    /// Discovery runs at most once; if it fails (an empty table), the error
    /// is returned and a later call would fail the same way.
    pub fn global() -> Result<&'static Registry> {
        REGISTRY.get_or_try_init(|| Self::discover(&languages::builtin()))
    }

    /// Build a registry from an explicit list of registrations.
    ///
    /// For each registration the lang code is derived from the tag and the
    /// entry is inserted under its tag. A duplicate tag replaces the earlier
    /// entry (last registration wins) and is logged.
    ///
    /// # Errors
    /// [`RegistryError::PluginDiscovery`] when `registrations` is empty.
    pub fn discover(registrations: &[PluginRegistration]) -> Result<Self> {
        if registrations.is_empty() {
            return Err(RegistryError::PluginDiscovery);
        }

        let mut entries: HashMap<&'static str, PluginEntry> = HashMap::new();
        for registration in registrations {
            let entry = PluginEntry::new(*registration);
            let tag = entry.tag();
            debug!(tag, lang_code = entry.lang_code(), "registered language plugin");

            if entries.insert(tag, entry).is_some() {
                warn!(tag, "duplicate registration for language tag, keeping the later plugin");
            }
        }

        debug!(languages = entries.len(), "language discovery complete");
        Ok(Self { entries })
    }

    /// The set of all registered language tags.
    ///
    /// Idempotent: repeated calls without new registrations (and there is no
    /// way to register after population) return the same set.
    pub fn supported_languages(&self) -> HashSet<&'static str> {
        self.entries.keys().copied().collect()
    }

    /// Look up the registered plugin for `tag`.
    ///
    /// # Errors
    /// [`RegistryError::UnknownLanguage`] when no plugin is registered for
    /// `tag`.
    pub fn get_class(&self, tag: &str) -> Result<&PluginEntry> {
        self.entries
            .get(tag)
            .ok_or_else(|| RegistryError::UnknownLanguage {
                tag: tag.to_string(),
            })
    }

    /// Look up the plugin for `tag` and construct an instance.
    ///
    /// # Errors
    /// [`RegistryError::UnknownLanguage`] when the tag is not registered;
    /// [`RegistryError::PluginConstruction`] when the plugin's own
    /// initialization fails (propagated without retry).
    pub fn get_instance(&self, tag: &str) -> Result<Box<dyn LanguagePlugin>> {
        self.get_class(tag)?.instantiate()
    }
}
