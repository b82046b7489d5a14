//! German (Germany) renderer.

use anyhow::Result;

use crate::plugin::{LanguagePlugin, PluginRegistration};

/// Language tag this module registers under.
pub const TAG: &str = "de-DE";

/// Renderer for the `de-DE` locale.
#[derive(Debug)]
pub struct German;

impl German {
    /// Plugin-internal setup happens here (e.g. loading a German language
    /// model). A failure is returned to whoever asked for the instance.
    pub fn new() -> Result<Self> {
        Ok(Self)
    }
}

impl LanguagePlugin for German {
    fn render(&self, lemma: &str) -> String {
        format!("rendered (DE): {lemma}")
    }
}

pub(crate) fn registration() -> PluginRegistration {
    PluginRegistration {
        tag: TAG,
        factory: || Ok(Box::new(German::new()?)),
    }
}
