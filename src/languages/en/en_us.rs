//! English (United States) renderer.

use crate::plugin::{LanguagePlugin, PluginRegistration};

/// Language tag this module registers under.
pub const TAG: &str = "en-US";

/// Renderer for the `en-US` locale. Uses the contract's fallback rendering.
#[derive(Debug)]
pub struct AmericanEnglish;

impl LanguagePlugin for AmericanEnglish {}

pub(crate) fn registration() -> PluginRegistration {
    PluginRegistration {
        tag: TAG,
        factory: || Ok(Box::new(AmericanEnglish)),
    }
}
