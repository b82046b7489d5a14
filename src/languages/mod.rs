//! Builtin language plugins.
//!
//! The module tree follows `languages/<family>/<variant>`, one variant module
//! per locale. Each family module exposes its registrations, and [`builtin`]
//! concatenates them into the table the registry populates from on first use.
//! Adding a language means adding a variant module and listing it in its
//! family's `registrations()`.

pub mod de;
pub mod en;

use crate::plugin::PluginRegistration;

/// The full builtin registration table.
pub(crate) fn builtin() -> Vec<PluginRegistration> {
    let mut registrations = Vec::new();
    registrations.extend(de::registrations());
    registrations.extend(en::registrations());
    registrations
}
