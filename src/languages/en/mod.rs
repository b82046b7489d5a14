//! English language family.

pub mod en_us;

use crate::plugin::PluginRegistration;

pub(crate) fn registrations() -> Vec<PluginRegistration> {
    vec![en_us::registration()]
}
