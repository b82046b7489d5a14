//! German language family.

pub mod de_de;

use crate::plugin::PluginRegistration;

pub(crate) fn registrations() -> Vec<PluginRegistration> {
    vec![de_de::registration()]
}
