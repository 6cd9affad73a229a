use serde::{Deserialize, Serialize};

use crate::served_zones::{split_zones, ServedZones};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ZoneConfig {
    /// Served zones. Each entry may itself be a comma separated list.
    #[serde(default)]
    pub domains: Vec<String>,
}

impl ZoneConfig {
    /// Valid, normalized zone names in configuration order.
    pub fn valid_domains(&self) -> Vec<String> {
        split_zones(&self.domains.join(","))
    }

    pub fn served_zones(&self) -> ServedZones {
        ServedZones::new(self.valid_domains())
    }
}
