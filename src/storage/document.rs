//! On-disk shape of the shared settings file.
//!
//! ```json
//! {"zones": [[50, 500, 900, 60], [1420, 1870, 900, 60]], "stay_on_top": true}
//! ```
//!
//! Zones written by older versions only carry `[x_start, x_end]`; they are
//! placed on the ground line. Keys we do not know are carried through a
//! rewrite untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{PetError, Result};
use crate::model::{ground_y, SharedSettings, Size, Zone, DEFAULT_ZONE_HEIGHT};

/// One persisted zone.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(untagged)]
pub enum ZoneRecord {
    Full([i32; 4]),
    Legacy([i32; 2]),
}

impl ZoneRecord {
    pub fn to_zone(self, screen: Size) -> Zone {
        match self {
            ZoneRecord::Full([x_start, x_end, y, height]) => Zone::new(x_start, x_end, y, height),
            ZoneRecord::Legacy([x_start, x_end]) => {
                Zone::new(x_start, x_end, ground_y(screen), DEFAULT_ZONE_HEIGHT)
            }
        }
    }
}

impl From<Zone> for ZoneRecord {
    fn from(z: Zone) -> Self {
        ZoneRecord::Full([z.x_start, z.x_end, z.y, z.height])
    }
}

/// Serializable settings document.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SettingsDocument {
    #[serde(default)]
    pub zones: Vec<ZoneRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stay_on_top: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SettingsDocument {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validated view. Invalid zones are dropped; a document left with no
    /// zone is rejected so the caller can fall back to defaults.
    pub fn to_settings(&self, screen: Size) -> Result<SharedSettings> {
        let zones: Vec<Zone> = self
            .zones
            .iter()
            .map(|r| r.to_zone(screen))
            .filter(Zone::is_valid)
            .collect();
        if zones.is_empty() {
            return Err(PetError::NoZones);
        }
        Ok(SharedSettings {
            zones,
            stay_on_top: self.stay_on_top.unwrap_or(true),
        })
    }

    pub fn set_zones(&mut self, zones: &[Zone]) {
        self.zones = zones.iter().copied().map(ZoneRecord::from).collect();
    }

    pub fn apply(&mut self, settings: &SharedSettings) {
        self.set_zones(&settings.zones);
        self.stay_on_top = Some(settings.stay_on_top);
    }
}
