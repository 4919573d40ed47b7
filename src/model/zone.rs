//! Thermal zones.

use crate::model::SpaceId;
use crate::uid::UID;
use serde::{Deserialize, Serialize};

/// Thermal control unit owning one or more spaces.
///
/// A multiplier of `m` means this simulated zone stands in for `m`
/// identical real floors stacked vertically. Invariant: `m >= 1`, and
/// `m > 1` only for interior floors, never next to ground or roof.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub base_name: String,
    pub uid: UID,
    pub multiplier: u32,
    pub spaces: Vec<SpaceId>,
}

impl Zone {
    pub fn new(name: &str, base_name: &str, multiplier: u32) -> Self {
        Self {
            name: name.to_string(),
            base_name: base_name.to_string(),
            uid: UID::new(),
            multiplier,
            spaces: Vec::new(),
        }
    }
}
