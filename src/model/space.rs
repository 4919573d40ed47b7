//! Spaces - bounded regions owned by a thermal zone.

use crate::model::{SurfaceId, ZoneId};
use crate::uid::UID;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceKind {
    Occupied,
    /// Return-air plenum sitting above the occupied volume; no occupants.
    Plenum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    /// Derived display label, e.g. "F12-F20 Office".
    pub name: String,
    /// Template-time name the display label is re-derived from after
    /// renumbering, e.g. "Office".
    pub base_name: String,
    pub uid: UID,
    pub kind: SpaceKind,
    /// Non-guest/common area within a hotel floor (lobby, corridor).
    /// Carried as a tag from template creation; never inferred from names.
    pub common_area: bool,
    pub zone: ZoneId,
    pub surfaces: Vec<SurfaceId>,
    pub z_origin: f64,
}

impl Space {
    pub fn is_plenum(&self) -> bool {
        self.kind == SpaceKind::Plenum
    }
}
