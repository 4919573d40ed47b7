//! Stories - ordered runs of spaces sharing a floor range and z-origin.

use crate::model::SpaceId;
use crate::uid::UID;
use serde::{Deserialize, Serialize};

/// Function tag of a story or template floor.
///
/// This tag is the source of truth for classification (system mapping,
/// hotel common-area handling); story names are derived display labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloorFunction {
    Retail,
    Office,
    ResiBottom,
    ResiMid,
    HotelBottom,
    HotelMid,
    HotelTop,
    Skylobby,
    ElevatorMachineRoom,
}

impl FloorFunction {
    pub fn is_hotel(self) -> bool {
        matches!(
            self,
            Self::HotelBottom | Self::HotelMid | Self::HotelTop
        )
    }

    pub fn is_residential(self) -> bool {
        matches!(self, Self::ResiBottom | Self::ResiMid)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    /// Derived display label, e.g. "F12-F20 Office".
    pub name: String,
    pub base_name: String,
    pub uid: UID,
    pub function: FloorFunction,
    pub first_floor: u32,
    pub last_floor: u32,
    pub multiplier: u32,
    /// Mid-block convention: a multiplied story sits at the vertical middle
    /// of the block of real floors it represents.
    pub z_origin: f64,
    pub floor_to_floor: f64,
    pub floor_to_ceiling: f64,
    pub is_ground: bool,
    pub is_top: bool,
    pub spaces: Vec<SpaceId>,
}

impl Story {
    /// Floor-range label this story's display names carry, e.g. "F7" or
    /// "F12-F20".
    pub fn range_label(&self) -> String {
        if self.multiplier == 1 {
            format!("F{}", self.first_floor)
        } else {
            format!("F{}-F{}", self.first_floor, self.last_floor)
        }
    }

    /// Physical bottom of the represented block of floors.
    pub fn true_bottom(&self) -> f64 {
        self.z_origin - (self.multiplier - 1) as f64 / 2.0 * self.floor_to_floor
    }

    /// Physical top of the represented block of floors.
    pub fn true_top(&self) -> f64 {
        self.true_bottom() + self.multiplier as f64 * self.floor_to_floor
    }
}
