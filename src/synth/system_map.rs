//! System map regenerator.
//!
//! The space population changes during packing and sky-lobby insertion, so
//! the HVAC zone-to-system mapping is re-derived from the final floor list
//! as declarative data. A downstream collaborator instantiates the actual
//! equipment; nothing here mutates the building graph.

use crate::model::{BuildingGraph, FloorFunction, StoryId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemType {
    PackagedVav,
    VavChilledWater,
    FourPipeFanCoil,
    PackagedSingleZone,
}

impl SystemType {
    fn uses_chilled_water(self) -> bool {
        matches!(self, Self::VavChilledWater | Self::FourPipeFanCoil)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EconomizerPolicy {
    DifferentialEnthalpy,
    NoEconomizer,
}

/// Declarative record pairing one HVAC system with the spaces it serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemMapEntry {
    pub system_type: SystemType,
    pub name: String,
    /// First return plenum of the story (or story group) served.
    pub return_plenum: Option<String>,
    pub operation_schedule: String,
    pub oa_damper_schedule: String,
    pub economizer: EconomizerPolicy,
    /// Plant sizing hints; zero for systems without a chilled-water plant.
    pub chw_number_chillers: u32,
    pub number_cooling_towers: u32,
    pub space_names: Vec<String>,
}

struct FunctionPolicy {
    system_type: SystemType,
    operation_schedule: &'static str,
    oa_damper_schedule: &'static str,
    economizer: EconomizerPolicy,
}

impl FunctionPolicy {
    fn for_function(function: FloorFunction) -> Self {
        use EconomizerPolicy::*;
        use FloorFunction::*;
        use SystemType::*;
        match function {
            Retail => Self {
                system_type: PackagedVav,
                operation_schedule: "Retail HVAC Operation",
                oa_damper_schedule: "Retail Min OA",
                economizer: DifferentialEnthalpy,
            },
            Office => Self {
                system_type: VavChilledWater,
                operation_schedule: "Office HVAC Operation",
                oa_damper_schedule: "Office Min OA",
                economizer: DifferentialEnthalpy,
            },
            ResiBottom | ResiMid => Self {
                system_type: FourPipeFanCoil,
                operation_schedule: "Residential HVAC Operation",
                oa_damper_schedule: "Residential Min OA",
                economizer: NoEconomizer,
            },
            HotelBottom | HotelMid | HotelTop => Self {
                system_type: FourPipeFanCoil,
                operation_schedule: "Hotel HVAC Operation",
                oa_damper_schedule: "Hotel Min OA",
                economizer: NoEconomizer,
            },
            Skylobby | ElevatorMachineRoom => Self {
                system_type: PackagedSingleZone,
                operation_schedule: "Mechanical HVAC Operation",
                oa_damper_schedule: "Mechanical Min OA",
                economizer: NoEconomizer,
            },
        }
    }
}

/// Walks the final floor list and emits one entry per story, plus one
/// aggregated entry for hotel common areas keyed to the top hotel floor's
/// return plenum.
///
/// Plenum spaces are return-air paths, not conditioned occupied spaces, so
/// they never appear in `space_names`; the first plenum per story becomes
/// that entry's `return_plenum`. Chiller and tower counts scale with the
/// total represented floor count, one per 13 floors.
pub fn generate_system_map(graph: &BuildingGraph, stories: &[StoryId]) -> Vec<SystemMapEntry> {
    let total_floors: u32 = stories.iter().map(|&id| graph.story(id).multiplier).sum();
    let plant_count = total_floors.div_ceil(13);

    let mut entries = Vec::with_capacity(stories.len() + 1);
    let mut hotel_common: Vec<String> = Vec::new();
    let mut top_hotel: Option<StoryId> = None;

    for &id in stories {
        let story = graph.story(id);
        let policy = FunctionPolicy::for_function(story.function);
        let mut space_names = Vec::new();
        let mut return_plenum = None;
        for &sid in &story.spaces {
            let space = graph.space(sid);
            if space.is_plenum() {
                if return_plenum.is_none() {
                    return_plenum = Some(space.name.clone());
                }
                continue;
            }
            if story.function.is_hotel() && space.common_area {
                hotel_common.push(space.name.clone());
                continue;
            }
            space_names.push(space.name.clone());
        }
        if story.function.is_hotel()
            && top_hotel.map_or(true, |t| story.first_floor > graph.story(t).first_floor)
        {
            top_hotel = Some(id);
        }
        let plant = if policy.system_type.uses_chilled_water() {
            plant_count
        } else {
            0
        };
        entries.push(SystemMapEntry {
            system_type: policy.system_type,
            name: format!("{} System", story.name),
            return_plenum,
            operation_schedule: policy.operation_schedule.to_string(),
            oa_damper_schedule: policy.oa_damper_schedule.to_string(),
            economizer: policy.economizer,
            chw_number_chillers: plant,
            number_cooling_towers: plant,
            space_names,
        });
    }

    if !hotel_common.is_empty() {
        let return_plenum = top_hotel.and_then(|id| {
            graph
                .story(id)
                .spaces
                .iter()
                .find(|&&sid| graph.space(sid).is_plenum())
                .map(|&sid| graph.space(sid).name.clone())
        });
        entries.push(SystemMapEntry {
            system_type: SystemType::VavChilledWater,
            name: "Hotel Common Areas System".to_string(),
            return_plenum,
            operation_schedule: "Hotel HVAC Operation".to_string(),
            oa_damper_schedule: "Hotel Min OA".to_string(),
            economizer: EconomizerPolicy::DifferentialEnthalpy,
            chw_number_chillers: plant_count,
            number_cooling_towers: plant_count,
            space_names: hotel_common,
        });
    }
    entries
}
