//! Floor replicator/placer.
//!
//! Deep-copies a template floor into the building graph at an absolute
//! vertical placement, with floor-range naming and the zone multiplier set
//! for the block of real floors the story represents. Boundary rewriting
//! runs inline for multiplied blocks and for separated edge floors flagged
//! with an adiabatic override.

use crate::model::{BuildingGraph, Story, StoryId};
use crate::synth::boundary::adiabaticize;
use crate::synth::plan::FloorBlock;
use crate::template::TemplateFloor;
use crate::uid::UID;
use anyhow::Result;

/// Places one replicated block of `block.multiplier` identical floors as a
/// single story built from `template`.
///
/// The story's z-origin follows the mid-block convention; plenum spaces sit
/// `floor_to_ceiling` above it. Naming is `F{n} <name>` for a single floor
/// and `F{n}-F{m} <name>` for a multiplied block.
pub fn place(
    graph: &mut BuildingGraph,
    template: &TemplateFloor,
    block: &FloorBlock,
) -> Result<StoryId> {
    let multiplier = block.multiplier;
    let last_floor = block.first_floor + multiplier - 1;
    let label = if multiplier == 1 {
        format!("F{}", block.first_floor)
    } else {
        format!("F{}-F{}", block.first_floor, last_floor)
    };
    let z_origin = block.bottom_z + (multiplier - 1) as f64 / 2.0 * template.floor_to_floor;

    let spaces = template.instantiate(
        graph,
        &label,
        multiplier * template.base_multiplier,
        z_origin,
    )?;
    let story = graph.add_story(Story {
        name: format!("{} {}", label, template.display_name),
        base_name: template.display_name.clone(),
        uid: UID::new(),
        function: block.function,
        first_floor: block.first_floor,
        last_floor,
        multiplier,
        z_origin,
        floor_to_floor: template.floor_to_floor,
        floor_to_ceiling: template.floor_to_ceiling,
        is_ground: block.is_ground,
        is_top: block.is_top,
        spaces,
    })?;

    let treat_floor = multiplier > 1 || block.adiabatic_floor;
    let treat_plenum = (multiplier > 1 || block.adiabatic_plenum) && template.has_plenum();
    if treat_floor || treat_plenum {
        adiabaticize(graph, story, treat_floor, treat_plenum)?;
    }
    Ok(story)
}
