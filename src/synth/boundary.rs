//! Boundary rewriter.
//!
//! A zone whose multiplier is greater than one stands in for a stack of
//! identical floors, so its slab and plenum ceiling must not exchange heat
//! with ground or sky; the same applies to a separated edge floor whose
//! neighbour was folded into a multiplied block elsewhere. This pass
//! rewrites those surfaces to Adiabatic, breaking any matched pair first so
//! no stale cross-reference is left dangling.

use crate::model::{Boundary, BuildingGraph, StoryId, SurfaceId, SurfaceKind};
use anyhow::{Result, bail};

/// Rewrites floor and/or plenum-ceiling boundaries of `story` to Adiabatic.
///
/// Stories flagged as ground or top skip the corresponding rewrite so the
/// real Ground/Outdoors condition survives. Idempotent: surfaces already
/// Adiabatic are left untouched on a second pass.
pub fn adiabaticize(
    graph: &mut BuildingGraph,
    story: StoryId,
    treat_floor: bool,
    treat_plenum_ceiling: bool,
) -> Result<()> {
    let (name, is_ground, is_top, space_ids) = {
        let s = graph.story(story);
        (s.name.clone(), s.is_ground, s.is_top, s.spaces.clone())
    };

    if treat_plenum_ceiling && !is_top {
        let mut ceilings: Vec<SurfaceId> = Vec::new();
        for &sid in &space_ids {
            let space = graph.space(sid);
            if !space.is_plenum() {
                continue;
            }
            for &surf in &space.surfaces {
                if graph.surface(surf).kind == SurfaceKind::Ceiling {
                    ceilings.push(surf);
                }
            }
        }
        if ceilings.is_empty() {
            bail!("graph integrity: story has no plenum ceiling to rewrite: {name}");
        }
        for surf in ceilings {
            break_and_set_adiabatic(graph, surf);
        }
    }

    if treat_floor && !is_ground {
        let mut floors: Vec<SurfaceId> = Vec::new();
        for &sid in &space_ids {
            let space = graph.space(sid);
            if space.is_plenum() {
                continue;
            }
            for &surf in &space.surfaces {
                if graph.surface(surf).kind == SurfaceKind::Floor {
                    floors.push(surf);
                }
            }
        }
        for surf in floors {
            break_and_set_adiabatic(graph, surf);
        }
    }

    Ok(())
}

/// Adiabaticizes one surface, first rewriting its matched partner (if any)
/// so the pair is broken on both sides.
fn break_and_set_adiabatic(graph: &mut BuildingGraph, id: SurfaceId) {
    if let Boundary::Surface(adjacent) = graph.surface(id).boundary {
        graph.surface_mut(adjacent).boundary = Boundary::Adiabatic;
    }
    graph.surface_mut(id).boundary = Boundary::Adiabatic;
}
