//! Skylobby inserter and global re-stacker.
//!
//! After all function blocks are placed, one mechanical sky-lobby floor is
//! inserted at the story boundary nearest the building's structural
//! midpoint, and everything at or above the insertion point shifts up by
//! one skylobby floor-height with floor numbers renumbered.

use crate::model::{BuildingGraph, FloorFunction, StoryId};
use crate::synth::placer::place;
use crate::synth::plan::FloorBlock;
use crate::template::TemplateLibrary;
use anyhow::{Result, bail};

const Z_EPS: f64 = 1e-6;

/// Inserts the sky-lobby floor and re-stacks the stories above it.
///
/// The host story is the one whose true bottom is nearest the building's
/// half-height; the sky-lobby lands directly below it, always unmultiplied.
/// Returns the new story's id.
pub fn insert_skylobby(graph: &mut BuildingGraph, library: &TemplateLibrary) -> Result<StoryId> {
    let template = library.get(FloorFunction::Skylobby)?;
    let ids: Vec<StoryId> = graph.story_ids().collect();
    if ids.is_empty() {
        bail!("graph integrity: cannot insert a skylobby into an empty building");
    }

    let building_top = ids
        .iter()
        .map(|&id| graph.story(id).true_top())
        .fold(f64::MIN, f64::max);
    let half_height = building_top / 2.0;
    let host = ids
        .iter()
        .copied()
        .min_by(|&a, &b| {
            let da = (graph.story(a).true_bottom() - half_height).abs();
            let db = (graph.story(b).true_bottom() - half_height).abs();
            da.total_cmp(&db)
        })
        .expect("stories checked non-empty");

    let insert_z = graph.story(host).true_bottom();
    let insert_floor = graph.story(host).first_floor;

    // Shift top-down so renumbered names never collide transiently.
    let mut above: Vec<StoryId> = ids
        .iter()
        .copied()
        .filter(|&id| graph.story(id).true_bottom() >= insert_z - Z_EPS)
        .collect();
    above.sort_by(|&a, &b| graph.story(b).first_floor.cmp(&graph.story(a).first_floor));
    for id in above {
        graph.shift_story(id, template.floor_to_floor, 1)?;
    }

    place(
        graph,
        template,
        &FloorBlock {
            function: FloorFunction::Skylobby,
            multiplier: 1,
            first_floor: insert_floor,
            bottom_z: insert_z,
            is_ground: false,
            is_top: false,
            adiabatic_floor: true,
            adiabatic_plenum: true,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::config::FloorCounts;
    use crate::synth::plan::plan_blocks;

    fn stacked_graph(counts: FloorCounts) -> (BuildingGraph, TemplateLibrary) {
        let library = TemplateLibrary::standard();
        let mut graph = BuildingGraph::new();
        for block in plan_blocks(&counts, 12, &library).unwrap() {
            let template = library.get(block.function).unwrap();
            place(&mut graph, template, &block).unwrap();
        }
        (graph, library)
    }

    fn example_counts() -> FloorCounts {
        FloorCounts {
            retail: 3,
            office: 34,
            residential: 17,
            hotel: 17,
        }
    }

    #[test]
    fn test_insertion_point_nearest_half_height() {
        let (mut graph, library) = stacked_graph(example_counts());
        let sky = insert_skylobby(&mut graph, &library).unwrap();
        // The third office block (F28-F37, true bottom 110.04 m) is the
        // story nearest the 128.9 m half-height; the skylobby takes its
        // old bottom boundary.
        let s = graph.story(sky);
        assert_eq!(s.name, "F28 Skylobby");
        assert!((s.true_bottom() - 110.04).abs() < 1e-6);
        assert_eq!(s.multiplier, 1);
    }

    #[test]
    fn test_stories_above_shift_by_one_skylobby_height() {
        let (mut graph, library) = stacked_graph(example_counts());
        let before: Vec<(String, f64, u32)> = graph
            .story_ids()
            .map(|id| {
                let s = graph.story(id);
                (s.base_name.clone(), s.true_bottom(), s.first_floor)
            })
            .collect();
        let sky = insert_skylobby(&mut graph, &library).unwrap();
        let insert_z = graph.story(sky).true_bottom();
        let sl_height = graph.story(sky).floor_to_floor;

        for (id, (_, old_z, old_first)) in graph.story_ids().zip(before) {
            if id == sky {
                continue;
            }
            let s = graph.story(id);
            if old_z >= insert_z - 1e-6 {
                assert!((s.true_bottom() - (old_z + sl_height)).abs() < 1e-6);
                assert_eq!(s.first_floor, old_first + 1);
            } else {
                assert!((s.true_bottom() - old_z).abs() < 1e-9);
                assert_eq!(s.first_floor, old_first);
            }
        }
    }

    #[test]
    fn test_renumbering_contiguous() {
        let (mut graph, library) = stacked_graph(example_counts());
        insert_skylobby(&mut graph, &library).unwrap();

        let mut ranges: Vec<(u32, u32)> = graph
            .story_ids()
            .map(|id| {
                let s = graph.story(id);
                (s.first_floor, s.last_floor)
            })
            .collect();
        ranges.sort();
        let mut expected = 1;
        for (first, last) in ranges {
            assert_eq!(first, expected);
            expected = last + 1;
        }
        // 72 stacked floors plus the inserted sky-lobby.
        assert_eq!(expected - 1, 73);
    }

    #[test]
    fn test_no_z_overlap_after_insertion() {
        let (mut graph, library) = stacked_graph(example_counts());
        insert_skylobby(&mut graph, &library).unwrap();
        let mut spans: Vec<(f64, f64)> = graph
            .story_ids()
            .map(|id| {
                let s = graph.story(id);
                (s.true_bottom(), s.true_top())
            })
            .collect();
        spans.sort_by(|a, b| a.0.total_cmp(&b.0));
        for pair in spans.windows(2) {
            assert!(pair[0].1 <= pair[1].0 + 1e-6);
        }
    }

    #[test]
    fn test_empty_building_rejected() {
        let library = TemplateLibrary::standard();
        let mut graph = BuildingGraph::new();
        assert!(insert_skylobby(&mut graph, &library).is_err());
    }
}
