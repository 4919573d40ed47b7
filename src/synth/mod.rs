//! Floor-stack synthesis.
//!
//! Takes the template floor library and a floor-count configuration and
//! assembles the complete N-story building graph: pack, place (boundary
//! rewriting inline), insert the sky-lobby, then re-derive the HVAC system
//! map. Single-threaded and deterministic; every step mutates the one
//! building graph in place, and later passes depend on the names and ids
//! produced by earlier ones. No partial building is returned on error.

pub mod boundary;
pub mod config;
pub mod pack;
pub mod placer;
pub mod plan;
pub mod skylobby;
pub mod system_map;

use crate::model::{BuildingGraph, StoryId};
use crate::template::TemplateLibrary;
use anyhow::{Context, Result};
use config::SynthesisConfig;
use system_map::SystemMapEntry;

/// The completed building: the mutated graph, its stories bottom-up, and
/// the derived system map.
#[derive(Debug, Clone)]
pub struct Synthesis {
    pub graph: BuildingGraph,
    /// Stories in ascending floor order, sky-lobby in place.
    pub stories: Vec<StoryId>,
    pub system_map: Vec<SystemMapEntry>,
}

/// Runs the full synthesis for `config` against `library`.
///
/// The library is read-only and reusable across runs; all new objects are
/// deep copies living in the returned graph, which is ready for the
/// downstream surface-intersection pass.
pub fn synthesize(config: &SynthesisConfig, library: &TemplateLibrary) -> Result<Synthesis> {
    let counts = config.validate()?;
    let blocks = plan::plan_blocks(&counts, config.per_block_cap, library)?;

    let mut graph = BuildingGraph::new();
    let mut stories = Vec::with_capacity(blocks.len() + 1);
    for block in &blocks {
        let template = library.get(block.function)?;
        let story = placer::place(&mut graph, template, block)
            .with_context(|| format!("placing {:?} block at F{}", block.function, block.first_floor))?;
        stories.push(story);
    }

    let sky = skylobby::insert_skylobby(&mut graph, library).context("inserting skylobby")?;
    stories.push(sky);
    stories.sort_by_key(|&id| graph.story(id).first_floor);

    let system_map = system_map::generate_system_map(&graph, &stories);
    Ok(Synthesis {
        graph,
        stories,
        system_map,
    })
}
