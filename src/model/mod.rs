//! Building graph - spaces, zones, surfaces and stories in one arena.
//!
//! Hierarchy: Story → Space → Surface, with each Space owned by a Zone.
//! Cross-references are typed index handles into the arena, so the renaming,
//! renumbering and z-shift passes locate objects by handle, never by
//! display name.

pub mod space;
pub mod story;
pub mod surface;
pub mod zone;

pub use space::{Space, SpaceKind};
pub use story::{FloorFunction, Story};
pub use surface::{Boundary, Surface, SurfaceKind};
pub use zone::Zone;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpaceId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryId(pub(crate) usize);

/// The mutable building graph under synthesis.
///
/// Space and story display names are globally unique; a collision during
/// insert or rename is a fatal graph-integrity error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildingGraph {
    surfaces: Vec<Surface>,
    spaces: Vec<Space>,
    zones: Vec<Zone>,
    stories: Vec<Story>,
    space_names: HashSet<String>,
    story_names: HashSet<String>,
}

impl BuildingGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_surface(&mut self, surface: Surface) -> SurfaceId {
        let id = SurfaceId(self.surfaces.len());
        self.surfaces.push(surface);
        id
    }

    pub fn add_zone(&mut self, zone: Zone) -> ZoneId {
        let id = ZoneId(self.zones.len());
        self.zones.push(zone);
        id
    }

    /// Adds a space and registers it with its owning zone.
    pub fn add_space(&mut self, space: Space) -> Result<SpaceId> {
        if !self.space_names.insert(space.name.clone()) {
            return Err(anyhow!(
                "graph integrity: space name is already present: {}",
                space.name
            ));
        }
        let id = SpaceId(self.spaces.len());
        self.zones[space.zone.0].spaces.push(id);
        self.spaces.push(space);
        Ok(id)
    }

    pub fn add_story(&mut self, story: Story) -> Result<StoryId> {
        if !self.story_names.insert(story.name.clone()) {
            return Err(anyhow!(
                "graph integrity: story name is already present: {}",
                story.name
            ));
        }
        let id = StoryId(self.stories.len());
        self.stories.push(story);
        Ok(id)
    }

    pub fn surface(&self, id: SurfaceId) -> &Surface {
        &self.surfaces[id.0]
    }

    pub fn surface_mut(&mut self, id: SurfaceId) -> &mut Surface {
        &mut self.surfaces[id.0]
    }

    pub fn space(&self, id: SpaceId) -> &Space {
        &self.spaces[id.0]
    }

    pub fn space_mut(&mut self, id: SpaceId) -> &mut Space {
        &mut self.spaces[id.0]
    }

    pub fn zone(&self, id: ZoneId) -> &Zone {
        &self.zones[id.0]
    }

    pub fn zone_mut(&mut self, id: ZoneId) -> &mut Zone {
        &mut self.zones[id.0]
    }

    pub fn story(&self, id: StoryId) -> &Story {
        &self.stories[id.0]
    }

    pub fn story_mut(&mut self, id: StoryId) -> &mut Story {
        &mut self.stories[id.0]
    }

    pub fn story_ids(&self) -> impl Iterator<Item = StoryId> {
        (0..self.stories.len()).map(StoryId)
    }

    pub fn num_stories(&self) -> usize {
        self.stories.len()
    }

    pub fn num_spaces(&self) -> usize {
        self.spaces.len()
    }

    pub fn rename_space(&mut self, id: SpaceId, name: String) -> Result<()> {
        if self.spaces[id.0].name == name {
            return Ok(());
        }
        if !self.space_names.insert(name.clone()) {
            return Err(anyhow!(
                "graph integrity: space name is already present: {name}"
            ));
        }
        self.space_names.remove(&self.spaces[id.0].name);
        self.spaces[id.0].name = name;
        Ok(())
    }

    pub fn rename_story(&mut self, id: StoryId, name: String) -> Result<()> {
        if self.stories[id.0].name == name {
            return Ok(());
        }
        if !self.story_names.insert(name.clone()) {
            return Err(anyhow!(
                "graph integrity: story name is already present: {name}"
            ));
        }
        self.story_names.remove(&self.stories[id.0].name);
        self.stories[id.0].name = name;
        Ok(())
    }

    /// Shifts a story up by `dz` metres and `dfloor` floor numbers,
    /// re-deriving its display name and those of its spaces and zones.
    pub fn shift_story(&mut self, id: StoryId, dz: f64, dfloor: u32) -> Result<()> {
        let (label, space_ids) = {
            let story = &mut self.stories[id.0];
            story.first_floor += dfloor;
            story.last_floor += dfloor;
            story.z_origin += dz;
            (story.range_label(), story.spaces.clone())
        };
        let story_name = format!("{} {}", label, self.stories[id.0].base_name);
        self.rename_story(id, story_name)?;
        for sid in space_ids {
            self.spaces[sid.0].z_origin += dz;
            let space_name = format!("{} {}", label, self.spaces[sid.0].base_name);
            self.rename_space(sid, space_name)?;
            let zid = self.spaces[sid.0].zone;
            self.zones[zid.0].name = format!("{} {}", label, self.zones[zid.0].base_name);
        }
        Ok(())
    }
}
