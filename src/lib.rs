pub mod model;
pub mod synth;
pub mod template;
mod uid;

// Prelude
pub use model::{
    Boundary, BuildingGraph, FloorFunction, Space, SpaceId, SpaceKind, Story, StoryId, Surface,
    SurfaceId, SurfaceKind, Zone, ZoneId,
};
pub use synth::config::SynthesisConfig;
pub use synth::system_map::SystemMapEntry;
pub use synth::{Synthesis, synthesize};
pub use template::{TemplateFloor, TemplateLibrary};
pub use uid::UID;
