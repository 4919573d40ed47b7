//! Floor template library - immutable seed floors for the synthesizer.
//!
//! One canonical hand-authored floor per function tag, with local z-origin 0.
//! Templates are never mutated; the replicator deep-copies them into the
//! building graph (copy-then-mutate), so one library is reusable across
//! multiple synthesis runs.

use crate::model::{
    Boundary, BuildingGraph, FloorFunction, Space, SpaceId, SpaceKind, Surface, SurfaceKind, Zone,
};
use crate::uid::UID;
use anyhow::{Result, anyhow};
use std::collections::HashMap;

/// Boundary condition of a template surface, with matched pairs expressed
/// as template-local surface indices.
#[derive(Debug, Clone, Copy)]
enum TemplateBoundary {
    Ground,
    Outdoors,
    Matched(usize),
}

#[derive(Debug, Clone)]
struct TemplateSurface {
    name: String,
    kind: SurfaceKind,
    boundary: TemplateBoundary,
}

#[derive(Debug, Clone)]
struct TemplateSpace {
    name: String,
    kind: SpaceKind,
    common_area: bool,
    surfaces: Vec<usize>,
}

/// A single hand-authored floor definition reused as the seed for many
/// physical floors of the same function.
#[derive(Debug, Clone)]
pub struct TemplateFloor {
    pub function: FloorFunction,
    /// Display label of stories built from this template, e.g. "Office".
    pub display_name: String,
    pub floor_to_floor: f64,
    pub floor_to_ceiling: f64,
    /// Multiplier already encoded in the seed floor; folded into the
    /// placed zone multiplier.
    pub base_multiplier: u32,
    spaces: Vec<TemplateSpace>,
    surfaces: Vec<TemplateSurface>,
}

impl TemplateFloor {
    /// Builds a template with the given occupied spaces (name, common-area
    /// tag) and one return plenum above them. The occupied ceiling and the
    /// plenum floor over it form a matched surface pair; the plenum ceiling
    /// is the roof plane (Outdoors until rewritten).
    fn with_plenum(
        function: FloorFunction,
        display_name: &str,
        floor_to_floor: f64,
        floor_to_ceiling: f64,
        occupied: &[(&str, bool)],
    ) -> Self {
        let mut surfaces: Vec<TemplateSurface> = Vec::new();
        let mut spaces: Vec<TemplateSpace> = Vec::new();
        let mut ceilings: Vec<(String, usize)> = Vec::new();

        for &(name, common_area) in occupied {
            let mut owned = Vec::new();
            owned.push(push_surface(
                &mut surfaces,
                "Floor",
                SurfaceKind::Floor,
                TemplateBoundary::Ground,
            ));
            // Patched to the matching plenum floor below.
            let ceiling = push_surface(
                &mut surfaces,
                "Ceiling",
                SurfaceKind::Ceiling,
                TemplateBoundary::Outdoors,
            );
            owned.push(ceiling);
            owned.extend(push_walls(&mut surfaces));
            ceilings.push((name.to_string(), ceiling));
            spaces.push(TemplateSpace {
                name: name.to_string(),
                kind: SpaceKind::Occupied,
                common_area,
                surfaces: owned,
            });
        }

        let mut plenum_surfaces = Vec::new();
        for (occupied_name, ceiling) in ceilings {
            let plenum_floor = push_surface(
                &mut surfaces,
                &format!("Floor over {occupied_name}"),
                SurfaceKind::Floor,
                TemplateBoundary::Matched(ceiling),
            );
            surfaces[ceiling].boundary = TemplateBoundary::Matched(plenum_floor);
            plenum_surfaces.push(plenum_floor);
        }
        plenum_surfaces.push(push_surface(
            &mut surfaces,
            "Ceiling",
            SurfaceKind::Ceiling,
            TemplateBoundary::Outdoors,
        ));
        plenum_surfaces.extend(push_walls(&mut surfaces));
        spaces.push(TemplateSpace {
            name: format!("{display_name} Plenum"),
            kind: SpaceKind::Plenum,
            common_area: false,
            surfaces: plenum_surfaces,
        });

        Self {
            function,
            display_name: display_name.to_string(),
            floor_to_floor,
            floor_to_ceiling,
            base_multiplier: 1,
            spaces,
            surfaces,
        }
    }

    /// Builds a plenum-less template with a single occupied space whose
    /// ceiling is the roof plane.
    fn without_plenum(
        function: FloorFunction,
        display_name: &str,
        floor_to_floor: f64,
        floor_to_ceiling: f64,
        space_name: &str,
    ) -> Self {
        let mut surfaces = Vec::new();
        let mut owned = Vec::new();
        owned.push(push_surface(
            &mut surfaces,
            "Floor",
            SurfaceKind::Floor,
            TemplateBoundary::Ground,
        ));
        owned.push(push_surface(
            &mut surfaces,
            "Ceiling",
            SurfaceKind::Ceiling,
            TemplateBoundary::Outdoors,
        ));
        owned.extend(push_walls(&mut surfaces));
        Self {
            function,
            display_name: display_name.to_string(),
            floor_to_floor,
            floor_to_ceiling,
            base_multiplier: 1,
            spaces: vec![TemplateSpace {
                name: space_name.to_string(),
                kind: SpaceKind::Occupied,
                common_area: false,
                surfaces: owned,
            }],
            surfaces,
        }
    }

    pub fn has_plenum(&self) -> bool {
        self.spaces.iter().any(|s| s.kind == SpaceKind::Plenum)
    }

    /// Deep-copies this template into the graph.
    ///
    /// Two passes: allocate every surface copy first, recording the
    /// template-index → new-id map, then rewrite matched-pair references
    /// through that map so copies only ever point at copies.
    pub fn instantiate(
        &self,
        graph: &mut BuildingGraph,
        range_label: &str,
        zone_multiplier: u32,
        z_origin: f64,
    ) -> Result<Vec<SpaceId>> {
        let mut surface_ids = Vec::with_capacity(self.surfaces.len());
        for ts in &self.surfaces {
            let boundary = match ts.boundary {
                TemplateBoundary::Ground => Boundary::Ground,
                TemplateBoundary::Outdoors => Boundary::Outdoors,
                // Rewritten below once the whole map exists.
                TemplateBoundary::Matched(_) => Boundary::Adiabatic,
            };
            surface_ids.push(graph.add_surface(Surface::new(&ts.name, ts.kind, boundary)));
        }
        for (i, ts) in self.surfaces.iter().enumerate() {
            if let TemplateBoundary::Matched(j) = ts.boundary {
                graph.surface_mut(surface_ids[i]).boundary = Boundary::Surface(surface_ids[j]);
            }
        }

        let mut space_ids = Vec::with_capacity(self.spaces.len());
        for tspace in &self.spaces {
            let name = format!("{} {}", range_label, tspace.name);
            let zone = graph.add_zone(Zone::new(
                &format!("{name} Zone"),
                &format!("{} Zone", tspace.name),
                zone_multiplier,
            ));
            let z = if tspace.kind == SpaceKind::Plenum {
                z_origin + self.floor_to_ceiling
            } else {
                z_origin
            };
            let id = graph.add_space(Space {
                name,
                base_name: tspace.name.clone(),
                uid: UID::new(),
                kind: tspace.kind,
                common_area: tspace.common_area,
                zone,
                surfaces: tspace.surfaces.iter().map(|&i| surface_ids[i]).collect(),
                z_origin: z,
            })?;
            space_ids.push(id);
        }
        Ok(space_ids)
    }
}

fn push_surface(
    surfaces: &mut Vec<TemplateSurface>,
    name: &str,
    kind: SurfaceKind,
    boundary: TemplateBoundary,
) -> usize {
    surfaces.push(TemplateSurface {
        name: name.to_string(),
        kind,
        boundary,
    });
    surfaces.len() - 1
}

fn push_walls(surfaces: &mut Vec<TemplateSurface>) -> Vec<usize> {
    ["North Wall", "East Wall", "South Wall", "West Wall"]
        .iter()
        .map(|name| push_surface(surfaces, name, SurfaceKind::Wall, TemplateBoundary::Outdoors))
        .collect()
}

/// Holds one canonical floor definition per function type.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    templates: HashMap<FloorFunction, TemplateFloor>,
}

impl TemplateLibrary {
    /// The canonical hand-authored floor set.
    pub fn standard() -> Self {
        use FloorFunction::*;
        let mut library = Self {
            templates: HashMap::new(),
        };
        library.insert(TemplateFloor::with_plenum(
            Retail,
            "Retail",
            5.0,
            3.7,
            &[("Retail", false)],
        ));
        library.insert(TemplateFloor::with_plenum(
            Office,
            "Office",
            3.96,
            2.74,
            &[("Office", false)],
        ));
        library.insert(TemplateFloor::with_plenum(
            ResiBottom,
            "Residential",
            3.05,
            2.44,
            &[("Residential", false)],
        ));
        library.insert(TemplateFloor::with_plenum(
            ResiMid,
            "Residential",
            3.05,
            2.44,
            &[("Residential", false)],
        ));
        library.insert(TemplateFloor::with_plenum(
            HotelBottom,
            "Hotel",
            4.0,
            3.0,
            &[("Hotel Lobby", true), ("Guest Rooms", false)],
        ));
        library.insert(TemplateFloor::with_plenum(
            HotelMid,
            "Hotel",
            3.05,
            2.44,
            &[("Guest Rooms", false), ("Hotel Corridor", true)],
        ));
        library.insert(TemplateFloor::with_plenum(
            HotelTop,
            "Hotel",
            3.05,
            2.44,
            &[("Guest Rooms", false), ("Hotel Corridor", true)],
        ));
        library.insert(TemplateFloor::with_plenum(
            Skylobby,
            "Skylobby",
            4.5,
            3.5,
            &[("Skylobby Mechanical", false)],
        ));
        library.insert(TemplateFloor::without_plenum(
            ElevatorMachineRoom,
            "Elevator Machine Room",
            3.5,
            3.2,
            "Elevator Machine Room",
        ));
        library
    }

    pub fn insert(&mut self, template: TemplateFloor) {
        self.templates.insert(template.function, template);
    }

    /// A missing template is a fatal configuration error; no partial
    /// building is usable for simulation.
    pub fn get(&self, function: FloorFunction) -> Result<&TemplateFloor> {
        self.templates
            .get(&function)
            .ok_or_else(|| anyhow!("invalid configuration: no template floor for {function:?}"))
    }
}
