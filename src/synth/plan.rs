//! Block plan - turns floor counts into an ordered list of placements.
//!
//! A pure fold over the fixed function order (retail, office, residential,
//! hotel) that threads the next free floor index and z-origin explicitly.
//! The edge-floor carving below preserves the original architectural
//! conditionals exactly: a function gets a distinct ground or top floor
//! only when no other function sits below or above it, so a retail-less
//! tower gets a distinct office ground floor, and a tower topped by hotel
//! floors folds the office run entirely into mid blocks.

use crate::model::FloorFunction;
use crate::synth::config::FloorCounts;
use crate::synth::pack::pack;
use crate::template::TemplateLibrary;
use anyhow::Result;

/// One placement decision: a template floor instance carrying a multiplier,
/// a floor range and a physical bottom elevation.
#[derive(Debug, Clone, Copy)]
pub struct FloorBlock {
    pub function: FloorFunction,
    pub multiplier: u32,
    pub first_floor: u32,
    /// Physical bottom of the represented block of floors.
    pub bottom_z: f64,
    pub is_ground: bool,
    pub is_top: bool,
    /// Adiabatic override for a separated edge floor whose slab would
    /// otherwise stay exposed to Ground.
    pub adiabatic_floor: bool,
    /// Same, for the plenum ceiling that would otherwise stay Outdoors.
    pub adiabatic_plenum: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Use {
    Retail,
    Office,
    Residential,
    Hotel,
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    function: FloorFunction,
    multiplier: u32,
    is_ground: bool,
    is_top: bool,
}

impl Segment {
    fn new(function: FloorFunction, multiplier: u32, is_ground: bool, is_top: bool) -> Self {
        Self {
            function,
            multiplier,
            is_ground,
            is_top,
        }
    }
}

/// Builds the full placement plan for the given counts, finishing with the
/// elevator machine room above the top function floor. The skylobby is not
/// part of the plan; it is inserted by a later pass.
pub fn plan_blocks(
    counts: &FloorCounts,
    per_block_cap: u32,
    library: &TemplateLibrary,
) -> Result<Vec<FloorBlock>> {
    let bottom_use = if counts.retail > 0 {
        Use::Retail
    } else if counts.office > 0 {
        Use::Office
    } else if counts.residential > 0 {
        Use::Residential
    } else {
        Use::Hotel
    };
    let top_use = if counts.hotel > 0 {
        Use::Hotel
    } else if counts.residential > 0 {
        Use::Residential
    } else if counts.office > 0 {
        Use::Office
    } else {
        Use::Retail
    };

    let mut segments = Vec::new();
    plain_run(
        FloorFunction::Retail,
        counts.retail,
        bottom_use == Use::Retail,
        top_use == Use::Retail,
        per_block_cap,
        &mut segments,
    );
    plain_run(
        FloorFunction::Office,
        counts.office,
        bottom_use == Use::Office,
        top_use == Use::Office,
        per_block_cap,
        &mut segments,
    );
    residential_run(
        counts.residential,
        bottom_use == Use::Residential,
        top_use == Use::Residential,
        per_block_cap,
        &mut segments,
    );
    hotel_run(
        counts.hotel,
        bottom_use == Use::Hotel,
        per_block_cap,
        &mut segments,
    );
    segments.push(Segment::new(FloorFunction::ElevatorMachineRoom, 1, false, true));

    // Fold: thread the next free floor index and z-origin explicitly.
    let mut blocks = Vec::with_capacity(segments.len());
    let mut next_floor = 1u32;
    let mut next_z = 0.0f64;
    for segment in segments {
        let template = library.get(segment.function)?;
        blocks.push(FloorBlock {
            function: segment.function,
            multiplier: segment.multiplier,
            first_floor: next_floor,
            bottom_z: next_z,
            is_ground: segment.is_ground,
            is_top: segment.is_top,
            adiabatic_floor: !segment.is_ground,
            adiabatic_plenum: !segment.is_top,
        });
        next_floor += segment.multiplier;
        next_z += segment.multiplier as f64 * template.floor_to_floor;
    }
    Ok(blocks)
}

/// Retail and office use a single template; distinct ground and top floors
/// are carved only when this function is the building's bottom or top.
fn plain_run(
    function: FloorFunction,
    count: u32,
    ground: bool,
    topmost: bool,
    cap: u32,
    segments: &mut Vec<Segment>,
) {
    if count == 0 {
        return;
    }
    let carve_top = topmost && count > u32::from(ground);
    let mids = count - u32::from(ground) - u32::from(carve_top);
    if ground {
        segments.push(Segment::new(function, 1, true, topmost && !carve_top));
    }
    for multiplier in pack(mids, cap) {
        segments.push(Segment::new(function, multiplier, false, false));
    }
    if carve_top {
        segments.push(Segment::new(function, 1, false, true));
    }
}

/// Residential always carves a distinct bottom floor; the top floor is a
/// distinct mid-template instance only when no hotel sits above.
fn residential_run(
    count: u32,
    ground: bool,
    topmost: bool,
    cap: u32,
    segments: &mut Vec<Segment>,
) {
    if count == 0 {
        return;
    }
    let carve_top = topmost && count > 1;
    let mids = count - 1 - u32::from(carve_top);
    segments.push(Segment::new(
        FloorFunction::ResiBottom,
        1,
        ground,
        topmost && !carve_top,
    ));
    for multiplier in pack(mids, cap) {
        segments.push(Segment::new(FloorFunction::ResiMid, multiplier, false, false));
    }
    if carve_top {
        segments.push(Segment::new(FloorFunction::ResiMid, 1, false, true));
    }
}

/// Hotel floors sit above every other function, so a nonzero hotel count
/// always owns the building top. Bottom and top hotel floors are always
/// distinct template instances.
fn hotel_run(count: u32, ground: bool, cap: u32, segments: &mut Vec<Segment>) {
    if count == 0 {
        return;
    }
    if count == 1 {
        segments.push(Segment::new(FloorFunction::HotelTop, 1, ground, true));
        return;
    }
    segments.push(Segment::new(FloorFunction::HotelBottom, 1, ground, false));
    for multiplier in pack(count - 2, cap) {
        segments.push(Segment::new(FloorFunction::HotelMid, multiplier, false, false));
    }
    segments.push(Segment::new(FloorFunction::HotelTop, 1, false, true));
}
