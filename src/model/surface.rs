//! Surfaces and their outside boundary conditions.

use crate::model::SurfaceId;
use crate::uid::UID;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceKind {
    Floor,
    Ceiling,
    Wall,
}

/// Outside boundary condition of a surface.
///
/// `Surface(..)` means the surface is matched to an adjacent surface and
/// heat flows between the two; the referenced surface normally points back,
/// forming a pair. Breaking a pair must rewrite both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary {
    Ground,
    Outdoors,
    Surface(SurfaceId),
    Adiabatic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Surface {
    pub name: String,
    pub uid: UID,
    pub kind: SurfaceKind,
    pub boundary: Boundary,
}

impl Surface {
    pub fn new(name: &str, kind: SurfaceKind, boundary: Boundary) -> Self {
        Self {
            name: name.to_string(),
            uid: UID::new(),
            kind,
            boundary,
        }
    }
}
