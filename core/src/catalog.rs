use serde::{Deserialize, Serialize};

use crate::*;

/// One placeable polyomino: a rectangular footprint plus the occupied offsets
/// within it, listed in strictly ascending row-major order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    pub name: &'static str,
    pub height: Coord,
    pub width: Coord,
    pub cells: &'static [Coord2],
}

impl Shape {
    pub const fn cell_count(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    /// Matrix view of the footprint, for rendering hosts.
    pub fn filled_at(&self, offset: Coord2) -> bool {
        self.cells.contains(&offset)
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = Coord2> {
        self.cells.iter().copied()
    }
}

/// Stable index of a shape in [`SHAPE_CATALOG`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeId(pub(crate) u8);

impl ShapeId {
    pub fn from_index(index: usize) -> Option<ShapeId> {
        (index < SHAPE_CATALOG.len()).then(|| ShapeId(index as u8))
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn shape(self) -> &'static Shape {
        &SHAPE_CATALOG[self.index()]
    }
}

pub fn shape_by_name(name: &str) -> Option<ShapeId> {
    SHAPE_CATALOG
        .iter()
        .position(|shape| shape.name == name)
        .and_then(ShapeId::from_index)
}

/// The fixed piece set. Every footprint fits in 3×3; bars and elbows come in
/// every orientation because placed pieces never rotate.
pub const SHAPE_CATALOG: &[Shape] = &[
    Shape { name: "mono", height: 1, width: 1, cells: &[(0, 0)] },
    // bars
    Shape { name: "bar2-row", height: 1, width: 2, cells: &[(0, 0), (0, 1)] },
    Shape { name: "bar3-row", height: 1, width: 3, cells: &[(0, 0), (0, 1), (0, 2)] },
    Shape { name: "bar2-col", height: 2, width: 1, cells: &[(0, 0), (1, 0)] },
    Shape { name: "bar3-col", height: 3, width: 1, cells: &[(0, 0), (1, 0), (2, 0)] },
    Shape { name: "square", height: 2, width: 2, cells: &[(0, 0), (0, 1), (1, 0), (1, 1)] },
    // three-cell elbows, named for the empty corner
    Shape { name: "elbow-ne", height: 2, width: 2, cells: &[(0, 0), (1, 0), (1, 1)] },
    Shape { name: "elbow-sw", height: 2, width: 2, cells: &[(0, 0), (0, 1), (1, 1)] },
    Shape { name: "elbow-nw", height: 2, width: 2, cells: &[(0, 1), (1, 0), (1, 1)] },
    Shape { name: "elbow-se", height: 2, width: 2, cells: &[(0, 0), (0, 1), (1, 0)] },
    Shape { name: "plus", height: 3, width: 3, cells: &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)] },
    // tees, named for the stem direction
    Shape { name: "tee-s", height: 2, width: 3, cells: &[(0, 0), (0, 1), (0, 2), (1, 1)] },
    Shape { name: "tee-e", height: 3, width: 2, cells: &[(0, 0), (1, 0), (1, 1), (2, 0)] },
    Shape { name: "tee-n", height: 2, width: 3, cells: &[(0, 1), (1, 0), (1, 1), (1, 2)] },
    Shape { name: "tee-w", height: 3, width: 2, cells: &[(0, 1), (1, 0), (1, 1), (2, 1)] },
    Shape { name: "ess", height: 2, width: 3, cells: &[(0, 1), (0, 2), (1, 0), (1, 1)] },
    Shape { name: "zed", height: 2, width: 3, cells: &[(0, 0), (0, 1), (1, 1), (1, 2)] },
];
