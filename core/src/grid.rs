use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// One completed unit found by a sweep scan.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClearUnit {
    Row(Coord),
    Col(Coord),
    Block(Coord2),
}

impl ClearUnit {
    /// The nine board cells belonging to this unit.
    pub fn cells(self) -> [Coord2; 9] {
        match self {
            Self::Row(row) => core::array::from_fn(|i| (row, i as Coord)),
            Self::Col(col) => core::array::from_fn(|i| (i as Coord, col)),
            Self::Block((row0, col0)) => core::array::from_fn(|i| {
                let i = i as Coord;
                (row0 + i / BLOCK_SIZE, col0 + i % BLOCK_SIZE)
            }),
        }
    }
}

/// All units completed by one placement, detected in a single pass against the
/// pre-clear board. A cell shared by several units appears once per unit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClearSweep {
    units: SmallVec<[ClearUnit; 4]>,
}

impl ClearSweep {
    pub fn count(&self) -> LineCount {
        self.units.len() as LineCount
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> &[ClearUnit] {
        &self.units
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.units.iter().flat_map(|unit| unit.cells())
    }
}

/// 9×9 occupancy board. Filled cells carry no piece identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<bool>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: Array2::default([usize::from(BOARD_SIZE); 2]),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> bool {
        self.cells[coords.to_nd_index()]
    }

    pub fn filled_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|&&filled| filled)
            .count()
            .try_into()
            .unwrap()
    }

    /// Raw occupancy view, for rendering hosts.
    pub fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// True iff every occupied cell of `shape`, translated by `origin`, maps
    /// to an in-bounds cell that is currently empty.
    pub fn can_place(&self, shape: &Shape, origin: Coord2) -> bool {
        let (row0, col0) = origin;
        if usize::from(row0) + usize::from(shape.height) > usize::from(BOARD_SIZE)
            || usize::from(col0) + usize::from(shape.width) > usize::from(BOARD_SIZE)
        {
            return false;
        }
        shape
            .iter_cells()
            .all(|(row, col)| !self.cells[(row0 + row, col0 + col).to_nd_index()])
    }

    /// Fills every occupied cell of `shape` at `origin`. On failure the board
    /// is left untouched, never partially written.
    pub fn place(&mut self, shape: &Shape, origin: Coord2) -> Result<()> {
        if !self.can_place(shape, origin) {
            return Err(GameError::InvalidPlacement);
        }
        let (row0, col0) = origin;
        for (row, col) in shape.iter_cells() {
            self.cells[(row0 + row, col0 + col).to_nd_index()] = true;
        }
        Ok(())
    }

    /// Detection pass over all rows, columns, and blocks. Pure; pairs with
    /// [`Board::apply_sweep`].
    pub fn scan_completed(&self) -> ClearSweep {
        let mut units = SmallVec::new();
        for row in 0..BOARD_SIZE {
            if self.cells.row(row.into()).iter().all(|&filled| filled) {
                units.push(ClearUnit::Row(row));
            }
        }
        for col in 0..BOARD_SIZE {
            if self.cells.column(col.into()).iter().all(|&filled| filled) {
                units.push(ClearUnit::Col(col));
            }
        }
        for row0 in BLOCK_ORIGINS {
            for col0 in BLOCK_ORIGINS {
                let unit = ClearUnit::Block((row0, col0));
                if unit.cells().iter().all(|&coords| self.cell_at(coords)) {
                    units.push(unit);
                }
            }
        }
        ClearSweep { units }
    }

    /// Empties every cell belonging to any unit of `sweep`.
    pub fn apply_sweep(&mut self, sweep: &ClearSweep) {
        for coords in sweep.iter_cells() {
            self.cells[coords.to_nd_index()] = false;
        }
    }

    /// Two-phase clear: collect all complete units against the pre-clear
    /// board, then empty their union. Interleaving detection with clearing
    /// could let a cleared row hide a column that was also complete.
    pub fn clear_completed(&mut self) -> ClearSweep {
        let sweep = self.scan_completed();
        self.apply_sweep(&sweep);
        sweep
    }

    /// Whether any origin on the board admits `shape`.
    pub fn can_place_anywhere(&self, shape: &Shape) -> bool {
        for row in 0..=BOARD_SIZE - shape.height {
            for col in 0..=BOARD_SIZE - shape.width {
                if self.can_place(shape, (row, col)) {
                    return true;
                }
            }
        }
        false
    }
}
