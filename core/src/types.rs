/// Single coordinate axis used for board rows, columns, and shape offsets.
pub type Coord = u8;

/// Count type used for filled-cell totals.
pub type CellCount = u16;

/// Count type for completed rows/columns/blocks in one sweep.
pub type LineCount = u8;

/// Cumulative score of one run.
pub type Score = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Board edge length in cells.
pub const BOARD_SIZE: Coord = 9;

/// Edge length of the nine non-overlapping blocks.
pub const BLOCK_SIZE: Coord = 3;

/// Row/column origins of the block bands.
pub const BLOCK_ORIGINS: [Coord; 3] = [0, 3, 6];

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}
