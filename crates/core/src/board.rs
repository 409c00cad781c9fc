//! The playfield grid.
//!
//! 10 columns by 20 rows, row 0 at the top. Cells live in one flat row-major
//! array so the board is `Copy`-sized plain data and nothing here allocates.
//! Any coordinate outside `[0, 10) x [0, 20)` reads as `None` and is treated
//! as blocking by callers.

use arrayvec::ArrayVec;

use crate::shapes::ActivePiece;
use crate::types::{cell_value, Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const W: usize = BOARD_WIDTH as usize;
const H: usize = BOARD_HEIGHT as usize;

/// Row indices removed by one clearing pass, bottom to top.
pub type ClearedRows = ArrayVec<usize, H>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; W * H],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; W * H],
        }
    }

    /// Build a board from rows of cell values (0 = empty, 1..=7 = piece id).
    ///
    /// Rows are aligned to the bottom of the board; missing rows above are
    /// empty. Returns `None` for more than 20 rows or a value above 7.
    pub fn from_rows(rows: &[[u8; W]]) -> Option<Self> {
        let top = H.checked_sub(rows.len())?;
        let mut board = Self::new();
        for (dy, values) in rows.iter().enumerate() {
            for (dst, &v) in board.row_mut(top + dy).iter_mut().zip(values) {
                *dst = match v {
                    0 => None,
                    id => Some(PieceKind::from_id(id)?),
                };
            }
        }
        Some(board)
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < W && y < H).then_some(y * W + x)
    }

    #[inline]
    fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * W..(y + 1) * W]
    }

    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        &mut self.cells[y * W..(y + 1) * W]
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at (x, y), or `None` outside the board.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|i| self.cells[i])
    }

    /// Numeric cell value at (x, y): 0 for empty, 1..=7 for locked cells.
    pub fn value(&self, x: i8, y: i8) -> Option<u8> {
        self.get(x, y).map(cell_value)
    }

    /// Write a cell. Out-of-bounds writes are refused and return false.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        let Some(i) = Self::index(x, y) else {
            return false;
        };
        self.cells[i] = cell;
        true
    }

    /// In bounds and empty: a piece cell may sit here.
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        self.get(x, y) == Some(None)
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        y < H && self.row(y).iter().all(Option::is_some)
    }

    /// Remove every full row and let the rows above fall into the gaps.
    ///
    /// Surviving rows keep their order and settle at the bottom; the rows
    /// freed at the top are emptied. Returns the removed row indices (as they
    /// were before compaction), bottom to top.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        // Next destination row for a surviving row, moving upwards.
        let mut dst = H;

        for src in (0..H).rev() {
            if self.is_row_full(src) {
                cleared.push(src);
                continue;
            }
            dst -= 1;
            if dst != src {
                self.cells.copy_within(src * W..(src + 1) * W, dst * W);
            }
        }

        self.cells[..dst * W].fill(None);
        cleared
    }

    /// Commit every occupied cell of `piece` into the board.
    ///
    /// Precondition: `piece` does not collide at its anchor. Nothing is
    /// re-checked here; an overlapping cell is overwritten and cells that fall
    /// outside the board are skipped.
    pub fn merge(&mut self, piece: &ActivePiece) {
        let kind = piece.kind();
        for (x, y) in piece.cells() {
            self.set(x, y, Some(kind));
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Copy the board out as numeric cell values, row-major.
    pub fn write_u8_grid(&self, out: &mut [[u8; W]; H]) {
        for (y, out_row) in out.iter_mut().enumerate() {
            for (v, &cell) in out_row.iter_mut().zip(self.row(y)) {
                *v = cell_value(cell);
            }
        }
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..H)
            .map(|y| self.row(y).iter().map(|&c| cell_value(c)).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
