//! Shapes module - tetromino templates and matrix rotation
//!
//! Every shape is a square occupancy matrix (side 2, 3 or 4) tagged with its
//! piece kind. Shapes are small `Copy` values, so each spawned instance owns
//! its own matrix: rotating one never affects the library template or another
//! piece.

use crate::types::{PieceKind, RotationDirection, BOARD_WIDTH, MAX_SHAPE_SIZE};

/// Square occupancy matrix of one piece, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: PieceKind,
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

const fn template(kind: PieceKind, size: u8, rows: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Shape {
    let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
    let mut r = 0;
    while r < MAX_SHAPE_SIZE {
        let mut c = 0;
        while c < MAX_SHAPE_SIZE {
            cells[r][c] = rows[r][c] != 0;
            c += 1;
        }
        r += 1;
    }
    Shape { kind, size, cells }
}

/// Spawn orientation of every piece, in identity order (I, J, L, O, S, T, Z).
pub static SHAPE_LIBRARY: [Shape; 7] = [
    template(
        PieceKind::I,
        4,
        [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
    template(
        PieceKind::J,
        3,
        [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
    template(
        PieceKind::L,
        3,
        [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
    template(
        PieceKind::O,
        2,
        [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
    template(
        PieceKind::S,
        3,
        [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
    template(
        PieceKind::T,
        3,
        [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
    template(
        PieceKind::Z,
        3,
        [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
];

impl Shape {
    /// Fresh copy of the library template for `kind`.
    pub fn template(kind: PieceKind) -> Self {
        SHAPE_LIBRARY[(kind.id() - 1) as usize]
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Side length of the bounding box
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the cell at (row, col) is part of the piece.
    /// Cells outside the bounding box are never occupied.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        let n = self.size as usize;
        row < n && col < n && self.cells[row][col]
    }

    /// Cell value at (row, col): the piece id when occupied, 0 otherwise.
    pub fn value(&self, row: usize, col: usize) -> u8 {
        if self.is_occupied(row, col) {
            self.kind.id()
        } else {
            0
        }
    }

    /// Offsets `(dx, dy)` of occupied cells relative to the top-left corner.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |row| {
            (0..n)
                .filter(move |&col| self.cells[row][col])
                .map(move |col| (col as i8, row as i8))
        })
    }

    /// Rotate the matrix 90° in place.
    ///
    /// Transposes the `size x size` block, then reverses each row (clockwise)
    /// or the row order (counter-clockwise). No board awareness.
    pub fn rotate(&mut self, direction: RotationDirection) {
        let n = self.size as usize;
        for y in 0..n {
            for x in 0..y {
                let tmp = self.cells[y][x];
                self.cells[y][x] = self.cells[x][y];
                self.cells[x][y] = tmp;
            }
        }

        match direction {
            RotationDirection::Clockwise => {
                for row in self.cells[..n].iter_mut() {
                    row[..n].reverse();
                }
            }
            RotationDirection::CounterClockwise => self.cells[..n].reverse(),
        }
    }

    /// Rotated copy; `self` is left untouched.
    pub fn rotated(&self, direction: RotationDirection) -> Self {
        let mut out = *self;
        out.rotate(direction);
        out
    }

    /// Matrix of cell values padded to 4x4, for snapshots and previews.
    pub fn to_u8_matrix(&self) -> [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE] {
        let mut out = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (row, line) in out.iter_mut().enumerate() {
            for (col, v) in line.iter_mut().enumerate() {
                *v = self.value(row, col);
            }
        }
        out
    }
}

/// The falling piece: a shape instance anchored at the top-left corner of
/// its bounding box, in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Place `shape` at the spawn anchor: horizontally centered, top row.
    pub fn spawn(shape: Shape) -> Self {
        Self {
            x: spawn_x(shape.size()),
            y: 0,
            shape,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.shape.kind()
    }

    /// Board coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Horizontal spawn anchor for a shape of side `size`.
pub fn spawn_x(size: u8) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (size / 2) as i8
}
