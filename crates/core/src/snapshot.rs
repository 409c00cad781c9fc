//! Plain-data session snapshots for renderers and observers.

use serde::Serialize;

use crate::shapes::{ActivePiece, Shape};
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, MAX_SHAPE_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub size: u8,
    pub cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind(),
            size: value.shape.size(),
            cells: value.shape.to_u8_matrix(),
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub size: u8,
    pub cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl From<Shape> for NextSnapshot {
    fn from(value: Shape) -> Self {
        Self {
            kind: value.kind(),
            size: value.size(),
            cells: value.to_u8_matrix(),
        }
    }
}

/// Read-only, plain-data view of a session for renderers and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: NextSnapshot,
    pub phase: Phase,
    pub seed: u64,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    /// Board value at (x, y) with the active piece drawn on top.
    ///
    /// Out-of-bounds coordinates read as 0.
    pub fn composed_value(&self, x: usize, y: usize) -> u8 {
        if y >= BOARD_HEIGHT as usize || x >= BOARD_WIDTH as usize {
            return 0;
        }
        if let Some(active) = self.active {
            let dx = x as i16 - active.x as i16;
            let dy = y as i16 - active.y as i16;
            if (0..active.size as i16).contains(&dx) && (0..active.size as i16).contains(&dy) {
                let v = active.cells[dy as usize][dx as usize];
                if v != 0 {
                    return v;
                }
            }
        }
        self.board[y][x]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: NextSnapshot::from(Shape::template(PieceKind::I)),
            phase: Phase::Active,
            seed: 0,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: 1000,
        }
    }
}
