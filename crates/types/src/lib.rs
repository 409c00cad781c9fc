//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no I/O, usable from the engine, the terminal
//! front end and the event log alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default frame interval (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Fall interval at level 1 |
//! | `DROP_STEP_MS` | 50 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Fastest fall interval |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{cell_value, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.id(), 6);
//! assert_eq!(PieceKind::from_id(6), Some(piece));
//!
//! assert_eq!(cell_value(Some(piece)), 6);
//! assert_eq!(cell_value(None), 0);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Largest shape bounding box side (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Default frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Fall interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Fall interval reduction per level gained
pub const DROP_STEP_MS: u32 = 50;

/// Absolute minimum fall interval (100ms)
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level a fresh session starts at
pub const STARTING_LEVEL: u32 = 1;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines in one lock, multiplied by the current level:
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Clears larger than four rows score as four.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven tetromino piece kinds
///
/// The declaration order is the identity order: `I` locks into the board as
/// cell value 1, `Z` as 7. The identity doubles as the palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in identity order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Board cell value for this kind (1..=7)
    pub fn id(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::id`]. Zero and anything above 7 map to `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_id(4), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_id(0), None);
    /// assert_eq!(PieceKind::from_id(8), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }
}

/// Direction of a 90° shape rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    /// Transpose, then reverse each row
    Clockwise,
    /// Transpose, then reverse the row order
    CounterClockwise,
}

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Accepts movement, rotation, drops, pause and timer ticks
    Active,
    /// Accepts only resume
    Paused,
    /// Accepts only reset
    GameOver,
}

/// Commands that can be applied to a session
///
/// Every input source (keyboard, scripted driver, tests) goes through this
/// enumeration and the session's single command entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if it cannot descend
    SoftDrop,
    /// Instantly drop piece to lowest valid position and lock it
    HardDrop,
    /// Rotate piece 90° clockwise with horizontal correction
    Rotate,
    /// Pause or resume
    TogglePause,
    /// Start a fresh session after game over
    Reset,
    /// Start button: reset after game over, otherwise toggle pause
    Start,
}

/// Core-side event emitted after a piece locks.
///
/// Consumed by observers (renderer, event log) through `take_last_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    /// The piece spawned after this lock collided immediately.
    pub game_over: bool,
}

/// A cell on the game board
///
/// - `None`: Empty cell (value 0)
/// - `Some(PieceKind)`: Locked cell (value `kind.id()`)
pub type Cell = Option<PieceKind>;

/// Numeric value of a cell (0 = empty, 1..=7 = piece identity)
pub fn cell_value(cell: Cell) -> u8 {
    cell.map(|kind| kind.id()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_timing_defaults() {
        assert_eq!(BASE_DROP_MS, 1000);
        assert_eq!(DROP_STEP_MS, 50);
        assert_eq!(DROP_INTERVAL_MIN_MS, 100);
        assert_eq!(LINES_PER_LEVEL, 10);
        assert_eq!(STARTING_LEVEL, 1);
        assert_eq!(LINE_SCORES, [0, 40, 100, 300, 1200]);
    }

    #[test]
    fn ids_round_trip_in_declaration_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.id() as usize, i + 1);
            assert_eq!(PieceKind::from_id(kind.id()), Some(*kind));
        }
    }

    #[test]
    fn cell_value_maps_empty_to_zero() {
        assert_eq!(cell_value(None), 0);
        assert_eq!(cell_value(Some(PieceKind::Z)), 7);
    }

    #[test]
    fn phase_and_kind_serialize_as_observers_expect() {
        assert_eq!(serde_json::to_string(&Phase::GameOver).unwrap(), "\"gameOver\"");
        assert_eq!(serde_json::to_string(&PieceKind::T).unwrap(), "\"t\"");
    }
}
