//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: No allocation on tick, move, rotate or line clear
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, merge and full-row compaction
//! - [`shapes`]: Shape library, matrix rotation and the active piece
//! - [`rng`]: Uniform random piece generation
//! - [`collision`]: The single placement predicate
//! - [`rotation`]: Clockwise rotation with bounded horizontal kicks
//! - [`scoring`]: Line scores, levels and fall speed
//! - [`timing`]: Gravity accumulator
//! - [`game_state`]: Session lifecycle and command handling
//! - [`snapshot`]: Plain-data observation for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer** with a single next-piece preview
//! - **Rotation** clockwise only; blocked rotations try sideways kicks
//!   +1, -1, +2 (only +1 for the 2x2 shape) before giving up
//! - **Locking** happens as soon as a piece cannot descend (no lock delay)
//! - **Scoring**: 40/100/300/1200 times the current level
//! - **Levels** every 10 lines; gravity speeds up by 50ms per level down to 100ms
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{GameAction, Phase};
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.phase(), Phase::Active);
//! assert_eq!(game.board().occupied_count(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. Gravity fires once the accumulated time exceeds the
//! current fall interval (1000ms at level 1).

pub mod board;
pub mod collision;
pub mod game_state;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod shapes;
pub mod snapshot;
pub mod timing;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use game_state::GameState;
pub use rng::PieceFactory;
pub use rotation::try_rotate;
pub use scoring::{calculate_level, calculate_line_score, clear_lines, get_drop_interval_ms, Stats};
pub use shapes::{ActivePiece, Shape, SHAPE_LIBRARY};
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
pub use timing::DropScheduler;
