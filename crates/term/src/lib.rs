//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: a [`GameSnapshot`](core::GameSnapshot)
//! is drawn into a plain framebuffer, which is then diffed and flushed to the
//! terminal with crossterm. No widget toolkit is involved.
//!
//! Board cells are 2 columns by 1 row by default to compensate for the
//! aspect ratio of terminal glyphs.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
