//! Collision detection.
//!
//! [`collides`] is the only placement check in the engine: moves, drops,
//! spawns and rotation kicks all go through it.

use crate::board::Board;
use crate::shapes::Shape;

/// Whether `shape` anchored at (x, y) overlaps a wall, the floor, the
/// ceiling or a locked cell.
///
/// Empty cells of the bounding box never collide. Out-of-bounds counts as
/// blocked.
pub fn collides(shape: &Shape, x: i8, y: i8, board: &Board) -> bool {
    shape
        .occupied()
        .any(|(dx, dy)| !board.is_valid(x + dx, y + dy))
}
