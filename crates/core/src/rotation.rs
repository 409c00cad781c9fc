//! Rotation with horizontal wall kicks.
//!
//! After a clockwise rotation the piece is nudged sideways by a diverging
//! probe sequence +1, -2, +3, -4, ... applied to the anchor one after another,
//! so the anchor walks through +1, -1, +2, -2, ... relative to the start.
//! A position is only tested if the probe that follows it does not exceed
//! the shape's side length: a 3x3 or 4x4 shape tries +1, -1 and +2, and a
//! 2x2 shape tries +1 alone. Only horizontal correction is attempted.

use crate::board::Board;
use crate::collision::collides;
use crate::shapes::ActivePiece;
use crate::types::RotationDirection;

/// Try to rotate `piece` clockwise on `board`.
///
/// Returns the rotated and kicked piece, or `None` if no probed position is
/// free. The input is never modified, so a failed rotation leaves the
/// caller's piece exactly as it was.
pub fn try_rotate(piece: &ActivePiece, board: &Board) -> Option<ActivePiece> {
    let mut candidate = *piece;
    candidate.shape.rotate(RotationDirection::Clockwise);

    let limit = candidate.shape.size() as i8;
    let mut probe: i8 = 1;

    while collides(&candidate.shape, candidate.x, candidate.y, board) {
        candidate.x += probe;
        probe = -(probe + probe.signum());
        if probe > limit {
            return None;
        }
    }

    Some(candidate)
}
