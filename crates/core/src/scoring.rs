//! Scoring module - Classic line-clear scoring and level progression
//!
//! - Clearing `k` rows in one lock awards `LINE_SCORES[k] * level` points
//!   (clears above four rows score as four).
//! - Level is `lines / 10 + 1`.
//! - Fall interval shrinks by 50ms per level, never below 100ms.

use crate::board::Board;
use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
    STARTING_LEVEL,
};

/// Score, line count, level and current fall speed of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stats {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
}

impl Stats {
    /// Fresh-session values: nothing scored, level 1, one row per second.
    pub fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: STARTING_LEVEL,
            drop_interval_ms: BASE_DROP_MS,
        }
    }

    /// Account for `cleared` rows removed by a single lock.
    ///
    /// Returns the points awarded. Nothing changes when `cleared` is 0.
    pub fn apply_line_clear(&mut self, cleared: u32) -> u32 {
        if cleared == 0 {
            return 0;
        }

        let points = calculate_line_score(cleared, self.level);
        self.lines = self.lines.saturating_add(cleared);
        self.score = self.score.saturating_add(points);
        self.level = calculate_level(self.lines);
        self.drop_interval_ms = get_drop_interval_ms(self.level);
        points
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculate line clear score
/// lines: number of lines cleared in one lock
/// level: current level (1-based)
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let idx = (lines as usize).min(LINE_SCORES.len() - 1);
    LINE_SCORES[idx].saturating_mul(level)
}

/// Level for a total line count
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + STARTING_LEVEL
}

/// Get drop interval for a level (in milliseconds)
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let speedup = level
        .saturating_sub(STARTING_LEVEL)
        .saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Remove every full row from `board` and credit them to `stats`.
///
/// Returns the number of rows cleared in this pass.
pub fn clear_lines(board: &mut Board, stats: &mut Stats) -> u32 {
    let cleared = board.clear_full_rows().len() as u32;
    stats.apply_line_clear(cleared);
    cleared
}
