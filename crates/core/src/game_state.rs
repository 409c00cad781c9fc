//! Game state module - manages the complete session
//!
//! This module ties together all core components: board, shapes, piece
//! factory, scoring and the drop scheduler. It owns the lifecycle
//! (Active / Paused / GameOver) and is the single entry point for commands
//! and timer ticks.

use crate::board::Board;
use crate::collision::collides;
use crate::rng::PieceFactory;
use crate::rotation::try_rotate;
use crate::scoring::{clear_lines, Stats};
use crate::shapes::{ActivePiece, Shape};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
use crate::timing::DropScheduler;
use crate::types::{GameAction, LockEvent, Phase};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: ActivePiece,
    next: Shape,
    factory: PieceFactory,
    stats: Stats,
    scheduler: DropScheduler,
    phase: Phase,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed and spawn the first piece
    pub fn new(seed: u64) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Start a session on a prepared board.
    ///
    /// The first spawn is checked against `board`, so a board that blocks the
    /// spawn area starts in [`Phase::GameOver`].
    pub fn with_board(seed: u64, board: Board) -> Self {
        let mut factory = PieceFactory::new(seed);
        let first = factory.next_random_shape();
        let next = factory.next_random_shape();

        let mut state = Self {
            board,
            active: ActivePiece::spawn(first),
            next,
            factory,
            stats: Stats::new(),
            scheduler: DropScheduler::new(),
            phase: Phase::Active,
            last_event: None,
        };
        state.check_spawn();
        state
    }

    /// Start a session on `board` with a chosen first shape.
    ///
    /// The preview still comes from the seeded factory. Used for scripted
    /// setups and puzzles.
    pub fn with_active(seed: u64, board: Board, first: Shape) -> Self {
        let mut state = Self::with_board(seed, board);
        state.phase = Phase::Active;
        state.active = ActivePiece::spawn(first);
        state.check_spawn();
        state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.stats.score
    }

    pub fn level(&self) -> u32 {
        self.stats.level
    }

    pub fn lines(&self) -> u32 {
        self.stats.lines
    }

    /// Current fall interval
    pub fn drop_interval_ms(&self) -> u32 {
        self.stats.drop_interval_ms
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn next(&self) -> &Shape {
        &self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scheduler(&self) -> &DropScheduler {
        &self.scheduler
    }

    pub fn seed(&self) -> u64 {
        self.factory.seed()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.next = NextSnapshot::from(self.next);
        out.score = self.stats.score;
        out.lines = self.stats.lines;
        out.level = self.stats.level;
        out.drop_interval_ms = self.stats.drop_interval_ms;
        out.phase = self.phase;
        out.seed = self.factory.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Promote the next shape to the active piece and draw a new next shape.
    ///
    /// Returns false (and ends the game) if the new piece collides at its
    /// spawn position.
    fn spawn_piece(&mut self) -> bool {
        self.active = ActivePiece::spawn(self.next);
        self.next = self.factory.next_random_shape();
        self.check_spawn()
    }

    fn check_spawn(&mut self) -> bool {
        if collides(&self.active.shape, self.active.x, self.active.y, &self.board) {
            self.phase = Phase::GameOver;
            return false;
        }
        true
    }

    /// Try to move the active piece horizontally by `dx`
    pub(crate) fn try_move(&mut self, dx: i8) -> bool {
        let moved = ActivePiece {
            x: self.active.x + dx,
            ..self.active
        };
        if collides(&moved.shape, moved.x, moved.y, &self.board) {
            return false;
        }
        self.active = moved;
        true
    }

    /// Try to rotate the active piece clockwise with horizontal kicks
    pub(crate) fn try_rotate(&mut self) -> bool {
        match try_rotate(&self.active, &self.board) {
            Some(rotated) => {
                self.active = rotated;
                true
            }
            None => false,
        }
    }

    /// Move the active piece down one row, locking it if it cannot descend.
    ///
    /// Returns true if the piece locked.
    pub(crate) fn soft_drop(&mut self) -> bool {
        self.scheduler.reset();

        if collides(&self.active.shape, self.active.x, self.active.y + 1, &self.board) {
            self.lock_piece();
            return true;
        }
        self.active.y += 1;
        false
    }

    /// Drop the active piece to the lowest free row and lock it.
    ///
    /// Returns the number of rows the piece fell.
    pub(crate) fn hard_drop(&mut self) -> u32 {
        self.scheduler.reset();

        let mut distance: u32 = 0;
        while !collides(&self.active.shape, self.active.x, self.active.y + 1, &self.board) {
            self.active.y += 1;
            distance += 1;
        }
        self.lock_piece();
        distance
    }

    /// Merge the active piece, clear rows, then spawn the next piece.
    fn lock_piece(&mut self) {
        self.board.merge(&self.active);

        let score_before = self.stats.score;
        let cleared = clear_lines(&mut self.board, &mut self.stats);
        let spawned = self.spawn_piece();

        self.last_event = Some(LockEvent {
            lines_cleared: cleared,
            score_delta: self.stats.score - score_before,
            score: self.stats.score,
            lines: self.stats.lines,
            level: self.stats.level,
            game_over: !spawned,
        });
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Clear the board and statistics and spawn a fresh piece.
    pub fn reset(&mut self) {
        self.board.clear();
        self.stats = Stats::new();
        self.scheduler.reset();
        self.phase = Phase::Active;
        self.last_event = None;
        self.spawn_piece();
    }

    fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Active => Phase::Paused,
            Phase::Paused => Phase::Active,
            Phase::GameOver => return false,
        };
        true
    }

    /// Advance time by `elapsed_ms`, applying gravity when due.
    ///
    /// Ticks outside [`Phase::Active`] are ignored entirely: the scheduler
    /// does not accumulate while paused or after game over.
    /// Returns true if gravity moved or locked the piece.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Active {
            return false;
        }

        if self.scheduler.advance(elapsed_ms, self.stats.drop_interval_ms) {
            self.soft_drop();
            return true;
        }
        false
    }

    /// Apply a game action
    ///
    /// Returns true if the action was accepted and changed the state.
    /// Actions not accepted in the current phase are ignored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match (self.phase, action) {
            (Phase::GameOver, GameAction::Reset | GameAction::Start) => {
                self.reset();
                true
            }
            (Phase::GameOver, _) => false,
            (_, GameAction::TogglePause | GameAction::Start) => self.toggle_pause(),
            (Phase::Paused, _) => false,
            (Phase::Active, GameAction::MoveLeft) => self.try_move(-1),
            (Phase::Active, GameAction::MoveRight) => self.try_move(1),
            (Phase::Active, GameAction::SoftDrop) => {
                self.soft_drop();
                true
            }
            (Phase::Active, GameAction::HardDrop) => {
                self.hard_drop();
                true
            }
            (Phase::Active, GameAction::Rotate) => self.try_rotate(),
            (Phase::Active, GameAction::Reset) => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: ActivePiece) {
        self.active = piece;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
