//! Game state module - the game session
//!
//! This module ties together all core components: board, catalog, tray, RNG,
//! placement, line clearing and scoring. A session is either playing or over;
//! the only way out of game over is [`GameState::restart`].
//!
//! One successful placement runs, in order:
//! placement -> line clear -> tray regeneration (if exhausted) -> game-over check.

use crate::clearing::{clear_completed_lines, ClearReport};
use crate::error::PlacementError;
use crate::pieces::{piece_def, PieceRandomizer};
use crate::placement::{place_from_tray, Placed};
use crate::scoring::{calculate_score, ScoreResult};
use crate::snapshot::GameSnapshot;
use crate::tray::Tray;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::Board;

/// Session state machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Playing,
    GameOver,
}

/// Everything a successful placement changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementOutcome {
    pub placed: Placed,
    pub cleared: ClearReport,
    pub points: ScoreResult,
    /// Session score after this placement.
    pub score: u32,
    /// Session lines cleared after this placement.
    pub lines: u32,
    /// A fresh tray was drawn because this placement used the last slot.
    pub tray_regenerated: bool,
    /// The session ended after this placement.
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    tray: Tray,
    randomizer: PieceRandomizer,
    /// Seed the current episode started from.
    seed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Successful placements in this episode.
    placements: u32,
    score: u32,
    lines: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut randomizer = PieceRandomizer::new(seed);
        let tray = Tray::new(&mut randomizer);
        Self {
            board: Board::new(),
            tray,
            randomizer,
            seed,
            episode_id: 0,
            placements: 0,
            score: 0,
            lines: 0,
            game_over: false,
        }
    }

    /// Alias of [`GameState::new`] matching the presentation-facing name
    pub fn new_game(seed: u32) -> Self {
        Self::new(seed)
    }

    /// Start a session from a prepared board and tray.
    ///
    /// The session starts in `Playing`; the game-over check only runs after a
    /// placement.
    pub fn from_parts(board: Board, tray: Tray, seed: u32) -> Self {
        Self {
            board,
            tray,
            randomizer: PieceRandomizer::new(seed),
            seed,
            episode_id: 0,
            placements: 0,
            score: 0,
            lines: 0,
            game_over: false,
        }
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> SessionPhase {
        if self.game_over {
            SessionPhase::GameOver
        } else {
            SessionPhase::Playing
        }
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn placements(&self) -> u32 {
        self.placements
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tray(&self) -> &Tray {
        &self.tray
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.tray = *self.tray.slots();
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.placements = self.placements;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Would the piece in `slot` fit at (row, col) right now?
    pub fn can_place_slot(&self, slot: usize, row: i8, col: i8) -> bool {
        match self.tray.available(slot) {
            Some(kind) => self.board.can_place(&piece_def(kind).shape, row, col),
            None => false,
        }
    }

    /// Try to place the piece in `slot` with its top-left at (row, col).
    ///
    /// On error nothing changes.
    pub fn attempt_placement(
        &mut self,
        slot: usize,
        row: i8,
        col: i8,
    ) -> Result<PlacementOutcome, PlacementError> {
        if self.game_over {
            return Err(PlacementError::GameOver);
        }

        let placed = place_from_tray(&mut self.board, &mut self.tray, slot, row, col)?;

        let cleared = clear_completed_lines(&mut self.board);
        let points = calculate_score(&piece_def(placed.kind).shape, &cleared);

        self.score = self.score.saturating_add(points.total);
        self.lines = self.lines.saturating_add(cleared.lines());
        self.placements = self.placements.wrapping_add(1);

        let tray_regenerated = self.tray.is_exhausted();
        if tray_regenerated {
            self.tray.regenerate(&mut self.randomizer);
        }

        if !self.has_available_move() {
            self.game_over = true;
        }

        Ok(PlacementOutcome {
            placed,
            cleared,
            points,
            score: self.score,
            lines: self.lines,
            tray_regenerated,
            game_over: self.game_over,
        })
    }

    /// Is there any unused slot with at least one on-board anchor where it fits?
    ///
    /// Anchors are enumerated over the 160 board positions only.
    pub fn has_available_move(&self) -> bool {
        self.tray.unused().any(|(_, kind)| {
            let shape = &piece_def(kind).shape;
            (0..BOARD_HEIGHT as i8).any(|row| {
                (0..BOARD_WIDTH as i8).any(|col| self.board.can_place(shape, row, col))
            })
        })
    }

    /// Reset board, tray, score and lines; works from any state
    pub fn restart(&mut self) {
        let seed = self.randomizer.seed();
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::new(seed);
        self.episode_id = next_episode;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
