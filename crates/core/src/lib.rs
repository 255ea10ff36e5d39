//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and session logic.
//! It has **no dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical trays and games
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 16x10 occupancy grid with fit checks
//! - [`pieces`]: The fixed 12-piece catalog and the uniform randomizer
//! - [`tray`]: Three-slot tray with used flags and regeneration
//! - [`placement`]: Validate-then-write placement from a tray slot
//! - [`clearing`]: Snapshot-then-batch clearing of full rows and columns
//! - [`scoring`]: Per-cell placement and clear points plus the multi-line bonus
//! - [`game_state`]: The session state machine tying it all together
//! - [`snapshot`]: Read-only projection for renderers
//!
//! # Game Rules
//!
//! - Pieces never rotate, never fall and never move once placed
//! - A placement must keep every occupied cell on the board and on empty cells
//! - After a placement, every full row and full column clears at once; nothing shifts
//! - When all three tray pieces are used, three new ones are drawn
//! - The game ends when no unused tray piece fits anywhere on the board
//!
//! # Example
//!
//! ```
//! use block_blast_core::GameState;
//!
//! let mut game = GameState::new(12345);
//! let slot = game.tray().unused().next().map(|(slot, _)| slot).unwrap();
//!
//! // Every catalog piece fits on an empty board at (0, 0).
//! let outcome = game.attempt_placement(slot, 0, 0).unwrap();
//! assert!(outcome.points.placement > 0);
//! assert_eq!(game.score(), outcome.score);
//! ```

pub mod board;
pub mod clearing;
pub mod error;
pub mod game_state;
pub mod pieces;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod tray;

pub use block_blast_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clearing::{clear_completed_lines, ClearReport};
pub use error::PlacementError;
pub use game_state::{GameState, PlacementOutcome, SessionPhase};
pub use pieces::{color_of, piece_def, shape_of, PieceDef, PieceRandomizer, Shape, CATALOG};
pub use placement::{place_from_tray, validate, Placed};
pub use rng::SimpleRng;
pub use scoring::{calculate_score, ScoreResult};
pub use snapshot::GameSnapshot;
pub use tray::{Tray, TraySlot};
