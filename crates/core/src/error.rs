use thiserror::Error;

/// Why a placement attempt was rejected.
///
/// None of these mutate the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Slot index out of range or already used.
    #[error("tray slot {0} is out of range or already used")]
    InvalidSlot(usize),
    /// Shape leaves the board or overlaps an occupied cell at the anchor.
    #[error("piece does not fit at row {row}, col {col}")]
    CannotFit { row: i8, col: i8 },
    /// The session has ended; only a restart is accepted.
    #[error("game is over")]
    GameOver,
}

impl PlacementError {
    /// Stable machine-readable code (used by the journal)
    pub fn code(self) -> &'static str {
        match self {
            PlacementError::InvalidSlot(_) => "invalid_slot",
            PlacementError::CannotFit { .. } => "cannot_fit",
            PlacementError::GameOver => "game_over",
        }
    }
}
