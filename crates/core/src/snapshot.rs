use crate::tray::TraySlot;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, TRAY_SIZE};

/// Read-only projection of a game session, suitable for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub tray: [TraySlot; TRAY_SIZE],
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
    pub episode_id: u32,
    pub placements: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Unused tray kind at `slot`
    pub fn available(&self, slot: usize) -> Option<PieceKind> {
        self.tray.get(slot).filter(|s| !s.used).map(|s| s.kind)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            tray: [TraySlot {
                kind: PieceKind::Single,
                used: true,
            }; TRAY_SIZE],
            score: 0,
            lines: 0,
            game_over: false,
            episode_id: 0,
            placements: 0,
            seed: 0,
        }
    }
}
