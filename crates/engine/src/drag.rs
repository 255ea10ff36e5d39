//! Drag-and-drop controller.
//!
//! Turns pointer gestures and keyboard actions into `attempt_placement` calls.
//! The controller never touches the board itself; it only remembers which tray
//! slot is in hand, where inside the piece it was grabbed, and which board cell
//! the pointer (or keyboard cursor) is over.

use crate::core::{shape_of, GameState, PlacementError, PlacementOutcome};
use crate::types::{Direction, GameAction, PieceKind, PointerTarget, BOARD_HEIGHT, BOARD_WIDTH};

/// The anchor a placement was tried at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    pub slot: usize,
    pub row: i8,
    pub col: i8,
}

/// What a gesture or action did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlOutcome {
    /// Only controller state (selection, hover) changed, if anything.
    Idle,
    Placed(PlacementOutcome),
    Rejected {
        attempt: Attempt,
        error: PlacementError,
    },
    Restarted,
}

/// Ghost preview of the piece in hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hover {
    pub slot: usize,
    pub kind: PieceKind,
    /// Anchor (top-left of the shape matrix); may lie off-board.
    pub row: i8,
    pub col: i8,
    pub fits: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    selected: Option<usize>,
    /// Shape-matrix cell held under the pointer.
    grab: (i8, i8),
    /// Board cell under the pointer or keyboard cursor.
    cursor: (i8, i8),
    dragging: bool,
    over_board: bool,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn cursor(&self) -> (i8, i8) {
        self.cursor
    }

    /// Anchor the piece in hand would be placed at
    pub fn anchor(&self) -> (i8, i8) {
        (
            self.cursor.0.saturating_sub(self.grab.0),
            self.cursor.1.saturating_sub(self.grab.1),
        )
    }

    /// Forget selection and drag state; the cursor stays where it is
    pub fn cancel(&mut self) {
        self.selected = None;
        self.grab = (0, 0);
        self.dragging = false;
        self.over_board = false;
    }

    /// Pick up an unused slot for keyboard play. Returns false if the slot is
    /// unavailable or the game is over.
    pub fn select_slot(&mut self, state: &GameState, slot: usize) -> bool {
        if state.game_over() || state.tray().available(slot).is_none() {
            return false;
        }
        self.selected = Some(slot);
        self.grab = (0, 0);
        self.dragging = false;
        self.over_board = true;
        true
    }

    /// Select the next unused slot after the current one, wrapping around
    pub fn cycle_slot(&mut self, state: &GameState) -> bool {
        let start = self.selected.map_or(0, |s| s + 1);
        let tray_len = state.tray().slots().len();
        let next = (0..tray_len)
            .map(|i| (start + i) % tray_len)
            .find(|&slot| state.tray().available(slot).is_some());
        match next {
            Some(slot) => self.select_slot(state, slot),
            None => {
                self.cancel();
                false
            }
        }
    }

    /// Step the keyboard cursor one cell, staying on the board
    pub fn move_cursor(&mut self, dir: Direction) {
        let (dr, dc) = dir.delta();
        let row = (self.cursor.0 + dr).clamp(0, BOARD_HEIGHT as i8 - 1);
        let col = (self.cursor.1 + dc).clamp(0, BOARD_WIDTH as i8 - 1);
        self.cursor = (row, col);
        if self.selected.is_some() {
            self.over_board = true;
        }
    }

    /// Left button went down.
    ///
    /// On a tray slot this picks the piece up, remembering which of its cells
    /// was grabbed. On the board it starts a drag for the piece already in hand.
    pub fn press(&mut self, state: &GameState, target: PointerTarget) {
        if state.game_over() {
            return;
        }
        match target {
            PointerTarget::Slot { slot, dr, dc } => {
                if let Some(kind) = state.tray().available(slot) {
                    // Blank preview area grabs the nearest edge of the shape.
                    let shape = shape_of(kind);
                    let max_r = shape.height().saturating_sub(1) as i8;
                    let max_c = shape.width().saturating_sub(1) as i8;
                    self.selected = Some(slot);
                    self.grab = (dr.clamp(0, max_r), dc.clamp(0, max_c));
                    self.dragging = true;
                    self.over_board = false;
                }
            }
            PointerTarget::Board { row, col } => {
                if self.selected.is_some() {
                    self.cursor = (row, col);
                    self.dragging = true;
                    self.over_board = true;
                }
            }
            PointerTarget::Outside => {}
        }
    }

    /// Pointer moved, with or without the button held
    pub fn pointer_moved(&mut self, target: PointerTarget) {
        if self.selected.is_none() {
            return;
        }
        match target {
            PointerTarget::Board { row, col } => {
                self.cursor = (row, col);
                self.over_board = true;
            }
            _ => self.over_board = false,
        }
    }

    /// Left button released.
    ///
    /// Over the board this tries the placement; the piece goes back to the tray
    /// either way. Over a tray slot the selection is kept (click to select).
    /// Anywhere else the selection is dropped.
    pub fn release(&mut self, state: &mut GameState, target: PointerTarget) -> ControlOutcome {
        if !self.dragging {
            return ControlOutcome::Idle;
        }
        self.dragging = false;

        match target {
            PointerTarget::Board { row, col } => {
                self.cursor = (row, col);
                let outcome = self.try_drop(state);
                self.cancel();
                outcome
            }
            PointerTarget::Slot { .. } => {
                self.over_board = false;
                ControlOutcome::Idle
            }
            PointerTarget::Outside => {
                self.cancel();
                ControlOutcome::Idle
            }
        }
    }

    /// Keyboard drop. The selection survives a rejected attempt.
    pub fn drop_at_cursor(&mut self, state: &mut GameState) -> ControlOutcome {
        let outcome = self.try_drop(state);
        if matches!(outcome, ControlOutcome::Placed(_)) {
            self.cancel();
        }
        outcome
    }

    fn try_drop(&mut self, state: &mut GameState) -> ControlOutcome {
        let Some(slot) = self.selected else {
            return ControlOutcome::Idle;
        };
        let (row, col) = self.anchor();
        match state.attempt_placement(slot, row, col) {
            Ok(outcome) => ControlOutcome::Placed(outcome),
            Err(error) => ControlOutcome::Rejected {
                attempt: Attempt { slot, row, col },
                error,
            },
        }
    }

    /// Dispatch a keyboard action
    pub fn apply(&mut self, state: &mut GameState, action: GameAction) -> ControlOutcome {
        match action {
            GameAction::SelectSlot(slot) => {
                self.select_slot(state, slot);
                ControlOutcome::Idle
            }
            GameAction::CycleSlot => {
                self.cycle_slot(state);
                ControlOutcome::Idle
            }
            GameAction::MoveCursor(dir) => {
                self.move_cursor(dir);
                ControlOutcome::Idle
            }
            GameAction::Drop => self.drop_at_cursor(state),
            GameAction::Cancel => {
                self.cancel();
                ControlOutcome::Idle
            }
            GameAction::Restart => {
                state.restart();
                self.cancel();
                ControlOutcome::Restarted
            }
        }
    }

    /// Ghost for the piece in hand while it is over the board
    pub fn preview(&self, state: &GameState) -> Option<Hover> {
        let slot = self.selected?;
        if !self.over_board || state.game_over() {
            return None;
        }
        let kind = state.tray().available(slot)?;
        let (row, col) = self.anchor();
        Some(Hover {
            slot,
            kind,
            row,
            col,
            fits: state.can_place_slot(slot, row, col),
        })
    }
}
