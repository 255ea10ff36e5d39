//! Placement engine - validate, then write
//!
//! Validation runs to completion before the board or tray is touched, so a
//! rejected attempt leaves both exactly as they were.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::error::PlacementError;
use crate::pieces::piece_def;
use crate::scoring::calculate_placement_score;
use crate::tray::Tray;
use crate::types::{PieceKind, MAX_SHAPE_CELLS};

/// Cells written by one placement
pub type PlacedCells = ArrayVec<(i8, i8), MAX_SHAPE_CELLS>;

/// A placement that has been applied to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placed {
    pub slot: usize,
    pub kind: PieceKind,
    pub row: i8,
    pub col: i8,
    pub cells: PlacedCells,
    /// Base score (one point per placed cell)
    pub points: u32,
}

/// Check that `slot` can be placed at (row, col); returns the slot's piece kind
pub fn validate(
    board: &Board,
    tray: &Tray,
    slot: usize,
    row: i8,
    col: i8,
) -> Result<PieceKind, PlacementError> {
    let kind = tray.available(slot).ok_or(PlacementError::InvalidSlot(slot))?;
    if !board.can_place(&piece_def(kind).shape, row, col) {
        return Err(PlacementError::CannotFit { row, col });
    }
    Ok(kind)
}

/// Validate and apply in one step
pub fn place_from_tray(
    board: &mut Board,
    tray: &mut Tray,
    slot: usize,
    row: i8,
    col: i8,
) -> Result<Placed, PlacementError> {
    let kind = validate(board, tray, slot, row, col)?;
    let def = piece_def(kind);

    board.place(&def.shape, def.color, row, col);
    tray.mark_used(slot);

    let cells = def
        .shape
        .cells()
        .map(|(dr, dc)| (row + dr, col + dc))
        .collect();

    Ok(Placed {
        slot,
        kind,
        row,
        col,
        cells,
        points: calculate_placement_score(&def.shape),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Color};

    fn tray() -> Tray {
        Tray::from_kinds([PieceKind::Square2, PieceKind::T, PieceKind::I])
    }

    #[test]
    fn valid_placement_writes_footprint_and_uses_slot() {
        let mut board = Board::new();
        let mut tray = tray();

        let placed = place_from_tray(&mut board, &mut tray, 0, 3, 4).unwrap();
        assert_eq!(placed.kind, PieceKind::Square2);
        assert_eq!(placed.points, 4);
        assert_eq!(placed.cells.as_slice(), &[(3, 4), (3, 5), (4, 4), (4, 5)]);
        assert_eq!(board.occupied_count(), 4);
        assert_eq!(tray.available(0), None);
    }

    #[test]
    fn used_slot_is_invalid() {
        let mut board = Board::new();
        let mut tray = tray();
        place_from_tray(&mut board, &mut tray, 1, 0, 0).unwrap();

        let err = place_from_tray(&mut board, &mut tray, 1, 8, 0).unwrap_err();
        assert_eq!(err, PlacementError::InvalidSlot(1));
    }

    #[test]
    fn out_of_range_slot_is_invalid_even_if_target_is_bad() {
        let board = Board::new();
        let err = validate(&board, &tray(), 3, -20, -20).unwrap_err();
        assert_eq!(err, PlacementError::InvalidSlot(3));
    }

    #[test]
    fn overlap_is_rejected_without_side_effects() {
        let mut board = Board::new();
        board.set(1, 1, Cell::Occupied(Color::new(1, 1, 1)));
        let mut tray = tray();
        let before_board = board.clone();
        let before_tray = tray.clone();

        let err = place_from_tray(&mut board, &mut tray, 0, 0, 0).unwrap_err();
        assert_eq!(err, PlacementError::CannotFit { row: 0, col: 0 });
        assert_eq!(board, before_board);
        assert_eq!(tray, before_tray);
    }

    #[test]
    fn i_piece_placed_with_padding_above_board() {
        let mut board = Board::new();
        let mut tray = tray();
        let placed = place_from_tray(&mut board, &mut tray, 2, -1, 6).unwrap();
        assert_eq!(placed.cells.as_slice(), &[(0, 6), (0, 7), (0, 8), (0, 9)]);
    }
}
