//! Drag controller tests, driven through the terminal layout like real mouse input

use block_blast::core::{color_of, Board, GameState, PlacementError, Tray};
use block_blast::engine::{ControlOutcome, DragController};
use block_blast::term::{AnchorY, BoardLayout, GameView, Viewport};
use block_blast::types::{Cell, Color, Direction, GameAction, PieceKind, PointerTarget};

fn state() -> GameState {
    GameState::from_parts(
        Board::new(),
        Tray::from_kinds([PieceKind::Square2, PieceKind::Line5, PieceKind::Single]),
        4,
    )
}

fn layout() -> BoardLayout {
    GameView::default()
        .with_anchor_y(AnchorY::Top)
        .layout(Viewport::new(80, 30))
}

#[test]
fn test_drag_from_tray_to_board_places_with_grab_offset() {
    let mut st = state();
    let mut drag = DragController::new();
    let l = layout();

    // Grab the Square2 by its bottom-right cell.
    let (px, py) = l.slot_piece_origin(0);
    drag.press(&st, l.resolve(px + 2, py + 1));
    assert_eq!(drag.selected(), Some(0));
    assert!(drag.is_dragging());

    let (bx, by) = l.cell_origin(5, 5);
    drag.pointer_moved(l.resolve(bx, by));
    let hover = drag.preview(&st).unwrap();
    assert_eq!((hover.row, hover.col, hover.fits), (4, 4, true));

    let out = match drag.release(&mut st, l.resolve(bx + 1, by)) {
        ControlOutcome::Placed(out) => out,
        other => panic!("expected placement, got {other:?}"),
    };
    assert_eq!(out.placed.cells.as_slice(), &[(4, 4), (4, 5), (5, 4), (5, 5)]);
    assert_eq!(st.score(), 4);
    assert_eq!(drag.selected(), None);
    assert_eq!(drag.preview(&st), None);
}

#[test]
fn test_release_outside_cancels_without_placing() {
    let mut st = state();
    let mut drag = DragController::new();
    let before = st.snapshot();

    drag.press(&st, PointerTarget::Slot { slot: 1, dr: 0, dc: 0 });
    assert_eq!(
        drag.release(&mut st, PointerTarget::Outside),
        ControlOutcome::Idle
    );
    assert_eq!(drag.selected(), None);
    assert_eq!(st.snapshot(), before);
}

#[test]
fn test_failed_drop_reports_and_returns_piece() {
    let mut board = Board::new();
    board.set(3, 3, Cell::Occupied(Color::new(1, 1, 1)));
    let mut st = GameState::from_parts(
        board,
        Tray::from_kinds([PieceKind::Square2, PieceKind::Line5, PieceKind::Single]),
        4,
    );
    let mut drag = DragController::new();
    let before = st.snapshot();

    drag.press(&st, PointerTarget::Slot { slot: 0, dr: 0, dc: 0 });
    drag.pointer_moved(PointerTarget::Board { row: 2, col: 2 });
    assert_eq!(drag.preview(&st).map(|h| h.fits), Some(false));

    match drag.release(&mut st, PointerTarget::Board { row: 2, col: 2 }) {
        ControlOutcome::Rejected { attempt, error } => {
            assert_eq!((attempt.slot, attempt.row, attempt.col), (0, 2, 2));
            assert_eq!(error, PlacementError::CannotFit { row: 2, col: 2 });
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(drag.selected(), None);
    assert_eq!(st.snapshot(), before);
}

#[test]
fn test_click_slot_then_click_board() {
    let mut st = state();
    let mut drag = DragController::new();

    drag.press(&st, PointerTarget::Slot { slot: 2, dr: 0, dc: 0 });
    assert_eq!(
        drag.release(&mut st, PointerTarget::Slot { slot: 2, dr: 0, dc: 0 }),
        ControlOutcome::Idle
    );
    assert_eq!(drag.selected(), Some(2));

    drag.press(&st, PointerTarget::Board { row: 15, col: 9 });
    assert!(matches!(
        drag.release(&mut st, PointerTarget::Board { row: 15, col: 9 }),
        ControlOutcome::Placed(_)
    ));
    assert!(st.board().get(15, 9).is_some_and(|c| c.is_occupied()));
}

#[test]
fn test_keyboard_select_move_drop() {
    let mut st = state();
    let mut drag = DragController::new();

    drag.apply(&mut st, GameAction::SelectSlot(1));
    for _ in 0..5 {
        drag.apply(&mut st, GameAction::MoveCursor(Direction::Right));
    }
    let hover = drag.preview(&st).unwrap();
    assert_eq!((hover.kind, hover.row, hover.col), (PieceKind::Line5, 0, 5));

    assert!(matches!(
        drag.apply(&mut st, GameAction::Drop),
        ControlOutcome::Placed(_)
    ));
    assert_eq!(drag.selected(), None);
    assert_eq!(st.board().occupied_count(), 5);
}

#[test]
fn test_keyboard_rejected_drop_keeps_selection() {
    let mut st = state();
    let mut drag = DragController::new();

    drag.apply(&mut st, GameAction::SelectSlot(1));
    for _ in 0..9 {
        drag.apply(&mut st, GameAction::MoveCursor(Direction::Right));
    }
    assert_eq!(
        drag.apply(&mut st, GameAction::Drop),
        ControlOutcome::Rejected {
            attempt: block_blast::engine::Attempt { slot: 1, row: 0, col: 9 },
            error: PlacementError::CannotFit { row: 0, col: 9 },
        }
    );
    assert_eq!(drag.selected(), Some(1));

    drag.apply(&mut st, GameAction::Cancel);
    assert_eq!(drag.selected(), None);
}

#[test]
fn test_used_slot_cannot_be_selected() {
    let mut st = state();
    let mut drag = DragController::new();
    st.attempt_placement(2, 0, 0).unwrap();

    assert!(!drag.select_slot(&st, 2));
    drag.press(&st, PointerTarget::Slot { slot: 2, dr: 0, dc: 0 });
    assert_eq!(drag.selected(), None);
}

#[test]
fn test_restart_action_clears_selection() {
    let mut st = state();
    let mut drag = DragController::new();
    drag.apply(&mut st, GameAction::SelectSlot(0));

    assert_eq!(
        drag.apply(&mut st, GameAction::Restart),
        ControlOutcome::Restarted
    );
    assert_eq!(drag.selected(), None);
    assert_eq!(st.episode_id(), 1);
}

#[test]
fn test_press_on_blank_preview_area_drops_under_pointer() {
    let mut st = GameState::from_parts(
        Board::new(),
        Tray::from_kinds([PieceKind::Single, PieceKind::Square2, PieceKind::Line5]),
        4,
    );
    let mut drag = DragController::new();
    let l = layout();

    // Bottom-right of the 5x5 preview box, well outside the single cell.
    let (px, py) = l.slot_piece_origin(0);
    drag.press(&st, l.resolve(px + 6, py + 3));
    assert_eq!(drag.selected(), Some(0));

    let (bx, by) = l.cell_origin(8, 8);
    let out = match drag.release(&mut st, l.resolve(bx, by)) {
        ControlOutcome::Placed(out) => out,
        other => panic!("expected placement, got {other:?}"),
    };
    assert_eq!(out.placed.cells.as_slice(), &[(8, 8)]);
    assert_eq!(st.board().get(8, 8), Some(Cell::Occupied(color_of(PieceKind::Single))));
}
