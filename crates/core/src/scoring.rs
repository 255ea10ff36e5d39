//! Scoring module - placement and line-clear points
//!
//! Rules:
//! - Placing a piece scores one point per occupied cell of its shape.
//! - A clear scores one point per distinct cell reset to empty.
//! - When more than one row/column clears in the same pass, each cleared
//!   line adds a flat bonus of [`MULTI_LINE_BONUS`].
//!
//! Nothing here ever subtracts points.

use crate::clearing::ClearReport;
use crate::pieces::Shape;
use crate::types::{MULTI_LINE_BONUS, POINTS_PER_CELL};

/// Score breakdown for one placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points for the placed cells.
    pub placement: u32,
    /// Points for cells reset by the clear.
    pub cleared_cells: u32,
    /// Multi-line bonus (0 for zero or one line).
    pub bonus: u32,
    pub total: u32,
}

/// Base score for placing `shape`
pub fn calculate_placement_score(shape: &Shape) -> u32 {
    shape.cell_count() * POINTS_PER_CELL
}

/// Bonus for clearing `lines` rows+columns in one pass
pub fn calculate_multi_line_bonus(lines: u32) -> u32 {
    if lines > 1 {
        MULTI_LINE_BONUS * lines
    } else {
        0
    }
}

/// Points for a clear pass (cells plus bonus)
pub fn calculate_clear_score(report: &ClearReport) -> (u32, u32) {
    if report.is_empty() {
        return (0, 0);
    }
    let cells = report.cells_cleared * POINTS_PER_CELL;
    let bonus = calculate_multi_line_bonus(report.lines());
    (cells, bonus)
}

/// Complete score for a placement followed by its clear pass
pub fn calculate_score(shape: &Shape, report: &ClearReport) -> ScoreResult {
    let placement = calculate_placement_score(shape);
    let (cleared_cells, bonus) = calculate_clear_score(report);
    ScoreResult {
        placement,
        cleared_cells,
        bonus,
        total: placement
            .saturating_add(cleared_cells)
            .saturating_add(bonus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::shape_of;
    use crate::types::PieceKind;

    fn report(rows: &[u8], cols: &[u8], cells: u32) -> ClearReport {
        let mut r = ClearReport::default();
        r.rows.extend(rows.iter().copied());
        r.cols.extend(cols.iter().copied());
        r.cells_cleared = cells;
        r
    }

    #[test]
    fn test_placement_scores_match_cell_counts() {
        assert_eq!(calculate_placement_score(&shape_of(PieceKind::Single)), 1);
        assert_eq!(calculate_placement_score(&shape_of(PieceKind::Square2)), 4);
        assert_eq!(calculate_placement_score(&shape_of(PieceKind::Line5)), 5);
        assert_eq!(calculate_placement_score(&shape_of(PieceKind::Square3)), 9);
        // Padding rows do not count.
        assert_eq!(calculate_placement_score(&shape_of(PieceKind::I)), 4);
        assert_eq!(calculate_placement_score(&shape_of(PieceKind::T)), 4);
    }

    #[test]
    fn test_multi_line_bonus() {
        assert_eq!(calculate_multi_line_bonus(0), 0);
        assert_eq!(calculate_multi_line_bonus(1), 0);
        assert_eq!(calculate_multi_line_bonus(2), 20);
        assert_eq!(calculate_multi_line_bonus(3), 30);
    }

    #[test]
    fn test_single_row_clear() {
        let r = report(&[15], &[], 10);
        assert_eq!(calculate_clear_score(&r), (10, 0));
    }

    #[test]
    fn test_row_and_column_clear_counts_intersection_once() {
        // One row (10 cells) and one column (16 cells) share a cell: 25 distinct.
        let r = report(&[4], &[2], 25);
        assert_eq!(calculate_clear_score(&r), (25, 20));
    }

    #[test]
    fn test_full_score_calculation() {
        let r = report(&[14, 15], &[0], 20 + 16 - 2);
        let result = calculate_score(&shape_of(PieceKind::Square2), &r);
        assert_eq!(result.placement, 4);
        assert_eq!(result.cleared_cells, 34);
        assert_eq!(result.bonus, 30);
        assert_eq!(result.total, 68);
    }

    #[test]
    fn test_no_clear_scores_only_placement() {
        let result = calculate_score(&shape_of(PieceKind::L), &ClearReport::default());
        assert_eq!(result, ScoreResult {
            placement: 4,
            cleared_cells: 0,
            bonus: 0,
            total: 4,
        });
    }
}
