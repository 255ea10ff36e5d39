//! Line clearing - full rows and full columns
//!
//! Completeness is evaluated once, on the board as it stands right after a
//! placement. Every qualifying row and column is recorded first and then all
//! of their cells are reset in one batch. There is no re-scan after the clear:
//! a row and a column that cross both clear even though removing either one
//! would leave the other incomplete.
//!
//! Nothing shifts. Cleared cells simply become empty.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Result of one scan/clear pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearReport {
    /// Qualifying row indices, top to bottom
    pub rows: ArrayVec<u8, { BOARD_HEIGHT as usize }>,
    /// Qualifying column indices, left to right
    pub cols: ArrayVec<u8, { BOARD_WIDTH as usize }>,
    /// Distinct cells reset to empty (0 for a scan that has not been applied)
    pub cells_cleared: u32,
}

impl ClearReport {
    /// Rows plus columns; a crossing row and column count as two lines
    pub fn lines(&self) -> u32 {
        (self.rows.len() + self.cols.len()) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }

    /// Whether (row, col) belongs to any qualifying line
    pub fn covers(&self, row: i8, col: i8) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        self.rows.contains(&(row as u8)) || self.cols.contains(&(col as u8))
    }

    /// Every distinct cell covered by the qualifying lines, row-major
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..BOARD_HEIGHT as i8)
            .flat_map(|row| (0..BOARD_WIDTH as i8).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.covers(row, col))
    }
}

/// Find every full row and column without touching the board
pub fn scan(board: &Board) -> ClearReport {
    let mut report = ClearReport::default();
    for row in 0..BOARD_HEIGHT as usize {
        if board.is_row_full(row) {
            report.rows.push(row as u8);
        }
    }
    for col in 0..BOARD_WIDTH as usize {
        if board.is_col_full(col) {
            report.cols.push(col as u8);
        }
    }
    report
}

/// Scan once, then reset every cell of every qualifying line
pub fn clear_completed_lines(board: &mut Board) -> ClearReport {
    let mut report = scan(board);
    if report.is_empty() {
        return report;
    }

    let mut cleared: u32 = 0;
    for (row, col) in report.cells() {
        if board.get(row, col).is_some_and(|c| c.is_occupied()) {
            cleared += 1;
        }
    }
    board.clear_cells(report.cells());

    report.cells_cleared = cleared;
    report
}
