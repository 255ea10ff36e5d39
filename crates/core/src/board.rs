//! Board module - manages the game grid
//!
//! The board is a 10x16 grid where each cell is either empty or holds the color
//! token of the piece that filled it.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..15 (top to bottom), col ranges 0..9 (left to right)

use crate::pieces::Shape;
use crate::types::{Cell, Color, BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board - 16 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Check whether `shape` anchored at (row, col) fits.
    ///
    /// Every occupied cell of the shape must land inside the board on an empty
    /// cell. Read-only; stops at the first violation.
    pub fn can_place(&self, shape: &Shape, row: i8, col: i8) -> bool {
        shape.cells().all(|(dr, dc)| {
            match (row.checked_add(dr), col.checked_add(dc)) {
                (Some(r), Some(c)) => self.is_empty_at(r, c),
                _ => false,
            }
        })
    }

    /// Write `color` under every occupied cell of `shape` anchored at (row, col).
    ///
    /// The caller must have checked [`Board::can_place`] first.
    pub fn place(&mut self, shape: &Shape, color: Color, row: i8, col: i8) {
        debug_assert!(self.can_place(shape, row, col), "place without can_place");
        for (dr, dc) in shape.cells() {
            self.set(row + dr, col + dc, Cell::Occupied(color));
        }
    }

    /// Reset every listed cell to empty (out-of-range entries are ignored)
    pub fn clear_cells<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = (i8, i8)>,
    {
        for (row, col) in cells {
            self.set(row, col, Cell::Empty);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = row * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(Cell::is_occupied)
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, col: usize) -> bool {
        if col >= BOARD_WIDTH as usize {
            return false;
        }
        self.cells
            .iter()
            .skip(col)
            .step_by(BOARD_WIDTH as usize)
            .all(Cell::is_occupied)
    }

    /// Number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a `[row][col]` grid
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (row, chunk) in self.cells.chunks_exact(width).enumerate() {
            out[row].copy_from_slice(chunk);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Build a board from a `[row][col]` grid
    pub fn from_grid(grid: &[[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) -> Self {
        let mut board = Self::new();
        for (row, cells) in grid.iter().enumerate() {
            let start = row * BOARD_WIDTH as usize;
            board.cells[start..start + BOARD_WIDTH as usize].copy_from_slice(cells);
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
