//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed grid:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 16 rows (indexed 0-15)
//!
//! Coordinates are always `(row, col)` with row 0 at the top.
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POINTS_PER_CELL` | 1 | Points per placed cell and per cleared cell |
//! | `MULTI_LINE_BONUS` | 10 | Bonus per line when more than one line clears at once |
//!
//! # Examples
//!
//! ```
//! use block_blast_types::{Cell, Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, TRAY_SIZE};
//!
//! // Parse a piece kind (case-insensitive)
//! assert_eq!(PieceKind::from_str("line5"), Some(PieceKind::Line5));
//!
//! // Cells are tagged, never compared by color to test emptiness
//! let cell = Cell::Occupied(Color::new(0xFF, 0x6B, 0x6B));
//! assert!(!cell.is_empty());
//! assert_eq!(cell.color().map(|c| c.hex()), Some("#FF6B6B".to_string()));
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 16);
//! assert_eq!(TRAY_SIZE, 3);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (16 rows)
pub const BOARD_HEIGHT: u8 = 16;

/// Total number of board cells (160)
pub const BOARD_CELLS: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Number of slots in the piece tray
pub const TRAY_SIZE: usize = 3;

/// Largest shape bounding box edge in the catalog (I piece is 4x4, Line5 is 1x5)
pub const MAX_SHAPE_EDGE: usize = 5;

/// Largest number of occupied cells in one shape (3x3 square)
pub const MAX_SHAPE_CELLS: usize = 9;

/// Points awarded per placed cell and per cleared cell
pub const POINTS_PER_CELL: u32 = 1;

/// Bonus per cleared line, applied only when more than one row/column clears at once
pub const MULTI_LINE_BONUS: u32 = 10;

/// The twelve piece kinds in the catalog
///
/// Five "blast" blocks plus the seven standard tetrominoes:
/// - **Single**: one cell
/// - **Square2**: 2x2 block
/// - **Line4**: horizontal 1x4 bar
/// - **Line5**: horizontal 1x5 bar
/// - **Square3**: 3x3 block
/// - **I, O, T, S, Z, J, L**: tetrominoes in their fixed spawn orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Single,
    Square2,
    Line4,
    Line5,
    Square3,
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every catalog entry, in catalog order
    pub const ALL: [PieceKind; 12] = [
        PieceKind::Single,
        PieceKind::Square2,
        PieceKind::Line4,
        PieceKind::Line5,
        PieceKind::Square3,
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use block_blast_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("single"), Some(PieceKind::Single));
    /// assert_eq!(PieceKind::from_str("T"), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "single" => Some(PieceKind::Single),
            "square2" => Some(PieceKind::Square2),
            "line4" => Some(PieceKind::Line4),
            "line5" => Some(PieceKind::Line5),
            "square3" => Some(PieceKind::Square3),
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation (used by the journal)
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Single => "single",
            PieceKind::Square2 => "square2",
            PieceKind::Line4 => "line4",
            PieceKind::Line5 => "line5",
            PieceKind::Square3 => "square3",
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Opaque color token copied into board cells on placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB` form.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A cell on the game board
///
/// Occupancy is an explicit variant: the color only says how to draw the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Color),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(color) => Some(*color),
        }
    }
}

/// Cursor movement direction for keyboard play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(d_row, d_col)` step for this direction
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Game actions produced by the keyboard map
///
/// Pointer gestures are handled separately (see [`PointerTarget`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Pick tray slot 0, 1 or 2
    SelectSlot(usize),
    /// Select the next unused tray slot
    CycleSlot,
    /// Move the placement cursor one cell
    MoveCursor(Direction),
    /// Try to place the selected piece at the cursor
    Drop,
    /// Drop the current selection
    Cancel,
    /// Start a fresh game (allowed at any time)
    Restart,
}

/// What a pointer position resolves to on screen.
///
/// Produced by the terminal layout (pure geometry) and consumed by the drag
/// controller. Board coordinates may lie outside the board; placement at such an
/// anchor is rejected by the engine like any other misfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// A board cell (possibly off-board) under the pointer
    Board { row: i8, col: i8 },
    /// A tray slot, with the `(row, col)` offset of the pointer inside the slot preview
    Slot { slot: usize, dr: i8, dc: i8 },
    /// Anywhere else
    Outside,
}
