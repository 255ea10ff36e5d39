//! Pieces module - the static piece catalog
//!
//! Every piece is a fixed boolean matrix indexed `[row][col]`. Tetrominoes keep
//! their minimal bounding box, including the empty padding rows, so a piece is
//! always anchored by the top-left corner of its matrix. Shapes never rotate.

use crate::rng::SimpleRng;
use crate::types::{Color, PieceKind};

/// Offset of one occupied cell relative to the anchor, as `(d_row, d_col)`
pub type CellOffset = (i8, i8);

/// Immutable rectangular shape matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    rows: &'static [&'static [u8]],
}

impl Shape {
    const fn new(rows: &'static [&'static [u8]]) -> Self {
        Self { rows }
    }

    /// Number of matrix rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of matrix columns
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    /// Whether matrix position `(row, col)` is occupied (false outside the matrix)
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .is_some_and(|&v| v != 0)
    }

    /// Iterate occupied cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = CellOffset> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, v)| **v != 0)
                .map(move |(c, _)| (r as i8, c as i8))
        })
    }

    /// Number of occupied cells (the base placement score)
    pub fn cell_count(&self) -> u32 {
        self.cells().count() as u32
    }
}

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDef {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
}

const SINGLE: Shape = Shape::new(&[&[1]]);

const SQUARE_2: Shape = Shape::new(&[&[1, 1], &[1, 1]]);

const LINE_4: Shape = Shape::new(&[&[1, 1, 1, 1]]);

const LINE_5: Shape = Shape::new(&[&[1, 1, 1, 1, 1]]);

const SQUARE_3: Shape = Shape::new(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]]);

const I_SHAPE: Shape = Shape::new(&[
    &[0, 0, 0, 0],
    &[1, 1, 1, 1],
    &[0, 0, 0, 0],
    &[0, 0, 0, 0],
]);

const O_SHAPE: Shape = Shape::new(&[&[1, 1], &[1, 1]]);

const T_SHAPE: Shape = Shape::new(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]);

const S_SHAPE: Shape = Shape::new(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]);

const Z_SHAPE: Shape = Shape::new(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]);

const J_SHAPE: Shape = Shape::new(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]);

const L_SHAPE: Shape = Shape::new(&[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]);

/// The full catalog, in [`PieceKind::ALL`] order
pub const CATALOG: [PieceDef; 12] = [
    PieceDef { kind: PieceKind::Single, shape: SINGLE, color: Color::new(0xFF, 0x6B, 0x6B) },
    PieceDef { kind: PieceKind::Square2, shape: SQUARE_2, color: Color::new(0x4E, 0xCD, 0xC4) },
    PieceDef { kind: PieceKind::Line4, shape: LINE_4, color: Color::new(0x45, 0xB7, 0xD1) },
    PieceDef { kind: PieceKind::Line5, shape: LINE_5, color: Color::new(0x96, 0xCE, 0xB4) },
    PieceDef { kind: PieceKind::Square3, shape: SQUARE_3, color: Color::new(0xFF, 0xEA, 0xA7) },
    PieceDef { kind: PieceKind::I, shape: I_SHAPE, color: Color::new(0x00, 0xCE, 0xD1) },
    PieceDef { kind: PieceKind::O, shape: O_SHAPE, color: Color::new(0xFF, 0xD7, 0x00) },
    PieceDef { kind: PieceKind::T, shape: T_SHAPE, color: Color::new(0x93, 0x70, 0xDB) },
    PieceDef { kind: PieceKind::S, shape: S_SHAPE, color: Color::new(0x32, 0xCD, 0x32) },
    PieceDef { kind: PieceKind::Z, shape: Z_SHAPE, color: Color::new(0xFF, 0x45, 0x00) },
    PieceDef { kind: PieceKind::J, shape: J_SHAPE, color: Color::new(0x1E, 0x90, 0xFF) },
    PieceDef { kind: PieceKind::L, shape: L_SHAPE, color: Color::new(0xFF, 0x8C, 0x00) },
];

/// Get the catalog entry for a piece kind
pub fn piece_def(kind: PieceKind) -> &'static PieceDef {
    let idx = match kind {
        PieceKind::Single => 0,
        PieceKind::Square2 => 1,
        PieceKind::Line4 => 2,
        PieceKind::Line5 => 3,
        PieceKind::Square3 => 4,
        PieceKind::I => 5,
        PieceKind::O => 6,
        PieceKind::T => 7,
        PieceKind::S => 8,
        PieceKind::Z => 9,
        PieceKind::J => 10,
        PieceKind::L => 11,
    };
    &CATALOG[idx]
}

/// Get the shape for a piece kind
pub fn shape_of(kind: PieceKind) -> Shape {
    piece_def(kind).shape
}

/// Get the color token for a piece kind
pub fn color_of(kind: PieceKind) -> Color {
    piece_def(kind).color
}

/// Uniform random piece selection with replacement.
///
/// Every draw is independent and every catalog entry is equally likely,
/// regardless of its size.
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    rng: SimpleRng,
}

impl PieceRandomizer {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw one piece kind
    pub fn draw(&mut self) -> PieceKind {
        let idx = self.rng.next_range(CATALOG.len() as u32) as usize;
        CATALOG[idx].kind
    }

    /// Current RNG state (for restarting with a reproducible sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}
