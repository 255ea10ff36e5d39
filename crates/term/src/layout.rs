//! Screen geometry: where the board, tray and side panel sit, and what a
//! terminal coordinate points at.
//!
//! Pure arithmetic, no I/O. The same layout is used to draw a frame and to
//! resolve mouse positions, so a click always lands on what was drawn there.

use crate::types::{PointerTarget, BOARD_HEIGHT, BOARD_WIDTH, MAX_SHAPE_EDGE, TRAY_SIZE};

/// Tray rows: one label row plus the piece preview rows.
pub const TRAY_ROWS: u16 = 5;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Board cell width in terminal columns (cells are one row tall).
    pub cell_w: u16,
    /// Top-left corner of the board border.
    pub frame_x: u16,
    pub frame_y: u16,
    /// Top-left corner of the tray (its label row).
    pub tray_x: u16,
    pub tray_y: u16,
    /// Width of one tray slot including its one-column margins.
    pub slot_w: u16,
    pub panel_x: u16,
}

impl BoardLayout {
    pub fn new(viewport: Viewport, cell_w: u16, anchor_y: AnchorY) -> Self {
        let cell_w = cell_w.max(1);
        let frame_w = (BOARD_WIDTH as u16) * cell_w + 2;
        let frame_h = (BOARD_HEIGHT as u16) + 2;
        let slot_w = (MAX_SHAPE_EDGE as u16) * cell_w + 2;
        let tray_w = slot_w * TRAY_SIZE as u16;

        let content_w = frame_w.max(tray_w);
        let content_h = frame_h + TRAY_ROWS;

        let content_x = viewport.width.saturating_sub(content_w) / 2;
        let frame_y = match anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(content_h) / 2,
            AnchorY::Top => 0,
        };

        Self {
            cell_w,
            frame_x: content_x + (content_w - frame_w) / 2,
            frame_y,
            tray_x: content_x + (content_w - tray_w) / 2,
            tray_y: frame_y + frame_h,
            slot_w,
            panel_x: content_x.saturating_add(content_w).saturating_add(2),
        }
    }

    pub fn frame_w(&self) -> u16 {
        (BOARD_WIDTH as u16) * self.cell_w + 2
    }

    pub fn frame_h(&self) -> u16 {
        (BOARD_HEIGHT as u16) + 2
    }

    /// Terminal position of the left column of board cell (row, col)
    pub fn cell_origin(&self, row: u16, col: u16) -> (u16, u16) {
        (self.frame_x + 1 + col * self.cell_w, self.frame_y + 1 + row)
    }

    /// Terminal position of matrix cell (0, 0) of the piece shown in `slot`
    pub fn slot_piece_origin(&self, slot: usize) -> (u16, u16) {
        (self.tray_x + (slot as u16) * self.slot_w + 1, self.tray_y + 1)
    }

    /// What the terminal cell (x, y) points at.
    ///
    /// Anywhere on the board frame resolves to a board cell by floor division,
    /// so the border maps to row/col -1 or one past the last index.
    pub fn resolve(&self, x: u16, y: u16) -> PointerTarget {
        let (x, y) = (x as i32, y as i32);
        let cw = self.cell_w as i32;

        let tx = self.tray_x as i32;
        let ty = self.tray_y as i32;
        let tray_w = (self.slot_w as i32) * TRAY_SIZE as i32;
        if (ty..ty + TRAY_ROWS as i32).contains(&y) && (tx..tx + tray_w).contains(&x) {
            let slot = ((x - tx) / self.slot_w as i32) as usize;
            let (px, py) = self.slot_piece_origin(slot);
            let max = MAX_SHAPE_EDGE as i32 - 1;
            let dr = (y - py as i32).clamp(0, max);
            let dc = (x - px as i32).div_euclid(cw).clamp(0, max);
            return PointerTarget::Slot {
                slot,
                dr: dr as i8,
                dc: dc as i8,
            };
        }

        let fx = self.frame_x as i32;
        let fy = self.frame_y as i32;
        if (fx..fx + self.frame_w() as i32).contains(&x)
            && (fy..fy + self.frame_h() as i32).contains(&y)
        {
            let row = y - (fy + 1);
            let col = (x - (fx + 1)).div_euclid(cw);
            return PointerTarget::Board {
                row: row as i8,
                col: col as i8,
            };
        }

        PointerTarget::Outside
    }
}
