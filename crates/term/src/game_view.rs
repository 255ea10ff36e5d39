//! GameView: maps a `core::GameSnapshot` plus the drag state into a terminal
//! framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{piece_def, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::{AnchorY, BoardLayout, Viewport};
use crate::types::{Cell as BoardCell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, TRAY_SIZE};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const USED_GREY: Rgb = Rgb::new(70, 70, 80);

/// Ghost preview of the piece in hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverView {
    pub kind: PieceKind,
    pub row: i8,
    pub col: i8,
    pub fits: bool,
}

/// Drag/selection state the view needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragView {
    pub selected: Option<usize>,
    pub hover: Option<HoverView>,
    /// Board cell under the pointer or keyboard cursor.
    pub cursor: Option<(i8, i8)>,
}

/// A lightweight terminal renderer for the Block Blast board and tray.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, 4),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        BoardLayout::new(viewport, self.cell_w, self.anchor_y)
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        drag: &DragView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let layout = self.layout(viewport);
        let board_style = CellStyle::fg_on(Rgb::new(80, 80, 90), BOARD_BG);
        let border = CellStyle::fg_on(Rgb::new(200, 200, 200), SCREEN_BG);

        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            (BOARD_WIDTH as u16) * self.cell_w,
            BOARD_HEIGHT as u16,
            ' ',
            board_style,
        );
        draw_border(
            fb,
            layout.frame_x,
            layout.frame_y,
            layout.frame_w(),
            layout.frame_h(),
            border,
        );

        for row in 0..BOARD_HEIGHT as u16 {
            for col in 0..BOARD_WIDTH as u16 {
                match snap.board[row as usize][col as usize] {
                    BoardCell::Occupied(color) => {
                        let style = CellStyle {
                            bold: true,
                            ..CellStyle::fg_on(color.into(), BOARD_BG)
                        };
                        self.fill_cell(fb, &layout, row, col, '█', style);
                    }
                    BoardCell::Empty => {
                        let style = CellStyle {
                            dim: true,
                            ..CellStyle::fg_on(Rgb::new(90, 90, 100), BOARD_BG)
                        };
                        self.fill_cell(fb, &layout, row, col, '·', style);
                    }
                }
            }
        }

        if !snap.game_over {
            match drag.hover {
                Some(hover) if hover.fits => self.draw_ghost(fb, &layout, hover),
                _ => {
                    if let Some((row, col)) = drag.cursor {
                        self.draw_cursor(fb, &layout, row, col);
                    }
                }
            }
        }

        self.draw_tray(fb, &layout, snap, drag.selected);
        self.draw_side_panel(fb, &layout, snap, viewport);

        if snap.game_over {
            self.draw_game_over(fb, &layout, snap);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, drag: &DragView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, drag, viewport, &mut fb);
        fb
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        row: u16,
        col: u16,
        ch: char,
        style: CellStyle,
    ) {
        let (x, y) = layout.cell_origin(row, col);
        fb.fill_rect(x, y, self.cell_w, 1, ch, style);
    }

    fn draw_ghost(&self, fb: &mut FrameBuffer, layout: &BoardLayout, hover: HoverView) {
        let def = piece_def(hover.kind);
        let style = CellStyle::fg_on(Rgb::from(def.color).mix(BOARD_BG), BOARD_BG);
        for (dr, dc) in def.shape.cells() {
            let row = hover.row + dr;
            let col = hover.col + dc;
            if (0..BOARD_HEIGHT as i8).contains(&row) && (0..BOARD_WIDTH as i8).contains(&col) {
                self.fill_cell(fb, layout, row as u16, col as u16, '▒', style);
            }
        }
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, layout: &BoardLayout, row: i8, col: i8) {
        if !(0..BOARD_HEIGHT as i8).contains(&row) || !(0..BOARD_WIDTH as i8).contains(&col) {
            return;
        }
        let style = CellStyle {
            bold: true,
            ..CellStyle::fg_on(Rgb::new(255, 255, 255), BOARD_BG)
        };
        let (x, y) = layout.cell_origin(row as u16, col as u16);
        if self.cell_w >= 2 {
            fb.put_char(x, y, '[', style);
            fb.put_char(x + self.cell_w - 1, y, ']', style);
        } else {
            fb.put_char(x, y, '+', style);
        }
    }

    fn draw_tray(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        snap: &GameSnapshot,
        selected: Option<usize>,
    ) {
        for slot in 0..TRAY_SIZE {
            let entry = snap.tray[slot];
            let is_selected = selected == Some(slot) && !entry.used;
            let (px, py) = layout.slot_piece_origin(slot);

            let label = CellStyle {
                bold: is_selected,
                dim: entry.used,
                ..CellStyle::fg_on(
                    if is_selected {
                        Rgb::new(255, 220, 80)
                    } else {
                        Rgb::new(200, 200, 200)
                    },
                    SCREEN_BG,
                )
            };
            let x = fb.put_str(px, layout.tray_y, if is_selected { "▶" } else { " " }, label);
            fb.put_u32(x, layout.tray_y, slot as u32 + 1, label);

            let def = piece_def(entry.kind);
            let (ch, style) = if entry.used {
                ('░', CellStyle { dim: true, ..CellStyle::fg_on(USED_GREY, SCREEN_BG) })
            } else {
                ('█', CellStyle { bold: is_selected, ..CellStyle::fg_on(def.color.into(), SCREEN_BG) })
            };
            for (dr, dc) in def.shape.cells() {
                let x = px + (dc as u16) * self.cell_w;
                let y = py + dr as u16;
                fb.fill_rect(x, y, self.cell_w, 1, ch, style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        snap: &GameSnapshot,
        viewport: Viewport,
    ) {
        let panel_x = layout.panel_x;
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::fg_on(Rgb::new(220, 220, 220), SCREEN_BG)
        };
        let value = CellStyle::fg_on(Rgb::new(200, 200, 200), SCREEN_BG);
        let help = CellStyle { dim: true, ..value };

        let mut y = layout.frame_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PLACED", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.placements, value);
        y = y.saturating_add(2);

        for line in [
            "1-3/tab pick",
            "arrows move",
            "enter drop",
            "esc cancel",
            "r restart",
            "q quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, layout: &BoardLayout, snap: &GameSnapshot) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::fg_on(Rgb::new(255, 255, 255), SCREEN_BG)
        };
        let mid_y = layout.frame_y.saturating_add(layout.frame_h() / 2).saturating_sub(2);
        let center = |w: u16| layout.frame_x + layout.frame_w().saturating_sub(w) / 2;

        fb.put_str(center(9), mid_y, "GAME OVER", style);

        let score_w = 6 + digit_count(snap.score);
        let x = fb.put_str(center(score_w), mid_y + 2, "SCORE ", style);
        fb.put_u32(x, mid_y + 2, snap.score, style);

        let lines_w = 6 + digit_count(snap.lines);
        let x = fb.put_str(center(lines_w), mid_y + 3, "LINES ", style);
        fb.put_u32(x, mid_y + 3, snap.lines, style);

        fb.put_str(center(9), mid_y + 5, "r restart", CellStyle { bold: false, ..style });
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
