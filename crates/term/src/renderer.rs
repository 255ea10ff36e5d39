//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize) is a full redraw; after that
//! only runs of changed cells are written. Mouse capture is switched on for the
//! lifetime of the session so pieces can be dragged.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    entered: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
            entered: false,
        }
    }

    /// Raw mode, alternate screen, hidden cursor and mouse capture.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Undo [`TerminalRenderer::enter`]. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Next draw clears and repaints everything (after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush `fb` and keep it as the baseline for the next diff.
    ///
    /// `fb` comes back holding the previous frame's buffer so the caller can
    /// render into it again without allocating.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            None => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        // Last-chance restore if the caller bailed out with `?`.
        let _ = self.exit();
    }
}

/// Encode a full-frame redraw into `out`.
///
/// Clears the screen and paints every row as one run.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut painter = Painter::default();
    for y in 0..fb.height() {
        painter.paint_run(out, fb, Run { x: 0, y, len: fb.width() })?;
    }
    painter.finish(out)
}

/// Encode only the cells of `next` that differ from `prev`.
///
/// A size mismatch repaints every row of `next`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut painter = Painter::default();
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            painter.paint_run(out, next, Run { x: 0, y, len: next.width() })?;
        }
    } else {
        for run in changed_runs(prev, next) {
            painter.paint_run(out, next, run)?;
        }
    }
    painter.finish(out)
}

/// Horizontal span of cells on one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    x: u16,
    y: u16,
    len: u16,
}

/// Emits cells, switching SGR state only when the style changes.
#[derive(Default)]
struct Painter {
    style: Option<CellStyle>,
}

impl Painter {
    fn paint_run(&mut self, out: &mut Vec<u8>, fb: &FrameBuffer, run: Run) -> Result<()> {
        if run.len == 0 {
            return Ok(());
        }
        out.queue(cursor::MoveTo(run.x, run.y))?;
        for x in run.x..run.x + run.len {
            let cell = fb.get(x, run.y).unwrap_or_default();
            self.paint(out, cell)?;
        }
        Ok(())
    }

    fn paint(&mut self, out: &mut Vec<u8>, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            let style = cell.style;
            out.queue(SetAttribute(Attribute::Reset))?;
            out.queue(SetForegroundColor(style.fg.into()))?;
            out.queue(SetBackgroundColor(style.bg.into()))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.style = Some(style);
        }
        out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        if self.style.is_some() {
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb { r: c.r, g: c.g, b: c.b }
    }
}

/// Maximal runs of differing cells, row by row. Both frames must be the same size.
fn changed_runs<'a>(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> impl Iterator<Item = Run> + 'a {
    let w = next.width();
    (0..next.height()).flat_map(move |y| {
        let differs = move |x: u16| prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        std::iter::from_fn(move || {
            while x < w && !differs(x) {
                x += 1;
            }
            if x == w {
                return None;
            }
            let start = x;
            while x < w && differs(x) {
                x += 1;
            }
            Some(Run { x: start, y, len: x - start })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(style: CellStyle) -> Cell {
        Cell { ch: '█', style }
    }

    #[test]
    fn changed_runs_split_on_unchanged_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(8, 3);
        let mut b = a.clone();
        b.set(0, 0, block(style));
        b.set(1, 0, block(style));
        b.set(4, 0, block(style));
        b.set(7, 2, block(style));

        let runs: Vec<_> = changed_runs(&a, &b).map(|r| (r.x, r.y, r.len)).collect();
        assert_eq!(runs, vec![(0, 0, 2), (4, 0, 1), (7, 2, 1)]);
    }

    #[test]
    fn unchanged_frame_writes_nothing() {
        let a = FrameBuffer::new(5, 5);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn diff_emits_only_the_changed_glyph() {
        let a = FrameBuffer::new(5, 2);
        let mut b = a.clone();
        b.set(2, 1, block(CellStyle::fg_on(Rgb::new(255, 0, 0), Rgb::new(0, 0, 0))));

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert_eq!(text.matches('█').count(), 1);
        assert!(text.contains("\x1b[2;3H"));
        assert!(text.contains("38;2;255;0;0"));
    }

    #[test]
    fn resized_frame_repaints_every_cell() {
        let a = FrameBuffer::new(2, 2);
        let mut b = FrameBuffer::new(3, 2);
        for y in 0..2 {
            for x in 0..3 {
                b.set(x, y, block(CellStyle::default()));
            }
        }
        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        assert_eq!(String::from_utf8_lossy(&out).matches('█').count(), 6);
    }

    #[test]
    fn full_redraw_clears_first() {
        let fb = FrameBuffer::new(3, 1);
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        assert!(String::from_utf8_lossy(&out).starts_with("\x1b[2J"));
    }
}
