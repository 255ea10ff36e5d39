//! Terminal Block Blast runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and a custom framebuffer-based
//! renderer. Configuration comes from the environment (see `GameConfig`).

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use block_blast::core::GameState;
use block_blast::engine::{ControlOutcome, DragController, GameConfig, Journal};
use block_blast::input::{handle_key_event, handle_mouse_event, should_quit, PointerEvent};
use block_blast::term::{
    BoardLayout, DragView, FrameBuffer, GameView, HoverView, TerminalRenderer, Viewport,
};

/// Redraw at least this often even without input (resize, focus changes).
const IDLE_REDRAW: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let journal = match Journal::open(config.log_path.as_deref()) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("[Journal] disabled: {e:#}");
            None
        }
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut session = Session {
        state: GameState::new_game(config.seed),
        drag: DragController::new(),
        view: GameView::new(config.cell_width),
        journal,
        journal_error: None,
    };
    let result = session.run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(err) = session.journal_error {
        eprintln!("[Journal] stopped after write error: {err:#}");
    }
    result
}

struct Session<W: std::io::Write> {
    state: GameState,
    drag: DragController,
    view: GameView,
    journal: Option<Journal<W>>,
    journal_error: Option<anyhow::Error>,
}

impl<W: std::io::Write> Session<W> {
    fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        let mut fb = FrameBuffer::new(0, 0);

        loop {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let viewport = Viewport::new(w, h);
            let layout = self.view.layout(viewport);
            let snap = self.state.snapshot();
            self.view
                .render_into(&snap, &self.drag_view(), viewport, &mut fb);
            term.draw_swap(&mut fb)?;

            if !event::poll(IDLE_REDRAW)? {
                continue;
            }

            let outcome = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(action) => self.drag.apply(&mut self.state, action),
                        None => ControlOutcome::Idle,
                    }
                }
                Event::Mouse(mouse) => match handle_mouse_event(mouse) {
                    Some(pointer) => self.pointer(pointer, layout),
                    None => ControlOutcome::Idle,
                },
                Event::Resize(..) => {
                    term.invalidate();
                    ControlOutcome::Idle
                }
                _ => ControlOutcome::Idle,
            };

            self.log(&outcome);
        }
    }

    fn pointer(&mut self, pointer: PointerEvent, layout: BoardLayout) -> ControlOutcome {
        match pointer {
            PointerEvent::Press { x, y } => {
                self.drag.press(&self.state, layout.resolve(x, y));
                ControlOutcome::Idle
            }
            PointerEvent::Drag { x, y } | PointerEvent::Move { x, y } => {
                self.drag.pointer_moved(layout.resolve(x, y));
                ControlOutcome::Idle
            }
            PointerEvent::Release { x, y } => {
                self.drag.release(&mut self.state, layout.resolve(x, y))
            }
        }
    }

    fn drag_view(&self) -> DragView {
        let hover = self.drag.preview(&self.state);
        DragView {
            selected: self.drag.selected(),
            hover: hover.map(|h| HoverView {
                kind: h.kind,
                row: h.row,
                col: h.col,
                fits: h.fits,
            }),
            cursor: hover.map(|_| self.drag.cursor()),
        }
    }

    fn log(&mut self, outcome: &ControlOutcome) {
        let Some(journal) = self.journal.as_mut() else {
            return;
        };
        if let Err(e) = journal.record(&self.state, outcome) {
            // No stderr while in raw mode; reported after exit.
            self.journal = None;
            self.journal_error = Some(e);
        }
    }
}
