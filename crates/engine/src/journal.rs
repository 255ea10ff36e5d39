//! Line-delimited JSON event journal.
//!
//! One JSON object per line, each tagged with `"type"` and a monotonically
//! increasing `seq`. Nothing in the game reads the journal back.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::GameState;
use crate::drag::ControlOutcome;

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalRecord<'a> {
    Placement {
        seq: u64,
        ts_ms: u64,
        episode_id: u32,
        slot: usize,
        piece: &'a str,
        row: i8,
        col: i8,
        placed_points: u32,
        cleared_rows: &'a [u8],
        cleared_cols: &'a [u8],
        cells_cleared: u32,
        bonus: u32,
        score: u32,
        lines: u32,
        tray_regenerated: bool,
    },
    Rejected {
        seq: u64,
        ts_ms: u64,
        episode_id: u32,
        slot: usize,
        row: i8,
        col: i8,
        code: &'static str,
        message: String,
    },
    Restart {
        seq: u64,
        ts_ms: u64,
        episode_id: u32,
        seed: u32,
    },
    GameOver {
        seq: u64,
        ts_ms: u64,
        episode_id: u32,
        score: u32,
        lines: u32,
        placements: u32,
    },
}

pub struct Journal<W: Write> {
    out: W,
    seq: u64,
    buf: Vec<u8>,
}

impl Journal<BufWriter<std::fs::File>> {
    /// Open (append) the journal at `path`; `None` means journaling is off
    pub fn open(path: Option<&str>) -> Result<Option<Self>> {
        let Some(path) = path else {
            return Ok(None);
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open journal {path}"))?;
        Ok(Some(Self::from_writer(BufWriter::new(file))))
    }
}

impl<W: Write> Journal<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out,
            seq: 0,
            buf: Vec::with_capacity(512),
        }
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Log whatever `outcome` did; `state` is the session after it
    pub fn record(&mut self, state: &GameState, outcome: &ControlOutcome) -> Result<()> {
        let episode_id = state.episode_id();
        match outcome {
            ControlOutcome::Idle => Ok(()),
            ControlOutcome::Placed(out) => {
                let seq = self.next_seq();
                self.write(&JournalRecord::Placement {
                    seq,
                    ts_ms: now_ms(),
                    episode_id,
                    slot: out.placed.slot,
                    piece: out.placed.kind.as_str(),
                    row: out.placed.row,
                    col: out.placed.col,
                    placed_points: out.points.placement,
                    cleared_rows: out.cleared.rows.as_slice(),
                    cleared_cols: out.cleared.cols.as_slice(),
                    cells_cleared: out.cleared.cells_cleared,
                    bonus: out.points.bonus,
                    score: out.score,
                    lines: out.lines,
                    tray_regenerated: out.tray_regenerated,
                })?;
                if out.game_over {
                    let seq = self.next_seq();
                    self.write(&JournalRecord::GameOver {
                        seq,
                        ts_ms: now_ms(),
                        episode_id,
                        score: state.score(),
                        lines: state.lines(),
                        placements: state.placements(),
                    })?;
                }
                Ok(())
            }
            ControlOutcome::Rejected { attempt, error } => {
                let seq = self.next_seq();
                self.write(&JournalRecord::Rejected {
                    seq,
                    ts_ms: now_ms(),
                    episode_id,
                    slot: attempt.slot,
                    row: attempt.row,
                    col: attempt.col,
                    code: error.code(),
                    message: error.to_string(),
                })
            }
            ControlOutcome::Restarted => {
                let seq = self.next_seq();
                self.write(&JournalRecord::Restart {
                    seq,
                    ts_ms: now_ms(),
                    episode_id,
                    seed: state.seed(),
                })
            }
        }
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn write(&mut self, rec: &JournalRecord<'_>) -> Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, rec)?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
