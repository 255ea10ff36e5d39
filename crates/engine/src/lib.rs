//! Engine glue between input and the core session.
//!
//! - [`drag`]: selection, grab offset and hover tracking for pointer and keyboard play
//! - [`config`]: environment configuration
//! - [`journal`]: optional JSONL event journal

pub mod config;
pub mod drag;
pub mod journal;

pub use block_blast_core as core;
pub use block_blast_types as types;

pub use config::GameConfig;
pub use drag::{Attempt, ControlOutcome, DragController, Hover};
pub use journal::{Journal, JournalRecord};
