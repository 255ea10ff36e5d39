//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and left-button mouse events into
//! [`PointerEvent`]s in terminal cell coordinates. Turning those coordinates
//! into board cells is the terminal layout's job.

pub mod map;

pub use block_blast_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit, PointerEvent};
