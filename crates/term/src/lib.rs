//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and renders into a simple framebuffer that is diffed and flushed to
//! the terminal.
//!
//! - [`layout`]: board/tray/panel geometry and pointer resolution
//! - [`game_view`]: draws a snapshot plus drag state into a framebuffer
//! - [`renderer`]: raw-mode terminal session and diff flushing

pub mod fb;
pub mod game_view;
pub mod layout;
pub mod renderer;

pub use block_blast_core as core;
pub use block_blast_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{DragView, GameView, HoverView};
pub use layout::{AnchorY, BoardLayout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
