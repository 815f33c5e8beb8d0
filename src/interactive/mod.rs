//! Interactive TUI interface
//!
//! Play screen built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{Alert, App, InputMode, Message, MessageStyle, run_tui};
pub use rendering::ui;
