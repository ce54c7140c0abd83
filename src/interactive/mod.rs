//! Interactive TUI interface
//!
//! A thin shell over `GameSession`: it forwards key presses and re-renders from the
//! session after every event.

mod app;
mod rendering;

pub use app::{App, run_tui};
