//! Rendering boundary: the abstract renderer the engine draws through,
//! plus the terminal implementation.

pub mod output;
pub mod term;
pub mod theme;

pub use output::FrameBuf;
pub use term::{TermGuard, TermRenderer};
pub use theme::{cycle_theme, Rgb, Theme, THEMES};

use crate::cube::Grid;
use std::io;
use std::time::Duration;

/// Snapshot of the session values shown alongside the net.
#[derive(Debug, Clone, Copy)]
pub struct Hud<'a> {
    /// Counted moves so far.
    pub steps: i32,
    /// Current animation delay (zero = animation off).
    pub delay: Duration,
    /// Active color theme.
    pub theme: &'a Theme,
}

/// Paints the current grid plus the instructional overlay.
///
/// Output errors are not recoverable by the core; the dispatch loop
/// propagates them and ends the session.
pub trait Renderer {
    /// Paint the full net and HUD.
    fn draw(&mut self, grid: &Grid, hud: &Hud<'_>) -> io::Result<()>;

    /// Re-initialize the display surface (clear everything), then paint.
    /// Used by the refresh key; never touches cube state.
    fn refresh(&mut self, grid: &Grid, hud: &Hud<'_>) -> io::Result<()>;

    /// The terminal was resized; adopt the new geometry.
    fn resize(&mut self, width: u16, height: u16);
}
