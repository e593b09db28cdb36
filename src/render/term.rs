//! Terminal renderer: paints the unfolded net as colored block glyphs,
//! centered in the terminal, with the key-hint overlay and HUD line.
//!
//! Each facelet is drawn as three stacked glyph runs (`▇▇▇▇▇ `, `█████ `,
//! `▀▀▀▀▀ `), giving roughly square tiles on common fonts. The whole frame
//! is composed into a [`FrameBuf`] and flushed in one write.

use super::output::FrameBuf;
use super::{Hud, Renderer};
use crate::cube::{Grid, COLS, ROWS};
use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    self, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::execute;
use std::io::{self, Stdout, Write};
use unicode_width::UnicodeWidthStr;

/// Display width of the composed net, overlay margins included.
const NET_WIDTH: usize = 75;
/// Display height of the composed net (header + 27 tile rows + footer).
const NET_HEIGHT: usize = 30;

/// Glyph run per facelet, one per sub-row.
const TILE_GLYPHS: [&str; 3] = ["▇▇▇▇▇ ", "█████ ", "▀▀▀▀▀ "];

const HEADER: &str = "                     y/z  ▲ w ▲   o";

/// Left label, number of leading tiles it replaces, and right label for one
/// display line of the net. Menu entries are 14 columns wide and replace
/// the 2-column margin plus two 6-column tiles, all of which sit on blank
/// cells of the top and bottom net rows.
const fn side_labels(row: usize, sub: usize) -> (&'static str, usize, &'static str) {
    match (row, sub) {
        (0, 0) => ("  Front   - n ", 2, "  "),
        (0, 1) => ("  Front'  - m ", 2, "  "),
        (0, 2) => ("  Back    - 7 ", 2, "  "),
        (1, 0) => ("  Back'   - 8 ", 2, "  "),
        (1, 1) => ("  Theme   - t ", 2, "  "),
        (1, 2) => ("  Slower  - + ", 2, "  "),
        (2, 0) => ("  Faster  - - ", 2, "  "),
        (2, 1) => ("  Shuffle - N ", 2, "  "),
        (2, 2) => ("  Undo    - x ", 2, "  "),
        (3, 0) => ("u ", 0, " i"),
        (4, 0) => ("a ", 0, " d"),
        (4, 1) => ("◀◀", 0, "▶▶"),
        (5, 1) => ("j ", 0, " k"),
        (6, 0) => ("  Redraw  - ^L", 2, "  "),
        (6, 1) => ("  Quit    - Q ", 2, "  "),
        _ => ("  ", 0, "  "),
    }
}

/// Append spaces until `s` occupies `width` display columns.
fn pad_to(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    let mut out = String::from(s);
    for _ in used..width {
        out.push(' ');
    }
    out
}

/// Renders to any writer; the binary uses stdout, tests use a `Vec<u8>`.
pub struct TermRenderer<W: Write> {
    out: W,
    buf: FrameBuf,
    width: u16,
    height: u16,
}

impl TermRenderer<Stdout> {
    /// A renderer on stdout, sized from the current terminal.
    pub fn stdout() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self::with_size(io::stdout(), width, height))
    }
}

impl<W: Write> TermRenderer<W> {
    /// A renderer with an explicit surface size.
    pub fn with_size(out: W, width: u16, height: u16) -> Self {
        Self {
            out,
            buf: FrameBuf::new(),
            width,
            height,
        }
    }

    fn compose(&mut self, grid: &Grid, hud: &Hud<'_>) {
        let theme = hud.theme;
        let width = self.width as usize;
        let height = self.height as usize;
        let vpad = height.saturating_sub(NET_HEIGHT) / 2;
        let hpad = " ".repeat(width.saturating_sub(NET_WIDTH).div_ceil(2));
        let blank_line = " ".repeat(width);

        self.buf.cursor_home();
        self.buf.set_bg(theme.background);
        for _ in 0..vpad {
            self.buf.text(&blank_line);
            self.buf.next_line();
        }

        self.buf.set_fg(theme.overlay);
        self.buf.text(&hpad);
        self.buf.text(&pad_to(HEADER, NET_WIDTH));
        self.buf.text(&hpad);
        self.buf.next_line();

        for row in 0..ROWS {
            for sub in 0..3 {
                let (left, skip, right) = side_labels(row, sub);
                self.buf.set_fg(theme.overlay);
                self.buf.text(&hpad);
                self.buf.text(left);
                for col in skip..COLS {
                    self.buf.set_fg(theme.color(grid.get(row, col)));
                    self.buf.text(TILE_GLYPHS[sub]);
                }
                // The last tile ends in a space; step back onto it so the
                // right label lands flush with the net edge.
                self.buf.cursor_left(1);
                self.buf.set_fg(theme.overlay);
                self.buf.text(right);
                self.buf.text(&hpad);
                self.buf.next_line();
            }
        }

        let anim = if hud.delay.is_zero() {
            "Anim off".to_string()
        } else {
            format!("Anim: {:.2}s", hud.delay.as_secs_f64())
        };
        let footer = format!(
            "                      h   ▼ s ▼   l      {:4} Steps   {:<12} [{}]",
            hud.steps, anim, theme.name
        );
        self.buf.set_fg(theme.overlay);
        self.buf.text(&hpad);
        self.buf.text(&pad_to(&footer, NET_WIDTH));
        self.buf.text(&hpad);
        for _ in 0..=vpad {
            self.buf.next_line();
            self.buf.text(&blank_line);
        }
    }
}

impl<W: Write> Renderer for TermRenderer<W> {
    fn draw(&mut self, grid: &Grid, hud: &Hud<'_>) -> io::Result<()> {
        self.buf.clear();
        self.compose(grid, hud);
        self.buf.flush_to(&mut self.out)
    }

    fn refresh(&mut self, grid: &Grid, hud: &Hud<'_>) -> io::Result<()> {
        self.buf.clear();
        self.buf.set_bg(hud.theme.background);
        self.buf.clear_screen();
        self.compose(grid, hud);
        self.buf.flush_to(&mut self.out)
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }
}

/// RAII terminal session: raw mode, alternate screen, hidden cursor, line
/// wrap off. Everything is restored on drop, even on an early return.
pub struct TermGuard {
    _private: (),
}

impl TermGuard {
    /// Enter raw mode and the alternate screen.
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, DisableLineWrap, Hide)?;
        Ok(Self { _private: () })
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, EnableLineWrap, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
