//! `FrameBuf`: accumulates a whole frame of ANSI sequences, flushed in one
//! write so the terminal never shows a half-painted net.

use super::theme::Rgb;
use std::io::Write;

/// Pre-allocated byte buffer for building one display frame.
pub struct FrameBuf {
    data: Vec<u8>,
}

impl FrameBuf {
    /// Create a buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// A buffer sized for the full net plus padding (16 KiB).
    pub fn new() -> Self {
        Self::with_capacity(16 * 1024)
    }

    /// Discard the frame under construction.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The bytes accumulated so far.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Append literal text.
    #[inline]
    pub fn text(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Move the cursor to the top-left corner.
    #[inline]
    pub fn cursor_home(&mut self) {
        self.data.extend_from_slice(b"\x1b[H");
    }

    /// Advance to the next display line without ever scrolling: one row
    /// down, then hard left. Overrunning the last line stays put, which is
    /// what keeps the frame flicker-free.
    #[inline]
    pub fn next_line(&mut self) {
        self.data.extend_from_slice(b"\x1b[1B\x1b[1000D");
    }

    /// Move the cursor `n` columns to the left.
    #[inline]
    pub fn cursor_left(&mut self, n: u16) {
        write!(self.data, "\x1b[{n}D").unwrap();
    }

    /// Set the foreground color (24-bit).
    #[inline]
    pub fn set_fg(&mut self, color: Rgb) {
        write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b).unwrap();
    }

    /// Set the background color (24-bit).
    #[inline]
    pub fn set_bg(&mut self, color: Rgb) {
        write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b).unwrap();
    }

    /// Reset all display attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Clear the entire screen.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
    }

    /// Flush the frame to `writer` in a single write.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for FrameBuf {
    fn default() -> Self {
        Self::new()
    }
}
