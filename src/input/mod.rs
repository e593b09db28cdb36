//! Input events and the abstract input source the dispatch loop polls.
//!
//! Key presses and terminal resizes are multiplexed onto one event stream;
//! a dedicated actor thread ([`InputActor`]) feeds that stream from
//! crossterm, and [`ChannelSource`] is the receiving end the dispatch loop
//! blocks on.

mod actor;

pub use actor::InputActor;

use crossbeam_channel::Receiver;

/// The keys the dispatch table distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character (case-sensitive).
    Char(char),
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Escape key.
    Esc,
}

/// One event from the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    Key {
        /// The key.
        code: KeyCode,
        /// Whether Control was held.
        ctrl: bool,
    },
    /// The terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
    /// End of input: the source can deliver no further events.
    Closed,
}

impl InputEvent {
    /// A plain (unmodified) key press.
    pub const fn key(code: KeyCode) -> Self {
        Self::Key { code, ctrl: false }
    }

    /// A plain character press.
    pub const fn ch(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }
}

/// Where the dispatch loop gets its next event.
///
/// `next_event` suspends the caller until an event is available. After
/// returning [`InputEvent::Closed`] the source must keep returning it.
pub trait InputSource {
    /// Block until the next event arrives.
    fn next_event(&mut self) -> InputEvent;
}

/// An input source backed by the actor's channel.
pub struct ChannelSource {
    rx: Receiver<InputEvent>,
}

impl ChannelSource {
    /// Wrap the receiving end of an input actor's channel.
    pub const fn new(rx: Receiver<InputEvent>) -> Self {
        Self { rx }
    }
}

impl InputSource for ChannelSource {
    fn next_event(&mut self) -> InputEvent {
        // A disconnected channel means the actor is gone: end of input.
        self.rx.recv().unwrap_or(InputEvent::Closed)
    }
}
