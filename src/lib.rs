//! # termcube
//!
//! An animated, interactive Rubik's cube for your terminal.
//!
//! The cube is displayed as a colored unfolded net; single-key commands
//! rotate faces, slices, or the whole cube, and every move is animated as
//! three incremental redraws driven by a permutation-cycle engine.
//!
//! ## Core Concepts
//!
//! - **Facelet grid**: a 9×12 net with exactly 54 live cells, mutated only
//!   through cyclic shifts over static coordinate tables
//! - **Three-step moves**: each turn advances a 12-cell band and an 8-cell
//!   face ring at different per-step rates, yielding smooth animation
//! - **Single-threaded dispatch**: one loop serializes key, resize, and
//!   render events; an input actor thread feeds it over a channel
//! - **Paced redraws**: a scheduler state machine sleeps, forces, skips, or
//!   batches frames depending on the configured delay and bulk mode
//!
//! ## Example
//!
//! ```rust
//! use termcube::cube::{Engine, Move, NullSink};
//!
//! let mut engine = Engine::new();
//! engine.apply(Move::Up, 1, &mut NullSink);
//! assert_eq!(engine.steps(), 1);
//! engine.undo(&mut NullSink);
//! assert!(engine.grid().is_solved());
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod anim;
pub mod app;
pub mod cube;
pub mod input;
pub mod render;

// Re-exports for convenience
pub use anim::{Clock, Scheduler, SystemClock};
pub use app::{App, AppConfig, Command};
pub use cube::{Cycle, Engine, Facelet, FrameSink, Grid, Move};
pub use input::{ChannelSource, InputActor, InputEvent, InputSource, KeyCode};
pub use render::{Hud, Renderer, TermGuard, TermRenderer, Theme};
