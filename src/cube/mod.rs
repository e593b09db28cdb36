//! The cube core: facelet grid, move cycle tables, and the move engine.

pub mod cycles;
pub mod grid;
pub mod moves;

pub use cycles::{Coord, Cycle};
pub use grid::{Facelet, Grid, COLS, LIVE_CELLS, ROWS};
pub use moves::{Engine, FrameSink, Move, NullSink, SHUFFLE_LEN};
