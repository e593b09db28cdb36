//! The facelet grid: a 9×12 unfolded cube net.
//!
//! The net holds the top face in rows 0–2, the four side faces in rows 3–5
//! (Orange, Green, Red, Blue, three columns each), and the bottom face in
//! rows 6–8. Cells outside the faces are permanently [`Facelet::Blank`] and
//! are never targeted by any move cycle.
//!
//! Cyclic shifts read old values while writing new ones into the same
//! structure, so the grid keeps a scratch copy and swaps buffers on every
//! shift instead of allocating.

use super::cycles::Cycle;

/// Number of rows in the net.
pub const ROWS: usize = 9;
/// Number of columns in the net.
pub const COLS: usize = 12;
/// Number of live (move-reachable) cells: 6 faces × 9 facelets.
pub const LIVE_CELLS: usize = 54;

/// One colored unit cell of the cube's surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Facelet {
    /// Top face color.
    White,
    /// Front face color.
    Green,
    /// Left face color.
    Orange,
    /// Bottom face color.
    Yellow,
    /// Right face color.
    Red,
    /// Back face color.
    Blue,
    /// Background cell outside the net; never moved.
    Blank,
}

type Cells = [[Facelet; COLS]; ROWS];

const fn solved_cells() -> Cells {
    let mut cells = [[Facelet::Blank; COLS]; ROWS];
    let side = [Facelet::Orange, Facelet::Green, Facelet::Red, Facelet::Blue];
    let mut row = 0;
    while row < ROWS {
        let mut col = 0;
        while col < COLS {
            if row < 3 || row >= 6 {
                if col >= 3 && col < 6 {
                    cells[row][col] = if row < 3 { Facelet::White } else { Facelet::Yellow };
                }
            } else {
                cells[row][col] = side[col / 3];
            }
            col += 1;
        }
        row += 1;
    }
    cells
}

/// The mutable cube state: the single source of truth for rendering.
#[derive(Clone)]
pub struct Grid {
    /// Live cells, row-major.
    cells: Cells,
    /// Double buffer for copy-before-write shift application.
    scratch: Cells,
}

impl Grid {
    /// The solved net.
    pub const fn solved() -> Self {
        let cells = solved_cells();
        Self { cells, scratch: cells }
    }

    /// Color at (row, col).
    ///
    /// # Panics
    /// Panics if the coordinates are outside the 9×12 net.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Facelet {
        self.cells[row][col]
    }

    /// Whether every face shows a single color (the solved position).
    pub fn is_solved(&self) -> bool {
        self.cells == solved_cells()
    }

    /// Apply a cyclic shift of `amount` positions along `cycle`.
    ///
    /// Every cell at `cycle[i]` takes the old value of
    /// `cycle[(i + amount) mod len]`; all other cells are unchanged.
    /// `amount` may be any integer, including negative; it wraps modulo the
    /// cycle length, so the operation is total.
    pub fn apply_cycle(&mut self, cycle: Cycle, amount: i32) {
        let coords = cycle.coords();
        let len = coords.len();
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let shift = amount.rem_euclid(len as i32) as usize;
        if shift == 0 {
            return;
        }
        // Reads come from `cells`, writes go to `scratch`; the swap
        // publishes the new state atomically with respect to the cycle.
        self.scratch = self.cells;
        for (i, dst) in coords.iter().enumerate() {
            let src = coords[(i + shift) % len];
            self.scratch[dst.row as usize][dst.col as usize] =
                self.cells[src.row as usize][src.col as usize];
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    /// Count the non-blank cells (always [`LIVE_CELLS`]).
    pub fn live_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&f| f != Facelet::Blank)
            .count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::solved()
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        // Scratch contents are an implementation detail.
        self.cells == other.cells
    }
}

impl Eq for Grid {}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    Facelet::White => 'W',
                    Facelet::Green => 'G',
                    Facelet::Orange => 'O',
                    Facelet::Yellow => 'Y',
                    Facelet::Red => 'R',
                    Facelet::Blue => 'B',
                    Facelet::Blank => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
