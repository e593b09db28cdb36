//! Move cycle tables: the static geometry of the unfolded net.
//!
//! Every move permutes a fixed set of grid cells along one or two closed
//! cycles. The tables here are `const`-derived from a handful of base
//! patterns: a face's 8-cell outer ring, a 12-cell row band, a 12-cell
//! column band (9 cells down one column plus a 3-cell wrap segment on the
//! back face), and the two diagonal bands that orbit the front and back
//! faces.

/// A single cell position on the 9×12 net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Row index (0..9).
    pub row: u8,
    /// Column index (0..12).
    pub col: u8,
}

impl Coord {
    /// Create a coordinate.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

const fn at(row: u8, col: u8) -> Coord {
    Coord::new(row, col)
}

/// An 8-cell face ring, clockwise from the top-left anchor of a 3×3 face.
const fn ring(row: u8, col: u8) -> [Coord; 8] {
    [
        at(row, col),
        at(row, col + 1),
        at(row, col + 2),
        at(row + 1, col + 2),
        at(row + 2, col + 2),
        at(row + 2, col + 1),
        at(row + 2, col),
        at(row + 1, col),
    ]
}

/// A 12-cell horizontal band spanning all four side faces.
const fn row_band(row: u8) -> [Coord; 12] {
    let mut cells = [at(row, 0); 12];
    let mut col = 0;
    while col < 12 {
        cells[col as usize] = at(row, col);
        col += 1;
    }
    cells
}

/// A 12-cell vertical band: 9 cells down `col` (top, front, bottom faces)
/// plus the 3-cell wrap segment up `wrap_col` on the back face.
const fn col_band(col: u8, wrap_col: u8) -> [Coord; 12] {
    let mut cells = [at(0, col); 12];
    let mut row = 0;
    while row < 9 {
        cells[row as usize] = at(row, col);
        row += 1;
    }
    cells[9] = at(5, wrap_col);
    cells[10] = at(4, wrap_col);
    cells[11] = at(3, wrap_col);
    cells
}

const UP_RING: [Coord; 8] = ring(0, 3);
const DOWN_RING: [Coord; 8] = ring(6, 3);
const LEFT_RING: [Coord; 8] = ring(3, 0);
const FRONT_RING: [Coord; 8] = ring(3, 3);
const RIGHT_RING: [Coord; 8] = ring(3, 6);
const BACK_RING: [Coord; 8] = ring(3, 9);

const TOP_ROW: [Coord; 12] = row_band(3);
const MID_ROW: [Coord; 12] = row_band(4);
const BOTTOM_ROW: [Coord; 12] = row_band(5);

const LEFT_COL: [Coord; 12] = col_band(3, 11);
const MID_COL: [Coord; 12] = col_band(4, 10);
const RIGHT_COL: [Coord; 12] = col_band(5, 9);

/// Diagonal band orbiting the front face: across the bottom of the top
/// face, down the left edge of the right face, across the top of the
/// bottom face, up the right edge of the left face.
const FRONT_BAND: [Coord; 12] = [
    at(2, 3),
    at(2, 4),
    at(2, 5),
    at(3, 6),
    at(4, 6),
    at(5, 6),
    at(6, 5),
    at(6, 4),
    at(6, 3),
    at(5, 2),
    at(4, 2),
    at(3, 2),
];

/// Diagonal band orbiting the back face (outer edges of the net).
const BACK_BAND: [Coord; 12] = [
    at(0, 3),
    at(0, 4),
    at(0, 5),
    at(3, 8),
    at(4, 8),
    at(5, 8),
    at(8, 5),
    at(8, 4),
    at(8, 3),
    at(5, 0),
    at(4, 0),
    at(3, 0),
];

/// A named move cycle: an ordered list of cells that permute among
/// themselves under a cyclic shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cycle {
    /// Outer ring of the top face.
    UpRing,
    /// Outer ring of the bottom face.
    DownRing,
    /// Outer ring of the left face.
    LeftRing,
    /// Outer ring of the right face.
    RightRing,
    /// Outer ring of the front face.
    FrontRing,
    /// Outer ring of the back face.
    BackRing,
    /// Horizontal band through the top layer of the side faces.
    TopRow,
    /// Horizontal band through the middle layer of the side faces.
    MidRow,
    /// Horizontal band through the bottom layer of the side faces.
    BottomRow,
    /// Vertical band through the left column.
    LeftCol,
    /// Vertical band through the middle column.
    MidCol,
    /// Vertical band through the right column.
    RightCol,
    /// Diagonal band around the front face.
    FrontBand,
    /// Diagonal band around the back face.
    BackBand,
}

impl Cycle {
    /// The ordered coordinates of this cycle.
    pub const fn coords(self) -> &'static [Coord] {
        match self {
            Self::UpRing => &UP_RING,
            Self::DownRing => &DOWN_RING,
            Self::LeftRing => &LEFT_RING,
            Self::RightRing => &RIGHT_RING,
            Self::FrontRing => &FRONT_RING,
            Self::BackRing => &BACK_RING,
            Self::TopRow => &TOP_ROW,
            Self::MidRow => &MID_ROW,
            Self::BottomRow => &BOTTOM_ROW,
            Self::LeftCol => &LEFT_COL,
            Self::MidCol => &MID_COL,
            Self::RightCol => &RIGHT_COL,
            Self::FrontBand => &FRONT_BAND,
            Self::BackBand => &BACK_BAND,
        }
    }

    /// All defined cycles, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::UpRing,
        Self::DownRing,
        Self::LeftRing,
        Self::RightRing,
        Self::FrontRing,
        Self::BackRing,
        Self::TopRow,
        Self::MidRow,
        Self::BottomRow,
        Self::LeftCol,
        Self::MidCol,
        Self::RightCol,
        Self::FrontBand,
        Self::BackBand,
    ];
}

// Rings have 8 cells, bands 12; the move protocol depends on this.
const _: () = assert!(UP_RING.len() == 8 && TOP_ROW.len() == 12);
const _: () = assert!(MID_COL.len() == 12 && FRONT_BAND.len() == 12);
