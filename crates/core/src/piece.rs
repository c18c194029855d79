//! Pieces module - tetromino shapes and pivot rotation
//!
//! A [`Piece`] is a small `Copy` value: a kind plus four offsets around a fixed
//! pivot. Offsets use screen orientation (`y` grows downward), the board flips
//! them when placing a piece (`row = y - offset.y`).
//!
//! Rotation is classic and kick-free: each offset is rotated a quarter turn
//! about the pivot with no recentering. The O piece is rotation invariant and
//! is returned unchanged.

use crate::rng::KindSource;
use crate::types::PieceKind;

/// Offset of a single cell relative to the piece pivot
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the pivot
pub type PieceShape = [CellOffset; 4];

/// Canonical offsets, indexed by [`PieceKind::index`].
const SHAPE_TABLE: [PieceShape; 8] = [
    // None
    [(0, 0), (0, 0), (0, 0), (0, 0)],
    // Z
    [(0, -1), (0, 0), (-1, 0), (-1, 1)],
    // S
    [(0, -1), (0, 0), (1, 0), (1, 1)],
    // I
    [(0, -1), (0, 0), (0, 1), (0, 2)],
    // T
    [(-1, 0), (0, 0), (1, 0), (0, 1)],
    // O
    [(0, 0), (1, 0), (0, 1), (1, 1)],
    // L
    [(-1, -1), (0, -1), (0, 0), (0, 1)],
    // J
    [(1, -1), (0, -1), (0, 0), (0, 1)],
];

/// Look up the spawn offsets for a kind.
pub fn shape_table(kind: PieceKind) -> PieceShape {
    SHAPE_TABLE[kind.index() as usize]
}

/// A tetromino: kind plus its current offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    cells: PieceShape,
}

impl Piece {
    /// Create a piece in its table orientation.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            cells: shape_table(kind),
        }
    }

    /// The "no active piece" sentinel.
    pub fn none() -> Self {
        Self::new(PieceKind::None)
    }

    /// Draw a kind from `source` and build a piece for it.
    pub fn spawn_random<S: KindSource + ?Sized>(source: &mut S) -> Self {
        let kind = source.next_kind();
        debug_assert!(!kind.is_none(), "kind sources must not yield None");
        Self::new(kind)
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn is_none(&self) -> bool {
        self.kind.is_none()
    }

    pub fn cells(&self) -> &PieceShape {
        &self.cells
    }

    /// Pivot-relative offset of cell `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 4`.
    pub fn offset(&self, index: usize) -> CellOffset {
        assert!(index < 4, "piece cell index out of range: {index}");
        self.cells[index]
    }

    pub fn x(&self, index: usize) -> i8 {
        self.offset(index).0
    }

    pub fn y(&self, index: usize) -> i8 {
        self.offset(index).1
    }

    pub fn min_x(&self) -> i8 {
        self.cells.iter().map(|&(x, _)| x).fold(i8::MAX, i8::min)
    }

    pub fn max_x(&self) -> i8 {
        self.cells.iter().map(|&(x, _)| x).fold(i8::MIN, i8::max)
    }

    pub fn min_y(&self) -> i8 {
        self.cells.iter().map(|&(_, y)| y).fold(i8::MAX, i8::min)
    }

    pub fn max_y(&self) -> i8 {
        self.cells.iter().map(|&(_, y)| y).fold(i8::MIN, i8::max)
    }

    /// Quarter turn mapping `(x, y) -> (y, -x)`.
    pub fn rotate_left(&self) -> Self {
        if self.kind == PieceKind::O {
            return *self;
        }
        Self {
            kind: self.kind,
            cells: self.cells.map(|(x, y)| (y, -x)),
        }
    }

    /// Quarter turn mapping `(x, y) -> (-y, x)`.
    pub fn rotate_right(&self) -> Self {
        if self.kind == PieceKind::O {
            return *self;
        }
        Self {
            kind: self.kind,
            cells: self.cells.map(|(x, y)| (-y, x)),
        }
    }
}

impl Default for Piece {
    fn default() -> Self {
        Self::none()
    }
}
