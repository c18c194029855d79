//! Grid module - the cell storage under the board
//!
//! Flat row-major storage (`y * width + x`), row 0 at the **bottom**. Cells hold
//! the [`PieceKind`] that locked there, `PieceKind::None` meaning empty.

use crate::types::{Cell, PieceKind};

/// Fixed-size grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![PieceKind::None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn in_bounds(&self, x: i8, y: i8) -> bool {
        x >= 0 && (x as i16) < self.width as i16 && y >= 0 && (y as i16) < self.height as i16
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(PieceKind::None))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|cell| !cell.is_none())
    }

    /// Indices of all full rows, ascending (bottom first).
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.height as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Remove row `y`: every row above moves down one and the top row empties.
    pub fn remove_row(&mut self, y: usize) {
        let height = self.height as usize;
        if y >= height {
            return;
        }
        let width = self.width as usize;

        // copy_within handles the overlapping ranges
        let start = (y + 1) * width;
        self.cells.copy_within(start..height * width, y * width);
        let top = (height - 1) * width;
        self.cells[top..].fill(PieceKind::None);
    }

    /// Remove all full rows and return how many were removed.
    ///
    /// Rows are removed highest first so lower indices still address the
    /// original rows.
    pub fn clear_full_rows(&mut self) -> usize {
        let rows = self.full_rows();
        for &y in rows.iter().rev() {
            self.remove_row(y);
        }
        rows.len()
    }

    /// Row `y` as a slice (bottom row is 0).
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells.fill(PieceKind::None);
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_none()).count()
    }

    /// Build a grid from rows listed top to bottom, the way a board is drawn.
    ///
    /// `'.'` or `' '` is empty, a kind letter (`zsitolj`, any case) fills a cell
    /// with that kind, and any other character fills it with `PieceKind::I`.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different widths or there are none.
    pub fn from_rows(rows: &[&str]) -> Self {
        assert!(!rows.is_empty(), "grid needs at least one row");
        let width = rows[0].chars().count();
        let height = rows.len();
        let mut grid = Self::new(width as u8, height as u8);

        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), width, "ragged row {i}");
            let y = (height - 1 - i) as i8;
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '.' | ' ' => PieceKind::None,
                    other => PieceKind::from_str(&other.to_string())
                        .filter(|k| !k.is_none())
                        .unwrap_or(PieceKind::I),
                };
                grid.set(x as i8, y, cell);
            }
        }
        grid
    }
}
