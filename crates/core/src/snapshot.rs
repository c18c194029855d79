use crate::types::{Cell, Phase, PieceKind};

/// The falling piece as the renderer needs it: kind and absolute cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    /// Absolute `(x, row)` coordinates, row 0 at the bottom.
    pub cells: [(i8, i8); 4],
}

/// Read-only copy of everything needed to redraw the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major, row 0 at the bottom.
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub phase: Phase,
    pub lines_cleared: u32,
}

impl BoardSnapshot {
    /// An empty board of the given size.
    pub fn empty(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![PieceKind::None; width as usize * height as usize],
            active: None,
            phase: Phase::Idle,
            lines_cleared: 0,
        }
    }

    /// Locked cell at `(x, row)`; `PieceKind::None` when empty or out of range.
    pub fn cell(&self, x: u8, y: u8) -> Cell {
        if x >= self.width || y >= self.height {
            return PieceKind::None;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// What a renderer should draw at `(x, row)`: the active piece wins over
    /// locked cells.
    pub fn visible_cell(&self, x: u8, y: u8) -> Cell {
        if let Some(active) = self.active {
            if active
                .cells
                .iter()
                .any(|&(cx, cy)| cx as i16 == x as i16 && cy as i16 == y as i16)
            {
                return active.kind;
            }
        }
        self.cell(x, y)
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}
