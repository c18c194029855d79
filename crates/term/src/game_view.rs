//! GameView: maps a [`BoardSnapshot`] and the score HUD into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::BoardSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Status};

/// Colours indexed by [`PieceKind::index`]; slot 0 is the empty cell.
pub const PALETTE: [u32; 8] = [
    0x000000, 0xCC6666, 0x66CC66, 0x6666CC, 0xCCCC66, 0xCC66CC, 0x66CCCC, 0xDAAA00,
];

pub fn kind_color(kind: PieceKind) -> Rgb {
    Rgb::from_hex(PALETTE[kind.index() as usize])
}

const KEY_HELP: [&str; 8] = [
    "<- ->  move",
    "down   rotate cw",
    "up     rotate ccw",
    "space  drop",
    "d      soft drop",
    "p      pause",
    "n / r  new / restart",
    "c      share  q quit",
];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Side panel contents the board snapshot does not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud<'a> {
    /// Latest status line; `None` before the first game.
    pub status: Option<Status>,
    pub last_points: u32,
    pub max_points: u32,
    /// Shown in place of the key help when set.
    pub share_text: Option<&'a str>,
    pub error: Option<&'a str>,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell keeps blocks roughly square.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Terminal size needed for the board frame and a readable side panel.
    pub fn min_viewport(&self, snap: &BoardSnapshot) -> Viewport {
        let (frame_w, frame_h) = self.frame_size(snap);
        Viewport::new(frame_w + 2 + 22, frame_h.max(KEY_HELP.len() as u16 + 10))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &BoardSnapshot,
        hud: &Hud<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = 0;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let empty = CellStyle::new(Rgb::new(60, 60, 60), kind_color(PieceKind::None));
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..snap.height {
            for x in 0..snap.width {
                let kind = snap.visible_cell(x, row);
                let (ch, style) = if kind.is_none() {
                    (' ', empty)
                } else {
                    ('█', CellStyle::new(kind_color(kind), empty.bg))
                };
                let (px, py) = self.cell_origin(snap, start_x, start_y, x, row);
                fb.fill_rect(px, py, self.cell_w, 1, ch, style);
            }
        }

        self.draw_side_panel(fb, hud, viewport, start_x + frame_w + 2, start_y);

        if snap.paused() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if snap.game_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if !snap.phase.is_started() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PRESS N");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    /// Screen position of the left column of board cell `(x, row)`.
    ///
    /// Row 0 is the bottom row of the board, drawn last on screen.
    pub fn cell_origin(
        &self,
        snap: &BoardSnapshot,
        start_x: u16,
        start_y: u16,
        x: u8,
        row: u8,
    ) -> (u16, u16) {
        let px = start_x + 1 + x as u16 * self.cell_w;
        let py = start_y + 1 + (snap.height - 1 - row) as u16;
        (px, py)
    }

    fn frame_size(&self, snap: &BoardSnapshot) -> (u16, u16) {
        (
            snap.width as u16 * self.cell_w + 2,
            snap.height as u16 + 2,
        )
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        hud: &Hud<'_>,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let help = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "STATUS", label);
        y += 1;
        fb.put_str(panel_x, y, hud.status.map(|s| s.as_str()).unwrap_or("-"), value);
        y += 2;

        fb.put_str(panel_x, y, "LAST", label);
        y += 1;
        fb.put_u32(panel_x, y, hud.last_points, value);
        y += 2;

        fb.put_str(panel_x, y, "MAX", label);
        y += 1;
        fb.put_u32(panel_x, y, hud.max_points, value);
        y += 2;

        match hud.share_text {
            Some(text) => {
                for line in text.lines() {
                    fb.put_str(panel_x, y, line, value);
                    y += 1;
                }
            }
            None => {
                for line in KEY_HELP {
                    fb.put_str(panel_x, y, line, help);
                    y += 1;
                }
            }
        }

        if let Some(err) = hud.error {
            y += 1;
            let style = CellStyle::new(Rgb::from_hex(PALETTE[1]), Rgb::new(0, 0, 0));
            fb.put_str(panel_x, y, err, style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_kind_index() {
        assert_eq!(kind_color(PieceKind::None), Rgb::new(0, 0, 0));
        assert_eq!(kind_color(PieceKind::Z), Rgb::from_hex(0xCC6666));
        assert_eq!(kind_color(PieceKind::J), Rgb::from_hex(0xDAAA00));
    }

    #[test]
    fn test_bottom_row_is_drawn_lowest() {
        let view = GameView::default();
        let snap = BoardSnapshot::empty(10, 22);
        let (_, top) = view.cell_origin(&snap, 0, 0, 0, 21);
        let (_, bottom) = view.cell_origin(&snap, 0, 0, 0, 0);
        assert_eq!(top, 1);
        assert_eq!(bottom, 22);
    }

    #[test]
    fn test_small_viewport_does_not_panic() {
        let view = GameView::default();
        let snap = BoardSnapshot::empty(10, 22);
        let fb = view.render(&snap, &Hud::default(), Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
