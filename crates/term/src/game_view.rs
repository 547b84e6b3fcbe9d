//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Shape};
use crate::fb::{CellStyle, FrameBuffer, Glyph};
use crate::types::{Color, Phase, BOARD_HEIGHT, BOARD_WIDTH};

const BLOCK: char = '█';
const PANEL_BG: Color = Color::new(0, 0, 0);
const WELL_BG: Color = Color::new(30, 30, 40);

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

/// Board origin and frame size inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Layout {
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Render into an existing framebuffer (reused across frames).
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let layout = Layout {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        };

        self.draw_border(fb, layout);

        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let (bx, by) = (x as i8, y as i8);
                match snap.cell(x as usize, y as usize) {
                    Some(kind) => self.draw_block(fb, layout, bx, by, kind.color()),
                    None => self.draw_empty(fb, layout, bx, by),
                }
            }
        }

        let active = snap.active;
        for (dx, dy) in active.shape.cells() {
            self.draw_block(fb, layout, active.x + dx, active.y + dy, active.kind.color());
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        match snap.phase {
            Phase::Paused => self.draw_overlay_text(fb, layout, "PAUSED"),
            Phase::GameOver => self.draw_overlay_text(fb, layout, "GAME OVER"),
            Phase::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, l: Layout) {
        let style = CellStyle::plain(Color::new(200, 200, 200), PANEL_BG);
        let (right, bottom) = (l.x + l.frame_w - 1, l.y + l.frame_h - 1);

        fb.put_char(l.x, l.y, '┌', style);
        fb.put_char(right, l.y, '┐', style);
        fb.put_char(l.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for x in l.x + 1..right {
            fb.put_char(x, l.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in l.y + 1..bottom {
            fb.put_char(l.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    /// Paint one board cell; cells above or outside the well are skipped.
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        l: Layout,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = l.x + 1 + x as u16 * self.cell_w;
        let py = l.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, l: Layout, x: i8, y: i8, color: Color) {
        self.fill_board_cell(fb, l, x, y, BLOCK, CellStyle::plain(color, WELL_BG).bold());
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, l: Layout, x: i8, y: i8) {
        let style = CellStyle::plain(Color::new(90, 90, 100), WELL_BG).dim();
        self.fill_board_cell(fb, l, x, y, '·', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        l: Layout,
    ) {
        let panel_x = l.x.saturating_add(l.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::plain(Color::new(200, 200, 200), PANEL_BG);

        let mut y = l.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, snap.lines, value);
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        self.draw_preview(fb, panel_x, y, &snap.next.shape, snap.next.kind.color());
        y += snap.next.shape.rows() as u16 + 2;

        let hint = value.dim();
        for line in ["←→ move  ↓ drop", "↑ rotate  p pause", "r restart  q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: &Shape, color: Color) {
        let style = CellStyle::plain(color, PANEL_BG).bold();
        for (dx, dy) in shape.cells() {
            let px = x + dx as u16 * self.cell_w;
            let py = y + dy as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, BLOCK, style);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, l: Layout, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = l.x.saturating_add(l.frame_w.saturating_sub(text_w) / 2);
        let y = l.y.saturating_add(l.frame_h / 2);
        let style = CellStyle::plain(Color::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, y, text, style);
    }
}
