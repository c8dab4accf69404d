//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::{GameSnapshot, NextSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, Tint};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Block colours, indexed by tint.
const TINT_PALETTE: [Rgb; 7] = [
    Rgb::new(80, 220, 220),
    Rgb::new(240, 220, 80),
    Rgb::new(200, 120, 220),
    Rgb::new(100, 220, 120),
    Rgb::new(220, 80, 80),
    Rgb::new(80, 120, 220),
    Rgb::new(255, 165, 0),
];

/// Colour used to draw blocks of `tint` (wraps for unknown tints).
pub fn tint_color(tint: Tint) -> Rgb {
    TINT_PALETTE[usize::from(tint.0) % TINT_PALETTE.len()]
}

/// Rows of the NEXT preview box; every shape fits in four.
const PREVIEW_ROWS: u16 = 4;

/// Where the board frame landed for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares a block on common terminal fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Reuses `fb` across frames; it is only reallocated when the viewport grows.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        let frame = self.frame_for(snap, viewport);
        let empty = CellStyle::plain(Rgb::new(90, 90, 100), BOARD_BG).dim();
        let border = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', empty);
        draw_border(fb, frame, border);

        for row in 0..snap.rows.max(0) {
            for col in 0..snap.columns.max(0) {
                self.fill_board_cell(fb, frame, col, row, '·', empty);
            }
        }

        for mark in &snap.marks {
            self.draw_block(fb, frame, snap, mark.cell, mark.tint);
        }
        if let Some(active) = snap.active {
            for cell in active.cells {
                self.draw_block(fb, frame, snap, cell, active.tint);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.paused {
            draw_overlay_text(fb, frame, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal position of the top-left glyph of a board cell, if it is visible.
    pub fn cell_origin(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        cell: Cell,
    ) -> Option<(u16, u16)> {
        if !snap.contains(cell) {
            return None;
        }
        let frame = self.frame_for(snap, viewport);
        Some(self.board_origin(
            frame,
            cell.col - snap.first_col,
            cell.row - snap.first_row,
        ))
    }

    fn frame_for(&self, snap: &GameSnapshot, viewport: Viewport) -> Frame {
        let w = (snap.columns.max(0) as u16)
            .saturating_mul(self.cell_w)
            .saturating_add(2);
        let h = (snap.rows.max(0) as u16)
            .saturating_mul(self.cell_h)
            .saturating_add(2);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn board_origin(&self, frame: Frame, col: i32, row: i32) -> (u16, u16) {
        (
            frame.x + 1 + (col as u16) * self.cell_w,
            frame.y + 1 + (row as u16) * self.cell_h,
        )
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        col: i32,
        row: i32,
        ch: char,
        style: CellStyle,
    ) {
        let (px, py) = self.board_origin(frame, col, row);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Draw one block; cells outside the board extent are skipped.
    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        snap: &GameSnapshot,
        cell: Cell,
        tint: Tint,
    ) {
        if !snap.contains(cell) {
            return;
        }
        let style = CellStyle::plain(tint_color(tint), BOARD_BG).bold();
        self.fill_board_cell(
            fb,
            frame,
            cell.col - snap.first_col,
            cell.row - snap.first_row,
            '█',
            style,
        );
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(next) = snap.next {
            self.draw_preview(fb, panel_x, y, next);
        }
        y = y.saturating_add(PREVIEW_ROWS + 1);

        for (name, n) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, n, value);
            y = y.saturating_add(2);
        }
    }

    /// Draw the next piece's shape in a box whose bottom row is the anchor row.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, top: u16, next: NextSnapshot) {
        let style = CellStyle::plain(tint_color(next.tint), PANEL_BG).bold();
        let anchor_y = top + PREVIEW_ROWS - 1;
        for (dx, dy) in next.blocks {
            let px = x + (dx as u16) * self.cell_w;
            let py = anchor_y.saturating_sub((-dy) as u16);
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
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

fn draw_overlay_text(fb: &mut FrameBuffer, frame: Frame, text: &str) {
    let mid_y = frame.y.saturating_add(frame.h / 2);
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    let style = CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x, mid_y, text, style);
}
