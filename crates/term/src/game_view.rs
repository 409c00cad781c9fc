//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, MAX_SHAPE_SIZE};

const PLAYFIELD_BG: Rgb = Rgb::new(0, 0, 0);
const GRID_FG: Rgb = Rgb::new(60, 60, 70);
const BORDER_FG: Rgb = Rgb::new(200, 200, 200);
const OVERLAY_BG: Rgb = Rgb::new(20, 20, 20);

/// Fill color for a piece identity.
pub const fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::from_hex("#FF0D72"),
        PieceKind::J => Rgb::from_hex("#0DC2FF"),
        PieceKind::L => Rgb::from_hex("#0DFF72"),
        PieceKind::O => Rgb::from_hex("#F538FF"),
        PieceKind::S => Rgb::from_hex("#FF8E0D"),
        PieceKind::T => Rgb::from_hex("#FFE138"),
        PieceKind::Z => Rgb::from_hex("#3877FF"),
    }
}

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

/// Board frame placement, computed once per render.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Lays out the playfield and the side panel for one session.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal size needed to show the board frame and the side panel.
    pub fn min_viewport(&self) -> Viewport {
        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        Viewport::new(frame_w + 2 + self.panel_width(), frame_h)
    }

    fn panel_width(&self) -> u16 {
        ((MAX_SHAPE_SIZE as u16) * self.cell_w).max(10)
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    ///
    /// Callers can reuse one framebuffer across frames; nothing is allocated
    /// unless the viewport grows.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.frame(viewport);
        let bg = CellStyle::new(GRID_FG, PLAYFIELD_BG).dim();

        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', bg);
        draw_border(fb, frame, CellStyle::new(BORDER_FG, Rgb::new(0, 0, 0)));

        // Locked cells with the active piece composed on top.
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                let value = snap.composed_value(x as usize, y as usize);
                match PieceKind::from_id(value) {
                    Some(kind) => self.draw_board_cell(fb, frame, x, y, kind),
                    None => self.fill_cell_rect(fb, frame, x, y, '·', bg),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.phase {
            Phase::Paused => self.draw_overlay_text(fb, frame, "PAUSED", Rgb::new(255, 255, 255)),
            Phase::GameOver => self.draw_overlay_text(fb, frame, "GAME OVER", Rgb::new(255, 0, 0)),
            Phase::Active => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let total_w = self.min_viewport().width;

        let x = viewport.width.saturating_sub(total_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::new(piece_color(kind), PLAYFIELD_BG).bold();
        self.fill_cell_rect(fb, frame, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < self.panel_width() {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = frame.y;
        for (name, v) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);

        // Preview matrix at its own size, same cell aspect as the board.
        let next = &snap.next;
        let color = piece_color(next.kind);
        for row in 0..next.size as u16 {
            for col in 0..next.size as u16 {
                if next.cells[row as usize][col as usize] == 0 {
                    continue;
                }
                let px = panel_x + col * self.cell_w;
                let py = y + row * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', CellStyle::new(color, Rgb::new(0, 0, 0)));
            }
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str, fg: Rgb) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let band = CellStyle::new(fg, OVERLAY_BG).bold();

        // Dim band across the playfield behind the text.
        fb.fill_rect(frame.x + 1, mid_y.saturating_sub(1), frame.w - 2, 3, ' ', band);

        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, band);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    fn find_text(fb: &FrameBuffer, needle: &str) -> Option<(u16, u16)> {
        (0..fb.height()).find_map(|y| {
            let row = fb.row_text(y);
            row.find(needle)
                .map(|byte_idx| (row[..byte_idx].chars().count() as u16, y))
        })
    }

    #[test]
    fn min_viewport_fits_board_and_panel() {
        let view = GameView::default();
        let vp = view.min_viewport();
        assert_eq!(vp.height, 22);
        assert_eq!(vp.width, 22 + 2 + 10);
    }

    #[test]
    fn active_piece_uses_its_palette_color() {
        let snap = GameState::new(5).snapshot();
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snap, view.min_viewport());

        let active = snap.active.unwrap();
        let kind = active.kind;
        let (dx, dy) = (0..active.size as usize)
            .flat_map(|r| (0..active.size as usize).map(move |c| (c, r)))
            .find(|&(c, r)| active.cells[r][c] != 0)
            .unwrap();
        let bx = (active.x as i16 + dx as i16) as u16;
        let by = (active.y as i16 + dy as i16) as u16;

        let cell = fb.get(1 + bx * 2, 1 + by).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, piece_color(kind));
    }

    #[test]
    fn side_panel_shows_stats() {
        let mut snap = GameSnapshot::default();
        snap.score = 1200;
        snap.lines = 12;
        snap.level = 2;
        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(60, 30));

        let (sx, sy) = find_text(&fb, "SCORE").unwrap();
        assert!(fb.row_text(sy + 1).contains("1200"));
        let (lx, _) = find_text(&fb, "LEVEL").unwrap();
        assert_eq!(sx, lx);
        assert!(find_text(&fb, "LINES").is_some());
        assert!(find_text(&fb, "NEXT").is_some());
    }

    #[test]
    fn next_preview_draws_its_cells() {
        let snap = GameSnapshot::default();
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snap, view.min_viewport());

        let (nx, ny) = find_text(&fb, "NEXT").unwrap();
        // Default preview is I: its filled row is the second matrix row.
        let row = ny + 1 + 1;
        let color = piece_color(PieceKind::I);
        for col in 0..8 {
            let cell = fb.get(nx + col, row).unwrap();
            assert_eq!(cell.style.fg, color);
        }
    }

    #[test]
    fn overlays_follow_phase() {
        let view = GameView::default();
        let vp = view.min_viewport();

        let mut snap = GameSnapshot::default();
        assert!(find_text(&view.render(&snap, vp), "PAUSED").is_none());

        snap.phase = Phase::Paused;
        assert!(find_text(&view.render(&snap, vp), "PAUSED").is_some());

        snap.phase = Phase::GameOver;
        let fb = view.render(&snap, vp);
        let (x, y) = find_text(&fb, "GAME OVER").unwrap();
        assert_eq!(fb.get(x, y).unwrap().style.fg, Rgb::new(255, 0, 0));
        assert!(find_text(&fb, "PAUSED").is_none());
    }

    #[test]
    fn small_viewport_does_not_panic() {
        let view = GameView::default();
        let snap = GameState::new(1).snapshot();
        let fb = view.render(&snap, Viewport::new(8, 4));
        assert_eq!((fb.width(), fb.height()), (8, 4));
    }
}
