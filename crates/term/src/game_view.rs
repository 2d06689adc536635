//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, BOARD_SIZE};

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

const WINDOW_BG: Rgb = Rgb::new(0x10, 0x10, 0x10);
const BOARD_BG: Rgb = Rgb::new(0x50, 0x50, 0x50);
const EMPTY_TILE_BG: Rgb = Rgb::new(0xff, 0xf5, 0xf5);
const DARK_TEXT: Rgb = Rgb::new(0x30, 0x20, 0x20);
const LIGHT_TEXT: Rgb = Rgb::new(0xff, 0xff, 0xff);
/// Background for tiles past the top of the palette.
const BEYOND_TILE_BG: Rgb = Rgb::new(0xc0, 0x00, 0x00);

/// Tile background by value.
const TILE_PALETTE: [(u32, Rgb); 11] = [
    (2, Rgb::new(0xff, 0xeb, 0xeb)),
    (4, Rgb::new(0xff, 0xe1, 0xe1)),
    (8, Rgb::new(0xff, 0xc3, 0xc3)),
    (16, Rgb::new(0xff, 0x9b, 0x9b)),
    (32, Rgb::new(0xff, 0x87, 0x87)),
    (64, Rgb::new(0xff, 0x73, 0x73)),
    (128, Rgb::new(0xff, 0x5f, 0x5f)),
    (256, Rgb::new(0xff, 0x4b, 0x4b)),
    (512, Rgb::new(0xff, 0x37, 0x37)),
    (1024, Rgb::new(0xff, 0x23, 0x23)),
    (2048, Rgb::new(0xff, 0x0f, 0x0f)),
];

pub const HINT_TEXT: &str = "WASD to move board, get to 2048 to win. Good luck!";
pub const KEYS_TEXT: &str = "r restart  q quit";

/// Style for a tile of the given value (0 = empty).
pub fn tile_style(value: u32) -> CellStyle {
    if value == 0 {
        return CellStyle::new(DARK_TEXT, EMPTY_TILE_BG);
    }
    let bg = TILE_PALETTE
        .iter()
        .find(|(v, _)| *v == value)
        .map_or(BEYOND_TILE_BG, |(_, bg)| *bg);
    let fg = if value >= 128 { LIGHT_TEXT } else { DARK_TEXT };
    CellStyle::new(fg, bg).bold()
}

/// A lightweight terminal renderer for the 2048 board.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 8x3 fits six digits with padding and roughly squares the tiles.
        Self {
            tile_w: 8,
            tile_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the board: tiles plus one-cell gutters.
    pub fn board_size(&self) -> (u16, u16) {
        let n = BOARD_SIZE as u16;
        (n * self.tile_w + n + 1, n * self.tile_h + n + 1)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(LIGHT_TEXT, WINDOW_BG).into_cell(' '));

        let (board_w, board_h) = self.board_size();
        // Header row above the board, two hint rows below.
        let block_h = board_h + 4;

        let start_x = viewport.width.saturating_sub(board_w) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(block_h) / 2,
            AnchorY::Top => 0,
        };
        let start_y = top + 1;

        self.draw_header(fb, snap, start_x, top, board_w);

        let board_bg = CellStyle::new(LIGHT_TEXT, BOARD_BG);
        fb.fill_rect(start_x, start_y, board_w, board_h, ' ', board_bg);
        for (row, line) in snap.grid.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value);
            }
        }

        let hint = CellStyle::new(Rgb::new(160, 160, 160), WINDOW_BG);
        let below = start_y + board_h + 1;
        put_centered(fb, start_x, board_w, below, HINT_TEXT, hint);
        put_centered(fb, start_x, board_w, below + 1, KEYS_TEXT, hint);

        self.draw_side_panel(fb, snap, viewport, start_x + board_w + 3, start_y);

        match snap.status {
            GameStatus::Running => {}
            GameStatus::Won => self.draw_overlay(fb, snap, start_x, start_y, "YOU WIN! :)"),
            GameStatus::Lost => self.draw_overlay(fb, snap, start_x, start_y, "GAME OVER!"),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16, w: u16) {
        let style = CellStyle::new(LIGHT_TEXT, WINDOW_BG).bold();
        let mut digits = [0u8; 10];
        let len = crate::fb::format_u32(snap.score, &mut digits);
        let label = "SCORE: ";
        let text_w = label.len() as u16 + len as u16;
        let hx = x + w.saturating_sub(text_w) / 2;
        fb.put_str(hx, y, label, style);
        fb.put_u32(hx + label.len() as u16, y, snap.score, style);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        value: u32,
    ) {
        let px = start_x + 1 + col * (self.tile_w + 1);
        let py = start_y + 1 + row * (self.tile_h + 1);
        let style = tile_style(value);
        fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', style);
        if value == 0 {
            return;
        }

        let mut digits = [0u8; 10];
        let len = crate::fb::format_u32(value, &mut digits) as u16;
        let tx = px + self.tile_w.saturating_sub(len) / 2;
        let ty = py + self.tile_h / 2;
        for (i, &d) in digits[..len as usize].iter().enumerate() {
            let x = tx + i as u16;
            if x < px + self.tile_w {
                fb.put_char(x, ty, d as char, style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), WINDOW_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), WINDOW_BG);

        let rows: [(&str, u32); 4] = [
            ("SCORE", snap.score),
            ("BEST TILE", snap.best_tile),
            ("MOVES", snap.moves),
            ("GAME", snap.episode_id.saturating_add(1)),
        ];
        let mut y = start_y;
        for (name, v) in rows {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        title: &str,
    ) {
        let (board_w, board_h) = self.board_size();
        let style = CellStyle::new(LIGHT_TEXT, Rgb::new(0, 0, 0)).bold();
        let box_w = 22.min(board_w);
        let box_x = start_x + (board_w - box_w) / 2;
        let mid = start_y + board_h / 2;
        fb.fill_rect(box_x, mid.saturating_sub(2), box_w, 5, ' ', style);

        put_centered(fb, start_x, board_w, mid.saturating_sub(1), title, style);

        let label = "FINAL SCORE: ";
        let mut digits = [0u8; 10];
        let len = crate::fb::format_u32(snap.score, &mut digits) as u16;
        let lx = start_x + board_w.saturating_sub(label.len() as u16 + len) / 2;
        fb.put_str(lx, mid, label, style);
        fb.put_u32(lx + label.len() as u16, mid, snap.score, style);

        put_centered(fb, start_x, board_w, mid + 1, "press r to restart", style);
    }
}

fn put_centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let cx = x.saturating_add(w.saturating_sub(text_w) / 2);
    fb.put_str(cx, y, text, style);
}
