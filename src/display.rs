//! Rendering layer: all terminal I/O lives here.
//!
//! `TerminalSurface` implements the core's `Surface` by painting glyphs into
//! an in-memory cell grid; `present` then pushes the grid to the terminal in
//! one batch. Playfield pixels map onto cells at `CELL_W` x `CELL_H`.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};
use portal_dash::entities::Rect;
use portal_dash::host::{Align, Fill, Sprite, Surface, TextSize, TextStyle, Tint};

/// Pixels per terminal column / row.
pub const CELL_W: f32 = 10.0;
pub const CELL_H: f32 = 20.0;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_STAR: Color = Color::DarkGrey;
const C_SHIP: Color = Color::White;
const C_OBSTACLE: Color = Color::Red;
const C_COIN: Color = Color::Yellow;
const C_KEY: Color = Color::Cyan;
const C_PORTAL: Color = Color::Magenta;
const C_DIMMED: Color = Color::DarkGrey;

const COIN_GLYPHS: [char; 4] = ['◐', '◓', '◑', '◒'];

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    fg: Color::Reset,
};

pub struct TerminalSurface {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl TerminalSurface {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![BLANK; cols as usize * rows as usize],
        }
    }

    /// Playfield size in pixels for a terminal of `cols` x `rows`.
    pub fn playfield_px(cols: u16, rows: u16) -> (f32, f32) {
        (cols as f32 * CELL_W, rows as f32 * CELL_H)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Write `text` on `row`, centred, blanking the rest of the row.
    pub fn print_centered(&mut self, row: u16, text: &str, color: Color) {
        self.blank_row(row);
        let col = (self.cols as i32 - text.chars().count() as i32) / 2;
        self.print_at(col, row as i32, text, color);
    }

    /// Write `text` on `row` from column 1, blanking the rest of the row.
    pub fn print_line(&mut self, row: u16, text: &str, color: Color) {
        self.blank_row(row);
        self.print_at(1, row as i32, text, color);
    }

    /// Push the whole grid to the terminal and flush.
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let mut current = Color::Reset;
        out.queue(style::ResetColor)?;
        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            let start = row as usize * self.cols as usize;
            // Batch runs of the same colour into one Print.
            let mut run = String::new();
            for cell in &self.cells[start..start + self.cols as usize] {
                if cell.fg != current {
                    if !run.is_empty() {
                        out.queue(Print(&run))?;
                        run.clear();
                    }
                    out.queue(style::SetForegroundColor(cell.fg))?;
                    current = cell.fg;
                }
                run.push(cell.ch);
            }
            out.queue(Print(&run))?;
        }
        out.queue(style::ResetColor)?;
        out.flush()?;
        Ok(())
    }

    // ── Grid helpers ──────────────────────────────────────────────────────────

    fn put(&mut self, col: i32, row: i32, ch: char, fg: Color) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        let idx = row as usize * self.cols as usize + col as usize;
        self.cells[idx] = Cell { ch, fg };
    }

    fn print_at(&mut self, col: i32, row: i32, text: &str, color: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i32, row, ch, color);
        }
    }

    fn blank_row(&mut self, row: u16) {
        for col in 0..self.cols as i32 {
            self.put(col, row as i32, ' ', Color::Reset);
        }
    }

    /// Cells covered by a pixel rectangle: `(col0, row0, col1, row1)`,
    /// end-exclusive, not yet clipped.
    fn span(rect: Rect) -> (i32, i32, i32, i32) {
        let col0 = (rect.x / CELL_W).floor() as i32;
        let row0 = (rect.y / CELL_H).floor() as i32;
        let col1 = ((rect.x + rect.w) / CELL_W).ceil() as i32;
        let row1 = ((rect.y + rect.h) / CELL_H).ceil() as i32;
        (col0, row0, col1, row1)
    }

    fn fill_span(&mut self, rect: Rect, ch: char, fg: Color) {
        let (col0, row0, col1, row1) = Self::span(rect);
        for row in row0..row1 {
            for col in col0..col1 {
                self.put(col, row, ch, fg);
            }
        }
    }
}

fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::White => Color::White,
        Tint::Black => Color::Black,
        Tint::Red => Color::Red,
        Tint::Lime => Color::Green,
        Tint::Yellow => Color::Yellow,
    }
}

// ── Surface ───────────────────────────────────────────────────────────────────

impl Surface for TerminalSurface {
    fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn draw_image(&mut self, sprite: Sprite, rect: Rect) {
        match sprite {
            Sprite::Background => {
                // Sparse star field anchored to the copy's left edge so it
                // scrolls with the background offset.
                let (col0, row0, col1, row1) = Self::span(rect);
                for row in row0.max(0)..row1 {
                    for col in col0.max(0)..col1 {
                        let local = col - col0;
                        if (local * 31 + row * 17) % 23 == 0 {
                            self.put(col, row, '·', C_STAR);
                        }
                    }
                }
            }
            Sprite::Ship => {
                //  ▄▄▄▄▄▄
                //  ██████▶
                //  ▀▀▀▀▀▀
                let (col0, row0, col1, row1) = Self::span(rect);
                for row in row0..row1 {
                    for col in col0..col1 {
                        let ch = if col == col1 - 1 {
                            '▶'
                        } else if row == row0 {
                            '▄'
                        } else if row == row1 - 1 {
                            '▀'
                        } else {
                            '█'
                        };
                        self.put(col, row, ch, C_SHIP);
                    }
                }
            }
            Sprite::Obstacle => self.fill_span(rect, '▓', C_OBSTACLE),
            Sprite::Coin(frame) => {
                let glyph = COIN_GLYPHS[frame as usize % COIN_GLYPHS.len()];
                self.fill_span(rect, glyph, C_COIN);
            }
            Sprite::Key => self.fill_span(rect, '♦', C_KEY),
            Sprite::Portal => {
                self.fill_span(rect, '░', C_PORTAL);
                let (col0, row0, col1, row1) = Self::span(rect);
                self.put((col0 + col1) / 2, (row0 + row1) / 2, '@', C_PORTAL);
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle) {
        // Banner text is letter-spaced to read as "large".
        let text = match style.size {
            TextSize::Hud => text.to_string(),
            TextSize::Banner => text
                .to_uppercase()
                .chars()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" "),
        };
        let width = text.chars().count() as i32;
        let col = (x / CELL_W) as i32;
        let col = match style.align {
            Align::Left => col,
            Align::Center => col - width / 2,
        };
        let row = (y / CELL_H) as i32;
        self.print_at(col, row, &text, tint_color(style.tint));
    }

    fn draw_rect(&mut self, rect: Rect, fill: Fill) {
        if fill.alpha >= 1.0 {
            self.fill_span(rect, '█', tint_color(fill.tint));
            return;
        }
        // Translucent fills can only dim what is already there.
        let (col0, row0, col1, row1) = Self::span(rect);
        for row in row0.max(0)..row1.min(self.rows as i32) {
            for col in col0.max(0)..col1.min(self.cols as i32) {
                let idx = row as usize * self.cols as usize + col as usize;
                self.cells[idx].fg = C_DIMMED;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_at(surface: &TerminalSurface, col: usize, row: usize) -> char {
        surface.cells[row * surface.cols as usize + col].ch
    }

    #[test]
    fn obstacle_fills_its_cells() {
        let mut s = TerminalSurface::new(20, 10);
        s.draw_image(Sprite::Obstacle, Rect::new(20.0, 20.0, 20.0, 40.0));
        assert_eq!(char_at(&s, 2, 1), '▓');
        assert_eq!(char_at(&s, 3, 2), '▓');
        assert_eq!(char_at(&s, 4, 1), ' ');
    }

    #[test]
    fn offscreen_sprites_are_clipped() {
        let mut s = TerminalSurface::new(20, 10);
        s.draw_image(Sprite::Obstacle, Rect::new(-50.0, -50.0, 100.0, 100.0));
        s.draw_image(Sprite::Key, Rect::new(250.0, 0.0, 50.0, 50.0));
        assert_eq!(char_at(&s, 0, 0), '▓');
    }

    #[test]
    fn centred_banner_is_letter_spaced() {
        let mut s = TerminalSurface::new(40, 10);
        let style = TextStyle {
            tint: Tint::Red,
            size: TextSize::Banner,
            align: Align::Center,
        };
        s.draw_text("ab", 200.0, 40.0, style);
        // "A B" centred on column 20
        assert_eq!(char_at(&s, 19, 2), 'A');
        assert_eq!(char_at(&s, 21, 2), 'B');
    }

    #[test]
    fn translucent_rect_dims_without_erasing() {
        let mut s = TerminalSurface::new(10, 5);
        s.draw_image(Sprite::Obstacle, Rect::new(0.0, 0.0, 100.0, 100.0));
        s.draw_rect(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Fill {
                tint: Tint::Black,
                alpha: 0.7,
            },
        );
        assert_eq!(char_at(&s, 0, 0), '▓');
        assert_eq!(s.cells[0].fg, C_DIMMED);
    }
}
