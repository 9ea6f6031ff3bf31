//! Fixed-layout text rendering of the board.
//!
//! Every cell takes two character units. The layout for a `width` x `height`
//! board is `width + 2` newline-terminated lines (the `x` axis) of
//! `height + 2` glyph pairs each (the `y` axis), border included:
//!
//! ```text
//! ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒
//! ▒▒                  ▒▒
//! ▒▒        ████      ▒▒
//! ▒▒  ●               ▒▒
//! ...
//! ```
//!
//! The border never changes, so it is written once on the first draw. Later
//! draws only rewrite the interior pairs.

use super::types::{Cell, Coord};

const BORDER: [char; 2] = ['\u{2592}', '\u{2592}']; // ▒▒
const SNAKE: [char; 2] = ['\u{2588}', '\u{2588}']; // ██
const FOOD: [char; 2] = ['\u{25CF}', ' ']; // ●
const EMPTY: [char; 2] = [' ', ' '];

/// Cached character grid for one board size.
#[derive(Debug)]
pub struct BoardRenderer {
    width: usize,
    height: usize,
    /// One `char` per character unit, fixed length for the board's lifetime.
    glyphs: Vec<char>,
    /// UTF-8 view of `glyphs`, refreshed after every draw.
    text: String,
    is_first_render: bool,
}

impl BoardRenderer {
    /// Allocate the buffers for a `width` x `height` board. Nothing is drawn
    /// until the first [`draw`](Self::draw).
    pub fn new(width: Coord, height: Coord) -> Self {
        let len = Self::expected_len(width, height);
        Self {
            width: usize::from(width),
            height: usize::from(height),
            glyphs: vec![' '; len],
            text: String::with_capacity(len * '\u{2592}'.len_utf8()),
            is_first_render: true,
        }
    }

    /// Length in character units of a rendered `width` x `height` board,
    /// excluding any terminator.
    pub fn expected_len(width: Coord, height: Coord) -> usize {
        let (width, height) = (usize::from(width), usize::from(height));
        (width + 2) * (height + 2) * 2 + width + 2
    }

    /// Units per text line, newline included.
    fn line_len(&self) -> usize {
        (self.height + 2) * 2 + 1
    }

    /// Buffer offset of the first unit of `cell`'s glyph pair.
    fn offset(&self, cell: Cell) -> usize {
        (usize::from(cell.x) + 1) * self.line_len() + 2 + usize::from(cell.y) * 2
    }

    fn put(&mut self, at: usize, pair: [char; 2]) {
        self.glyphs[at..at + 2].copy_from_slice(&pair);
    }

    /// Border pairs and newlines. Only needed once.
    fn draw_border(&mut self) {
        let line_len = self.line_len();
        for line in 0..self.width + 2 {
            let start = line * line_len;
            let edge = line == 0 || line == self.width + 1;
            if edge {
                for pair in 0..self.height + 2 {
                    self.put(start + pair * 2, BORDER);
                }
            } else {
                self.put(start, BORDER);
                self.put(start + line_len - 3, BORDER);
            }
            self.glyphs[start + line_len - 1] = '\n';
        }
    }

    /// Redraw the interior for the given snake (head first) and food.
    ///
    /// Snake cells take precedence over food; head and body share a glyph.
    pub fn draw(&mut self, snake: &[Cell], food: Cell) {
        if self.is_first_render {
            self.draw_border();
            self.is_first_render = false;
        }

        let line_len = self.line_len();
        for x in 0..self.width {
            let start = (x + 1) * line_len + 2;
            for y in 0..self.height {
                self.put(start + y * 2, EMPTY);
            }
        }

        let food_at = self.offset(food);
        self.put(food_at, FOOD);
        for &cell in snake {
            let at = self.offset(cell);
            self.put(at, SNAKE);
        }

        // Glyphs vary in UTF-8 width, so the string view is re-encoded whole
        self.text.clear();
        self.text.extend(self.glyphs.iter());
    }

    /// The rendered board as text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The rendered board as character units.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }
}
