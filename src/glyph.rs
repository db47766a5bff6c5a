//! Fixed letter bitmaps for the painted word.
//!
//! Every glyph is exactly seven rows tall, one row per weekday starting on
//! Sunday, so a glyph column maps onto one week of the contribution calendar.

/// Height of every glyph; mirrors the seven days of a calendar week.
pub const GLYPH_HEIGHT: usize = 7;

/// Empty columns between consecutive letters.
pub const LETTER_GAP: usize = 1;

/// A 7-row bitmap stored row by row. A cell is lit when it holds `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    letter: char,
    rows: [&'static [u8]; GLYPH_HEIGHT],
}

impl Glyph {
    pub const fn new(letter: char, rows: [&'static [u8]; GLYPH_HEIGHT]) -> Self {
        Self { letter, rows }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    /// Number of columns, taken from the first row.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Out-of-range cells read as unlit.
    pub fn is_lit(&self, row: usize, column: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(|&cell| cell == 1)
            .unwrap_or(false)
    }

    pub fn lit_cells(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.iter().filter(|&&cell| cell == 1).count())
            .sum()
    }
}

pub const LETTER_R: Glyph = Glyph::new(
    'R',
    [
        &[1, 1, 1, 1, 1],
        &[1, 0, 0, 0, 1],
        &[1, 1, 1, 1, 1],
        &[1, 0, 1, 0, 0],
        &[1, 0, 0, 1, 0],
        &[1, 0, 0, 0, 1],
        &[1, 0, 0, 0, 1],
    ],
);

pub const LETTER_A: Glyph = Glyph::new(
    'A',
    [
        &[0, 1, 1, 1, 0],
        &[1, 0, 0, 0, 1],
        &[1, 0, 0, 0, 1],
        &[1, 1, 1, 1, 1],
        &[1, 0, 0, 0, 1],
        &[1, 0, 0, 0, 1],
        &[1, 0, 0, 0, 1],
    ],
);

pub const LETTER_Z: Glyph = Glyph::new(
    'Z',
    [
        &[1, 1, 1, 1, 1],
        &[0, 0, 0, 0, 1],
        &[0, 0, 0, 1, 0],
        &[0, 0, 1, 0, 0],
        &[0, 1, 0, 0, 0],
        &[1, 0, 0, 0, 0],
        &[1, 1, 1, 1, 1],
    ],
);

pub const LETTER_T: Glyph = Glyph::new(
    'T',
    [
        &[1, 1, 1, 1, 1],
        &[0, 0, 1, 0, 0],
        &[0, 0, 1, 0, 0],
        &[0, 0, 1, 0, 0],
        &[0, 0, 1, 0, 0],
        &[0, 0, 1, 0, 0],
        &[0, 0, 1, 0, 0],
    ],
);

pub const LETTER_O: Glyph = Glyph::new(
    'O',
    [
        &[0, 1, 1, 1, 0],
        &[1, 0, 0, 0, 1],
        &[1, 0, 0, 0, 1],
        &[1, 0, 0, 0, 1],
        &[1, 0, 0, 0, 1],
        &[1, 0, 0, 0, 1],
        &[0, 1, 1, 1, 0],
    ],
);

/// An ordered run of glyphs separated by a fixed number of blank columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub glyphs: Vec<Glyph>,
    pub gap: usize,
}

impl Word {
    pub fn new(glyphs: Vec<Glyph>, gap: usize) -> Self {
        Self { glyphs, gap }
    }

    /// The compiled-in word.
    pub fn raztor() -> Self {
        Self::new(
            vec![LETTER_R, LETTER_A, LETTER_Z, LETTER_T, LETTER_O, LETTER_R],
            LETTER_GAP,
        )
    }

    pub fn text(&self) -> String {
        self.glyphs.iter().map(Glyph::letter).collect()
    }

    /// Total columns covered, gaps between letters included.
    pub fn width(&self) -> usize {
        let letters: usize = self.glyphs.iter().map(Glyph::width).sum();
        letters + self.gap * self.glyphs.len().saturating_sub(1)
    }

    pub fn lit_cells(&self) -> usize {
        self.glyphs.iter().map(Glyph::lit_cells).sum()
    }
}

impl Default for Word {
    fn default() -> Self {
        Self::raztor()
    }
}
