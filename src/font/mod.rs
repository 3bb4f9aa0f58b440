//! Glyph tables and the text renderer
//!
//! Fonts are read-only byte tables organized for displays with vertical
//! memory: each glyph is stored column by column, and every column takes
//! `height_bytes` consecutive bytes with the least significant bit at the
//! top. The table layout is compatible with Hagen Reddmann's FontEditor
//! output (uncompressed, font heights in multiples of 8).
//!
//! Fixed width fonts drop the per-character width table; proportional
//! fonts carry one and glyph offsets are found by summing the widths of
//! all preceding characters.

mod fonts;
mod render;

pub use fonts::{DIGITS_8, FIXED_8};
pub use render::{Style, TextContext};

use crate::Error;

/// A font table.
///
/// All fields are public so additional fonts can be declared as constants
/// in application code; the layout mirrors the FontEditor record format.
#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    /// Total size of the glyph data in bytes
    pub data_size: u16,
    /// Character width in columns, the default when no width table exists
    pub width: u8,
    /// Character height in pixels
    pub height: u8,
    /// First character code present in the table
    pub first_char: u8,
    /// Last character code present in the table
    pub last_char: u8,
    /// Per-character widths for proportional fonts
    pub width_table: Option<&'a [u8]>,
    /// Packed glyph data, column-major, vertical bytes
    pub data: &'a [u8],
}

impl Font<'_> {
    /// Height of one glyph column in bytes.
    pub const fn height_bytes(&self) -> u8 {
        ((self.height - 1) >> 3) + 1
    }

    /// Width of the given character in columns, without spacing.
    pub fn char_width(&self, code: u8) -> Result<u8, Error> {
        let index = self.char_index(code)?;
        Ok(match self.width_table {
            Some(table) => table[index],
            None => self.width,
        })
    }

    /// Find the glyph for a character code.
    ///
    /// Returns the offset of its first byte in [`Font::data`] and its width
    /// in columns. For proportional fonts the offset is the sum of all
    /// preceding widths; the tables are small enough that recomputing the
    /// sum on every lookup is not worth avoiding.
    pub fn locate(&self, code: u8) -> Result<(usize, u8), Error> {
        let index = self.char_index(code)?;
        let height_bytes = usize::from(self.height_bytes());
        match self.width_table {
            None => {
                let offset = index * usize::from(self.width) * height_bytes;
                Ok((offset, self.width))
            }
            Some(table) => {
                let columns: usize =
                    table[..index].iter().map(|&w| usize::from(w)).sum();
                Ok((columns * height_bytes, table[index]))
            }
        }
    }

    fn char_index(&self, code: u8) -> Result<usize, Error> {
        if code < self.first_char || code > self.last_char {
            return Err(Error::CharacterNotInFont(code));
        }
        Ok(usize::from(code - self.first_char))
    }
}
