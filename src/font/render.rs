//! Glyph and text output
//!
//! [`put_char`] blits one glyph through a [`DisplaySurface`], row of pages
//! by row of pages, applying the style modifiers on the fly. Nothing is
//! buffered: every transformed byte goes straight to the display, and the
//! cursor is driven with relative moves so the next character continues at
//! the top right corner of the previous one.

use crate::font::Font;
use crate::surface::DisplaySurface;
use crate::Error;

/// Style modifiers for text output. Combine with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style(u8);

#[allow(missing_docs)]
impl Style {
    pub const NORMAL: Style = Style(0x00);
    /// Each glyph row is printed twice, pixels stretched vertically
    pub const DOUBLE_HEIGHT: Style = Style(0x01);
    /// Each glyph column is printed twice
    pub const DOUBLE_WIDTH: Style = Style(0x02);
    pub const DOUBLE_SIZE: Style = Style(0x03);
    /// Swap foreground and background
    pub const INVERT: Style = Style(0x04);
    /// Continue on the next line when a glyph does not fit the current one
    pub const WRAP: Style = Style(0x08);
    pub const UNDERLINE: Style = Style(0x10);
    /// 3 blank columns between characters instead of 1
    pub const SPACING: Style = Style(0x20);

    /// Whether all bits of `other` are set in `self`.
    pub const fn contains(self, other: Style) -> bool {
        self.0 & other.0 == other.0
    }
}

impl core::ops::BitOr for Style {
    type Output = Style;

    fn bitor(self, rhs: Style) -> Style {
        Style(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for Style {
    fn bitor_assign(&mut self, rhs: Style) {
        self.0 |= rhs.0;
    }
}

/// Doubles the bits of one nibble of `byte` into a full byte:
///
/// ```text
/// part = 0:  abcdefgh -> eeffgghh
/// part = 1:  abcdefgh -> aabbccdd
/// ```
///
/// Used for double height output, where each glyph row expands into two
/// display rows.
fn double_bits(part: u8, byte: u8) -> u8 {
    let nibble = if part != 0 { byte >> 4 } else { byte };
    let mut out = 0;
    if nibble & 0x08 != 0 {
        out = 0xC0;
    }
    if nibble & 0x04 != 0 {
        out |= 0x30;
    }
    if nibble & 0x02 != 0 {
        out |= 0x0C;
    }
    if nibble & 0x01 != 0 {
        out |= 0x03;
    }
    out
}

/// Outputs a character on the display, using the given font and style.
///
/// Returns the width of the printed character in columns, spacing included.
/// Afterwards the cursor sits at the top right corner of the character, so
/// consecutive calls produce a line of text. With [`Style::WRAP`] set, a
/// character that does not fit the current line is printed at the start of
/// the next one instead; a space that triggered such a wrap is swallowed
/// and reports width 0.
///
/// On a surface with two pixel rows per data bit, glyphs are always
/// rendered double height so they keep their aspect ratio.
pub fn put_char<S>(
    surface: &mut S,
    font: &Font<'_>,
    style: Style,
    code: u8,
) -> Result<u16, Error>
where
    S: DisplaySurface,
{
    let (offset, char_width) = font.locate(code)?;
    let height_bytes = font.height_bytes();

    let hscale: u8 = if surface.double_pixel() || style.contains(Style::DOUBLE_HEIGHT) {
        1
    } else {
        0
    };
    let wscale: u8 = if style.contains(Style::DOUBLE_WIDTH) { 1 } else { 0 };
    let underline: u8 = if style.contains(Style::UNDERLINE) { 0x80 } else { 0x00 };
    let invert: u8 = if style.contains(Style::INVERT) { 0xFF } else { 0x00 };
    let spacing: u8 = if style.contains(Style::SPACING) { 3 } else { 1 };

    let final_width = (u16::from(char_width) + u16::from(spacing)) << wscale;
    let final_height = height_bytes << hscale;

    if style.contains(Style::WRAP)
        && surface.column() + final_width > surface.width()
    {
        surface.move_to(surface.page().wrapping_add(final_height), 0)?;
        if code == b' ' {
            return Ok(0);
        }
    }

    let glyph_len = usize::from(char_width) * usize::from(height_bytes);
    for row in 0..final_height {
        let mut index = usize::from(row >> hscale);
        while index < glyph_len {
            let mut byte = font.data[offset + index];
            if row == final_height - 1 {
                byte |= underline;
            }
            if hscale != 0 {
                byte = double_bits(row & 1, byte);
            }
            if invert != 0 {
                byte = !byte;
            }
            surface.write_data(byte)?;
            if wscale != 0 {
                surface.write_data(byte)?;
            }
            index += usize::from(height_bytes);
        }
        // gap between characters, continuing underline and inversion
        let mut filler = invert;
        if row == final_height - 1 {
            filler ^= underline;
            if hscale != 0 {
                filler ^= underline >> 1;
            }
        }
        for _ in 0..(u16::from(spacing) << wscale) {
            surface.write_data(filler)?;
        }
        surface.move_by(1, -(final_width as i16))?;
    }

    // back up to the top right corner of the character
    surface.move_by(-(final_height as i8), final_width as i16)?;
    Ok(final_width)
}

const NUM_BUF: usize = 11;

/// Formats a signed integer into `buf`, returning the used tail slice.
fn format_i32(value: i32, buf: &mut [u8; NUM_BUF]) -> &[u8] {
    let mut pos = NUM_BUF;
    let mut rest = value.unsigned_abs();
    loop {
        pos -= 1;
        buf[pos] = b'0' + (rest % 10) as u8;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    if value < 0 {
        pos -= 1;
        buf[pos] = b'-';
    }
    &buf[pos..]
}

/// Current font and style for text output.
///
/// Replaces a pair of per-call parameters on every print function with one
/// explicit selection, so `text.put_str(&mut lcd, "...")` reads like the
/// usual putc/putstr pair.
#[derive(Debug, Clone, Copy)]
pub struct TextContext<'f> {
    font: &'f Font<'f>,
    style: Style,
}

impl<'f> TextContext<'f> {
    /// Selects a font and style for subsequent output.
    pub fn new(font: &'f Font<'f>, style: Style) -> Self {
        TextContext { font, style }
    }

    /// Replaces the font and style.
    pub fn set_font(&mut self, font: &'f Font<'f>, style: Style) {
        self.font = font;
        self.style = style;
    }

    /// Outputs a single character. Returns its width in columns.
    ///
    /// Signals [`Error::CharacterNotInFont`] for codes the font does not
    /// cover.
    pub fn put_char<S>(&self, surface: &mut S, code: u8) -> Result<u16, Error>
    where
        S: DisplaySurface,
    {
        put_char(surface, self.font, self.style, code)
    }

    /// Outputs a single character at the given position.
    pub fn put_char_at<S>(
        &self,
        surface: &mut S,
        code: u8,
        page: u8,
        column: u16,
    ) -> Result<u16, Error>
    where
        S: DisplaySurface,
    {
        surface.move_to(page, column)?;
        self.put_char(surface, code)
    }

    /// Outputs a string. Returns the total width of the printed text.
    ///
    /// Characters the font does not cover are skipped with width 0.
    pub fn put_str<S>(&self, surface: &mut S, text: &str) -> Result<u16, Error>
    where
        S: DisplaySurface,
    {
        self.put_bytes(surface, text.as_bytes())
    }

    /// Outputs a string at the given position.
    pub fn put_str_at<S>(
        &self,
        surface: &mut S,
        text: &str,
        page: u8,
        column: u16,
    ) -> Result<u16, Error>
    where
        S: DisplaySurface,
    {
        surface.move_to(page, column)?;
        self.put_str(surface, text)
    }

    /// Outputs raw character codes, e.g. symbol font indices.
    pub fn put_bytes<S>(&self, surface: &mut S, bytes: &[u8]) -> Result<u16, Error>
    where
        S: DisplaySurface,
    {
        let mut width = 0;
        for &code in bytes {
            match put_char(surface, self.font, self.style, code) {
                Ok(w) => width += w,
                Err(Error::CharacterNotInFont(_)) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(width)
    }

    /// Outputs a 32 bit signed integer.
    pub fn put_i32<S>(&self, surface: &mut S, value: i32) -> Result<u16, Error>
    where
        S: DisplaySurface,
    {
        let mut buf = [0u8; NUM_BUF];
        let digits = format_i32(value, &mut buf);
        self.put_bytes(surface, digits)
    }

    /// Outputs a 16 bit signed integer.
    pub fn put_i16<S>(&self, surface: &mut S, value: i16) -> Result<u16, Error>
    where
        S: DisplaySurface,
    {
        self.put_i32(surface, i32::from(value))
    }

    /// Outputs a 16 bit unsigned integer.
    pub fn put_u16<S>(&self, surface: &mut S, value: u16) -> Result<u16, Error>
    where
        S: DisplaySurface,
    {
        self.put_i32(surface, i32::from(value))
    }

    /// Outputs an 8 bit signed integer.
    pub fn put_i8<S>(&self, surface: &mut S, value: i8) -> Result<u16, Error>
    where
        S: DisplaySurface,
    {
        self.put_i32(surface, i32::from(value))
    }

    /// Outputs a float with one fractional digit, rounded half away from
    /// zero.
    ///
    /// Signals [`Error::NumericOverflow`] for values whose representation
    /// does not fit 32 bits and for NaN or infinite input.
    pub fn put_f32<S>(&self, surface: &mut S, value: f32) -> Result<u16, Error>
    where
        S: DisplaySurface,
    {
        if !value.is_finite() {
            return Err(Error::NumericOverflow);
        }
        let scaled = value * 10.0 + if value < 0.0 { -0.5 } else { 0.5 };
        if scaled <= i32::MIN as f32 || scaled >= i32::MAX as f32 {
            return Err(Error::NumericOverflow);
        }
        let scaled = scaled as i32;

        let mut width = 0;
        if (-9..0).contains(&scaled) {
            // the integer part is zero, the sign must be printed by hand
            width += self.put_char(surface, b'-')?;
        }
        width += self.put_i32(surface, scaled / 10)?;
        width += self.put_char(surface, b'.')?;
        width += self.put_char(surface, b'0' + (scaled % 10).unsigned_abs() as u8)?;
        Ok(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{DIGITS_8, FIXED_8};
    use display_interface::DisplayError;
    use std::vec::Vec;

    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    enum Event {
        Data(u8),
        MoveTo(u8, u16),
        MoveBy(i8, i16),
    }

    /// Test surface recording everything the renderer emits.
    struct Recorder {
        events: Vec<Event>,
        page: u8,
        column: u16,
        width: u16,
        double: bool,
    }

    impl Recorder {
        fn new(width: u16) -> Self {
            Recorder { events: Vec::new(), page: 0, column: 0, width, double: false }
        }

        fn data(&self) -> Vec<u8> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::Data(b) => Some(*b),
                    _ => None,
                })
                .collect()
        }
    }

    impl DisplaySurface for Recorder {
        fn write_command(&mut self, _command: u8) -> Result<(), DisplayError> {
            Ok(())
        }

        fn write_data(&mut self, data: u8) -> Result<(), DisplayError> {
            self.events.push(Event::Data(data));
            self.column += 1;
            Ok(())
        }

        fn move_to(&mut self, page: u8, column: u16) -> Result<(), DisplayError> {
            self.events.push(Event::MoveTo(page, column));
            self.page = page;
            self.column = column;
            Ok(())
        }

        fn move_by(&mut self, pages: i8, columns: i16) -> Result<(), DisplayError> {
            self.events.push(Event::MoveBy(pages, columns));
            self.page = self.page.wrapping_add_signed(pages);
            self.column = (i32::from(self.column) + i32::from(columns)) as u16;
            Ok(())
        }

        fn page(&self) -> u8 {
            self.page
        }

        fn column(&self) -> u16 {
            self.column
        }

        fn width(&self) -> u16 {
            self.width
        }

        fn double_pixel(&self) -> bool {
            self.double
        }
    }

    fn render(style: Style, code: u8) -> (Recorder, u16) {
        let mut surface = Recorder::new(128);
        let width = put_char(&mut surface, &FIXED_8, style, code).unwrap();
        (surface, width)
    }

    #[test]
    fn nibble_doubling() {
        assert_eq!(double_bits(0, 0b0000_1010), 0b1100_1100);
        assert_eq!(double_bits(0, 0b0000_0101), 0b0011_0011);
        assert_eq!(double_bits(1, 0b1010_0000), 0b1100_1100);
        assert_eq!(double_bits(1, 0b1111_0000), 0xFF);
        assert_eq!(double_bits(0, 0x00), 0x00);
    }

    #[test]
    fn normal_char_is_columns_plus_gap() {
        let (surface, width) = render(Style::NORMAL, b'A');
        assert_eq!(width, 6);
        assert_eq!(surface.data(), [0x7E, 0x11, 0x11, 0x11, 0x7E, 0x00]);
        // cursor at the top right corner
        assert_eq!(surface.page(), 0);
        assert_eq!(surface.column(), 6);
    }

    #[test]
    fn wide_spacing_adds_three_gap_columns() {
        let (surface, width) = render(Style::SPACING, b'A');
        assert_eq!(width, 8);
        assert_eq!(
            surface.data(),
            [0x7E, 0x11, 0x11, 0x11, 0x7E, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn invert_complements_every_byte() {
        let (normal, _) = render(Style::NORMAL, b'x');
        let (inverted, width) = render(Style::INVERT, b'x');
        assert_eq!(width, 6);
        let complement: Vec<u8> = normal.data().iter().map(|b| !b).collect();
        assert_eq!(inverted.data(), complement);
    }

    #[test]
    fn double_width_emits_every_byte_twice() {
        let (normal, normal_width) = render(Style::NORMAL, b'R');
        let (doubled, doubled_width) = render(Style::DOUBLE_WIDTH, b'R');
        assert_eq!(doubled_width, normal_width * 2);
        let expected: Vec<u8> =
            normal.data().iter().flat_map(|&b| [b, b]).collect();
        assert_eq!(doubled.data(), expected);
    }

    #[test]
    fn double_height_spans_two_pages() {
        let (surface, width) = render(Style::DOUBLE_HEIGHT, b'A');
        assert_eq!(width, 6);
        let data = surface.data();
        assert_eq!(data.len(), 12);
        // top row doubles the low nibbles, bottom row the high nibbles
        assert_eq!(data[0], double_bits(0, 0x7E));
        assert_eq!(data[6], double_bits(1, 0x7E));
        // two rows were written, cursor back on the first page
        assert_eq!(surface.page(), 0);
        assert_eq!(surface.column(), 6);
    }

    #[test]
    fn underline_changes_only_the_last_row() {
        let (normal, _) = render(Style::DOUBLE_HEIGHT, b'i');
        let (underlined, _) = render(Style::DOUBLE_HEIGHT | Style::UNDERLINE, b'i');
        let plain = normal.data();
        let lined = underlined.data();
        assert_eq!(plain[..6], lined[..6]);
        // bottom row carries the two underline pixels in every column,
        // the gap column included
        for (p, l) in plain[6..].iter().zip(&lined[6..]) {
            assert_eq!(*p | 0xC0, *l);
        }
        assert_eq!(lined[11], 0xC0);
    }

    #[test]
    fn single_row_underline_sets_the_bottom_pixel() {
        let (normal, _) = render(Style::NORMAL, b'i');
        let (underlined, _) = render(Style::UNDERLINE, b'i');
        let expected: Vec<u8> = normal.data().iter().map(|b| b | 0x80).collect();
        assert_eq!(underlined.data(), expected);
    }

    #[test]
    fn wrap_moves_to_next_line_before_writing() {
        let mut surface = Recorder::new(20);
        surface.move_to(2, 17).unwrap();
        surface.events.clear();

        let width = put_char(&mut surface, &FIXED_8, Style::WRAP, b'A').unwrap();
        assert_eq!(width, 6);
        assert_eq!(surface.events[0], Event::MoveTo(3, 0));
        assert!(matches!(surface.events[1], Event::Data(_)));
        assert_eq!(surface.page(), 3);
        assert_eq!(surface.column(), 6);
    }

    #[test]
    fn space_that_caused_a_wrap_is_swallowed() {
        let mut surface = Recorder::new(20);
        surface.move_to(0, 17).unwrap();
        surface.events.clear();

        let width = put_char(&mut surface, &FIXED_8, Style::WRAP, b' ').unwrap();
        assert_eq!(width, 0);
        assert_eq!(surface.events, [Event::MoveTo(1, 0)]);
    }

    #[test]
    fn forced_double_pixel_surface_doubles_height() {
        let mut surface = Recorder::new(160);
        surface.double = true;
        put_char(&mut surface, &FIXED_8, Style::NORMAL, b'T').unwrap();
        assert_eq!(surface.data().len(), 12);
    }

    #[test]
    fn string_width_is_the_sum_of_character_widths() {
        let text = TextContext::new(&FIXED_8, Style::NORMAL);

        let mut expected = 0;
        for code in b"Hi there" {
            let mut surface = Recorder::new(128);
            expected += text.put_char(&mut surface, *code).unwrap();
        }

        let mut surface = Recorder::new(128);
        let width = text.put_str(&mut surface, "Hi there").unwrap();
        assert_eq!(width, expected);
        assert_eq!(surface.column(), width);
    }

    #[test]
    fn unknown_characters_in_strings_are_skipped() {
        let text = TextContext::new(&DIGITS_8, Style::NORMAL);
        let mut surface = Recorder::new(128);
        let width = text.put_str(&mut surface, "4x2").unwrap();

        let mut reference = Recorder::new(128);
        let expected = text.put_str(&mut reference, "42").unwrap();
        assert_eq!(width, expected);
        assert_eq!(surface.data(), reference.data());
    }

    #[test]
    fn single_unknown_character_is_an_error() {
        let text = TextContext::new(&DIGITS_8, Style::NORMAL);
        let mut surface = Recorder::new(128);
        assert!(matches!(
            text.put_char(&mut surface, b'A'),
            Err(Error::CharacterNotInFont(b'A'))
        ));
        assert!(surface.events.is_empty());
    }

    #[test]
    fn integer_formatting() {
        let mut buf = [0u8; NUM_BUF];
        assert_eq!(format_i32(0, &mut buf), b"0");
        let mut buf = [0u8; NUM_BUF];
        assert_eq!(format_i32(-1234, &mut buf), b"-1234");
        let mut buf = [0u8; NUM_BUF];
        assert_eq!(format_i32(i32::MIN, &mut buf), b"-2147483648");
        let mut buf = [0u8; NUM_BUF];
        assert_eq!(format_i32(i32::MAX, &mut buf), b"2147483647");
    }

    #[test]
    fn integers_render_like_their_decimal_string() {
        let text = TextContext::new(&DIGITS_8, Style::NORMAL);

        let mut surface = Recorder::new(240);
        let width = text.put_i16(&mut surface, -307).unwrap();
        let mut reference = Recorder::new(240);
        let expected = text.put_str(&mut reference, "-307").unwrap();
        assert_eq!(width, expected);
        assert_eq!(surface.data(), reference.data());
    }

    #[test]
    fn floats_round_to_one_fractional_digit() {
        let text = TextContext::new(&DIGITS_8, Style::NORMAL);

        for (value, expected) in [
            (3.14, "3.1"),
            (1.25, "1.3"),
            (-0.25, "-0.3"),
            (-0.9, "-0.9"),
            (-1.0, "-1.0"),
            (-0.96, "-1.0"),
            (-12.04, "-12.0"),
            (0.0, "0.0"),
        ] {
            let mut surface = Recorder::new(240);
            text.put_f32(&mut surface, value).unwrap();
            let mut reference = Recorder::new(240);
            text.put_str(&mut reference, expected).unwrap();
            assert_eq!(surface.data(), reference.data(), "{}", value);
        }
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        let text = TextContext::new(&DIGITS_8, Style::NORMAL);
        let mut surface = Recorder::new(240);
        assert!(matches!(
            text.put_f32(&mut surface, f32::NAN),
            Err(Error::NumericOverflow)
        ));
        assert!(matches!(
            text.put_f32(&mut surface, f32::INFINITY),
            Err(Error::NumericOverflow)
        ));
        assert!(surface.events.is_empty());
    }
}
