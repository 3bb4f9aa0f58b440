//! Driver stack for EA-DOG series monochrome GLCDs and ILI9341 color TFTs
//!
//! The display memory of the EA-DOG controllers is organised in vertical
//! bytes: one "page" is a row of 8 pixels, one "column" is a single pixel
//! wide. On top of that addressing model this crate layers a font renderer
//! that walks packed, read-only glyph tables and blits characters byte by
//! byte, with optional invert, underline, double-size, wrap and spacing
//! styles.
//!
//! ## Architecture
//!
//! - [`surface::DisplaySurface`] is the contract the font renderer draws
//!   through: write a command or data byte, move the write cursor, read it
//!   back. Both drivers implement it.
//! - [`dogm::Dogm`] drives the EA-DOG monochrome family (DOGS102, DOGM128,
//!   DOGM132, DOGL128, DOGXL160, DOGXL240) over 4-wire SPI.
//! - [`ili9341::Ili9341`] drives an ILI9341-class 16-bit color TFT and
//!   translates the page/column font output into foreground/background
//!   pixel runs.
//! - [`font`] holds the glyph tables, the locator and the renderer.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dogm_lcd::prelude::*;
//!
//! let interface = DisplayInterface::new(spi, dc, rst, delay);
//! let mut lcd = Dogm::new(interface, DisplayKind::Dogm128, Orientation::BottomView)?;
//!
//! let text = TextContext::new(&font::FIXED_8, Style::NORMAL | Style::WRAP);
//! text.put_str_at(&mut lcd, "Hello", 0, 0)?;
//! ```
//!
//! The target environment is a single-threaded control loop: the cursor and
//! the current font selection are plain mutable state owned by the driver
//! and the [`font::TextContext`], with no locking.
#![no_std]
#![deny(missing_docs)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub use display_interface::DisplayError;

pub mod dogm;
pub mod font;
pub mod ili9341;
pub mod interface;
pub mod surface;

/// Errors reported by the drivers and the font engine.
#[derive(Debug, Clone)]
pub enum Error {
    /// The SPI bus or a control pin failed. Surfaced unchanged, never retried.
    Bus(DisplayError),
    /// The character code is outside the `[first_char, last_char]` range of
    /// the selected font. The glyph data is never touched in this case.
    CharacterNotInFont(u8),
    /// A numeric value does not fit the fixed text formatting buffer.
    NumericOverflow,
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Error::Bus(e)
    }
}

/// Useful exports
pub mod prelude {
    pub use crate::dogm::{DisplayKind, Dogm, Orientation};
    pub use crate::font::{self, Font, Style, TextContext};
    pub use crate::ili9341::{Color, Ili9341};
    pub use crate::interface::DisplayInterface;
    pub use crate::surface::DisplaySurface;
    pub use crate::Error;
}

// =======================
// For unit tests only!
#[cfg(test)]
#[macro_use]
extern crate std;
// =======================
