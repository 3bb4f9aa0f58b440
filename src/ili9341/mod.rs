//! ILI9341 color TFT driver
//!
//! Drives an ILI9341-class LCD in 16-bit color mode over 4-wire SPI. Besides
//! plain pixel and area access, the driver carries a compatibility layer for
//! the font renderer: a software cursor counted in page/column units (pages
//! are 8 pixels tall) and a data path that expands each vertical font byte
//! into a run of foreground/background pixels.

mod cmd;
mod driver;

pub use driver::{Color, Ili9341};

/// Display width, pixels horizontally
pub const WIDTH: u16 = 240;

/// Display height, pixels vertically
pub const HEIGHT: u16 = 320;
