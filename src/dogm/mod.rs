//! EA-DOG monochrome GLCD driver
//!
//! Supports the EA-DOGS102 (102x64), EA-DOGM128/EA-DOGL128 (128x64),
//! EA-DOGM132 (132x32), EA-DOGXL160 (160x104) and EA-DOGXL240 (240x128)
//! panels over 4-wire SPI.
//!
//! No graphics RAM is kept on the host: data written to the LCD cannot be
//! read back, and single pixels cannot be changed. The driver tracks the
//! controller's write position in a software cursor (page/column), which is
//! what the font renderer in [`crate::font`] builds on.

mod cmd;
mod driver;

pub use driver::Dogm;

/// The supported EA-DOG panel variants.
///
/// Carries the per-panel geometry the original compile-time configuration
/// selected: width, height, RAM pages and the column shift needed for
/// top-view mounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    /// EA-DOGS102, 102x64, UC1701
    Dogs102,
    /// EA-DOGM128, 128x64, ST7565
    Dogm128,
    /// EA-DOGM132, 132x32, ST7565
    Dogm132,
    /// EA-DOGL128, 128x64, ST7565
    Dogl128,
    /// EA-DOGXL160, 160x104, UC1610 (two pixel rows per data bit)
    Dogxl160,
    /// EA-DOGXL240, 240x128, UC1611
    Dogxl240,
}

impl DisplayKind {
    /// Width of the panel in columns.
    pub const fn width(self) -> u16 {
        match self {
            DisplayKind::Dogs102 => 102,
            DisplayKind::Dogm128 | DisplayKind::Dogl128 => 128,
            DisplayKind::Dogm132 => 132,
            DisplayKind::Dogxl160 => 160,
            DisplayKind::Dogxl240 => 240,
        }
    }

    /// Height of the panel in pixels.
    pub const fn height(self) -> u16 {
        match self {
            DisplayKind::Dogs102 | DisplayKind::Dogm128 | DisplayKind::Dogl128 => 64,
            DisplayKind::Dogm132 => 32,
            DisplayKind::Dogxl160 => 104,
            DisplayKind::Dogxl240 => 128,
        }
    }

    /// Number of RAM pages. Relative page motion wraps modulo this count.
    pub const fn ram_pages(self) -> u8 {
        match self {
            DisplayKind::Dogs102 | DisplayKind::Dogm128 | DisplayKind::Dogl128 => 8,
            DisplayKind::Dogm132 => 4,
            DisplayKind::Dogxl160 => 26,
            DisplayKind::Dogxl240 => 16,
        }
    }

    /// The DOGXL160 packs 4 pixel rows per byte, so every data bit covers
    /// two pixel rows and glyphs must always be rendered double-height.
    pub const fn double_pixel(self) -> bool {
        matches!(self, DisplayKind::Dogxl160)
    }

    /// Column address offset required in top-view orientation.
    pub const fn topview_shift(self) -> u16 {
        match self {
            DisplayKind::Dogs102 => 30,
            DisplayKind::Dogm128 | DisplayKind::Dogl128 => 4,
            _ => 0,
        }
    }
}

/// Mounting orientation of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// 6 o'clock mode, normal orientation
    #[default]
    BottomView,
    /// 12 o'clock mode, reversed orientation
    TopView,
}
