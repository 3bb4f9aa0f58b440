//! ILI9341 driver implementation: bring-up, pixel access and the
//! page/column compatibility layer for the font renderer.

use display_interface::DisplayError;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::ili9341::cmd::{Cmd, Flag};
use crate::ili9341::{HEIGHT, WIDTH};
use crate::interface::DisplayInterface;
use crate::surface::DisplaySurface;

/// One 16-bit color, kept as separate 5/6/5 bit components.
///
/// No packing is done until the pixel is sent: the shifts happen while the
/// previous SPI byte is still on the wire, not while preparing the pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red component, 5 significant bits
    pub red: u8,
    /// Green component, 6 significant bits
    pub green: u8,
    /// Blue component, 5 significant bits
    pub blue: u8,
}

impl Color {
    /// Full white
    pub const WHITE: Color = Color { red: 0x1F, green: 0x3F, blue: 0x1F };
    /// Full black
    pub const BLACK: Color = Color { red: 0, green: 0, blue: 0 };

    /// The two bytes sent over the bus for this color.
    pub(crate) const fn encode(self) -> [u8; 2] {
        [
            (self.red << 3) | (self.green >> 3),
            (self.green << 5) | self.blue,
        ]
    }
}

/// ILI9341 color TFT driver.
///
/// Holds a foreground color (the normal drawing color) and a background
/// color (used behind fonts and for area clears), plus the software cursor
/// of the font compatibility layer. Pages are counted in units of 8 pixels.
pub struct Ili9341<SPI, DC, RST, DELAY> {
    interface: DisplayInterface<SPI, DC, RST, DELAY>,
    foreground: Color,
    background: Color,
    page: u16,
    column: u16,
}

impl<SPI, DC, RST, DELAY> Ili9341<SPI, DC, RST, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Create the driver and wake the panel up.
    pub fn new(
        interface: DisplayInterface<SPI, DC, RST, DELAY>,
    ) -> Result<Self, DisplayError> {
        let mut lcd = Self::from_interface(interface);
        lcd.init()?;
        Ok(lcd)
    }

    /// Create the driver from an existing interface without initialization.
    pub fn from_interface(interface: DisplayInterface<SPI, DC, RST, DELAY>) -> Self {
        Ili9341 {
            interface,
            foreground: Color::WHITE,
            background: Color::BLACK,
            page: 0,
            column: 0,
        }
    }

    /// Reset the controller, leave sleep mode and switch the display on in
    /// 16-bit color mode.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        log::info!("Initializing ILI9341 display");
        self.interface.reset(100, 100)?;
        self.interface.cmd(Cmd::SLEEP_OUT)?;
        self.interface.delay.delay_ms(70);
        self.interface.cmd_with_data(Cmd::COLOR_MODE, &[Flag::COLOR_16BIT])?;
        self.interface.cmd(Cmd::DISPLAY_ON)?;
        Ok(())
    }

    /// Stores the main drawing color for later use.
    pub fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
    }

    /// Stores the background color for later use.
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Sets the column range used for the next write operation.
    pub fn set_column_range(&mut self, start: u16, end: u16) -> Result<(), DisplayError> {
        self.interface.cmd_with_data(
            Cmd::SET_COLUMN,
            &[(start >> 8) as u8, start as u8, (end >> 8) as u8, end as u8],
        )
    }

    /// Sets the pixel row range used for the next write operation.
    pub fn set_page_range(&mut self, start: u16, end: u16) -> Result<(), DisplayError> {
        self.interface.cmd_with_data(
            Cmd::SET_PAGE,
            &[(start >> 8) as u8, start as u8, (end >> 8) as u8, end as u8],
        )
    }

    /// Writes one pixel. The display must be in memory write mode.
    pub fn send_pixel(&mut self, color: Color) -> Result<(), DisplayError> {
        self.interface.data(&color.encode())
    }

    /// Sets the pixel at the given position to the foreground color.
    pub fn set_pixel_at(&mut self, column: u16, row: u16) -> Result<(), DisplayError> {
        self.set_page_range(row, row)?;
        self.set_column_range(column, column)?;
        self.interface.cmd(Cmd::WRITE_MEM)?;
        self.send_pixel(self.foreground)
    }

    /// Fills an area with the background color. Edges are inclusive and
    /// given in pixels.
    pub fn fill_area(
        &mut self,
        col0: u16,
        col1: u16,
        row0: u16,
        row1: u16,
    ) -> Result<(), DisplayError> {
        self.set_column_range(col0, col1)?;
        self.set_page_range(row0, row1)?;
        self.interface.cmd(Cmd::WRITE_MEM)?;
        let pixels =
            u32::from(col1 - col0 + 1) * u32::from(row1 - row0 + 1);
        let [hi, lo] = self.background.encode();
        if hi == lo {
            self.interface.data_x_times(hi, pixels * 2)
        } else {
            for _ in 0..pixels {
                self.interface.data(&[hi, lo])?;
            }
            Ok(())
        }
    }

    /// Takes one vertical byte from the font renderer and prints it as 8
    /// foreground/background pixels, least significant bit on top.
    fn write_font_byte(&mut self, mut pattern: u8) -> Result<(), DisplayError> {
        let top = 8 * self.page;
        self.set_page_range(top, top + 7)?;
        self.set_column_range(self.column, self.column)?;
        self.interface.cmd(Cmd::WRITE_MEM)?;
        for _ in 0..8 {
            let color = if pattern & 1 != 0 { self.foreground } else { self.background };
            self.send_pixel(color)?;
            pattern >>= 1;
        }
        self.inc_column(1);
        Ok(())
    }

    /// Changes the cursor page by `s`; motion past the panel edge resets
    /// the page to the origin.
    fn inc_page(&mut self, s: i16) -> u16 {
        let p = i32::from(self.page) + i32::from(s);
        self.page = if p < 0 || p >= i32::from(HEIGHT / 8) { 0 } else { p as u16 };
        self.page
    }

    /// Changes the cursor column by `s`; motion past the panel edge resets
    /// the column to the origin.
    fn inc_column(&mut self, s: i16) -> u16 {
        let c = i32::from(self.column) + i32::from(s);
        self.column = if c < 0 || c >= i32::from(WIDTH) { 0 } else { c as u16 };
        self.column
    }
}

impl<SPI, DC, RST, DELAY> DisplaySurface for Ili9341<SPI, DC, RST, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    fn write_command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.interface.cmd(command)
    }

    fn write_data(&mut self, data: u8) -> Result<(), DisplayError> {
        self.write_font_byte(data)
    }

    // the write window is set per font byte, moving the software cursor
    // needs no controller commands
    fn move_to(&mut self, page: u8, column: u16) -> Result<(), DisplayError> {
        self.page = u16::from(page);
        self.column = column;
        Ok(())
    }

    fn move_by(&mut self, pages: i8, columns: i16) -> Result<(), DisplayError> {
        self.inc_page(i16::from(pages));
        self.inc_column(columns);
        Ok(())
    }

    fn page(&self) -> u8 {
        self.page as u8
    }

    fn column(&self) -> u16 {
        self.column
    }

    fn width(&self) -> u16 {
        WIDTH
    }
}
