//! EA-DOG driver implementation: bring-up, cursor tracking and raw byte
//! access to the display memory.

use display_interface::DisplayError;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::dogm::cmd::{Cmd, XlCmd};
use crate::dogm::{DisplayKind, Orientation};
use crate::font::Style;
use crate::interface::DisplayInterface;
use crate::surface::DisplaySurface;

/// EA-DOG monochrome GLCD driver.
///
/// Owns the bus interface and the software write cursor. The cursor is the
/// position the next [`write_data`] byte lands on; it is mirrored into the
/// controller with explicit page/column address commands whenever it is
/// moved, and advanced silently (the controller auto-increments) on data
/// writes.
///
/// [`write_data`]: DisplaySurface::write_data
pub struct Dogm<SPI, DC, RST, DELAY> {
    interface: DisplayInterface<SPI, DC, RST, DELAY>,
    kind: DisplayKind,
    orientation: Orientation,
    wrap_around: bool,
    page: u8,
    column: u16,
}

impl<SPI, DC, RST, DELAY> Dogm<SPI, DC, RST, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Create the driver and run the power-up sequence for the given panel.
    pub fn new(
        interface: DisplayInterface<SPI, DC, RST, DELAY>,
        kind: DisplayKind,
        orientation: Orientation,
    ) -> Result<Self, DisplayError> {
        let mut lcd = Self::from_interface(interface, kind, orientation);
        lcd.init()?;
        Ok(lcd)
    }

    /// Create the driver from an existing interface without initialization.
    pub fn from_interface(
        interface: DisplayInterface<SPI, DC, RST, DELAY>,
        kind: DisplayKind,
        orientation: Orientation,
    ) -> Self {
        Dogm {
            interface,
            kind,
            orientation,
            wrap_around: false,
            page: 0,
            column: 0,
        }
    }

    /// Continue output on the next page when a write or relative move runs
    /// past the edge of the display. Off by default.
    pub fn set_wrap_around(&mut self, wrap: bool) {
        self.wrap_around = wrap;
    }

    /// The panel variant this driver was built for.
    pub fn kind(&self) -> DisplayKind {
        self.kind
    }

    /// Initializes the display in the 4x booster scheme for 2.4-3.3V supply
    /// voltage according to the datasheet, then clears the display RAM and
    /// switches the display on.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        log::info!("Initializing {:?} display", self.kind);
        self.interface.reset(1, 10)?;

        match self.kind {
            DisplayKind::Dogm128 | DisplayKind::Dogl128 => {
                self.cmd(Cmd::START_LINE)?; // first RAM bit on the first line
                self.set_orientation_cmds()?;
                self.cmd(Cmd::ALL_PIXEL)?; // normal pixel mode
                self.cmd(Cmd::DISPLAY_INVERT)?; // positive display
                self.cmd(Cmd::BIAS | 1)?; // bias 1/7
                self.cmd(Cmd::POWER_CONTROL | 0x07)?; // all features on
                self.cmd(Cmd::VOLTAGE | 0x07)?; // voltage regulator R/R
                self.cmd_2(Cmd::VOLUME_MODE, 0x06)?;
                self.cmd_2(Cmd::INDICATOR, 0x00)?; // indicator off, no blinking
            }
            DisplayKind::Dogm132 => {
                self.cmd(Cmd::START_LINE)?;
                self.set_orientation_cmds()?;
                self.cmd(Cmd::ALL_PIXEL)?;
                self.cmd(Cmd::DISPLAY_INVERT)?;
                self.cmd(Cmd::BIAS)?; // bias 1/9
                self.cmd(Cmd::POWER_CONTROL | 0x07)?;
                self.cmd(Cmd::VOLTAGE | 0x03)?;
                self.cmd_2(Cmd::VOLUME_MODE, 0x1F)?;
                self.cmd_2(Cmd::INDICATOR, 0x00)?;
            }
            DisplayKind::Dogs102 => {
                self.cmd(Cmd::START_LINE)?;
                self.set_orientation_cmds()?;
                self.cmd(Cmd::ALL_PIXEL)?;
                self.cmd(Cmd::DISPLAY_INVERT)?;
                self.cmd(Cmd::BIAS)?; // bias 1/9
                self.cmd(Cmd::POWER_CONTROL | 0x07)?;
                self.cmd(Cmd::VOLTAGE | 0x07)?;
                self.cmd_2(Cmd::VOLUME_MODE, 0x09)?;
                self.cmd_2(Cmd::ADV_PROG_CTRL, Cmd::ADV_PROG_CTRL2 | Cmd::TEMPCOMP_HIGH)?;
            }
            DisplayKind::Dogxl160 => {
                self.cmd_2(XlCmd::COM_END, 103)?; // last COM electrode
                self.set_orientation_cmds()?;
                self.cmd(XlCmd::START_LINE)?; // scrolling off
                self.cmd(XlCmd::START_LINE2)?;
                self.cmd(XlCmd::PANEL_LOAD | 0x03)?; // 28-38nF
                self.cmd(XlCmd::BIAS_RATIO | 0x03)?;
                self.cmd_2(XlCmd::POTENTIOMETER, 0x5F)?; // Vbias for contrast
                self.cmd(XlCmd::RAM_ADDR_CTRL | 0x01)?; // auto-increment
            }
            DisplayKind::Dogxl240 => {
                self.cmd_2(XlCmd::COM_END, 127)?;
                self.cmd(XlCmd::PARTIAL_START)?;
                self.cmd(0)?;
                self.cmd(XlCmd::PARTIAL_END)?;
                self.cmd(127)?;
                self.cmd_2(XlCmd::POTENTIOMETER, 0x8F)?; // contrast mid range
                self.cmd(XlCmd::MAPPING_CTRL)?; // bottom view
                self.cmd(0x02)?;
                self.cmd(XlCmd::LINE_RATE | 0x03)?; // 9.4 klps
                self.cmd(XlCmd::TEMP_COMP | 0x01)?; // -0.10%
                self.cmd(XlCmd::DISPLAY_ENABLE_240 | 1)?;
                self.cmd(XlCmd::SET_PATTERN | 0x01)?;
                self.cmd(XlCmd::RAM_ADDR_CTRL | 0x01)?;
            }
        }

        // clear display content, then switch on
        self.clear_area_at(self.kind.ram_pages(), self.kind.width(), Style::NORMAL, 0, 0)?;
        self.display_enable(true)?;
        log::info!("{:?} ready", self.kind);
        Ok(())
    }

    /// Switch the display output on or off (RAM content is kept).
    pub fn display_enable(&mut self, on: bool) -> Result<(), DisplayError> {
        let bit = u8::from(on);
        match self.kind {
            DisplayKind::Dogxl160 => self.cmd(XlCmd::DISPLAY_ENABLE_160 | bit),
            DisplayKind::Dogxl240 => self.cmd(XlCmd::DISPLAY_ENABLE_240 | bit),
            _ => self.cmd(Cmd::DISPLAY_ENABLE | bit),
        }
    }

    /// Set the display contrast in percent (DOGXL panels only, no-op on
    /// the small panels whose contrast is fixed at init).
    pub fn set_contrast(&mut self, percent: u8) -> Result<(), DisplayError> {
        match self.kind {
            DisplayKind::Dogxl160 | DisplayKind::Dogxl240 => {
                let value = (u16::from(percent.min(100)) * 255 / 100) as u8;
                self.cmd_2(XlCmd::POTENTIOMETER, value)
            }
            _ => Ok(()),
        }
    }

    /// Put an ST7565 class panel into its low power sleep state.
    pub fn sleep(&mut self) -> Result<(), DisplayError> {
        match self.kind {
            DisplayKind::Dogm128 | DisplayKind::Dogl128 | DisplayKind::Dogm132 => {
                self.cmd_2(Cmd::INDICATOR, 0x00)?;
                self.cmd(Cmd::DISPLAY_ENABLE)?;
                self.cmd(Cmd::ALL_PIXEL | 1)
            }
            _ => self.cmd(Cmd::RESET_CMD),
        }
    }

    /// Clears an area of the screen starting at the cursor, clipped to the
    /// display edges. The cursor is moved back to the start of the area.
    ///
    /// With [`Style::INVERT`] the area is filled instead of cleared.
    pub fn clear_area(
        &mut self,
        pages: u8,
        columns: u16,
        style: Style,
    ) -> Result<(), DisplayError> {
        let fill = if style.contains(Style::INVERT) { 0xFF } else { 0x00 };

        let pages = pages.min(self.kind.ram_pages().saturating_sub(self.page));
        let columns = columns.min(self.kind.width().saturating_sub(self.column));

        for _ in 0..pages {
            for _ in 0..columns {
                self.write_data(fill)?;
            }
            self.move_by(1, -(columns as i16))?;
        }
        self.move_by(-(pages as i8), 0)
    }

    /// Clears an area of the screen starting at the given page/column.
    pub fn clear_area_at(
        &mut self,
        pages: u8,
        columns: u16,
        style: Style,
        page: u8,
        column: u16,
    ) -> Result<(), DisplayError> {
        self.move_to(page, column)?;
        self.clear_area(pages, columns, style)
    }

    /// Draws a page-aligned bitmap from the cursor position.
    ///
    /// `image` holds the bitmap as vertical bytes, row of pages by row of
    /// pages, `pages * columns` bytes in total. Output is clipped at the
    /// right and bottom display edges.
    pub fn draw_image(
        &mut self,
        image: &[u8],
        pages: u8,
        columns: u16,
        style: Style,
    ) -> Result<(), DisplayError> {
        let inv = style.contains(Style::INVERT);
        for j in 0..pages {
            if self.page >= self.kind.ram_pages() {
                break;
            }
            for i in 0..columns {
                if self.column >= self.kind.width() {
                    break;
                }
                let tmp = image[j as usize * columns as usize + i as usize];
                self.write_data(if inv { !tmp } else { tmp })?;
            }
            if j + 1 != pages && self.column != 0 {
                self.move_by(1, -(columns as i16))?;
            }
        }
        Ok(())
    }

    /// Draws a bitmap at an arbitrary pixel position.
    ///
    /// When `y` is not a page boundary the image bytes are split across two
    /// pages by bit shifting. Pixels below the last page of the area are
    /// lost to the memory organisation.
    pub fn draw_image_at(
        &mut self,
        image: &[u8],
        x: u16,
        y: u16,
        pages: u8,
        columns: u16,
        style: Style,
    ) -> Result<(), DisplayError> {
        let inv = style.contains(Style::INVERT);
        let offset = (y & 0x7) as u8;
        let start_page = (y >> 3) as u8;

        // an unaligned start occupies one additional page
        let mut span = if offset != 0 { pages + 1 } else { pages };
        span = span.min(self.kind.ram_pages().saturating_sub(start_page));

        self.move_to(start_page, x)?;
        for j in 0..span {
            for i in 0..columns {
                if self.column >= self.kind.width() {
                    break;
                }
                let idx = j as usize * columns as usize + i as usize;
                let mut data = 0u8;
                if offset == 0 || j + 1 != span {
                    data = image[idx] << offset;
                }
                if j > 0 && offset != 0 {
                    data |= image[idx - columns as usize] >> (8 - offset);
                }
                self.write_data(if inv { !data } else { data })?;
            }
            if j + 1 != span {
                self.move_by(1, -(columns as i16))?;
            }
        }
        Ok(())
    }

    /// Changes the cursor page by `s`, wrapping modulo the RAM page count.
    fn inc_page(&mut self, s: i8) -> u8 {
        let pages = i16::from(self.kind.ram_pages());
        self.page = (i16::from(self.page) + i16::from(s)).rem_euclid(pages) as u8;
        self.page
    }

    /// Changes the cursor column by `s`. When wrap-around is enabled, motion
    /// past a display edge carries into the adjacent page.
    fn inc_column(&mut self, s: i16) -> u16 {
        let width = i32::from(self.kind.width());
        let mut c = i32::from(self.column) + i32::from(s);
        if self.wrap_around {
            while c >= width {
                self.inc_page(1);
                c -= width;
            }
            while c < 0 {
                self.inc_page(-1);
                c += width;
            }
        } else if c < 0 {
            c = 0;
        }
        self.column = c as u16;
        self.column
    }

    /// Issues the controller commands that set the hardware write position.
    fn goto_address(&mut self, page: u8, column: u16) -> Result<(), DisplayError> {
        let col = column
            + match self.orientation {
                Orientation::BottomView => 0,
                Orientation::TopView => self.kind.topview_shift(),
            };
        let col_high = ((col >> 4) & 0x0F) as u8;
        let col_low = (col & 0x0F) as u8;
        match self.kind {
            DisplayKind::Dogm128 | DisplayKind::Dogl128 | DisplayKind::Dogm132 => {
                self.cmd(Cmd::PAGE_ADDRESS | (page & 0x0F))?;
                self.cmd(Cmd::COL_ADDRESS | col_high)?;
                self.cmd(col_low)
            }
            DisplayKind::Dogs102 => {
                self.cmd(Cmd::PAGE_ADDRESS | (page & 0x0F))?;
                self.cmd(col_low)?;
                self.cmd(Cmd::COL_ADDRESS | col_high)
            }
            DisplayKind::Dogxl160 => {
                self.cmd(XlCmd::PAGE_ADDRESS | (page & 0x1F))?;
                self.cmd(XlCmd::COL_ADDRESS | col_high)?;
                self.cmd(col_low)
            }
            DisplayKind::Dogxl240 => {
                self.cmd(XlCmd::PAGE_ADDRESS | (page & 0x0F))?;
                self.cmd(XlCmd::PAGE_ADDRESS_MSB | ((page >> 4) & 0x0F))?;
                self.cmd(XlCmd::COL_ADDRESS | col_high)?;
                self.cmd(col_low)
            }
        }
    }

    fn set_orientation_cmds(&mut self) -> Result<(), DisplayError> {
        match self.kind {
            DisplayKind::Dogxl160 => match self.orientation {
                Orientation::BottomView => self.cmd(XlCmd::MAPPING_CTRL),
                Orientation::TopView => self.cmd(XlCmd::MAPPING_CTRL | 0x06),
            },
            _ => match self.orientation {
                Orientation::BottomView => {
                    self.cmd(Cmd::BOTTOMVIEW | 1)?;
                    self.cmd(Cmd::SCAN_DIR)
                }
                Orientation::TopView => {
                    self.cmd(Cmd::BOTTOMVIEW)?;
                    self.cmd(Cmd::SCAN_DIR | 0x08)
                }
            },
        }
    }

    fn cmd(&mut self, command: u8) -> Result<(), DisplayError> {
        self.interface.cmd(command)
    }

    fn cmd_2(&mut self, command: u8, argument: u8) -> Result<(), DisplayError> {
        self.interface.cmd(command)?;
        self.interface.cmd(argument)
    }
}

impl<SPI, DC, RST, DELAY> DisplaySurface for Dogm<SPI, DC, RST, DELAY>
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
        self.interface.data(&[data])?;
        // the controller auto-increments its column address
        self.inc_column(1);
        Ok(())
    }

    fn move_to(&mut self, page: u8, column: u16) -> Result<(), DisplayError> {
        self.goto_address(page, column)?;
        self.page = page;
        self.column = column;
        Ok(())
    }

    fn move_by(&mut self, pages: i8, columns: i16) -> Result<(), DisplayError> {
        let page = self.inc_page(pages);
        let column = self.inc_column(columns);
        self.move_to(page, column)
    }

    fn page(&self) -> u8 {
        self.page
    }

    fn column(&self) -> u16 {
        self.column
    }

    fn width(&self) -> u16 {
        self.kind.width()
    }

    fn double_pixel(&self) -> bool {
        self.kind.double_pixel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State, Transaction as PinTransaction,
    };
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
    use std::vec::Vec;

    fn write_byte(byte: u8) -> Vec<SpiTransaction<u8>> {
        vec![
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![byte]),
            SpiTransaction::transaction_end(),
        ]
    }

    #[test]
    fn data_write_advances_column() {
        let spi_expectations = write_byte(0xA5);
        let dc_expectations = [PinTransaction::set(State::High)];

        let mut spi = SpiMock::new(&spi_expectations);
        let mut dc = PinMock::new(&dc_expectations);
        let mut rst = PinMock::new(&[]);

        let interface = DisplayInterface::new(spi.clone(), dc.clone(), rst.clone(), NoopDelay);
        let mut lcd =
            Dogm::from_interface(interface, DisplayKind::Dogm128, Orientation::BottomView);

        lcd.write_data(0xA5).unwrap();
        assert_eq!(lcd.column(), 1);
        assert_eq!(lcd.page(), 0);

        spi.done();
        dc.done();
        rst.done();
    }

    #[test]
    fn move_to_issues_page_and_column_commands() {
        // page 3 -> 0xB3, column 0x25 -> high nibble 0x12, low nibble 0x05
        let mut spi_expectations = Vec::new();
        for byte in [0xB3, 0x12, 0x05] {
            spi_expectations.extend(write_byte(byte));
        }
        let dc_expectations = [
            PinTransaction::set(State::Low),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::Low),
        ];

        let mut spi = SpiMock::new(&spi_expectations);
        let mut dc = PinMock::new(&dc_expectations);
        let mut rst = PinMock::new(&[]);

        let interface = DisplayInterface::new(spi.clone(), dc.clone(), rst.clone(), NoopDelay);
        let mut lcd =
            Dogm::from_interface(interface, DisplayKind::Dogm128, Orientation::BottomView);

        lcd.move_to(3, 0x25).unwrap();
        assert_eq!(lcd.page(), 3);
        assert_eq!(lcd.column(), 0x25);

        spi.done();
        dc.done();
        rst.done();
    }

    #[test]
    fn topview_orientation_shifts_column_address() {
        // DOGM128 top-view shifts columns by 4: column 0 -> address 4
        let mut spi_expectations = Vec::new();
        for byte in [0xB0, 0x10, 0x04] {
            spi_expectations.extend(write_byte(byte));
        }
        let dc_expectations = [
            PinTransaction::set(State::Low),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::Low),
        ];

        let mut spi = SpiMock::new(&spi_expectations);
        let mut dc = PinMock::new(&dc_expectations);
        let mut rst = PinMock::new(&[]);

        let interface = DisplayInterface::new(spi.clone(), dc.clone(), rst.clone(), NoopDelay);
        let mut lcd = Dogm::from_interface(interface, DisplayKind::Dogm128, Orientation::TopView);

        lcd.move_to(0, 0).unwrap();

        spi.done();
        dc.done();
        rst.done();
    }

    #[test]
    fn unaligned_image_is_split_across_two_pages() {
        // 1-page image at y=4: the low nibbles land shifted up in the first
        // page, the high nibbles spill into the second
        let mut spi_expectations = Vec::new();
        for byte in [0xB0, 0x10, 0x00] {
            spi_expectations.extend(write_byte(byte));
        }
        for byte in [0xF0, 0xF0] {
            spi_expectations.extend(write_byte(byte));
        }
        for byte in [0xB1, 0x10, 0x00] {
            spi_expectations.extend(write_byte(byte));
        }
        for byte in [0x0F, 0x00] {
            spi_expectations.extend(write_byte(byte));
        }
        let dc_expectations = [
            PinTransaction::set(State::Low),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
            PinTransaction::set(State::High),
        ];

        let mut spi = SpiMock::new(&spi_expectations);
        let mut dc = PinMock::new(&dc_expectations);
        let mut rst = PinMock::new(&[]);

        let interface = DisplayInterface::new(spi.clone(), dc.clone(), rst.clone(), NoopDelay);
        let mut lcd =
            Dogm::from_interface(interface, DisplayKind::Dogm128, Orientation::BottomView);

        lcd.draw_image_at(&[0xFF, 0x0F], 0, 4, 1, 2, Style::NORMAL)
            .unwrap();

        spi.done();
        dc.done();
        rst.done();
    }

    #[test]
    fn clear_area_clips_at_the_display_edges() {
        // cursor at page 3 of 4, column 130 of 132: a 2x5 request shrinks
        // to the 1x2 area that is left
        let mut spi_expectations = Vec::new();
        for byte in [0x00, 0x00] {
            spi_expectations.extend(write_byte(byte));
        }
        for byte in [0xB0, 0x18, 0x02, 0xB3, 0x18, 0x02] {
            spi_expectations.extend(write_byte(byte));
        }
        let dc_expectations = [
            PinTransaction::set(State::High),
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::Low),
        ];

        let mut spi = SpiMock::new(&spi_expectations);
        let mut dc = PinMock::new(&dc_expectations);
        let mut rst = PinMock::new(&[]);

        let interface = DisplayInterface::new(spi.clone(), dc.clone(), rst.clone(), NoopDelay);
        let mut lcd =
            Dogm::from_interface(interface, DisplayKind::Dogm132, Orientation::BottomView);
        lcd.page = 3;
        lcd.column = 130;

        lcd.clear_area(2, 5, Style::NORMAL).unwrap();
        // cursor back at the start of the area
        assert_eq!(lcd.page(), 3);
        assert_eq!(lcd.column(), 130);

        spi.done();
        dc.done();
        rst.done();
    }

    #[test]
    fn draw_image_clips_at_the_right_edge() {
        let mut spi_expectations = Vec::new();
        for byte in [0x11, 0x22] {
            spi_expectations.extend(write_byte(byte));
        }
        let dc_expectations = [
            PinTransaction::set(State::High),
            PinTransaction::set(State::High),
        ];

        let mut spi = SpiMock::new(&spi_expectations);
        let mut dc = PinMock::new(&dc_expectations);
        let mut rst = PinMock::new(&[]);

        let interface = DisplayInterface::new(spi.clone(), dc.clone(), rst.clone(), NoopDelay);
        let mut lcd =
            Dogm::from_interface(interface, DisplayKind::Dogm128, Orientation::BottomView);
        lcd.column = 126;

        lcd.draw_image(&[0x11, 0x22, 0x33, 0x44], 1, 4, Style::NORMAL)
            .unwrap();

        spi.done();
        dc.done();
        rst.done();
    }

    #[test]
    fn page_motion_wraps_modulo_ram_pages() {
        let mut spi = SpiMock::new(&Vec::new());
        let mut dc = PinMock::new(&[]);
        let mut rst = PinMock::new(&[]);

        let interface = DisplayInterface::new(spi.clone(), dc.clone(), rst.clone(), NoopDelay);
        let mut lcd =
            Dogm::from_interface(interface, DisplayKind::Dogm132, Orientation::BottomView);

        // 4 RAM pages on the DOGM132
        assert_eq!(lcd.inc_page(3), 3);
        assert_eq!(lcd.inc_page(2), 1);
        assert_eq!(lcd.inc_page(-2), 3);

        spi.done();
        dc.done();
        rst.done();
    }

    #[test]
    fn column_wrap_around_carries_into_next_page() {
        let mut spi = SpiMock::new(&Vec::new());
        let mut dc = PinMock::new(&[]);
        let mut rst = PinMock::new(&[]);

        let interface = DisplayInterface::new(spi.clone(), dc.clone(), rst.clone(), NoopDelay);
        let mut lcd =
            Dogm::from_interface(interface, DisplayKind::Dogm128, Orientation::BottomView);
        lcd.set_wrap_around(true);

        lcd.column = 120;
        assert_eq!(lcd.inc_column(16), 8);
        assert_eq!(lcd.page, 1);

        spi.done();
        dc.done();
        rst.done();
    }
}
