//! Display interface using 4-wire SPI

use display_interface::DisplayError;
use embedded_hal::{
    delay::DelayNs,
    digital::OutputPin,
    spi::SpiDevice,
};

/// The connection interface shared by the EA-DOG and ILI9341 drivers.
///
/// Wraps the SPI device, the data/command select pin and the reset pin.
/// The chip select line is handled by the [`SpiDevice`] implementation.
pub struct DisplayInterface<SPI, DC, RST, DELAY> {
    /// SPI device
    spi: SPI,
    /// Data/Command control pin (high for data, low for command)
    dc: DC,
    /// Pin for resetting the controller
    rst: RST,
    /// Delay provider for reset and power-up timing
    pub(crate) delay: DELAY,
}

impl<SPI, DC, RST, DELAY> DisplayInterface<SPI, DC, RST, DELAY> {
    /// Create a new interface from its parts.
    pub fn new(spi: SPI, dc: DC, rst: RST, delay: DELAY) -> Self {
        DisplayInterface { spi, dc, rst, delay }
    }
}

impl<SPI, DC, RST, DELAY> DisplayInterface<SPI, DC, RST, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Basic function for sending commands
    pub(crate) fn cmd(&mut self, command: u8) -> Result<(), DisplayError> {
        // low for commands
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;

        match self.spi.write(&[command]) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!("SPI write error for command 0x{:02X}: {:?}", command, e);
                Err(DisplayError::BusWriteError)
            }
        }
    }

    /// Basic function for sending an array of u8-values of data over spi
    pub(crate) fn data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        // high for data
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;
        self.spi
            .write(data)
            .map_err(|_| DisplayError::BusWriteError)
    }

    /// Basic function for sending a command and the data belonging to it.
    pub(crate) fn cmd_with_data(&mut self, command: u8, data: &[u8]) -> Result<(), DisplayError> {
        self.cmd(command)?;
        self.data(data)
    }

    /// Sends the same data byte multiple times, e.g. to fill an area with
    /// one color. Bytes are buffered in chunks to keep SPI overhead low.
    pub(crate) fn data_x_times(&mut self, val: u8, repetitions: u32) -> Result<(), DisplayError> {
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;

        const CHUNK_SIZE: usize = 32;
        let buffer = [val; CHUNK_SIZE];

        let full_chunks = (repetitions as usize) / CHUNK_SIZE;
        let remainder = (repetitions as usize) % CHUNK_SIZE;

        for _ in 0..full_chunks {
            self.spi
                .write(&buffer)
                .map_err(|_| DisplayError::BusWriteError)?;
        }
        if remainder > 0 {
            self.spi
                .write(&buffer[0..remainder])
                .map_err(|_| DisplayError::BusWriteError)?;
        }
        Ok(())
    }

    /// Resets the controller by pulsing the reset pin low.
    pub(crate) fn reset(&mut self, low_ms: u32, recover_ms: u32) -> Result<(), DisplayError> {
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(1);
        self.rst.set_low().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(low_ms);
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(recover_ms);
        Ok(())
    }
}
