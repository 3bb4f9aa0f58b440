//! The device contract the font renderer draws through.

use display_interface::DisplayError;

/// Byte-level access to a display with page/column addressing.
///
/// A page is one row of 8 vertical pixels, a column is one pixel wide. The
/// implementor owns the write cursor; every [`write_data`] advances it by
/// one column. All operations are synchronous and blocking, bus errors are
/// surfaced unchanged.
///
/// [`write_data`]: DisplaySurface::write_data
pub trait DisplaySurface {
    /// Send one command byte to the controller.
    fn write_command(&mut self, command: u8) -> Result<(), DisplayError>;

    /// Send one data byte (8 vertical pixels) and advance the column cursor.
    fn write_data(&mut self, data: u8) -> Result<(), DisplayError>;

    /// Move the cursor to an absolute page/column position.
    fn move_to(&mut self, page: u8, column: u16) -> Result<(), DisplayError>;

    /// Move the cursor relative to the current position, wrapping at the
    /// display edges per the implementor's configuration.
    fn move_by(&mut self, pages: i8, columns: i16) -> Result<(), DisplayError>;

    /// Current cursor page.
    fn page(&self) -> u8;

    /// Current cursor column.
    fn column(&self) -> u16;

    /// Display width in columns.
    fn width(&self) -> u16;

    /// Whether the device addresses two pixel rows per data bit.
    ///
    /// Panels like the DOGXL160 store 4-pixel pages and mandate
    /// double-height rendering for every glyph.
    fn double_pixel(&self) -> bool {
        false
    }
}
