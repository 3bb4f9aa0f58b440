//! ILI9341 command opcodes and argument values.

pub struct Cmd;
#[allow(missing_docs)]
impl Cmd {
    pub const NOP: u8 = 0x00;
    pub const SOFT_RESET: u8 = 0x01;
    pub const SLEEP_ENTER: u8 = 0x10;
    pub const SLEEP_OUT: u8 = 0x11;
    pub const DISPLAY_OFF: u8 = 0x28;
    pub const DISPLAY_ON: u8 = 0x29;
    pub const SET_COLUMN: u8 = 0x2A;
    pub const SET_PAGE: u8 = 0x2B;
    pub const WRITE_MEM: u8 = 0x2C;
    pub const MIRROR: u8 = 0x36;
    pub const IDLE_MODE_OFF: u8 = 0x38;
    pub const IDLE_MODE_ON: u8 = 0x39;
    pub const COLOR_MODE: u8 = 0x3A;
    pub const WRITE_CONTINUE: u8 = 0x3C;
}

pub struct Flag;
#[allow(missing_docs)]
impl Flag {
    // Settings for COLOR_MODE (0x3A)
    pub const COLOR_16BIT: u8 = 0x55;
    pub const COLOR_18BIT: u8 = 0x66;

    // Settings for MIRROR (0x36)
    pub const MIRROR_Y: u8 = 0x80;
    pub const MIRROR_X: u8 = 0x40;
    pub const FLIP_XY: u8 = 0x20;
    pub const BGR: u8 = 0x08;
}
