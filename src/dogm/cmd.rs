//! Command opcodes for the EA-DOG controller families.

/// Command set of the ST7565/UC1701 class controllers
/// (DOGS102, DOGM128, DOGM132, DOGL128).
pub struct Cmd;
#[allow(missing_docs)]
impl Cmd {
    pub const DISPLAY_ENABLE: u8 = 0xAE; // display on/off
    pub const START_LINE: u8 = 0x40; // display start line set
    pub const PAGE_ADDRESS: u8 = 0xB0; // page address set (lower 4 bits)
    pub const COL_ADDRESS: u8 = 0x10; // column address high nibble
    pub const BOTTOMVIEW: u8 = 0xA0; // select orientation
    pub const DISPLAY_INVERT: u8 = 0xA6; // inverted display
    pub const ALL_PIXEL: u8 = 0xA4; // show memory content or all pixels on
    pub const BIAS: u8 = 0xA2; // lcd bias set
    pub const RESET_CMD: u8 = 0xE2; // reset controller
    pub const SCAN_DIR: u8 = 0xC0; // output mode select (upside-down)
    pub const POWER_CONTROL: u8 = 0x28; // power control set
    pub const VOLTAGE: u8 = 0x20; // voltage regulator resistor ratio set
    pub const VOLUME_MODE: u8 = 0x81; // volume mode set (2-byte)
    pub const NO_OP: u8 = 0xE3;

    // DOGM128 / DOGM132 only
    pub const INDICATOR: u8 = 0xAC; // static indicator (2-byte)
    pub const BOOSTER_SET: u8 = 0xF8; // booster ratio set (2-byte)

    // DOGS102 only
    pub const ADV_PROG_CTRL: u8 = 0xFA; // advanced program control, first byte
    pub const ADV_PROG_CTRL2: u8 = 0x10; // advanced program control, second byte
    pub const TEMPCOMP_HIGH: u8 = 0x80;
}

/// Command set of the UC1610/UC1611 class controllers
/// (DOGXL160, DOGXL240).
pub struct XlCmd;
#[allow(missing_docs)]
impl XlCmd {
    pub const COL_ADDRESS: u8 = 0x10; // column address high nibble
    pub const TEMP_COMP: u8 = 0x24; // temperature compensation
    pub const PANEL_LOAD: u8 = 0x28; // panel loading
    pub const START_LINE: u8 = 0x40; // scroll line LSB
    pub const START_LINE2: u8 = 0x50; // scroll line MSB
    pub const PAGE_ADDRESS: u8 = 0x60; // page address (DOGXL160), LSB on DOGXL240
    pub const PAGE_ADDRESS_MSB: u8 = 0x70; // page address MSB (DOGXL240)
    pub const POTENTIOMETER: u8 = 0x81; // contrast potentiometer (2-byte)
    pub const RAM_ADDR_CTRL: u8 = 0x88; // RAM address control
    pub const LINE_RATE: u8 = 0xA0;
    pub const ALL_PIXEL: u8 = 0xA4;
    pub const INVERSE: u8 = 0xA6;
    pub const DISPLAY_ENABLE_160: u8 = 0xAE;
    pub const DISPLAY_ENABLE_240: u8 = 0xA8;
    pub const MAPPING_CTRL: u8 = 0xC0; // lcd mapping control
    pub const SET_PATTERN: u8 = 0xD0; // display pattern (DOGXL240)
    pub const RESET_CMD: u8 = 0xE2;
    pub const NO_OP: u8 = 0xE3;
    pub const BIAS_RATIO: u8 = 0xE8;
    pub const COM_END: u8 = 0xF1; // last COM electrode (2-byte)
    pub const PARTIAL_START: u8 = 0xF2;
    pub const PARTIAL_END: u8 = 0xF3;
}
