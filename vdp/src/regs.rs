//! # VDP Register Map
//!
//! The VDP is programmed indirectly: the host stores a register index into the
//! select port, then the value into the data port. Indices are a fixed contract
//! with the chip and must not be renumbered.
//!
//! | Index  | Register          | Contents                                  |
//! |--------|-------------------|-------------------------------------------|
//! | `$00`  | `WriteAddrLo`     | Write cursor, low byte                    |
//! | `$01`  | `WriteAddrHi`     | Write cursor, high byte (latches address) |
//! | `$02`  | `ReadAddrLo`      | Read cursor, low byte                     |
//! | `$03`  | `ReadAddrHi`      | Read cursor, high byte (latches address)  |
//! | `$04`  | `HDisplayed`      | Displayed character clocks - 1            |
//! | `$05`  | `HBlank`          | Blanked character clocks - 1              |
//! | `$06`  | `HFrontPorch`     | [`FrontPorch`] flags + porch clocks - 1   |
//! | `$07`  | `VDisplayed`      | Displayed character rows - 1              |
//! | `$08`  | `VBlank`          | Blanked scanlines - 1                     |
//! | `$09`  | `VFrontPorch`     | [`FrontPorch`] flags + porch lines - 1    |
//! | `$0A`  | `SyncLengths`     | V sync lines (high nibble), H sync clocks |
//! | `$0B`  | `HChars`          | Text columns (name table stride)          |
//! | `$0C`  | `NameBaseLo/Hi`   | Name table base address                   |
//! | `$0E`  | `AttrBaseLo/Hi`   | Attribute table base address              |
//! | `$10`  | `PatternBaseLo/Hi`| Pattern (font) table base address         |
//! | `$12`  | `PaletteBaseLo/Hi`| Palette base address                      |
//! | `$1F`  | `VramData`        | Data window: data port reads/writes VRAM  |

/// Select port. Writes choose which register the data port talks to.
pub const VDP_SELECT_ADDR: usize = 0x8800;
/// Data port, immediately after the select port.
pub const VDP_DATA_ADDR: usize = 0x8801;
/// Heartbeat output port bumped by the idle loop.
pub const STATUS_PORT_ADDR: usize = 0x8400;

/// VRAM offset of the font pattern table (256 glyphs × 8 rows).
pub const PATTERN_TABLE_BASE: u16 = 0x1000;
/// VRAM offset of the 16-entry palette.
pub const PALETTE_BASE: u16 = 0x1800;

pub const FONT_SIZE: usize = 256 * 8;
pub const PALETTE_SIZE: usize = 16;

/// An indirectly addressed VDP register.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Register {
    WriteAddrLo = 0x00,
    WriteAddrHi = 0x01,
    ReadAddrLo = 0x02,
    ReadAddrHi = 0x03,
    HDisplayed = 0x04,
    HBlank = 0x05,
    HFrontPorch = 0x06,
    VDisplayed = 0x07,
    VBlank = 0x08,
    VFrontPorch = 0x09,
    SyncLengths = 0x0A,
    HChars = 0x0B,
    NameBaseLo = 0x0C,
    NameBaseHi = 0x0D,
    AttrBaseLo = 0x0E,
    AttrBaseHi = 0x0F,
    PatternBaseLo = 0x10,
    PatternBaseHi = 0x11,
    PaletteBaseLo = 0x12,
    PaletteBaseHi = 0x13,
    VramData = 0x1F,
}

impl Register {
    #[inline(always)]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

bitflags::bitflags! {
    /// Layout of the `HFrontPorch` / `VFrontPorch` registers.
    ///
    /// Bits 0-6 hold the porch length minus one; bit 7 selects sync polarity.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct FrontPorch: u8 {
        /// Sync pulse is active low.
        const NEGATIVE_SYNC = 0b1000_0000;
        /// Porch length field.
        const LENGTH        = 0b0111_1111;
    }
}

impl FrontPorch {
    /// Pack a porch length (in clocks or lines, not yet decremented) and polarity.
    pub fn encode(length: u8, negative_sync: bool) -> FrontPorch {
        let mut reg = FrontPorch::from_bits_retain(length.wrapping_sub(1)) & FrontPorch::LENGTH;
        reg.set(FrontPorch::NEGATIVE_SYNC, negative_sync);
        reg
    }
}
