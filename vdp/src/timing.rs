//! # Display Timing
//!
//! The VDP generates video from ten timing parameters, counted in character
//! clocks (8 pixels) horizontally and in scanlines vertically, except for the
//! displayed height which is counted in 8-line character rows. Text cells are
//! two character clocks wide and two character rows tall, so a 640×480 picture
//! is a 40×30 grid.
//!
//! | Mode          | H disp/blank/porch/sync | V disp/blank/porch/sync | Sync | Grid  |
//! |---------------|-------------------------|-------------------------|------|-------|
//! | `Vga640x480`  | 80 / 20 / 2 / 12        | 60 / 45 / 10 / 2        | −/−  | 40×30 |
//! | `Wide848x480` | 106 / 30 / 2 / 14       | 60 / 37 / 6 / 8         | +/+  | 53×30 |
//!
//! Registers hold most counts minus one. Sync polarity rides in bit 7 of the
//! front porch registers, see [`FrontPorch`].

use bit_field::BitField;
use log::debug;

use crate::cursor::write_register_pair;
use crate::port::RegisterPort;
use crate::regs::{FrontPorch, Register};
use crate::screen::ScreenGeometry;

/// Raw timing parameters, not yet decremented.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Timing {
    pub h_displayed_chars: u8,
    pub h_blank_chars: u8,
    pub h_front_porch_chars: u8,
    pub h_sync_len_chars: u8,
    pub h_sync_negative: bool,
    pub v_displayed_chars: u8,
    pub v_blank_lines: u8,
    pub v_front_porch_lines: u8,
    pub v_sync_len_lines: u8,
    pub v_sync_negative: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DisplayMode {
    /// 640×480 @ 60 Hz, 40×30 text.
    Vga640x480,
    /// 848×480 @ 60 Hz, 53×30 text.
    Wide848x480,
}

impl DisplayMode {
    /// Mode picked by the boot path, chosen with the `mode-*` cargo features.
    #[cfg(feature = "mode-848x480")]
    pub const DEFAULT: DisplayMode = DisplayMode::Wide848x480;
    #[cfg(not(feature = "mode-848x480"))]
    pub const DEFAULT: DisplayMode = DisplayMode::Vga640x480;

    pub const fn timing(self) -> Timing {
        match self {
            DisplayMode::Vga640x480 => Timing {
                h_displayed_chars: 80,
                h_blank_chars: 20,
                h_front_porch_chars: 2,
                h_sync_len_chars: 12,
                h_sync_negative: true,
                v_displayed_chars: 60,
                v_blank_lines: 45,
                v_front_porch_lines: 10,
                v_sync_len_lines: 2,
                v_sync_negative: true,
            },
            DisplayMode::Wide848x480 => Timing {
                h_displayed_chars: 106,
                h_blank_chars: 30,
                h_front_porch_chars: 2,
                h_sync_len_chars: 14,
                h_sync_negative: false,
                v_displayed_chars: 60,
                v_blank_lines: 37,
                v_front_porch_lines: 6,
                v_sync_len_lines: 8,
                v_sync_negative: false,
            },
        }
    }

    #[inline]
    pub const fn columns(self) -> u8 {
        self.timing().h_displayed_chars / 2
    }

    /// The VDP counts character rows, not scanlines.
    #[inline]
    pub const fn rows(self) -> u8 {
        self.timing().v_displayed_chars / 2
    }
}

/// Programs the timing registers and hands back the resulting geometry.
pub struct TimingConfigurator;

impl TimingConfigurator {
    /// Write the ten timing values and the two plane bases for `mode`.
    ///
    /// This is the only way to obtain a [`ScreenGeometry`]; every drawing call
    /// takes one, so nothing can be drawn before a mode is programmed.
    pub fn apply<P: RegisterPort>(port: &mut P, mode: DisplayMode) -> ScreenGeometry {
        let t = mode.timing();
        let geometry = ScreenGeometry::new(mode.columns(), mode.rows());

        let mut sync_lengths = 0u8;
        sync_lengths.set_bits(0..4, t.h_sync_len_chars);
        sync_lengths.set_bits(4..8, t.v_sync_len_lines);

        port.write_register(Register::HDisplayed, t.h_displayed_chars - 1);
        port.write_register(Register::HBlank, t.h_blank_chars - 1);
        port.write_register(
            Register::HFrontPorch,
            FrontPorch::encode(t.h_front_porch_chars, t.h_sync_negative).bits(),
        );
        port.write_register(Register::VDisplayed, t.v_displayed_chars - 1);
        port.write_register(Register::VBlank, t.v_blank_lines - 1);
        port.write_register(
            Register::VFrontPorch,
            FrontPorch::encode(t.v_front_porch_lines, t.v_sync_negative).bits(),
        );
        port.write_register(Register::SyncLengths, sync_lengths);
        port.write_register(Register::HChars, geometry.columns());

        write_register_pair(port, Register::NameBaseLo, Register::NameBaseHi, geometry.name_base());
        write_register_pair(port, Register::AttrBaseLo, Register::AttrBaseHi, geometry.attr_base());

        debug!(
            "display mode {:?}: {}x{} text, attributes at ${:04X}",
            mode,
            geometry.columns(),
            geometry.rows(),
            geometry.attr_base()
        );
        geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeVdp;

    #[test]
    fn vga_mode_register_sequence() {
        let mut vdp = FakeVdp::new();
        let geo = TimingConfigurator::apply(&mut vdp, DisplayMode::Vga640x480);

        assert_eq!(
            vdp.register_writes(),
            vec![
                (Register::HDisplayed, 79),
                (Register::HBlank, 19),
                (Register::HFrontPorch, 0x81),
                (Register::VDisplayed, 59),
                (Register::VBlank, 44),
                (Register::VFrontPorch, 0x89),
                (Register::SyncLengths, 0x2C),
                (Register::HChars, 40),
                (Register::NameBaseLo, 0x00),
                (Register::NameBaseHi, 0x00),
                (Register::AttrBaseLo, 0xB0),
                (Register::AttrBaseHi, 0x04),
            ]
        );
        assert_eq!((geo.columns(), geo.rows()), (40, 30));
        assert_eq!(geo.attr_base(), 1200);
        assert!(vdp.vram_writes().is_empty());
    }

    #[test]
    fn wide_mode_register_values() {
        let mut vdp = FakeVdp::new();
        let geo = TimingConfigurator::apply(&mut vdp, DisplayMode::Wide848x480);

        assert_eq!(vdp.register(Register::HDisplayed), 105);
        assert_eq!(vdp.register(Register::HBlank), 29);
        assert_eq!(vdp.register(Register::HFrontPorch), 0x01);
        assert_eq!(vdp.register(Register::VBlank), 36);
        assert_eq!(vdp.register(Register::VFrontPorch), 0x05);
        assert_eq!(vdp.register(Register::SyncLengths), 0x8E);
        assert_eq!(vdp.register(Register::HChars), 53);
        assert_eq!(geo.attr_base(), 53 * 30);
        assert_eq!(vdp.register(Register::AttrBaseLo), 0x36);
        assert_eq!(vdp.register(Register::AttrBaseHi), 0x06);
    }

    #[test]
    fn switching_modes_rederives_geometry_from_scratch() {
        let mut vdp = FakeVdp::new();

        let wide = TimingConfigurator::apply(&mut vdp, DisplayMode::Wide848x480);
        assert_eq!((wide.columns(), wide.rows(), wide.attr_base()), (53, 30, 1590));

        let narrow = TimingConfigurator::apply(&mut vdp, DisplayMode::Vga640x480);
        assert_eq!((narrow.columns(), narrow.rows(), narrow.attr_base()), (40, 30, 1200));
        assert_eq!(vdp.register(Register::AttrBaseLo), 0xB0);
        assert_eq!(vdp.register(Register::AttrBaseHi), 0x04);
        assert_eq!(vdp.register(Register::HChars), 40);
    }

    #[test]
    fn porch_lengths_fit_their_field() {
        for mode in [DisplayMode::Vga640x480, DisplayMode::Wide848x480] {
            let t = mode.timing();
            assert!(t.h_front_porch_chars >= 1 && t.h_front_porch_chars <= 0x80);
            assert!(t.v_front_porch_lines >= 1 && t.v_front_porch_lines <= 0x80);
            assert!(t.h_sync_len_chars < 16 && t.v_sync_len_lines < 16);
        }
    }
}
