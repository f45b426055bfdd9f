//! # Frame Preparation
//!
//! One-time VRAM staging done after the display mode is set and before
//! anything is drawn: the font goes into the pattern table, the palette into
//! its table, and both text planes get cleared.
//!
//! ```ignore
//! let geo = TimingConfigurator::apply(&mut port, DisplayMode::Vga640x480);
//! FramePreparer::load_font(&mut port, &FONT)?;
//! FramePreparer::clear_names(&mut port, &geo, b' ');
//! FramePreparer::clear_attributes(&mut port, &geo, 0x07);
//! ```

use log::debug;
use rand_core::RngCore;

use crate::cursor::{write_register_pair, WriteCursor};
use crate::error::{Result, VdpError};
use crate::port::RegisterPort;
use crate::regs::{Register, FONT_SIZE, PALETTE_BASE, PALETTE_SIZE, PATTERN_TABLE_BASE};
use crate::screen::ScreenGeometry;

pub struct FramePreparer;

impl FramePreparer {
    /// Copy a 256-glyph, 8-bytes-per-glyph font into the pattern table.
    ///
    /// Anything but exactly [`FONT_SIZE`] bytes is refused before the port is
    /// touched, so a bad asset never leaves a half-loaded font behind.
    pub fn load_font<P: RegisterPort>(port: &mut P, font: &[u8]) -> Result<()> {
        if font.len() != FONT_SIZE {
            return Err(VdpError::AssetSizeMismatch {
                expected: FONT_SIZE,
                actual: font.len(),
            });
        }

        write_register_pair(port, Register::PatternBaseLo, Register::PatternBaseHi, PATTERN_TABLE_BASE);
        WriteCursor::new(port, PATTERN_TABLE_BASE).write_bytes(font);
        debug!("font loaded at ${:04X}", PATTERN_TABLE_BASE);
        Ok(())
    }

    pub fn load_palette<P: RegisterPort>(port: &mut P, palette: &[u8; PALETTE_SIZE]) {
        write_register_pair(port, Register::PaletteBaseLo, Register::PaletteBaseHi, PALETTE_BASE);
        WriteCursor::new(port, PALETTE_BASE).write_bytes(palette);
        debug!("palette loaded at ${:04X}", PALETTE_BASE);
    }

    /// Set every cell's attribute to `value`.
    pub fn clear_attributes<P: RegisterPort>(port: &mut P, geometry: &ScreenGeometry, value: u8) {
        WriteCursor::new(port, geometry.attr_base()).fill(value, geometry.cells() as usize);
        debug!("attribute plane cleared to {:#04x}", value);
    }

    /// Set every cell's glyph to `glyph`.
    pub fn clear_names<P: RegisterPort>(port: &mut P, geometry: &ScreenGeometry, glyph: u8) {
        WriteCursor::new(port, geometry.name_base()).fill(glyph, geometry.cells() as usize);
        debug!("name plane cleared to {:#04x}", glyph);
    }

    /// Scribble pseudo-random attributes over the whole screen.
    ///
    /// Bring-up aid for eyeballing the attribute plane on real hardware. Not
    /// something a finished screen should depend on; use
    /// [`clear_attributes`](Self::clear_attributes) for that.
    pub fn fill_attributes_with<P: RegisterPort, R: RngCore + ?Sized>(
        port: &mut P,
        geometry: &ScreenGeometry,
        rng: &mut R,
    ) {
        let mut cursor = WriteCursor::new(port, geometry.attr_base());
        for _ in 0..geometry.cells() {
            cursor.write_byte(rng.next_u32() as u8);
        }
        debug!("attribute plane filled with noise");
    }
}
