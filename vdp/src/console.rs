use rand_core::RngCore;

use crate::error::Result;
use crate::frame::FramePreparer;
use crate::port::RegisterPort;
use crate::regs::PALETTE_SIZE;
use crate::screen::ScreenGeometry;
use crate::text::{BoxGlyphs, BoxRenderer, CharPlotter};
use crate::timing::{DisplayMode, TimingConfigurator};

/// The VDP with a display mode programmed.
///
/// Owns the port and the geometry derived from the mode. The mode can't be
/// changed afterwards; to pick another one, take the port back with
/// [`into_port`](Self::into_port) and call [`init`](Self::init) again.
pub struct Vdp<P: RegisterPort> {
    port: P,
    mode: DisplayMode,
    geometry: ScreenGeometry,
    boxes: BoxRenderer,
}

impl<P: RegisterPort> Vdp<P> {
    /// Program `mode` and return a handle ready for frame preparation.
    pub fn init(mut port: P, mode: DisplayMode) -> Vdp<P> {
        let geometry = TimingConfigurator::apply(&mut port, mode);
        Vdp {
            port,
            mode,
            geometry,
            boxes: BoxRenderer::default(),
        }
    }

    #[inline]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    #[inline]
    pub fn geometry(&self) -> &ScreenGeometry {
        &self.geometry
    }

    /// Raw port access for anything this type doesn't wrap.
    pub fn port(&mut self) -> &mut P {
        &mut self.port
    }

    pub fn into_port(self) -> P {
        self.port
    }

    pub fn load_font(&mut self, font: &[u8]) -> Result<()> {
        FramePreparer::load_font(&mut self.port, font)
    }

    pub fn load_palette(&mut self, palette: &[u8; PALETTE_SIZE]) {
        FramePreparer::load_palette(&mut self.port, palette)
    }

    pub fn clear_attributes(&mut self, attr: u8) {
        FramePreparer::clear_attributes(&mut self.port, &self.geometry, attr)
    }

    pub fn clear_names(&mut self, glyph: u8) {
        FramePreparer::clear_names(&mut self.port, &self.geometry, glyph)
    }

    /// Blank the whole screen: every cell gets `glyph` and `attr`.
    pub fn clear(&mut self, glyph: u8, attr: u8) {
        self.clear_names(glyph);
        self.clear_attributes(attr);
    }

    pub fn fill_attributes_with<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        FramePreparer::fill_attributes_with(&mut self.port, &self.geometry, rng)
    }

    pub fn set_box_glyphs(&mut self, glyphs: BoxGlyphs) {
        self.boxes = BoxRenderer::new(glyphs);
    }

    /// Frame glyphs [`draw_box`](Self::draw_box) currently uses.
    #[inline]
    pub fn box_glyphs(&self) -> &BoxGlyphs {
        self.boxes.glyphs()
    }

    pub fn put(&mut self, col: u16, row: u16, glyph: u8, attr: u8) -> Result<()> {
        CharPlotter::put(&mut self.port, &self.geometry, col, row, glyph, attr)
    }

    pub fn draw_box(&mut self, left: u16, top: u16, width: u16, height: u16, attr: u8) -> Result<()> {
        self.boxes
            .draw_box(&mut self.port, &self.geometry, left, top, width, height, attr)
    }
}
