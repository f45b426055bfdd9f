//! # Text Drawing
//!
//! Two primitives on top of the cursor: [`CharPlotter::put`] for a single cell
//! and [`BoxRenderer::draw_box`] for a framed rectangle. Both write straight to
//! VRAM; nothing is cached host-side.
//!
//! The glyph and attribute planes aren't adjacent, so every cell (or every
//! row of a box) costs two address sets: one into the name plane, one into the
//! attribute plane.

use log::warn;

use crate::cursor::WriteCursor;
use crate::error::{Result, VdpError};
use crate::port::RegisterPort;
use crate::screen::ScreenGeometry;

pub struct CharPlotter;

impl CharPlotter {
    /// Write `glyph` and `attr` into cell `(col, row)`.
    ///
    /// An out-of-range cell is reported without touching the port.
    pub fn put<P: RegisterPort>(
        port: &mut P,
        geometry: &ScreenGeometry,
        col: u16,
        row: u16,
        glyph: u8,
        attr: u8,
    ) -> Result<()> {
        let (name_addr, attr_addr) = geometry.cell_addresses(col, row).inspect_err(|_| {
            warn!("put rejected: ({}, {}) is off screen", col, row);
        })?;

        let mut cursor = WriteCursor::new(port, name_addr);
        cursor.write_byte(glyph);
        cursor.seek(attr_addr);
        cursor.write_byte(attr);
        Ok(())
    }
}

/// Glyph codes used to frame a box.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoxGlyphs {
    pub top_left: u8,
    pub top_right: u8,
    pub bottom_left: u8,
    pub bottom_right: u8,
    pub horizontal: u8,
    pub vertical: u8,
    pub blank: u8,
}

impl BoxGlyphs {
    /// Code page 437 single-line frame.
    pub const SINGLE_LINE: BoxGlyphs = BoxGlyphs {
        top_left: 0xDA,
        top_right: 0xBF,
        bottom_left: 0xC0,
        bottom_right: 0xD9,
        horizontal: 0xC4,
        vertical: 0xB3,
        blank: b' ',
    };

    /// Code page 437 double-line frame.
    pub const DOUBLE_LINE: BoxGlyphs = BoxGlyphs {
        top_left: 0xC9,
        top_right: 0xBB,
        bottom_left: 0xC8,
        bottom_right: 0xBC,
        horizontal: 0xCD,
        vertical: 0xBA,
        blank: b' ',
    };
}

impl Default for BoxGlyphs {
    fn default() -> Self {
        BoxGlyphs::SINGLE_LINE
    }
}

/// Which part of the frame a box row is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum RowKind {
    TopEdge,
    BottomEdge,
    Interior,
}

impl RowKind {
    /// A one-row box is all top edge.
    fn of(row: u16, height: u16) -> RowKind {
        if row == 0 {
            RowKind::TopEdge
        } else if row == height - 1 {
            RowKind::BottomEdge
        } else {
            RowKind::Interior
        }
    }

    /// (left, fill, right)
    fn glyphs(self, set: &BoxGlyphs) -> (u8, u8, u8) {
        match self {
            RowKind::TopEdge => (set.top_left, set.horizontal, set.top_right),
            RowKind::BottomEdge => (set.bottom_left, set.horizontal, set.bottom_right),
            RowKind::Interior => (set.vertical, set.blank, set.vertical),
        }
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub struct BoxRenderer {
    glyphs: BoxGlyphs,
}

impl BoxRenderer {
    pub const fn new(glyphs: BoxGlyphs) -> Self {
        Self { glyphs }
    }

    pub fn glyphs(&self) -> &BoxGlyphs {
        &self.glyphs
    }

    /// Draw a framed, blank-filled rectangle and paint all of it with `attr`.
    ///
    /// Each row is one run in the name plane (left glyph, `width - 2` fill
    /// glyphs, right glyph) followed by one run of `width` attribute bytes.
    /// A one-column box only gets its left glyph. An empty box writes nothing.
    /// The whole rectangle must fit on screen, otherwise nothing is written.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_box<P: RegisterPort>(
        &self,
        port: &mut P,
        geometry: &ScreenGeometry,
        left: u16,
        top: u16,
        width: u16,
        height: u16,
        attr: u8,
    ) -> Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        let right = left.saturating_add(width - 1);
        let bottom = top.saturating_add(height - 1);
        if !geometry.contains(right, bottom) {
            warn!("box {}x{} at ({}, {}) does not fit on screen", width, height, left, top);
            return Err(VdpError::InvalidCoordinate { col: right, row: bottom });
        }

        let (first_row, _) = geometry.cell_addresses(left, top)?;
        let mut cursor = WriteCursor::new(port, first_row);

        for r in 0..height {
            let (name_addr, attr_addr) = geometry.cell_addresses(left, top + r)?;
            if cursor.position() != name_addr {
                cursor.seek(name_addr);
            }

            let (l, fill, rt) = RowKind::of(r, height).glyphs(&self.glyphs);
            cursor.write_byte(l);
            if width >= 2 {
                cursor.fill(fill, (width - 2) as usize);
                cursor.write_byte(rt);
            }

            cursor.seek(attr_addr);
            cursor.fill(attr, width as usize);
        }
        Ok(())
    }
}
