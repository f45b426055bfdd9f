//! # Screen Geometry
//!
//! VRAM holds the text screen as two planes of `columns × rows` bytes:
//!
//! ```text
//! $0000            name_base   one glyph code per cell, row-major
//! columns*rows     attr_base   one attribute byte per cell, row-major
//! ```
//!
//! A [`ScreenGeometry`] only comes out of
//! [`TimingConfigurator::apply`](crate::timing::TimingConfigurator::apply), so
//! there is no way to address cells before a display mode has been programmed.

use crate::error::{Result, VdpError};

/// Text grid size and plane offsets of the active display mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScreenGeometry {
    columns: u8,
    rows: u8,
    name_base: u16,
    attr_base: u16,
}

impl ScreenGeometry {
    pub(crate) const fn new(columns: u8, rows: u8) -> Self {
        let cells = columns as u16 * rows as u16;
        Self {
            columns,
            rows,
            name_base: 0,
            attr_base: cells,
        }
    }

    #[inline]
    pub const fn columns(&self) -> u8 {
        self.columns
    }

    #[inline]
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    #[inline]
    pub const fn name_base(&self) -> u16 {
        self.name_base
    }

    #[inline]
    pub const fn attr_base(&self) -> u16 {
        self.attr_base
    }

    /// Number of cells in one plane.
    #[inline]
    pub const fn cells(&self) -> u16 {
        self.columns as u16 * self.rows as u16
    }

    #[inline]
    pub const fn contains(&self, col: u16, row: u16) -> bool {
        col < self.columns as u16 && row < self.rows as u16
    }

    /// Glyph and attribute addresses of cell `(col, row)`.
    pub fn cell_addresses(&self, col: u16, row: u16) -> Result<(u16, u16)> {
        if !self.contains(col, row) {
            return Err(VdpError::InvalidCoordinate { col, row });
        }
        let offset = row * self.columns as u16 + col;
        Ok((self.name_base + offset, self.attr_base + offset))
    }
}
