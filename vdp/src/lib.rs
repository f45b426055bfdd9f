//! # VDP text console
//!
//! Drives the external Video Display Processor of a 6502 homebrew machine
//! through its two memory-mapped ports, and draws text on top of it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use vdp::{DisplayMode, Vdp, VdpPorts};
//!
//! let mut vdp = Vdp::init(unsafe { VdpPorts::new() }, DisplayMode::Vga640x480);
//! vdp.load_font(&FONT)?;
//! vdp.clear(b' ', 0x07);
//!
//! vdp.draw_box(0, 0, 40, 30, 0x1F)?;
//! vdp.put(2, 1, b'A', 0x4E)?;
//! ```
//!
//! ## Layers
//!
//! | Module      | Job                                                      |
//! |-------------|----------------------------------------------------------|
//! | [`port`]    | Select/data protocol, one register store at a time       |
//! | [`cursor`]  | Auto-incrementing VRAM read/write pointers               |
//! | [`timing`]  | Display modes, timing registers, geometry                |
//! | [`frame`]   | Font, palette and plane clears                           |
//! | [`screen`]  | Cell → VRAM address mapping                              |
//! | [`text`]    | Single-cell plotting and boxes                           |
//! | [`console`] | [`Vdp`], the owner of all of the above                   |
//!
//! ## VRAM Map
//!
//! | Range           | Contents                                        |
//! |-----------------|-------------------------------------------------|
//! | `$0000-`        | Name plane, `columns × rows` glyph codes        |
//! | after names     | Attribute plane, `columns × rows` bytes         |
//! | `$1000-$17FF`   | Pattern table, 256 glyphs × 8 rows              |
//! | `$1800-$180F`   | Palette                                         |

#![cfg_attr(not(test), no_std)]

pub mod console;
pub mod cursor;
pub mod error;
pub mod frame;
pub mod port;
pub mod regs;
pub mod screen;
pub mod text;
pub mod timing;

#[cfg(target_arch = "mos")]
pub mod boot;

#[cfg(test)]
pub(crate) mod testing;

pub use console::Vdp;
pub use cursor::{Access, ReadCursor, WriteCursor};
pub use error::{Result, VdpError};
pub use port::{RegisterPort, VdpPorts};
pub use regs::Register;
pub use screen::ScreenGeometry;
pub use text::{BoxGlyphs, BoxRenderer, CharPlotter};
pub use timing::{DisplayMode, TimingConfigurator};
