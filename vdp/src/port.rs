//! # Register Port
//!
//! The VDP exposes exactly two bytes of host address space: a select port and
//! a data port. Everything else (timing, cursors, VRAM) is reached by storing a
//! register index into select and then touching data.
//!
//! Drawing code never holds the hardware directly. It is handed something that
//! implements [`RegisterPort`], which on the real machine is [`VdpPorts`] and in
//! tests is a recording double.

use volatile_register::{RW, WO};

use crate::regs::{Register, VDP_SELECT_ADDR};

/// Capability to drive the VDP's select/data protocol.
pub trait RegisterPort {
    /// Store a register index into the select port.
    fn select(&mut self, reg: Register);

    /// Store a byte into the data port.
    fn write_data(&mut self, value: u8);

    /// Load a byte from the data port.
    fn read_data(&mut self) -> u8;

    /// Select `reg`, then store `value`. The two stores are never reordered.
    #[inline(always)]
    fn write_register(&mut self, reg: Register, value: u8) {
        self.select(reg);
        self.write_data(value);
    }
}

impl<P: RegisterPort + ?Sized> RegisterPort for &mut P {
    #[inline(always)]
    fn select(&mut self, reg: Register) {
        (**self).select(reg)
    }

    #[inline(always)]
    fn write_data(&mut self, value: u8) {
        (**self).write_data(value)
    }

    #[inline(always)]
    fn read_data(&mut self) -> u8 {
        (**self).read_data()
    }
}

/// Memory-mapped select/data pair at `$8800-$8801`.
#[repr(C, packed)]
pub struct VdpPorts {
    pub select: WO<u8>,
    pub data: RW<u8>,
}

impl VdpPorts {
    /// # Safety
    ///
    /// Only one live reference may exist, and the VDP must be decoded at
    /// [`VDP_SELECT_ADDR`].
    pub unsafe fn new() -> &'static mut VdpPorts {
        unsafe { &mut *(VDP_SELECT_ADDR as *mut VdpPorts) }
    }
}

impl RegisterPort for VdpPorts {
    #[inline(always)]
    fn select(&mut self, reg: Register) {
        unsafe { self.select.write(reg.index()) }
    }

    #[inline(always)]
    fn write_data(&mut self, value: u8) {
        unsafe { self.data.write(value) }
    }

    #[inline(always)]
    fn read_data(&mut self) -> u8 {
        self.data.read()
    }
}
