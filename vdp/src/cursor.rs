//! # VRAM Address Cursors
//!
//! The VDP keeps two independent auto-incrementing pointers into VRAM, one for
//! reads and one for writes. A pointer is set by storing its low byte and then
//! its high byte; the chip only latches the full address on the high byte, so
//! that order is fixed. After the pointer is set the `VramData` register is
//! selected, and from then on every data-port access touches VRAM and bumps the
//! pointer by one.
//!
//! ```ignore
//! let mut cursor = WriteCursor::new(&mut port, 0x1000);
//! cursor.write_bytes(&font);   // lands at $1000..$1800
//! ```
//!
//! A cursor holds the port by `&mut` for as long as it lives, so no other
//! register traffic can sneak in between an address set and the data that
//! follows it.

use core::marker::PhantomData;

use bit_field::BitField;
use log::trace;

use crate::port::RegisterPort;
use crate::regs::Register;

/// Which of the two VRAM pointers an address set targets.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

impl Access {
    const fn registers(self) -> (Register, Register) {
        match self {
            Access::Read => (Register::ReadAddrLo, Register::ReadAddrHi),
            Access::Write => (Register::WriteAddrLo, Register::WriteAddrHi),
        }
    }
}

/// Store a 16-bit value into a lo/hi register pair, low byte first.
#[inline(always)]
pub fn write_register_pair<P: RegisterPort>(port: &mut P, lo: Register, hi: Register, value: u16) {
    port.write_register(lo, value.get_bits(0..8) as u8);
    port.write_register(hi, value.get_bits(8..16) as u8);
}

/// Point the read or write cursor at `addr` and open the VRAM data window.
///
/// No bounds checking: the address wraps at the VDP's 16-bit address width.
#[inline(always)]
pub fn set_address<P: RegisterPort>(port: &mut P, which: Access, addr: u16) {
    let (lo, hi) = which.registers();
    write_register_pair(port, lo, hi, addr);
    port.select(Register::VramData);
}

mod sealed {
    pub trait Sealed {}
}

/// Type-level choice of cursor, so a read cursor can't be written through.
pub trait CursorKind: sealed::Sealed {
    const ACCESS: Access;
}

pub struct Reading;
pub struct Writing;

impl sealed::Sealed for Reading {}
impl sealed::Sealed for Writing {}

impl CursorKind for Reading {
    const ACCESS: Access = Access::Read;
}

impl CursorKind for Writing {
    const ACCESS: Access = Access::Write;
}

/// An open VRAM cursor. Tracks its position host-side as a shadow of the
/// chip's pointer.
pub struct AddressCursor<'p, P: RegisterPort, K: CursorKind> {
    port: &'p mut P,
    position: u16,
    _kind: PhantomData<K>,
}

pub type ReadCursor<'p, P> = AddressCursor<'p, P, Reading>;
pub type WriteCursor<'p, P> = AddressCursor<'p, P, Writing>;

impl<'p, P: RegisterPort, K: CursorKind> AddressCursor<'p, P, K> {
    pub fn new(port: &'p mut P, addr: u16) -> Self {
        set_address(&mut *port, K::ACCESS, addr);
        trace!("{:?} cursor at ${:04X}", K::ACCESS, addr);
        Self {
            port,
            position: addr,
            _kind: PhantomData,
        }
    }

    /// Re-point the cursor. Needed whenever the next access isn't contiguous.
    pub fn seek(&mut self, addr: u16) {
        set_address(&mut *self.port, K::ACCESS, addr);
        trace!("{:?} cursor seek ${:04X}", K::ACCESS, addr);
        self.position = addr;
    }

    /// Address the next access will touch.
    #[inline]
    pub fn position(&self) -> u16 {
        self.position
    }
}

impl<'p, P: RegisterPort> AddressCursor<'p, P, Writing> {
    #[inline(always)]
    pub fn write_byte(&mut self, value: u8) {
        self.port.write_data(value);
        self.position = self.position.wrapping_add(1);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_byte(b);
        }
    }

    pub fn fill(&mut self, value: u8, count: usize) {
        for _ in 0..count {
            self.write_byte(value);
        }
    }
}

impl<'p, P: RegisterPort> AddressCursor<'p, P, Reading> {
    #[inline(always)]
    pub fn read_byte(&mut self) -> u8 {
        self.position = self.position.wrapping_add(1);
        self.port.read_data()
    }

    pub fn read_into(&mut self, buf: &mut [u8]) {
        for slot in buf.iter_mut() {
            *slot = self.read_byte();
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing::{FakeVdp, PortOp};

    #[test]
    fn address_is_low_then_high_then_window() {
        let mut vdp = FakeVdp::new();
        set_address(&mut vdp, Access::Write, 0x12AB);

        assert_eq!(
            vdp.ops(),
            &[
                PortOp::Select(Register::WriteAddrLo),
                PortOp::Data(0xAB),
                PortOp::Select(Register::WriteAddrHi),
                PortOp::Data(0x12),
                PortOp::Select(Register::VramData),
            ]
        );
        assert_eq!(vdp.write_cursor(), 0x12AB);
    }

    #[test]
    fn read_and_write_cursors_are_independent() {
        let mut vdp = FakeVdp::new();
        set_address(&mut vdp, Access::Read, 0x0400);
        set_address(&mut vdp, Access::Write, 0x0900);

        assert_eq!(vdp.read_cursor(), 0x0400);
        assert_eq!(vdp.write_cursor(), 0x0900);
        assert_eq!(vdp.register_writes()[0], (Register::ReadAddrLo, 0x00));
        assert_eq!(vdp.register_writes()[1], (Register::ReadAddrHi, 0x04));
    }

    #[test]
    fn write_cursor_streams_sequentially() {
        let mut vdp = FakeVdp::new();
        let mut cursor = WriteCursor::new(&mut vdp, 0x0100);
        cursor.write_bytes(&[1, 2, 3]);
        cursor.fill(0xEE, 2);
        assert_eq!(cursor.position(), 0x0105);

        assert_eq!(vdp.vram(0x0100, 5), &[1, 2, 3, 0xEE, 0xEE]);
        assert_eq!(vdp.write_cursor(), 0x0105);
    }

    #[test]
    fn seek_moves_without_disturbing_written_bytes() {
        let mut vdp = FakeVdp::new();
        let mut cursor = WriteCursor::new(&mut vdp, 0x0010);
        cursor.write_byte(0xAA);
        cursor.seek(0x0020);
        cursor.write_byte(0xBB);

        assert_eq!(vdp.vram_writes(), &[(0x0010, 0xAA), (0x0020, 0xBB)]);
    }

    #[test]
    fn cursor_wraps_at_top_of_address_space() {
        let mut vdp = FakeVdp::new();
        let mut cursor = WriteCursor::new(&mut vdp, 0xFFFF);
        cursor.write_bytes(&[7, 8]);
        assert_eq!(cursor.position(), 0x0001);

        assert_eq!(vdp.peek(0xFFFF), 7);
        assert_eq!(vdp.peek(0x0000), 8);
    }

    proptest! {
        #[test]
        fn written_bytes_read_back_in_order(
            addr in any::<u16>(),
            data in proptest::collection::vec(any::<u8>(), 0..256)
        ) {
            let mut vdp = FakeVdp::new();
            WriteCursor::new(&mut vdp, addr).write_bytes(&data);

            let mut back = vec![0u8; data.len()];
            ReadCursor::new(&mut vdp, addr).read_into(&mut back);

            prop_assert_eq!(back, data);
        }

        #[test]
        fn every_vram_store_hits_the_next_address(addr in any::<u16>(), n in 1usize..64) {
            let mut vdp = FakeVdp::new();
            WriteCursor::new(&mut vdp, addr).fill(0x5A, n);

            let addrs: Vec<u16> = vdp.vram_writes().iter().map(|(a, _)| *a).collect();
            let expected: Vec<u16> = (0..n as u16).map(|i| addr.wrapping_add(i)).collect();
            prop_assert_eq!(addrs, expected);
        }
    }
}
