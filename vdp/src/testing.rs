//! Host-side VDP double used by the unit tests.
//!
//! Behaves like the chip as far as the protocol is concerned: registers latch
//! whatever the data port stores while they are selected, the cursors latch on
//! their high byte, and the `VramData` window auto-increments the matching
//! cursor. Every port access is recorded so tests can assert exact sequences.

use crate::port::RegisterPort;
use crate::regs::Register;

const VRAM_SIZE: usize = 0x1_0000;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PortOp {
    Select(Register),
    Data(u8),
    Read(u8),
}

pub struct FakeVdp {
    selected: Register,
    registers: [u8; 32],
    write_cursor: u16,
    read_cursor: u16,
    vram: Vec<u8>,
    ops: Vec<PortOp>,
    vram_writes: Vec<(u16, u8)>,
}

impl FakeVdp {
    pub fn new() -> Self {
        Self {
            selected: Register::WriteAddrLo,
            registers: [0; 32],
            write_cursor: 0,
            read_cursor: 0,
            vram: vec![0; VRAM_SIZE],
            ops: Vec::new(),
            vram_writes: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[PortOp] {
        &self.ops
    }

    /// Register stores, in order. Stores through the `VramData` window are not
    /// register writes and are left out.
    pub fn register_writes(&self) -> Vec<(Register, u8)> {
        let mut selected = None;
        let mut writes = Vec::new();
        for op in &self.ops {
            match *op {
                PortOp::Select(reg) => selected = Some(reg),
                PortOp::Data(value) => {
                    if let Some(reg) = selected.filter(|r| *r != Register::VramData) {
                        writes.push((reg, value));
                    }
                }
                PortOp::Read(_) => {}
            }
        }
        writes
    }

    /// Every byte stored into VRAM, with the address it landed at.
    pub fn vram_writes(&self) -> &[(u16, u8)] {
        &self.vram_writes
    }

    pub fn clear_log(&mut self) {
        self.ops.clear();
        self.vram_writes.clear();
    }

    pub fn register(&self, reg: Register) -> u8 {
        self.registers[reg.index() as usize]
    }

    pub fn peek(&self, addr: u16) -> u8 {
        self.vram[addr as usize]
    }

    pub fn vram(&self, start: u16, len: usize) -> &[u8] {
        &self.vram[start as usize..start as usize + len]
    }

    pub fn write_cursor(&self) -> u16 {
        self.write_cursor
    }

    pub fn read_cursor(&self) -> u16 {
        self.read_cursor
    }

    fn latched(&self, lo: Register, hi: Register) -> u16 {
        u16::from_le_bytes([self.register(lo), self.register(hi)])
    }
}

impl RegisterPort for FakeVdp {
    fn select(&mut self, reg: Register) {
        self.ops.push(PortOp::Select(reg));
        self.selected = reg;
    }

    fn write_data(&mut self, value: u8) {
        self.ops.push(PortOp::Data(value));
        match self.selected {
            Register::VramData => {
                self.vram[self.write_cursor as usize] = value;
                self.vram_writes.push((self.write_cursor, value));
                self.write_cursor = self.write_cursor.wrapping_add(1);
            }
            reg => {
                self.registers[reg.index() as usize] = value;
                match reg {
                    Register::WriteAddrHi => {
                        self.write_cursor = self.latched(Register::WriteAddrLo, Register::WriteAddrHi)
                    }
                    Register::ReadAddrHi => {
                        self.read_cursor = self.latched(Register::ReadAddrLo, Register::ReadAddrHi)
                    }
                    _ => {}
                }
            }
        }
    }

    fn read_data(&mut self) -> u8 {
        let value = match self.selected {
            Register::VramData => {
                let value = self.vram[self.read_cursor as usize];
                self.read_cursor = self.read_cursor.wrapping_add(1);
                value
            }
            reg => self.register(reg),
        };
        self.ops.push(PortOp::Read(value));
        value
    }
}
