//! # Register File
//!
//! Accumulator, index registers, program counter, stack pointer and the packed
//! processor status byte (`NV-BDIZC`).
//!
//! The unused bit `U` (bit 5) is always set. Every path that replaces the whole
//! status byte goes through [`Registers::set_status`], which forces it back on.

use bitflags::bitflags;

bitflags! {
    /// Processor status flags.
    ///
    /// | Bit | Flag | Meaning                      |
    /// |-----|------|------------------------------|
    /// | 7   | N    | Negative (bit 7 of result)   |
    /// | 6   | V    | Signed overflow              |
    /// | 5   | U    | Unused, always 1             |
    /// | 4   | B    | Break (only in pushed copies)|
    /// | 3   | D    | Decimal mode                 |
    /// | 2   | I    | Interrupt disable            |
    /// | 1   | Z    | Zero                         |
    /// | 0   | C    | Carry                        |
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        const C = 1 << 0;
        const Z = 1 << 1;
        const I = 1 << 2;
        const D = 1 << 3;
        const B = 1 << 4;
        const U = 1 << 5;
        const V = 1 << 6;
        const N = 1 << 7;
    }
}

/// 6502 register file.
///
/// Pure data: the CPU core is the only code that mutates it during emulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Program counter (address of next instruction byte)
    pub pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub sp: u8,

    status: Status,
}

impl Registers {
    /// Register file with every register zeroed and only `U` set.
    pub fn new() -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0x00,
            status: Status::U,
        }
    }

    /// Returns the status flags.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Replaces the status flags. `U` is forced on.
    pub fn set_status(&mut self, status: Status) {
        self.status = status | Status::U;
    }

    /// Sets or clears `flag` according to `condition`.
    ///
    /// Attempts to clear `U` are ignored.
    pub fn set_flag(&mut self, flag: Status, condition: bool) {
        self.status.set(flag, condition);
        self.status.insert(Status::U);
    }

    /// Returns true if every bit of `flag` is set.
    pub fn get_flag(&self, flag: Status) -> bool {
        self.status.contains(flag)
    }

    /// Updates Z and N from an 8-bit result.
    pub fn set_zn(&mut self, result: u8) {
        self.set_flag(Status::Z, result == 0);
        self.set_flag(Status::N, result & 0x80 != 0);
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
