//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL and ROR operate on the accumulator in implied mode and on
//! memory otherwise. C receives the bit shifted out; Z and N follow the result.

use crate::registers::Status;
use crate::{MemoryBus, CPU};

fn finish<M: MemoryBus>(cpu: &mut CPU<M>, result: u8, carry_out: bool) -> bool {
    cpu.regs.set_flag(Status::C, carry_out);
    cpu.regs.set_zn(result);
    cpu.store_result(result);
    false
}

/// ASL - Arithmetic Shift Left.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    finish(cpu, value << 1, value & 0x80 != 0)
}

/// LSR - Logical Shift Right.
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    finish(cpu, value >> 1, value & 0x01 != 0)
}

/// ROL - Rotate Left through carry.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    let carry_in = cpu.regs.get_flag(Status::C) as u8;
    finish(cpu, (value << 1) | carry_in, value & 0x80 != 0)
}

/// ROR - Rotate Right through carry.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    let carry_in = cpu.regs.get_flag(Status::C) as u8;
    finish(cpu, (value >> 1) | (carry_in << 7), value & 0x01 != 0)
}
