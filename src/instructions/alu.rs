//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC, SBC: Add/subtract with carry
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - CMP, CPX, CPY: Register compares (flags only)
//! - BIT: Bit test
//!
//! Arithmetic is always binary. The D flag is stored and restored like any other
//! flag but does not change how ADC and SBC compute their result.

use crate::registers::Status;
use crate::{MemoryBus, CPU};

/// Adds `value` and the carry flag to A, setting C, Z, V and N.
///
/// V is set when both inputs share a sign that the result does not:
/// `(A ^ result) & (value ^ result) & 0x80`.
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a;
    let carry_in = cpu.regs.get_flag(Status::C) as u16;

    let result16 = a as u16 + value as u16 + carry_in;
    let result = result16 as u8;

    cpu.regs.set_flag(Status::C, result16 > 0xFF);
    cpu.regs.set_flag(Status::V, (a ^ result) & (value ^ result) & 0x80 != 0);
    cpu.regs.set_zn(result);
    cpu.regs.a = result;
}

/// ADC - Add with Carry.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    add_with_carry(cpu, value);
    true
}

/// SBC - Subtract with Carry.
///
/// A - M - (1 - C) is A + !M + C, so the same adder produces the borrow as an
/// inverted carry.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    add_with_carry(cpu, !value);
    true
}

/// AND - Logical AND.
pub(crate) fn and<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    let result = cpu.regs.a & value;
    cpu.regs.a = result;
    cpu.regs.set_zn(result);
    true
}

/// ORA - Logical Inclusive OR.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    let result = cpu.regs.a | value;
    cpu.regs.a = result;
    cpu.regs.set_zn(result);
    true
}

/// EOR - Exclusive OR.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    let result = cpu.regs.a ^ value;
    cpu.regs.a = result;
    cpu.regs.set_zn(result);
    true
}

/// BIT - Bit Test.
///
/// Z comes from A & M; N and V are copied straight from bits 7 and 6 of M.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();

    cpu.regs.set_flag(Status::Z, cpu.regs.a & value == 0);
    cpu.regs.set_flag(Status::N, value & 0x80 != 0);
    cpu.regs.set_flag(Status::V, value & 0x40 != 0);
    false
}

fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8) {
    let value = cpu.fetch_operand();
    let result = register.wrapping_sub(value);

    cpu.regs.set_flag(Status::C, register >= value);
    cpu.regs.set_zn(result);
}

/// CMP - Compare Accumulator.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let register = cpu.regs.a;
    compare(cpu, register);
    true
}

/// CPX - Compare X Register.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let register = cpu.regs.x;
    compare(cpu, register);
    false
}

/// CPY - Compare Y Register.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let register = cpu.regs.y;
    compare(cpu, register);
    false
}
