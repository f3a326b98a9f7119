//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC/BCS: Branch on carry clear/set
//! - BEQ/BNE: Branch on zero set/clear
//! - BMI/BPL: Branch on negative set/clear
//! - BVC/BVS: Branch on overflow clear/set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! The penalty is added to the context's remaining cycles directly, so branches
//! never ask for the addressing-mode penalty.

use crate::registers::Status;
use crate::{MemoryBus, CPU};

fn branch<M: MemoryBus>(cpu: &mut CPU<M>, condition: bool) -> bool {
    if condition {
        // PC already points past the offset byte
        let origin = cpu.regs.pc;
        let target = origin.wrapping_add_signed(cpu.ctx.relative_offset as i16);

        cpu.ctx.remaining_cycles += 1;
        if (origin & 0xFF00) != (target & 0xFF00) {
            cpu.ctx.remaining_cycles += 1;
        }

        cpu.regs.pc = target;
    }
    false
}

/// BCC - Branch if Carry Clear.
pub(crate) fn bcc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let condition = !cpu.regs.get_flag(Status::C);
    branch(cpu, condition)
}

/// BCS - Branch if Carry Set.
pub(crate) fn bcs<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let condition = cpu.regs.get_flag(Status::C);
    branch(cpu, condition)
}

/// BEQ - Branch if Equal (Z set).
pub(crate) fn beq<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let condition = cpu.regs.get_flag(Status::Z);
    branch(cpu, condition)
}

/// BNE - Branch if Not Equal (Z clear).
pub(crate) fn bne<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let condition = !cpu.regs.get_flag(Status::Z);
    branch(cpu, condition)
}

/// BMI - Branch if Minus (N set).
pub(crate) fn bmi<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let condition = cpu.regs.get_flag(Status::N);
    branch(cpu, condition)
}

/// BPL - Branch if Positive (N clear).
pub(crate) fn bpl<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let condition = !cpu.regs.get_flag(Status::N);
    branch(cpu, condition)
}

/// BVC - Branch if Overflow Clear.
pub(crate) fn bvc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let condition = !cpu.regs.get_flag(Status::V);
    branch(cpu, condition)
}

/// BVS - Branch if Overflow Set.
pub(crate) fn bvs<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let condition = cpu.regs.get_flag(Status::V);
    branch(cpu, condition)
}
