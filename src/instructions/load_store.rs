//! # Load and Store Instructions
//!
//! Loads set Z and N and pay the page-crossing penalty on indexed modes.
//! Stores touch no flags and never do: their indexed forms already carry the
//! extra cycle in the base cost.

use crate::{MemoryBus, CPU};

/// LDA - Load Accumulator.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    cpu.regs.a = value;
    cpu.regs.set_zn(value);
    true
}

/// LDX - Load X Register.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    cpu.regs.x = value;
    cpu.regs.set_zn(value);
    true
}

/// LDY - Load Y Register.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    cpu.regs.y = value;
    cpu.regs.set_zn(value);
    true
}

/// STA - Store Accumulator.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.write(cpu.ctx.effective_address, cpu.regs.a);
    false
}

/// STX - Store X Register.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.write(cpu.ctx.effective_address, cpu.regs.x);
    false
}

/// STY - Store Y Register.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.write(cpu.ctx.effective_address, cpu.regs.y);
    false
}
