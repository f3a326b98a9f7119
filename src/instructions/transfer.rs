//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA and TSX set Z and N from the copied value. TXS is the
//! exception: loading the stack pointer touches no flags.

use crate::{MemoryBus, CPU};

/// TAX - Transfer Accumulator to X.
pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.x = cpu.regs.a;
    cpu.regs.set_zn(cpu.regs.x);
    false
}

/// TAY - Transfer Accumulator to Y.
pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.y = cpu.regs.a;
    cpu.regs.set_zn(cpu.regs.y);
    false
}

/// TXA - Transfer X to Accumulator.
pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.a = cpu.regs.x;
    cpu.regs.set_zn(cpu.regs.a);
    false
}

/// TYA - Transfer Y to Accumulator.
pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.a = cpu.regs.y;
    cpu.regs.set_zn(cpu.regs.a);
    false
}

/// TSX - Transfer Stack Pointer to X.
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.x = cpu.regs.sp;
    cpu.regs.set_zn(cpu.regs.x);
    false
}

/// TXS - Transfer X to Stack Pointer.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.sp = cpu.regs.x;
    false
}
