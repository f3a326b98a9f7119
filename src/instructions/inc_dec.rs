//! # Increment and Decrement Instructions
//!
//! - INC/DEC: Read-modify-write on memory
//! - INX/INY/DEX/DEY: Index registers
//!
//! All wrap at 8 bits and set Z and N from the result. Carry is untouched.

use crate::{MemoryBus, CPU};

/// INC - Increment Memory.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let result = cpu.fetch_operand().wrapping_add(1);
    cpu.write(cpu.ctx.effective_address, result);
    cpu.regs.set_zn(result);
    false
}

/// DEC - Decrement Memory.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let result = cpu.fetch_operand().wrapping_sub(1);
    cpu.write(cpu.ctx.effective_address, result);
    cpu.regs.set_zn(result);
    false
}

/// INX - Increment X Register.
pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.x = cpu.regs.x.wrapping_add(1);
    cpu.regs.set_zn(cpu.regs.x);
    false
}

/// INY - Increment Y Register.
pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.y = cpu.regs.y.wrapping_add(1);
    cpu.regs.set_zn(cpu.regs.y);
    false
}

/// DEX - Decrement X Register.
pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.x = cpu.regs.x.wrapping_sub(1);
    cpu.regs.set_zn(cpu.regs.x);
    false
}

/// DEY - Decrement Y Register.
pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.y = cpu.regs.y.wrapping_sub(1);
    cpu.regs.set_zn(cpu.regs.y);
    false
}
