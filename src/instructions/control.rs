//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Force Interrupt
//! - JMP: Jump to address (absolute or indirect)
//! - JSR/RTS: Subroutine call and return
//! - RTI: Return from interrupt
//! - NOP: No operation
//! - `xxx`: the catch-all run for every undefined opcode
//!
//! BRK is a software interrupt that:
//! 1. Pushes PC+2 to the stack (high byte first, then low byte)
//! 2. Pushes processor status to stack with B flag set
//! 3. Sets the I (interrupt disable) flag
//! 4. Loads PC from IRQ vector at $FFFE/F

use log::debug;

use crate::cpu::IRQ_VECTOR;
use crate::registers::Status;
use crate::{MemoryBus, CPU};

/// BRK - Force Interrupt.
///
/// BRK is one byte long but the pushed return address skips a padding byte,
/// so RTI resumes at the opcode address + 2.
///
/// Flags affected:
/// - B: Set in the pushed status byte only
/// - I: Set to 1
pub(crate) fn brk<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let return_address = cpu.regs.pc.wrapping_add(1);
    cpu.push_word(return_address);

    let status = cpu.regs.status() | Status::B | Status::U;
    cpu.push(status.bits());
    cpu.regs.set_flag(Status::I, true);

    cpu.regs.pc = cpu.read_word(IRQ_VECTOR);
    debug!("brk: return ${:04X} -> ${:04X}", return_address, cpu.regs.pc);
    false
}

/// JMP - Jump.
///
/// The Indirect form's page-wrap bug is handled by the addressing mode, so both
/// forms simply load the effective address.
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.pc = cpu.ctx.effective_address;
    false
}

/// JSR - Jump to Subroutine.
///
/// Pushes the address of the last byte of the JSR instruction (return address - 1).
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let last_byte = cpu.regs.pc.wrapping_sub(1);
    cpu.push_word(last_byte);
    cpu.regs.pc = cpu.ctx.effective_address;
    false
}

/// RTS - Return from Subroutine.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.pc = cpu.pop_word().wrapping_add(1);
    false
}

/// RTI - Return from Interrupt.
///
/// Restores status (B cleared, U set) and then PC. Unlike RTS the popped PC is
/// used as is.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let status = Status::from_bits_retain(cpu.pop());
    cpu.regs.set_status(status - Status::B);
    cpu.regs.pc = cpu.pop_word();
    false
}

/// NOP - No Operation.
pub(crate) fn nop<M: MemoryBus>(_cpu: &mut CPU<M>) -> bool {
    false
}

/// Undefined opcode: burns its table cycles and changes nothing else.
pub(crate) fn xxx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    debug!(
        "undefined opcode ${:02X} at ${:04X}",
        cpu.ctx.opcode,
        cpu.regs.pc.wrapping_sub(1)
    );
    false
}
