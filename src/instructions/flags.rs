//! # Status Flag Instructions
//!
//! CLC/SEC, CLI/SEI, CLD/SED and CLV. Each touches exactly one flag.

use crate::registers::Status;
use crate::{MemoryBus, CPU};

/// CLC - Clear Carry Flag.
pub(crate) fn clc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.set_flag(Status::C, false);
    false
}

/// SEC - Set Carry Flag.
pub(crate) fn sec<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.set_flag(Status::C, true);
    false
}

/// CLI - Clear Interrupt Disable.
pub(crate) fn cli<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.set_flag(Status::I, false);
    false
}

/// SEI - Set Interrupt Disable.
pub(crate) fn sei<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.set_flag(Status::I, true);
    false
}

/// CLD - Clear Decimal Mode.
pub(crate) fn cld<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.set_flag(Status::D, false);
    false
}

/// SED - Set Decimal Mode.
pub(crate) fn sed<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.set_flag(Status::D, true);
    false
}

/// CLV - Clear Overflow Flag.
pub(crate) fn clv<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.set_flag(Status::V, false);
    false
}
