//! # Stack Instructions
//!
//! PHA, PHP, PLA and PLP. The stack lives at 0x0100-0x01FF and grows down;
//! SP points at the next free slot.

use crate::registers::Status;
use crate::{MemoryBus, CPU};

/// PHA - Push Accumulator.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.push(cpu.regs.a);
    false
}

/// PHP - Push Processor Status.
///
/// The pushed copy always has B and U set; the live register is unchanged.
pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let status = cpu.regs.status() | Status::B | Status::U;
    cpu.push(status.bits());
    false
}

/// PLA - Pull Accumulator.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.pop();
    cpu.regs.a = value;
    cpu.regs.set_zn(value);
    false
}

/// PLP - Pull Processor Status.
///
/// The stacked B bit is ignored; the live B bit is kept and U stays set.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let mut status = Status::from_bits_retain(cpu.pop());
    status.set(Status::B, cpu.regs.get_flag(Status::B));
    cpu.regs.set_status(status);
    false
}
