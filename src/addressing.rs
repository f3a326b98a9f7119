//! # Addressing Modes
//!
//! This module defines the 12 addressing modes of the 6502 and the resolver that
//! turns an instruction's operand bytes into an effective address.
//!
//! Resolution runs after the opcode byte has been fetched (PC points at the first
//! operand byte) and always completes before the operation executes. It writes
//! its result into the CPU's [`ExecutionContext`](crate::cpu::ExecutionContext):
//!
//! - `effective_address` for every memory-referencing mode (including Immediate,
//!   whose "address" is the operand byte itself)
//! - `relative_offset` for Relative
//! - `fetched_operand` = A for Implicit, so accumulator forms of the shift
//!   instructions see the accumulator as their operand
//!
//! The resolver returns `true` when the address computation crossed a page
//! boundary in one of the modes where real hardware may spend an extra cycle
//! (AbsoluteX, AbsoluteY, IndirectY). Whether that cycle is actually charged
//! depends on the operation.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand. Also covers the accumulator forms (ASL A, ROR A, ...).
    ///
    /// Examples: CLC, RTS, NOP, LSR A
    Implicit,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($1234)
    /// Reproduces the NMOS page-wrap bug: a pointer at $xxFF takes its high byte
    /// from $xx00.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

fn page_crossed(base: u16, effective: u16) -> bool {
    (base & 0xFF00) != (effective & 0xFF00)
}

/// Resolves `mode` for the instruction whose operand bytes start at PC.
///
/// Advances PC past the operand bytes and fills the execution context. Returns
/// `true` if an indexed mode crossed a page boundary.
pub(crate) fn resolve<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> bool {
    match mode {
        AddressingMode::Implicit => {
            cpu.ctx.fetched_operand = cpu.regs.a;
            false
        }
        AddressingMode::Immediate => {
            cpu.ctx.effective_address = cpu.regs.pc;
            cpu.regs.pc = cpu.regs.pc.wrapping_add(1);
            false
        }
        AddressingMode::ZeroPage => {
            cpu.ctx.effective_address = cpu.fetch_byte() as u16;
            false
        }
        AddressingMode::ZeroPageX => {
            cpu.ctx.effective_address = cpu.fetch_byte().wrapping_add(cpu.regs.x) as u16;
            false
        }
        AddressingMode::ZeroPageY => {
            cpu.ctx.effective_address = cpu.fetch_byte().wrapping_add(cpu.regs.y) as u16;
            false
        }
        AddressingMode::Relative => {
            cpu.ctx.relative_offset = cpu.fetch_byte() as i8;
            false
        }
        AddressingMode::Absolute => {
            cpu.ctx.effective_address = cpu.fetch_word();
            false
        }
        AddressingMode::AbsoluteX => {
            let base = cpu.fetch_word();
            let effective = base.wrapping_add(cpu.regs.x as u16);
            cpu.ctx.effective_address = effective;
            page_crossed(base, effective)
        }
        AddressingMode::AbsoluteY => {
            let base = cpu.fetch_word();
            let effective = base.wrapping_add(cpu.regs.y as u16);
            cpu.ctx.effective_address = effective;
            page_crossed(base, effective)
        }
        AddressingMode::Indirect => {
            let ptr = cpu.fetch_word();

            // High byte never carries into the next page
            let hi_addr = if ptr & 0x00FF == 0x00FF {
                ptr & 0xFF00
            } else {
                ptr.wrapping_add(1)
            };

            let lo = cpu.read(ptr) as u16;
            let hi = cpu.read(hi_addr) as u16;
            cpu.ctx.effective_address = (hi << 8) | lo;
            false
        }
        AddressingMode::IndirectX => {
            let zp = cpu.fetch_byte().wrapping_add(cpu.regs.x);
            cpu.ctx.effective_address = cpu.read_zero_page_word(zp);
            false
        }
        AddressingMode::IndirectY => {
            let zp = cpu.fetch_byte();
            let base = cpu.read_zero_page_word(zp);
            let effective = base.wrapping_add(cpu.regs.y as u16);
            cpu.ctx.effective_address = effective;
            page_crossed(base, effective)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn cpu_with_operands(operands: &[u8]) -> CPU<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.write(0xFFFC, 0x00);
        memory.write(0xFFFD, 0x80);
        memory.load(0x8000, operands).unwrap();
        CPU::new(memory)
    }

    #[test]
    fn test_operand_bytes() {
        assert_eq!(AddressingMode::Implicit.operand_bytes(), 0);
        assert_eq!(AddressingMode::Relative.operand_bytes(), 1);
        assert_eq!(AddressingMode::IndirectY.operand_bytes(), 1);
        assert_eq!(AddressingMode::Indirect.operand_bytes(), 2);
        assert_eq!(AddressingMode::AbsoluteX.operand_bytes(), 2);
    }

    #[test]
    fn test_implicit_loads_accumulator() {
        let mut cpu = cpu_with_operands(&[]);
        cpu.set_a(0x5A);

        assert!(!resolve(&mut cpu, AddressingMode::Implicit));
        assert_eq!(cpu.context().fetched_operand, 0x5A);
        assert_eq!(cpu.pc(), 0x8000);
    }

    #[test]
    fn test_immediate_points_at_operand() {
        let mut cpu = cpu_with_operands(&[0x42]);

        resolve(&mut cpu, AddressingMode::Immediate);
        assert_eq!(cpu.context().effective_address, 0x8000);
        assert_eq!(cpu.pc(), 0x8001);
    }

    #[test]
    fn test_zero_page_x_wraps_within_page_zero() {
        let mut cpu = cpu_with_operands(&[0xF0]);
        cpu.set_x(0x20);

        resolve(&mut cpu, AddressingMode::ZeroPageX);
        assert_eq!(cpu.context().effective_address, 0x0010);
    }

    #[test]
    fn test_zero_page_y_wraps_within_page_zero() {
        let mut cpu = cpu_with_operands(&[0xFF]);
        cpu.set_y(0x01);

        resolve(&mut cpu, AddressingMode::ZeroPageY);
        assert_eq!(cpu.context().effective_address, 0x0000);
    }

    #[test]
    fn test_relative_is_signed() {
        let mut cpu = cpu_with_operands(&[0xFE]);

        resolve(&mut cpu, AddressingMode::Relative);
        assert_eq!(cpu.context().relative_offset, -2);
        assert_eq!(cpu.pc(), 0x8001);
    }

    #[test]
    fn test_absolute_x_page_cross() {
        let mut cpu = cpu_with_operands(&[0xF0, 0x12]);
        cpu.set_x(0x20);

        assert!(resolve(&mut cpu, AddressingMode::AbsoluteX));
        assert_eq!(cpu.context().effective_address, 0x1310);
        assert_eq!(cpu.pc(), 0x8002);
    }

    #[test]
    fn test_absolute_y_same_page() {
        let mut cpu = cpu_with_operands(&[0x00, 0x12]);
        cpu.set_y(0x20);

        assert!(!resolve(&mut cpu, AddressingMode::AbsoluteY));
        assert_eq!(cpu.context().effective_address, 0x1220);
    }

    #[test]
    fn test_indirect_page_wrap_bug() {
        let mut cpu = cpu_with_operands(&[0xFF, 0x10]);
        cpu.memory_mut().write(0x10FF, 0x34);
        cpu.memory_mut().write(0x1000, 0x12);
        cpu.memory_mut().write(0x1100, 0x56);

        resolve(&mut cpu, AddressingMode::Indirect);
        assert_eq!(cpu.context().effective_address, 0x1234);
    }

    #[test]
    fn test_indirect_x_pointer_wraps_in_zero_page() {
        let mut cpu = cpu_with_operands(&[0xFE]);
        cpu.set_x(0x01);
        cpu.memory_mut().write(0x00FF, 0x00);
        cpu.memory_mut().write(0x0000, 0x30);

        resolve(&mut cpu, AddressingMode::IndirectX);
        assert_eq!(cpu.context().effective_address, 0x3000);
    }

    #[test]
    fn test_indirect_y_page_cross() {
        let mut cpu = cpu_with_operands(&[0x40]);
        cpu.set_y(0x10);
        cpu.memory_mut().write(0x0040, 0xF8);
        cpu.memory_mut().write(0x0041, 0x20);

        assert!(resolve(&mut cpu, AddressingMode::IndirectY));
        assert_eq!(cpu.context().effective_address, 0x2108);
    }
}
