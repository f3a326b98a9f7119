//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function that takes a mutable reference to the CPU,
//! runs after the addressing mode has been resolved into the execution context, and
//! returns whether it honours the addressing mode's page-crossing penalty.
//!
//! Only instructions that merely read their operand return `true`. Stores and
//! read-modify-write instructions always spend the indexed cycle, so it is
//! already part of their base cost in the opcode table.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP, undefined opcodes)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{MemoryBus, Operation, CPU};

/// Runs `operation` against the already-resolved execution context.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, operation: Operation) -> bool {
    match operation {
        Operation::Adc => alu::adc(cpu),
        Operation::And => alu::and(cpu),
        Operation::Asl => shifts::asl(cpu),
        Operation::Bcc => branches::bcc(cpu),
        Operation::Bcs => branches::bcs(cpu),
        Operation::Beq => branches::beq(cpu),
        Operation::Bit => alu::bit(cpu),
        Operation::Bmi => branches::bmi(cpu),
        Operation::Bne => branches::bne(cpu),
        Operation::Bpl => branches::bpl(cpu),
        Operation::Brk => control::brk(cpu),
        Operation::Bvc => branches::bvc(cpu),
        Operation::Bvs => branches::bvs(cpu),
        Operation::Clc => flags::clc(cpu),
        Operation::Cld => flags::cld(cpu),
        Operation::Cli => flags::cli(cpu),
        Operation::Clv => flags::clv(cpu),
        Operation::Cmp => alu::cmp(cpu),
        Operation::Cpx => alu::cpx(cpu),
        Operation::Cpy => alu::cpy(cpu),
        Operation::Dec => inc_dec::dec(cpu),
        Operation::Dex => inc_dec::dex(cpu),
        Operation::Dey => inc_dec::dey(cpu),
        Operation::Eor => alu::eor(cpu),
        Operation::Inc => inc_dec::inc(cpu),
        Operation::Inx => inc_dec::inx(cpu),
        Operation::Iny => inc_dec::iny(cpu),
        Operation::Jmp => control::jmp(cpu),
        Operation::Jsr => control::jsr(cpu),
        Operation::Lda => load_store::lda(cpu),
        Operation::Ldx => load_store::ldx(cpu),
        Operation::Ldy => load_store::ldy(cpu),
        Operation::Lsr => shifts::lsr(cpu),
        Operation::Nop => control::nop(cpu),
        Operation::Ora => alu::ora(cpu),
        Operation::Pha => stack::pha(cpu),
        Operation::Php => stack::php(cpu),
        Operation::Pla => stack::pla(cpu),
        Operation::Plp => stack::plp(cpu),
        Operation::Rol => shifts::rol(cpu),
        Operation::Ror => shifts::ror(cpu),
        Operation::Rti => control::rti(cpu),
        Operation::Rts => control::rts(cpu),
        Operation::Sbc => alu::sbc(cpu),
        Operation::Sec => flags::sec(cpu),
        Operation::Sed => flags::sed(cpu),
        Operation::Sei => flags::sei(cpu),
        Operation::Sta => load_store::sta(cpu),
        Operation::Stx => load_store::stx(cpu),
        Operation::Sty => load_store::sty(cpu),
        Operation::Tax => transfer::tax(cpu),
        Operation::Tay => transfer::tay(cpu),
        Operation::Tsx => transfer::tsx(cpu),
        Operation::Txa => transfer::txa(cpu),
        Operation::Txs => transfer::txs(cpu),
        Operation::Tya => transfer::tya(cpu),
        Operation::Xxx => control::xxx(cpu),
    }
}
