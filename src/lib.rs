//! # 6502 CPU Emulator Core
//!
//! A cycle-stepped NMOS 6502 instruction-execution core: register file, status
//! flag semantics, addressing-mode resolution, the 256-entry opcode table, and
//! reset/IRQ/NMI handling.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{CPU, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // LDA #$05; ADC #$03
//! memory.load(0x8000, &[0xA9, 0x05, 0x69, 0x03]).unwrap();
//!
//! // Initialize CPU - it will load PC from the reset vector
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFD);
//!
//! // Drive the clock one instruction at a time
//! cpu.step();
//! cpu.step();
//! assert_eq!(cpu.a(), 0x08);
//! ```
//!
//! ## Timing Model
//!
//! Each instruction's side effects happen on the tick that fetches it; the
//! remaining ticks only count down its cycle cost, including taken-branch and
//! page-crossing penalties. Hosts that interleave other hardware drive
//! [`CPU::clock`] once per cycle; hosts that do not can use [`CPU::step`].
//!
//! ## Modules
//!
//! - `cpu` - CPU state, clock and interrupt handling
//! - `registers` - Register file and status flags
//! - `memory` - MemoryBus trait and a flat 64KB implementation
//! - `opcodes` - Opcode table
//! - `addressing` - Addressing modes and their resolution
//! - `wasm` - JavaScript bindings (feature `wasm`)
//!
//! ## Logging
//!
//! The core logs through the [`log`] facade: every fetch at `trace` level,
//! interrupts and undefined opcodes at `debug`. Install any logger in the host
//! to see them.

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod registers;
#[cfg(feature = "wasm")]
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{
    ExecutionContext, CPU, INTERRUPT_CYCLES, IRQ_VECTOR, NMI_VECTOR, RESET_CYCLES, RESET_SP,
    RESET_VECTOR, STACK_BASE,
};
pub use memory::{FlatMemory, MemoryBus, MemoryError};
pub use opcodes::{Instruction, Operation, OPCODE_TABLE};
pub use registers::{Registers, Status};
