//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the cycle-stepped clock that drives it.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: A, X, Y, PC, SP and the packed status byte (see [`Registers`])
//! - **Execution context**: transient per-instruction state (see [`ExecutionContext`])
//! - **Cycle counter**: u64 monotonically increasing count of clock ticks
//!
//! ## Execution Model
//!
//! Timing is stepped per cycle, effects are not. When `clock()` is called with no
//! cycles outstanding the CPU fetches the next opcode, resolves its addressing
//! mode, executes the operation, and loads `remaining_cycles` with the cost of the
//! instruction. The following ticks only count that cost down.
//!
//! - `clock()`: Advance one cycle
//! - `step()`: Clock through one whole instruction
//! - `run_for_cycles()`: Clock a fixed number of cycles
//! - `reset()`, `irq()`, `nmi()`: Interrupt lines
//!
//! Interrupt requests are serviced immediately and replace whatever cycle count
//! is outstanding, so hosts should raise them between instructions (when
//! `complete()` returns true).

use log::{debug, trace};

use crate::addressing::{self, AddressingMode};
use crate::instructions;
use crate::memory::{FlatMemory, MemoryError};
use crate::registers::{Registers, Status};
use crate::{MemoryBus, OPCODE_TABLE};

/// Address of the reset vector (low byte; high byte at +1).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the IRQ/BRK vector (low byte; high byte at +1).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Address of the NMI vector (low byte; high byte at +1).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Base address of the hardware stack page (0x0100-0x01FF).
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after reset.
pub const RESET_SP: u8 = 0xFD;

/// Cycles consumed by the reset sequence.
pub const RESET_CYCLES: u8 = 8;

/// Cycles consumed by IRQ and NMI service.
pub const INTERRUPT_CYCLES: u8 = 7;

/// Transient state of the instruction in flight.
///
/// Cleared at every opcode fetch. Exposed read-only for debuggers and
/// disassembly tooling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionContext {
    /// Opcode byte of the current instruction.
    pub opcode: u8,

    /// Operand value read for the current instruction.
    pub fetched_operand: u8,

    /// Effective address computed by the addressing mode.
    pub effective_address: u16,

    /// Signed branch displacement (Relative mode only).
    pub relative_offset: i8,

    /// Cycles left before the next opcode fetch.
    pub remaining_cycles: u8,
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the [`MemoryBus`] trait. `M` may be
/// an owned bus such as [`FlatMemory`] or a borrowed `&mut B`, in which case the
/// borrow checker enforces that the bus outlives the CPU.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.load(0x8000, &[0xA9, 0x05, 0x69, 0x03]).unwrap(); // LDA #$05; ADC #$03
///
/// let mut cpu = CPU::new(memory);
/// cpu.step();
/// cpu.step();
///
/// assert_eq!(cpu.a(), 0x08);
/// assert_eq!(cpu.pc(), 0x8004);
/// ```
pub struct CPU<M: MemoryBus> {
    pub(crate) regs: Registers,

    pub(crate) ctx: ExecutionContext,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU attached to `memory` and runs the reset sequence.
    ///
    /// PC is loaded from the reset vector and the 8 reset cycles are left
    /// pending, so the first opcode fetch happens on the ninth `clock()`.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            regs: Registers::new(),
            ctx: ExecutionContext::default(),
            cycles: 0,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Forces the CPU into its reset state.
    ///
    /// - PC is loaded from 0xFFFC/0xFFFD (little-endian)
    /// - SP = 0xFD, A = X = Y = 0
    /// - Status has only the unused bit set
    /// - The execution context is cleared and 8 cycles are left pending
    pub fn reset(&mut self) {
        self.regs.pc = self.read_word(RESET_VECTOR);
        self.regs.a = 0x00;
        self.regs.x = 0x00;
        self.regs.y = 0x00;
        self.regs.sp = RESET_SP;
        self.regs.set_status(Status::U);

        self.ctx = ExecutionContext {
            remaining_cycles: RESET_CYCLES,
            ..ExecutionContext::default()
        };

        debug!("reset: pc=${:04X}", self.regs.pc);
    }

    /// Requests a maskable interrupt.
    ///
    /// Ignored while the I flag is set. Otherwise pushes PC and status (B clear),
    /// sets I and jumps through the IRQ vector at 0xFFFE/0xFFFF.
    pub fn irq(&mut self) {
        if self.regs.get_flag(Status::I) {
            trace!("irq masked at pc=${:04X}", self.regs.pc);
            return;
        }

        let from = self.regs.pc;
        self.interrupt(IRQ_VECTOR);
        debug!("irq: ${:04X} -> ${:04X}", from, self.regs.pc);
    }

    /// Raises a non-maskable interrupt through the vector at 0xFFFA/0xFFFB.
    pub fn nmi(&mut self) {
        let from = self.regs.pc;
        self.interrupt(NMI_VECTOR);
        debug!("nmi: ${:04X} -> ${:04X}", from, self.regs.pc);
    }

    fn interrupt(&mut self, vector: u16) {
        self.push_word(self.regs.pc);

        let status = (self.regs.status() - Status::B) | Status::U;
        self.push(status.bits());
        self.regs.set_flag(Status::I, true);

        self.regs.pc = self.read_word(vector);
        self.ctx.remaining_cycles = INTERRUPT_CYCLES;
    }

    /// Advances the CPU by one clock cycle.
    ///
    /// When no cycles are outstanding the next instruction is fetched and
    /// executed in full on this tick; its cycle cost is then counted down by
    /// this and the following calls.
    pub fn clock(&mut self) {
        if self.ctx.remaining_cycles == 0 {
            let pc = self.regs.pc;
            let opcode = self.fetch_byte();
            let instruction = OPCODE_TABLE[opcode as usize];

            self.ctx = ExecutionContext {
                opcode,
                ..ExecutionContext::default()
            };

            trace!(
                "${:04X}: {:02X} {} {:?}",
                pc,
                opcode,
                instruction.mnemonic,
                instruction.addressing_mode
            );

            let page_crossed = addressing::resolve(self, instruction.addressing_mode);
            let reads_operand = instructions::execute(self, instruction.operation);

            // Branches have already added their own penalty cycles
            self.ctx.remaining_cycles += instruction.base_cycles;
            if page_crossed && reads_operand {
                self.ctx.remaining_cycles += 1;
            }
        }

        self.cycles += 1;
        self.ctx.remaining_cycles -= 1;
    }

    /// Returns true when the current instruction has used all its cycles.
    pub fn complete(&self) -> bool {
        self.ctx.remaining_cycles == 0
    }

    /// Executes one whole instruction.
    ///
    /// Any cycles still outstanding (from reset, an interrupt or a previous
    /// partial instruction) are clocked off first. Returns the cycles consumed
    /// by the instruction itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0xEA); // NOP
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.step(), 2);
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> u64 {
        while !self.complete() {
            self.clock();
        }

        let start = self.cycles;
        self.clock();
        while !self.complete() {
            self.clock();
        }

        self.cycles - start
    }

    /// Clocks the CPU for exactly `cycle_budget` cycles.
    ///
    /// Useful for frame-locked hosts that interleave the CPU with other
    /// hardware. An instruction may be left partially counted down.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        for _ in 0..cycle_budget {
            self.clock();
        }
        cycle_budget
    }

    // ========== Bus Helpers ==========

    pub(crate) fn read(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    pub(crate) fn write(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Reads a pointer from zero page; the high byte wraps to 0x00.
    pub(crate) fn read_zero_page_word(&self, zp: u8) -> u16 {
        let lo = self.read(zp as u16) as u16;
        let hi = self.read(zp.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Returns the operand of the current instruction.
    ///
    /// Implied-mode instructions already hold A as their operand; everything else
    /// reads it from the effective address.
    pub(crate) fn fetch_operand(&mut self) -> u8 {
        if self.current_mode() != AddressingMode::Implicit {
            self.ctx.fetched_operand = self.read(self.ctx.effective_address);
        }
        self.ctx.fetched_operand
    }

    /// Writes a read-modify-write result back to A or memory.
    pub(crate) fn store_result(&mut self, value: u8) {
        if self.current_mode() == AddressingMode::Implicit {
            self.regs.a = value;
        } else {
            self.write(self.ctx.effective_address, value);
        }
    }

    fn current_mode(&self) -> AddressingMode {
        OPCODE_TABLE[self.ctx.opcode as usize].addressing_mode
    }

    // ========== Stack Helpers ==========

    pub(crate) fn push(&mut self, value: u8) {
        self.write(STACK_BASE | self.regs.sp as u16, value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
    }

    pub(crate) fn pop(&mut self) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        self.read(STACK_BASE | self.regs.sp as u16)
    }

    /// Pushes high byte first, matching the hardware's stack frame order.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    pub(crate) fn pop_word(&mut self) -> u16 {
        let lo = self.pop() as u16;
        let hi = self.pop() as u16;
        (hi << 8) | lo
    }

    // ========== Inspection ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC, bit 5 always 1).
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory};
    ///
    /// let cpu = CPU::new(FlatMemory::new());
    /// assert_eq!(cpu.status(), 0b0010_0000);
    /// ```
    pub fn status(&self) -> u8 {
        self.regs.status().bits()
    }

    /// Returns the register file.
    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    /// Returns the state of the instruction in flight.
    pub fn context(&self) -> &ExecutionContext {
        &self.ctx
    }

    /// Returns the total number of clock cycles since the CPU was created.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    ///
    /// Intended for loading images and poking values while the clock is not
    /// being driven.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.get_flag(Status::N)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.get_flag(Status::V)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.regs.get_flag(Status::B)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.get_flag(Status::D)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.regs.get_flag(Status::I)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.get_flag(Status::Z)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.get_flag(Status::C)
    }

    // ========== Setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Replaces the packed status byte. Bit 5 stays set.
    pub fn set_status(&mut self, value: u8) {
        self.regs.set_status(Status::from_bits_retain(value));
    }

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.regs.set_flag(Status::N, value);
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.regs.set_flag(Status::V, value);
    }

    /// Sets or clears the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.regs.set_flag(Status::B, value);
    }

    /// Sets or clears the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.regs.set_flag(Status::D, value);
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.regs.set_flag(Status::I, value);
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.regs.set_flag(Status::Z, value);
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.regs.set_flag(Status::C, value);
    }
}

impl CPU<FlatMemory> {
    /// Copies a program image into memory at `start`.
    ///
    /// PC is left alone; point the reset vector (or `set_pc`) at the image.
    pub fn load_program(&mut self, start: u16, image: &[u8]) -> Result<(), MemoryError> {
        self.memory.load(start, image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.write(0xFFFC, 0x00);
        memory.write(0xFFFD, 0x80);
        CPU::new(memory)
    }

    #[test]
    fn test_cpu_initialization() {
        let cpu = setup_cpu();

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.status(), 0x20);
        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.context().remaining_cycles, RESET_CYCLES);
        assert!(!cpu.complete());
    }

    #[test]
    fn test_reset_cycles_precede_first_fetch() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xE8); // INX

        for _ in 0..RESET_CYCLES {
            cpu.clock();
        }
        assert!(cpu.complete());
        assert_eq!(cpu.x(), 0);

        cpu.clock();
        assert_eq!(cpu.x(), 1);
        assert_eq!(cpu.context().opcode, 0xE8);
        assert_eq!(cpu.context().remaining_cycles, 1);
    }

    #[test]
    fn test_step_reports_instruction_cycles() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xEA); // NOP

        assert_eq!(cpu.step(), 2);
        assert_eq!(cpu.cycles(), RESET_CYCLES as u64 + 2);
    }

    #[test]
    fn test_run_for_cycles() {
        let mut cpu = setup_cpu();
        for addr in 0x8000..=0x8010 {
            cpu.memory_mut().write(addr, 0xE8); // INX
        }

        assert_eq!(cpu.run_for_cycles(8 + 10), 18);
        assert_eq!(cpu.x(), 5);
        assert!(cpu.complete());
    }

    #[test]
    fn test_stack_helpers_use_page_one() {
        let mut cpu = setup_cpu();
        cpu.push_word(0xBEEF);

        assert_eq!(cpu.memory().read(0x01FD), 0xBE);
        assert_eq!(cpu.memory().read(0x01FC), 0xEF);
        assert_eq!(cpu.sp(), 0xFB);
        assert_eq!(cpu.pop_word(), 0xBEEF);
        assert_eq!(cpu.sp(), 0xFD);
    }

    #[test]
    fn test_stack_pointer_wraps() {
        let mut cpu = setup_cpu();
        cpu.set_sp(0x00);
        cpu.push(0x11);

        assert_eq!(cpu.memory().read(0x0100), 0x11);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.pop(), 0x11);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_set_status_keeps_unused_bit() {
        let mut cpu = setup_cpu();
        cpu.set_status(0x00);
        assert_eq!(cpu.status(), 0x20);

        cpu.set_status(0xC3);
        assert_eq!(cpu.status(), 0xE3);
        assert!(cpu.flag_n() && cpu.flag_v() && cpu.flag_z() && cpu.flag_c());
    }

    #[test]
    fn test_borrowed_memory() {
        let mut memory = FlatMemory::new();
        memory.write(0xFFFD, 0x80);
        memory.write(0x8000, 0xA9); // LDA #$33
        memory.write(0x8001, 0x33);
        memory.write(0x8002, 0x85); // STA $10
        memory.write(0x8003, 0x10);

        {
            let mut cpu = CPU::new(&mut memory);
            cpu.step();
            cpu.step();
        }

        assert_eq!(memory.read(0x0010), 0x33);
    }
}
