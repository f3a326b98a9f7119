//! Fuzz target for single-instruction execution.
//!
//! Builds an arbitrary register file and memory image, clocks one instruction
//! through, and checks the invariants that must hold for every opcode.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{FlatMemory, MemoryBus, CPU, OPCODE_TABLE};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    pc: u16,
}

#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Opcode and operand bytes placed at PC
    instruction_bytes: [u8; 3],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Interrupt and reset vectors at 0xFFFA..=0xFFFF
    vectors: [u8; 6],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    raise_irq: bool,
    raise_nmi: bool,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        memory.write(0x0100 + i as u16, byte);
    }
    for (i, &byte) in input.memory.vectors.iter().enumerate() {
        memory.write(0xFFFA + i as u16, byte);
    }

    let pc = input.cpu_state.pc;
    for (i, &byte) in input.memory.instruction_bytes.iter().enumerate() {
        memory.write(pc.wrapping_add(i as u16), byte);
    }

    let mut cpu = CPU::new(memory);
    cpu.run_for_cycles(8);

    cpu.set_pc(pc);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    if input.raise_nmi {
        cpu.nmi();
    }
    if input.raise_irq {
        cpu.irq();
    }

    let opcode = cpu.memory().read(cpu.pc());
    let before = cpu.cycles();
    let taken = cpu.step();

    assert!(cpu.complete());
    assert_eq!(cpu.status() & 0x20, 0x20, "unused status bit cleared");

    let base = OPCODE_TABLE[opcode as usize].base_cycles as u64;
    assert!(taken >= base && taken <= base + 2);
    assert!(cpu.cycles() - before >= taken);
});
