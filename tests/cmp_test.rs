//! Tests for CMP, CPX and CPY.
//!
//! Compares subtract without storing: C = register >= operand, Z on equality,
//! N from bit 7 of the difference.

use cpu6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn cmp_immediate(a: u8, operand: u8) -> CPU<FlatMemory> {
    let mut cpu = setup_cpu();
    cpu.load_program(0x8000, &[0xC9, operand]).unwrap();
    cpu.set_a(a);
    cpu.step();
    cpu
}

#[test]
fn test_cmp_greater() {
    let cpu = cmp_immediate(0x30, 0x10);

    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.a(), 0x30);
}

#[test]
fn test_cmp_equal() {
    let cpu = cmp_immediate(0x42, 0x42);

    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_cmp_less() {
    let cpu = cmp_immediate(0x10, 0x20);

    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n()); // 0x10 - 0x20 = 0xF0
}

#[test]
fn test_cmp_unsigned_not_signed() {
    // 0x80 is 128 unsigned, so it is greater than 0x01
    let cpu = cmp_immediate(0x80, 0x01);

    assert!(cpu.flag_c());
    assert!(!cpu.flag_n()); // 0x7F
}

#[test]
fn test_cmp_indirect_y_page_cross() {
    let mut cpu = setup_cpu();
    // CMP ($20),Y with ($20) = $10F0, Y = 0x10
    cpu.load_program(0x8000, &[0xD1, 0x20]).unwrap();
    cpu.memory_mut().write(0x0020, 0xF0);
    cpu.memory_mut().write(0x0021, 0x10);
    cpu.memory_mut().write(0x1100, 0x05);
    cpu.set_a(0x05);
    cpu.set_y(0x10);

    assert_eq!(cpu.step(), 6);
    assert!(cpu.flag_z());
}

#[test]
fn test_cpx_immediate_and_zero_page() {
    let mut cpu = setup_cpu();
    // CPX #$05; CPX $10
    cpu.load_program(0x8000, &[0xE0, 0x05, 0xE4, 0x10]).unwrap();
    cpu.memory_mut().write(0x0010, 0x06);
    cpu.set_x(0x05);

    assert_eq!(cpu.step(), 2);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());

    assert_eq!(cpu.step(), 3);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
    assert_eq!(cpu.x(), 0x05);
}

#[test]
fn test_cpy_absolute() {
    let mut cpu = setup_cpu();
    // CPY $2000
    cpu.load_program(0x8000, &[0xCC, 0x00, 0x20]).unwrap();
    cpu.memory_mut().write(0x2000, 0x01);
    cpu.set_y(0x02);

    assert_eq!(cpu.step(), 4);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}
