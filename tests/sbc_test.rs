//! Tests for the SBC (Subtract with Carry) instruction.
//!
//! C acts as an inverted borrow: set means "no borrow".

use cpu6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn sbc_immediate(a: u8, operand: u8, carry: bool) -> CPU<FlatMemory> {
    let mut cpu = setup_cpu();
    cpu.load_program(0x8000, &[0xE9, operand]).unwrap();
    cpu.set_a(a);
    cpu.set_flag_c(carry);
    cpu.step();
    cpu
}

#[test]
fn test_sbc_zero_minus_one_borrows() {
    let cpu = sbc_immediate(0x00, 0x01, true);

    assert_eq!(cpu.a(), 0xFF);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
}

#[test]
fn test_sbc_simple() {
    let cpu = sbc_immediate(0x05, 0x03, true);

    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_sbc_borrow_in() {
    let cpu = sbc_immediate(0x05, 0x03, false);

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_equal_operands() {
    let cpu = sbc_immediate(0x42, 0x42, true);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_overflow_negative_minus_positive() {
    // -128 - 1 = +127 (overflow)
    let cpu = sbc_immediate(0x80, 0x01, true);

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_sbc_overflow_positive_minus_negative() {
    // 80 - (-80) = 160, out of signed range
    let cpu = sbc_immediate(0x50, 0xB0, true);

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_sbc_absolute_y_page_cross() {
    let mut cpu = setup_cpu();

    // SBC $10FF,Y with Y=1 -> $1100
    cpu.load_program(0x8000, &[0xF9, 0xFF, 0x10]).unwrap();
    cpu.memory_mut().write(0x1100, 0x10);
    cpu.set_a(0x30);
    cpu.set_y(0x01);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.a(), 0x20);
}

#[test]
fn test_sbc_zero_page_x_wraps() {
    let mut cpu = setup_cpu();

    // SBC $F0,X with X=0x20 -> $10
    cpu.load_program(0x8000, &[0xF5, 0xF0]).unwrap();
    cpu.memory_mut().write(0x0010, 0x01);
    cpu.memory_mut().write(0x0110, 0x55);
    cpu.set_a(0x10);
    cpu.set_x(0x20);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.a(), 0x0F);
}
