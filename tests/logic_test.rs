//! Tests for AND, ORA, EOR and BIT.

use cpu6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_and_immediate() {
    let mut cpu = setup_cpu();
    // AND #$0F; AND #$F0
    cpu.load_program(0x8000, &[0x29, 0x0F, 0x29, 0xF0]).unwrap();
    cpu.set_a(0x8F);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.a(), 0x0F);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());

    cpu.step();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_and_absolute_y_page_cross() {
    let mut cpu = setup_cpu();
    // AND $12FF,Y with Y=1
    cpu.load_program(0x8000, &[0x39, 0xFF, 0x12]).unwrap();
    cpu.memory_mut().write(0x1300, 0xC0);
    cpu.set_a(0xFF);
    cpu.set_y(0x01);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.a(), 0xC0);
    assert!(cpu.flag_n());
}

#[test]
fn test_ora_immediate_and_zero_page() {
    let mut cpu = setup_cpu();
    // ORA #$00; ORA $10
    cpu.load_program(0x8000, &[0x09, 0x00, 0x05, 0x10]).unwrap();
    cpu.memory_mut().write(0x0010, 0x81);

    cpu.step();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.a(), 0x81);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_eor_immediate() {
    let mut cpu = setup_cpu();
    // EOR #$FF; EOR #$55
    cpu.load_program(0x8000, &[0x49, 0xFF, 0x49, 0x55]).unwrap();
    cpu.set_a(0xAA);

    cpu.step();
    assert_eq!(cpu.a(), 0x55);
    assert!(!cpu.flag_n());

    cpu.step();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_eor_indirect_x() {
    let mut cpu = setup_cpu();
    // EOR ($10,X) with X=2
    cpu.load_program(0x8000, &[0x41, 0x10]).unwrap();
    cpu.memory_mut().write(0x0012, 0x00);
    cpu.memory_mut().write(0x0013, 0x44);
    cpu.memory_mut().write(0x4400, 0x0F);
    cpu.set_a(0xFF);
    cpu.set_x(0x02);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.a(), 0xF0);
    assert!(cpu.flag_n());
}

#[test]
fn test_bit_copies_bits_7_and_6_of_memory() {
    let mut cpu = setup_cpu();
    // BIT $10
    cpu.load_program(0x8000, &[0x24, 0x10]).unwrap();
    cpu.memory_mut().write(0x0010, 0xC0);
    cpu.set_a(0x01);

    assert_eq!(cpu.step(), 3);
    assert!(cpu.flag_z()); // 0x01 & 0xC0 == 0
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert_eq!(cpu.a(), 0x01);
}

#[test]
fn test_bit_absolute_non_zero_result() {
    let mut cpu = setup_cpu();
    // BIT $2000
    cpu.load_program(0x8000, &[0x2C, 0x00, 0x20]).unwrap();
    cpu.memory_mut().write(0x2000, 0x01);
    cpu.set_a(0xFF);
    cpu.set_flag_v(true);
    cpu.set_flag_n(true);

    assert_eq!(cpu.step(), 4);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
}
