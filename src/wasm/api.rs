//! WASM API for the 6502 core.
//!
//! Provides JavaScript-callable interfaces for clocking the CPU, raising
//! interrupts, inspecting registers and accessing memory.

use crate::{FlatMemory, MemoryBus, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create a CPU over 64KB of RAM with the reset vector pointing to $0600
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let mut memory = FlatMemory::new();
        memory.write(0xFFFC, 0x00);
        memory.write(0xFFFD, 0x06);

        Emulator6502 {
            cpu: CPU::new(memory),
        }
    }

    /// Run the reset sequence. Memory is preserved.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Raise a maskable interrupt
    pub fn irq(&mut self) {
        self.cpu.irq();
    }

    /// Raise a non-maskable interrupt
    pub fn nmi(&mut self) {
        self.cpu.nmi();
    }

    /// Advance one clock cycle
    pub fn clock(&mut self) {
        self.cpu.clock();
    }

    /// Execute a single instruction and return its cycle count
    pub fn step(&mut self) -> u32 {
        self.cpu.step() as u32
    }

    /// Clock a fixed number of cycles
    pub fn run_for_cycles(&mut self, cycles: u32) -> u32 {
        self.cpu.run_for_cycles(cycles as u64) as u32
    }

    /// True when the next clock will fetch a new instruction
    pub fn complete(&self) -> bool {
        self.cpu.complete()
    }

    // Register getters

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    // Execution context getters

    #[wasm_bindgen(getter)]
    pub fn opcode(&self) -> u8 {
        self.cpu.context().opcode
    }

    #[wasm_bindgen(getter)]
    pub fn effective_address(&self) -> u16 {
        self.cpu.context().effective_address
    }

    #[wasm_bindgen(getter)]
    pub fn remaining_cycles(&self) -> u8 {
        self.cpu.context().remaining_cycles
    }

    // Flag getters

    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> js_sys::Uint8Array {
        let start = (page as usize) << 8;
        js_sys::Uint8Array::from(&self.cpu.memory().as_slice()[start..start + 256])
    }

    /// Load a program into memory and point PC at it
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) -> Result<(), JsError> {
        self.cpu
            .load_program(start_addr, program)
            .map_err(|e| JsError::new(&e.to_string()))?;
        self.cpu.set_pc(start_addr);
        Ok(())
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
