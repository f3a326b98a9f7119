//! # Memory Bus Abstraction
//!
//! The CPU core never owns a concrete memory layout. Every access goes through
//! the [`MemoryBus`] trait, which models the 6502 address and data lines:
//!
//! - `read(addr) -> u8` over the full 16-bit address space
//! - `write(addr, value)`
//!
//! ## Design Principles
//!
//! - No bus errors: every 16-bit address is valid, reads and writes always succeed
//! - Synchronous: an access completes before the CPU continues
//! - The bus may be owned by the CPU or borrowed through `&mut B`

use std::fmt;

/// Memory bus trait for CPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use cpu6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Borrowing the bus
///
/// Because `&mut B` is itself a bus, a host can keep ownership of its memory and
/// hand the CPU a reference that lives only as long as the emulation session:
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFD, 0x80);
///
/// {
///     let mut cpu = CPU::new(&mut memory);
///     assert_eq!(cpu.pc(), 0x8000);
///     cpu.memory_mut().write(0x0200, 0x99);
/// }
///
/// assert_eq!(memory.read(0x0200), 0x99);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must never panic. Plain memory reads are side-effect free, but richer hosts
    /// may attach memory-mapped behaviour behind this call.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must never panic. Read-only or unmapped regions may ignore the write.
    fn write(&mut self, addr: u16, value: u8);
}

impl<B: MemoryBus + ?Sized> MemoryBus for &mut B {
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value);
    }
}

/// Errors raised while placing data on a bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    /// The image does not fit between `start` and the top of the address space.
    ImageOverflow {
        /// First address of the image.
        start: u16,
        /// Length of the image in bytes.
        len: usize,
    },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MemoryError::ImageOverflow { start, len } => write!(
                f,
                "Image of {} bytes at 0x{:04X} runs past 0xFFFF",
                len, start
            ),
        }
    }
}

impl std::error::Error for MemoryError {}

/// Simple 64KB flat memory implementation.
///
/// All addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.load(0x8000, &[0xA9, 0x05]).unwrap(); // LDA #$05
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `image` into memory starting at `start`.
    ///
    /// Nothing is written when the image would extend beyond 0xFFFF.
    pub fn load(&mut self, start: u16, image: &[u8]) -> Result<(), MemoryError> {
        let begin = start as usize;
        let end = begin + image.len();
        if end > self.data.len() {
            return Err(MemoryError::ImageOverflow {
                start,
                len: image.len(),
            });
        }

        self.data[begin..end].copy_from_slice(image);
        Ok(())
    }

    /// Returns the whole 64KB address space as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
