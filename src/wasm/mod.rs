//! WebAssembly bindings for the 6502 core.
//!
//! This module provides JavaScript-callable interfaces to the CPU, enabling
//! browser hosts to drive the clock and inspect state.

pub mod api;

pub use api::Emulator6502;
