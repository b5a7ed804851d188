#![doc = r#"
nescpu library crate.

NES 6502 CPU core: memory map, addressing-mode resolver, opcode table and
tick loop, plus an iNES loader and a small driver that feeds PRG banks to
the core.

Modules:
- cartridge: iNES v1 loader; supplies 16 KiB PRG banks
- config: CPU construction options (overflow rule, power-on SP)
- cpu: 6502 CPU core (facade + state + dispatch + execute modules)
- emulator: driver tying a cartridge to the CPU
- memory: 64 KiB memory map with RAM and I/O mirroring

In tests, shared iNES builders and CPU fixtures are available under
`crate::test_utils`.
"#]

pub mod cartridge;
pub mod config;
pub mod cpu;
pub mod emulator;
pub mod memory;

// Re-export commonly used types at the crate root for convenience.
pub use cartridge::{Cartridge, CartridgeError};
pub use config::{CpuConfig, OverflowRule};
pub use cpu::{AddressingMode, Cpu, CpuState, Instruction, InterruptKind, OperandLocation};
pub use emulator::Emulator;
pub use memory::MemoryMap;

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
