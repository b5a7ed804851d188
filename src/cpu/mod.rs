/*!
cpu::mod - Public facade for the 6502 CPU core.

Layout:

```text
    state.rs        - Architectural registers and flag masks (`CpuState`).
    regs.rs         - `CpuRegs` trait so helpers stay generic over register storage.
    addressing.rs   - Addressing modes, operand locations and resolution.
    execute.rs      - Stack and ALU primitives shared by the handlers.
    cycles.rs       - Page-cross and branch-taken cycle adjustments.
    table.rs        - Static opcode table (mnemonic, mode, base cycles, handler).
    dispatch/       - Tick orchestration, interrupt entry, opcode family handlers.
    instruction.rs  - Diagnostic record of the last executed instruction.
    core/           - `Cpu` facade owning state, memory map and config.
```

Downstream code should go through `Cpu`; the internal module layout may
change.

Usage:
```rust
use nescpu::cpu::Cpu;

let mut cpu = Cpu::new();
cpu.memory_mut().load(0x8000, &[0xA9, 0x42]);
cpu.tick();
assert_eq!(cpu.a(), 0x42);
```
*/

pub mod addressing;
pub mod core;
pub mod cycles;
pub mod dispatch;
pub mod execute;
pub mod instruction;
pub mod regs;
pub mod state;
pub mod table;

pub use crate::cpu::addressing::{AddressingMode, OperandLocation};
pub use crate::cpu::core::Cpu;
pub use crate::cpu::dispatch::InterruptKind;
pub use crate::cpu::instruction::Instruction;
pub use crate::cpu::regs::CpuRegs;
pub use crate::cpu::state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, UNUSED, ZERO,
};
