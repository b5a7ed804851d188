/*!
core::Cpu - Canonical 6502 CPU facade owning registers and the memory map.

Design
======
- `Cpu` owns a `CpuState` (registers), the `MemoryMap` it executes from, the
  construction-time `CpuConfig`, a latched NMI request, a running cycle
  counter, and the diagnostic record of the last instruction.
- `tick` is the sole execution entry point; it delegates to the generic
  dispatcher in `cpu::dispatch`, which operates on `CpuState` directly.
- The PRG-ROM regions are filled by the caller (`update_prg_rom`) between
  ticks; the core never reads ROM files itself.

Lifecycle
=========
```text
    let mut cpu = Cpu::new();          // PC = $8000, SP = $FD, memory zeroed
    cpu.update_prg_rom(&low, &high);   // install banks
    cpu.reset();                       // RESET sequence, PC from $FFFC
    cpu.tick();                        // one instruction
```
*/

use crate::config::CpuConfig;
use crate::cpu::cycles::INTERRUPT_CYCLES;
use crate::cpu::dispatch::{self, InterruptKind};
use crate::cpu::instruction::Instruction;
use crate::cpu::state::CpuState;
use crate::memory::MemoryMap;
use crate::memory::regions::PRG_ROM_BANK_SIZE;

/// Start of the lower PRG-ROM bank; PC value after power-on.
pub const PRG_ROM_START: u16 = 0x8000;

#[derive(Debug, Clone)]
pub struct Cpu {
    state: CpuState,
    memory: MemoryMap,
    config: CpuConfig,
    nmi_pending: bool,
    total_cycles: u64,
    previous: Option<Instruction>,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Construct a new CPU with power-up defaults.
    pub fn new() -> Self {
        Self::create_and_initialize(CpuConfig::default())
    }

    /// Zeroed registers and memory, PC at the lower PRG-ROM bank, SP from
    /// `config`.
    pub fn create_and_initialize(config: CpuConfig) -> Self {
        let mut state = CpuState::new();
        state.set_pc(PRG_ROM_START);
        state.set_sp(config.power_on_sp);
        Self {
            state,
            memory: MemoryMap::new(),
            config,
            nmi_pending: false,
            total_cycles: 0,
            previous: None,
        }
    }

    /// Copy a pair of 16 KiB banks into $8000-$BFFF and $C000-$FFFF.
    /// May be called again at any point between ticks.
    pub fn update_prg_rom(
        &mut self,
        low_bank: &[u8; PRG_ROM_BANK_SIZE],
        high_bank: &[u8; PRG_ROM_BANK_SIZE],
    ) {
        self.memory.update_prg_rom(low_bank, high_bank);
    }

    /// Run the RESET sequence (PC from $FFFC).
    pub fn reset(&mut self) {
        self.interrupt(InterruptKind::Rst);
    }

    /// Enter an interrupt immediately, outside the tick loop.
    pub fn interrupt(&mut self, kind: InterruptKind) {
        dispatch::interrupt(&mut self.state, &mut self.memory, kind);
        self.total_cycles += INTERRUPT_CYCLES as u64;
    }

    /// Latch an NMI; it is entered at the end of the next tick.
    pub fn request_nmi(&mut self) {
        self.nmi_pending = true;
    }

    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    /// Execute exactly one instruction.
    pub fn tick(&mut self) {
        let nmi = std::mem::take(&mut self.nmi_pending);
        let ins = dispatch::step(&mut self.state, &mut self.memory, &self.config, nmi);
        self.total_cycles += ins.cycles as u64;
        if ins.interrupt == Some(InterruptKind::Nmi) {
            self.total_cycles += INTERRUPT_CYCLES as u64;
        }
        self.previous = Some(ins);
    }

    /// Run `ticks` instructions.
    pub fn run(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Diagnostic record of the last executed instruction.
    pub fn previous_instruction(&self) -> Option<&Instruction> {
        self.previous.as_ref()
    }

    /// Cycles of the last executed instruction (0 before the first tick).
    pub fn last_cycles(&self) -> u32 {
        self.previous.as_ref().map_or(0, |i| i.cycles)
    }

    /// Cycles consumed since construction, interrupts included.
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    pub fn memory(&self) -> &MemoryMap {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut MemoryMap {
        &mut self.memory
    }

    // ---------------------------------------------------------------------
    // Register accessors (read)
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    pub fn status(&self) -> u8 {
        self.state.status
    }

    // ---------------------------------------------------------------------
    // Register mutators (write)
    // ---------------------------------------------------------------------
    pub fn set_a(&mut self, v: u8) {
        self.state.a = v;
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.x = v;
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.y = v;
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.sp = v;
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.pc = v;
    }
    pub fn set_status(&mut self, v: u8) {
        self.state.status = v;
    }

    // ---------------------------------------------------------------------
    // Flag helpers
    // ---------------------------------------------------------------------
    pub fn set_flag(&mut self, mask: u8, on: bool) {
        self.state.assign_flag(mask, on);
    }

    pub fn get_flag(&self, mask: u8) -> bool {
        self.state.is_flag_set(mask)
    }
}
