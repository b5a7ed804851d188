/*!
state.rs - Canonical 6502 CPU architectural state (registers + flags).

Overview
========
`CpuState` is the single owner of all architecturally visible registers.
It intentionally excludes:
  - Memory map access (stack and fetch helpers take `&MemoryMap` explicitly)
  - Instruction decode / dispatch logic
  - Timing / cycle accounting
Those live in higher layers (addressing, dispatch, execute modules).

`CpuState` is `Copy`, so the tick loop snapshots it before every
instruction for the diagnostic record.

6502 Status Register Bit Layout
===============================
Bit: 7 6 5 4 3 2 1 0
     N V 1 B D I Z C
Where:
  N = NEGATIVE
  V = OVERFLOW
  1 = UNUSED (forced set in every pushed copy)
  B = BREAK (only exists in pushed copies: set for BRK/PHP, clear for NMI/RST)
  D = DECIMAL (toggled by SED/CLD, never consulted by ADC/SBC)
  I = IRQ_DISABLE
  Z = ZERO
  C = CARRY
*/

/// Processor status flag bit masks (canonical definitions).
pub const CARRY: u8 = 0b0000_0001;
pub const ZERO: u8 = 0b0000_0010;
pub const IRQ_DISABLE: u8 = 0b0000_0100;
pub const DECIMAL: u8 = 0b0000_1000; // Not used by NES hardware, still part of 6502.
pub const BREAK: u8 = 0b0001_0000;
pub const UNUSED: u8 = 0b0010_0000;
pub const OVERFLOW: u8 = 0b0100_0000;
pub const NEGATIVE: u8 = 0b1000_0000;

/// Documented stack pointer value after power-on / reset.
pub const POWER_ON_SP: u8 = 0xFD;

/// Pure architectural register / flag container for the 6502 CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
}

impl Default for CpuState {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: POWER_ON_SP,
            pc: 0x0000,
            status: 0,
        }
    }
}

impl CpuState {
    /// Zeroed registers with the power-on stack pointer.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------
    // Basic Accessors (Read)
    // ---------------------------------------------------------------------
    #[inline]
    pub fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    pub fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    pub fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    pub fn sp(&self) -> u8 {
        self.sp
    }
    #[inline]
    pub fn pc(&self) -> u16 {
        self.pc
    }
    #[inline]
    pub fn status(&self) -> u8 {
        self.status
    }

    // ---------------------------------------------------------------------
    // Mutators (Write)
    // ---------------------------------------------------------------------
    #[inline]
    pub fn set_a(&mut self, v: u8) {
        self.a = v;
    }
    #[inline]
    pub fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    #[inline]
    pub fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    #[inline]
    pub fn set_sp(&mut self, v: u8) {
        self.sp = v;
    }
    #[inline]
    pub fn set_pc(&mut self, v: u16) {
        self.pc = v;
    }
    #[inline]
    pub fn set_status(&mut self, v: u8) {
        self.status = v;
    }

    /// Advance PC by `delta` (wrapping at 16 bits).
    #[inline]
    pub fn advance_pc(&mut self, delta: u16) {
        self.pc = self.pc.wrapping_add(delta);
    }

    // ---------------------------------------------------------------------
    // Flag Operations
    // ---------------------------------------------------------------------

    /// Return true if a status flag (bit mask) is set.
    #[inline]
    pub fn is_flag_set(&self, mask: u8) -> bool {
        (self.status & mask) != 0
    }

    /// Set a flag bit (OR).
    #[inline]
    pub fn set_flag_bit(&mut self, mask: u8) {
        self.status |= mask;
    }

    /// Clear a flag bit (AND NOT).
    #[inline]
    pub fn clear_flag_bit(&mut self, mask: u8) {
        self.status &= !mask;
    }

    /// Assign a flag bit based on boolean `value`.
    #[inline]
    pub fn assign_flag(&mut self, mask: u8, value: bool) {
        if value {
            self.set_flag_bit(mask);
        } else {
            self.clear_flag_bit(mask);
        }
    }
}

impl std::fmt::Display for CpuState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
            self.a, self.x, self.y, self.status, self.sp
        )
    }
}
