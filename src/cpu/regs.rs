/*!
regs.rs - CpuRegs trait: the register + flag interface used by addressing
and instruction helpers.

The trait does NOT include:
  - Stack push/pop
  - Instruction fetch
  - Memory access of any kind

Memory, stack, and fetch operations stay explicit at call sites via
`&MemoryMap` / `&mut MemoryMap` so helpers never over-borrow. Generic helpers
are written as:

```text
    fn op<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap) { ... }
```
*/

use crate::cpu::state::{BREAK, CARRY, CpuState, UNUSED};

/// Minimal 6502 register + flag API needed by instruction semantic code.
pub trait CpuRegs {
    fn a(&self) -> u8;
    fn x(&self) -> u8;
    fn y(&self) -> u8;
    fn sp(&self) -> u8;
    fn pc(&self) -> u16;
    fn status(&self) -> u8;

    fn set_a(&mut self, v: u8);
    fn set_x(&mut self, v: u8);
    fn set_y(&mut self, v: u8);
    fn set_sp(&mut self, v: u8);
    fn set_pc(&mut self, v: u16);
    fn set_status(&mut self, v: u8);

    /// Advance PC by `delta` (wrapping at 16 bits).
    fn advance_pc(&mut self, delta: u16);

    #[inline]
    fn advance_pc_one(&mut self) {
        self.advance_pc(1);
    }

    /// Return true if mask bits are set.
    fn is_flag_set(&self, mask: u8) -> bool;

    /// Assign specific flag bits based on boolean `value` (set or clear).
    fn assign_flag(&mut self, mask: u8, value: bool);

    /// Carry as 0 or 1, for add/rotate arithmetic.
    #[inline]
    fn carry_bit(&self) -> u8 {
        self.is_flag_set(CARRY) as u8
    }

    /// Compose processor status byte for a stack push.
    /// - UNUSED bit forced set
    /// - BREAK bit included only when `set_break` is true
    #[inline]
    fn compose_status_for_push(&self, set_break: bool) -> u8 {
        let v = self.status() | UNUSED;
        if set_break { v | BREAK } else { v & !BREAK }
    }
}

impl CpuRegs for CpuState {
    #[inline]
    fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    fn sp(&self) -> u8 {
        self.sp
    }
    #[inline]
    fn pc(&self) -> u16 {
        self.pc
    }
    #[inline]
    fn status(&self) -> u8 {
        self.status
    }

    #[inline]
    fn set_a(&mut self, v: u8) {
        self.a = v;
    }
    #[inline]
    fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    #[inline]
    fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    #[inline]
    fn set_sp(&mut self, v: u8) {
        self.sp = v;
    }
    #[inline]
    fn set_pc(&mut self, v: u16) {
        self.pc = v;
    }
    #[inline]
    fn set_status(&mut self, v: u8) {
        self.status = v;
    }

    #[inline]
    fn advance_pc(&mut self, delta: u16) {
        CpuState::advance_pc(self, delta);
    }

    #[inline]
    fn is_flag_set(&self, mask: u8) -> bool {
        CpuState::is_flag_set(self, mask)
    }

    #[inline]
    fn assign_flag(&mut self, mask: u8, value: bool) {
        CpuState::assign_flag(self, mask, value);
    }
}
