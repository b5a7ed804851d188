/*!
finalize.rs - Instruction result record and status-flag application.

Overview
========
Every opcode handler returns an `InstrResult` describing what it computed
rather than touching the arithmetic flags itself. `apply_flags` then derives
the flags uniformly from the record:

```text
    CARRY     widened value > 0xFF
    ZERO      low byte of value == 0
    OVERFLOW  per `OverflowRule` (signed formula, or value > 0xFF)
    NEGATIVE  bit 7 of value
```

Only flags named in `affects` are touched. Instructions whose flag effects
do not follow from a result value (BIT's N/V, flag set/clear ops, PLP, RTI)
write the status register directly and leave those bits out of `affects`.
*/

use crate::config::OverflowRule;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW, ZERO};

/// Outcome of one opcode handler.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InstrResult {
    /// Widened result; bit 8 carries the carry-out where one exists.
    pub value: u16,
    /// Flag masks to derive from `value`.
    pub affects: u8,
    /// Signed-overflow condition computed by ADC/SBC.
    pub signed_overflow: bool,
    /// Extra cycles for a taken branch (1, or 2 across a page).
    pub branch_cycles: u32,
    /// BRK executed: request an IRQ-class interrupt.
    pub brk: bool,
}

impl InstrResult {
    /// No flag side effects.
    #[inline]
    pub const fn none() -> Self {
        Self {
            value: 0,
            affects: 0,
            signed_overflow: false,
            branch_cycles: 0,
            brk: false,
        }
    }

    /// Zero + Negative from an 8-bit result.
    #[inline]
    pub const fn zn(v: u8) -> Self {
        Self {
            value: v as u16,
            affects: ZERO | NEGATIVE,
            ..Self::none()
        }
    }

    /// Carry + Zero + Negative from a widened result.
    #[inline]
    pub const fn czn(raw: u16) -> Self {
        Self {
            value: raw,
            affects: CARRY | ZERO | NEGATIVE,
            ..Self::none()
        }
    }

    /// ADC/SBC: all four arithmetic flags.
    #[inline]
    pub const fn arithmetic(raw: u16, signed_overflow: bool) -> Self {
        Self {
            value: raw,
            affects: CARRY | ZERO | OVERFLOW | NEGATIVE,
            signed_overflow,
            ..Self::none()
        }
    }

    /// Branch outcome with its extra cycle cost.
    #[inline]
    pub const fn branch(extra: u32) -> Self {
        Self {
            branch_cycles: extra,
            ..Self::none()
        }
    }

    #[inline]
    pub const fn brk() -> Self {
        Self {
            brk: true,
            ..Self::none()
        }
    }
}

/// Apply the flag side effects recorded in `r`.
pub(crate) fn apply_flags<C: CpuRegs>(cpu: &mut C, r: &InstrResult, rule: OverflowRule) {
    if r.affects & CARRY != 0 {
        cpu.assign_flag(CARRY, r.value > 0xFF);
    }
    if r.affects & ZERO != 0 {
        cpu.assign_flag(ZERO, r.value & 0x00FF == 0);
    }
    if r.affects & OVERFLOW != 0 {
        let v = match rule {
            OverflowRule::Signed => r.signed_overflow,
            OverflowRule::Unsigned => r.value > 0xFF,
        };
        cpu.assign_flag(OVERFLOW, v);
    }
    if r.affects & NEGATIVE != 0 {
        cpu.assign_flag(NEGATIVE, r.value & 0x0080 != 0);
    }
}
