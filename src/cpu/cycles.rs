/*!
cycles.rs - Cycle timing helpers for the 6502 CPU core.

Purpose
=======
Base cycle counts live in the opcode table (`table.rs`); this module owns
the dynamic adjustments layered on top of them:

  - `page_cross_penalty` : +1 for read instructions whose indexed address
                           crossed a page (abs,X / abs,Y / (ind),Y).
  - `branch_taken_cycles`: +1 for a taken branch, +2 when the target lies on
                           a different page than the following instruction.
  - `INTERRUPT_CYCLES`   : cost of an interrupt entry sequence.

Stores and read-modify-write instructions never pay the page-cross penalty;
their table cost already includes the extra cycle.
*/

/// Cycles consumed by an NMI / IRQ / RESET entry sequence.
pub const INTERRUPT_CYCLES: u32 = 7;

/// Cost charged for opcodes with no table entry (executed as NOP).
pub const UNKNOWN_OPCODE_CYCLES: u8 = 2;

/// +1 when the opcode is penalized and the page was crossed.
#[inline]
pub(crate) fn page_cross_penalty(penalized: bool, crossed: bool) -> u32 {
    (penalized && crossed) as u32
}

/// Extra cycles for a taken branch from `from` (address of the following
/// instruction) to `target`.
#[inline]
pub(crate) fn branch_taken_cycles(from: u16, target: u16) -> u32 {
    if (from & 0xFF00) != (target & 0xFF00) {
        2
    } else {
        1
    }
}
