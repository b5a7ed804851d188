/*!
execute.rs - 6502 instruction semantic helpers (stack, ALU primitives).

Purpose
=======
Centralize side-effect logic shared by the opcode family handlers in
`dispatch`, so every handler computes results the same way.

Scope (crate-visible)
---------------------
Stack helpers (generic over `CpuRegs`):
    push, pop, push_word, pop_word

ALU primitives (pure):
    add_with_carry, compare, shift_left, shift_right, rotate_left, rotate_right

Widened Results
===============
ALU primitives return a `u16` whose low byte is the 8-bit result and whose
bit 8 is the carry-out. Subtraction and comparison are expressed as addition
of the one's complement, so "result > 0xFF" is the carry rule for every
carry-affecting instruction.
*/

use crate::cpu::regs::CpuRegs;
use crate::memory::{MemoryMap, STACK_BASE};

// ---------------------------------------------------------------------------
// Stack helpers
// ---------------------------------------------------------------------------
//
// 6502 stack is located on page 0x0100, with SP post-decrement on push
// and pre-increment on pull:
//   Push: write at 0x0100 | SP, then SP = SP - 1
//   Pull: SP = SP + 1, then read at 0x0100 | SP

#[inline]
pub(crate) fn push<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap, v: u8) {
    let addr = STACK_BASE | cpu.sp() as u16;
    mem.write(addr, v);
    cpu.set_sp(cpu.sp().wrapping_sub(1));
}

#[inline]
pub(crate) fn pop<C: CpuRegs>(cpu: &mut C, mem: &MemoryMap) -> u8 {
    cpu.set_sp(cpu.sp().wrapping_add(1));
    mem.read(STACK_BASE | cpu.sp() as u16)
}

/// Push a return address: high byte first, so the low byte pops first.
#[inline]
pub(crate) fn push_word<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap, v: u16) {
    push(cpu, mem, (v >> 8) as u8);
    push(cpu, mem, v as u8);
}

#[inline]
pub(crate) fn pop_word<C: CpuRegs>(cpu: &mut C, mem: &MemoryMap) -> u16 {
    let lo = pop(cpu, mem) as u16;
    let hi = pop(cpu, mem) as u16;
    (hi << 8) | lo
}

// ---------------------------------------------------------------------------
// ALU primitives
// ---------------------------------------------------------------------------

/// Binary add with carry-in. Returns the widened sum and the signed
/// overflow condition (operands share a sign the result does not).
#[inline]
pub(crate) fn add_with_carry(a: u8, m: u8, carry_in: u8) -> (u16, bool) {
    let sum = a as u16 + m as u16 + carry_in as u16;
    let r = sum as u8;
    let overflow = (!(a ^ m) & (a ^ r) & 0x80) != 0;
    (sum, overflow)
}

/// `reg - m` as `reg + !m + 1`; bit 8 set exactly when `reg >= m`.
#[inline]
pub(crate) fn compare(reg: u8, m: u8) -> u16 {
    reg as u16 + (!m) as u16 + 1
}

#[inline]
pub(crate) fn shift_left(v: u8) -> u16 {
    (v as u16) << 1
}

/// Logical shift right; the bit shifted out lands in bit 8.
#[inline]
pub(crate) fn shift_right(v: u8) -> u16 {
    ((v >> 1) as u16) | (((v & 0x01) as u16) << 8)
}

#[inline]
pub(crate) fn rotate_left(v: u8, carry_in: u8) -> u16 {
    ((v as u16) << 1) | carry_in as u16
}

/// Rotate right through carry; the bit rotated out lands in bit 8.
#[inline]
pub(crate) fn rotate_right(v: u8, carry_in: u8) -> u16 {
    ((v >> 1) | (carry_in << 7)) as u16 | (((v & 0x01) as u16) << 8)
}
