/*!
rmw.rs - Shift / rotate / increment / decrement opcode family

Read-modify-write (memory or accumulator operand):
    ASL: 0A(A), 06, 16, 0E, 1E
    LSR: 4A(A), 46, 56, 4E, 5E
    ROL: 2A(A), 26, 36, 2E, 3E
    ROR: 6A(A), 66, 76, 6E, 7E
    INC: E6, F6, EE, FE
    DEC: C6, D6, CE, DE

Register increment / decrement:
    INX E8, INY C8, DEX CA, DEY 88

Shifts and rotates go through `OperandLocation::modify`, so the accumulator
form and the memory form share one body. Indexed RMW forms always take
their fixed table cost; there is no page-cross penalty.
*/

use crate::cpu::addressing::OperandLocation;
use crate::cpu::dispatch::finalize::InstrResult;
use crate::cpu::execute::{rotate_left, rotate_right, shift_left, shift_right};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::CpuState;
use crate::memory::MemoryMap;

pub(crate) fn asl(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    InstrResult::czn(op.modify(cpu, mem, shift_left))
}

pub(crate) fn lsr(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    InstrResult::czn(op.modify(cpu, mem, shift_right))
}

pub(crate) fn rol(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let c = cpu.carry_bit();
    InstrResult::czn(op.modify(cpu, mem, |v| rotate_left(v, c)))
}

pub(crate) fn ror(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let c = cpu.carry_bit();
    InstrResult::czn(op.modify(cpu, mem, |v| rotate_right(v, c)))
}

pub(crate) fn inc(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let r = op.modify(cpu, mem, |v| v.wrapping_add(1) as u16);
    InstrResult::zn(r as u8)
}

pub(crate) fn dec(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let r = op.modify(cpu, mem, |v| v.wrapping_sub(1) as u16);
    InstrResult::zn(r as u8)
}

pub(crate) fn inx(cpu: &mut CpuState, _: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    cpu.set_x(cpu.x().wrapping_add(1));
    InstrResult::zn(cpu.x())
}

pub(crate) fn iny(cpu: &mut CpuState, _: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    cpu.set_y(cpu.y().wrapping_add(1));
    InstrResult::zn(cpu.y())
}

pub(crate) fn dex(cpu: &mut CpuState, _: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    cpu.set_x(cpu.x().wrapping_sub(1));
    InstrResult::zn(cpu.x())
}

pub(crate) fn dey(cpu: &mut CpuState, _: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    cpu.set_y(cpu.y().wrapping_sub(1));
    InstrResult::zn(cpu.y())
}
