/*!
misc.rs - Transfers, stack operations, flag operations, NOP

Transfers (Z/N updated except TXS):
    TAX AA, TAY A8, TXA 8A, TYA 98, TSX BA, TXS 9A

Stack:
    PHA 48, PHP 08 (pushes status with Break and bit 5 set)
    PLA 68 (Z/N), PLP 28 (Break bit of the pulled byte is dropped)

Flags:
    CLC 18, SEC 38, CLI 58, SEI 78, CLV B8, CLD D8, SED F8

NOP:
    EA, and every opcode without a table entry.
*/

use crate::cpu::addressing::OperandLocation;
use crate::cpu::dispatch::finalize::InstrResult;
use crate::cpu::execute::{pop, push};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, OVERFLOW};
use crate::memory::MemoryMap;

// ---------------- Transfers ----------------

pub(crate) fn tax(cpu: &mut CpuState, _: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    cpu.set_x(cpu.a());
    InstrResult::zn(cpu.x())
}

pub(crate) fn tay(cpu: &mut CpuState, _: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    cpu.set_y(cpu.a());
    InstrResult::zn(cpu.y())
}

pub(crate) fn txa(cpu: &mut CpuState, _: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    cpu.set_a(cpu.x());
    InstrResult::zn(cpu.a())
}

pub(crate) fn tya(cpu: &mut CpuState, _: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    cpu.set_a(cpu.y());
    InstrResult::zn(cpu.a())
}

pub(crate) fn tsx(cpu: &mut CpuState, _: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    cpu.set_x(cpu.sp());
    InstrResult::zn(cpu.x())
}

pub(crate) fn txs(cpu: &mut CpuState, _: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    cpu.set_sp(cpu.x());
    InstrResult::none()
}

// ---------------- Stack ----------------

pub(crate) fn pha(cpu: &mut CpuState, mem: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    let a = cpu.a();
    push(cpu, mem, a);
    InstrResult::none()
}

pub(crate) fn php(cpu: &mut CpuState, mem: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    let p = cpu.compose_status_for_push(true);
    push(cpu, mem, p);
    InstrResult::none()
}

pub(crate) fn pla(cpu: &mut CpuState, mem: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    let v = pop(cpu, mem);
    cpu.set_a(v);
    InstrResult::zn(v)
}

pub(crate) fn plp(cpu: &mut CpuState, mem: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    let p = pop(cpu, mem);
    cpu.set_status(p & !BREAK);
    InstrResult::none()
}

// ---------------- Flags ----------------

fn flag(cpu: &mut CpuState, mask: u8, on: bool) -> InstrResult {
    cpu.assign_flag(mask, on);
    InstrResult::none()
}

pub(crate) fn clc(cpu: &mut CpuState, _: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    flag(cpu, CARRY, false)
}

pub(crate) fn sec(cpu: &mut CpuState, _: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    flag(cpu, CARRY, true)
}

pub(crate) fn cli(cpu: &mut CpuState, _: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    flag(cpu, IRQ_DISABLE, false)
}

pub(crate) fn sei(cpu: &mut CpuState, _: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    flag(cpu, IRQ_DISABLE, true)
}

pub(crate) fn clv(cpu: &mut CpuState, _: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    flag(cpu, OVERFLOW, false)
}

pub(crate) fn cld(cpu: &mut CpuState, _: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    flag(cpu, DECIMAL, false)
}

pub(crate) fn sed(cpu: &mut CpuState, _: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    flag(cpu, DECIMAL, true)
}

pub(crate) fn nop(_: &mut CpuState, _: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    InstrResult::none()
}
