/*!
load_store.rs - Load / Store opcode family

Loads (set Z/N flags; may incur page-cross penalty):
    LDA: A9, A5, B5, AD, BD*, B9*, A1, B1*
    LDX: A2, A6, B6, AE, BE*
    LDY: A0, A4, B4, AC, BC*

Stores (no flags changed, no page-cross cycle penalties):
    STA: 85, 95, 8D, 9D, 99, 81, 91
    STX: 86, 96, 8E
    STY: 84, 94, 8C

(*) The opcode table marks these entries as page-penalized; the handlers
    themselves never touch cycle counts.
*/

use crate::cpu::addressing::OperandLocation;
use crate::cpu::dispatch::finalize::InstrResult;
use crate::cpu::state::CpuState;
use crate::memory::MemoryMap;

pub(crate) fn lda(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let v = op.get(cpu, mem);
    cpu.set_a(v);
    InstrResult::zn(v)
}

pub(crate) fn ldx(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let v = op.get(cpu, mem);
    cpu.set_x(v);
    InstrResult::zn(v)
}

pub(crate) fn ldy(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let v = op.get(cpu, mem);
    cpu.set_y(v);
    InstrResult::zn(v)
}

pub(crate) fn sta(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let a = cpu.a();
    op.set(cpu, mem, a);
    InstrResult::none()
}

pub(crate) fn stx(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let x = cpu.x();
    op.set(cpu, mem, x);
    InstrResult::none()
}

pub(crate) fn sty(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let y = cpu.y();
    op.set(cpu, mem, y);
    InstrResult::none()
}
