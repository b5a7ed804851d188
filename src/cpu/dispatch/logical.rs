/*!
logical.rs - AND / ORA / EOR / BIT opcode family

```text
    AND: 29, 25, 35, 2D, 3D*, 39*, 21, 31*
    ORA: 09, 05, 15, 0D, 1D*, 19*, 01, 11*
    EOR: 49, 45, 55, 4D, 5D*, 59*, 41, 51*
    BIT: 24, 2C
```

BIT sets Z from `A & M` and copies memory bits 7 and 6 straight into N and V,
so only ZERO goes through the result record.
*/

use crate::cpu::addressing::OperandLocation;
use crate::cpu::dispatch::finalize::InstrResult;
use crate::cpu::state::{CpuState, NEGATIVE, OVERFLOW, ZERO};
use crate::memory::MemoryMap;

pub(crate) fn and(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let r = cpu.a() & op.get(cpu, mem);
    cpu.set_a(r);
    InstrResult::zn(r)
}

pub(crate) fn ora(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let r = cpu.a() | op.get(cpu, mem);
    cpu.set_a(r);
    InstrResult::zn(r)
}

pub(crate) fn eor(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let r = cpu.a() ^ op.get(cpu, mem);
    cpu.set_a(r);
    InstrResult::zn(r)
}

pub(crate) fn bit(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let m = op.get(cpu, mem);
    cpu.assign_flag(NEGATIVE, m & 0x80 != 0);
    cpu.assign_flag(OVERFLOW, m & 0x40 != 0);
    InstrResult {
        value: (cpu.a() & m) as u16,
        affects: ZERO,
        ..InstrResult::none()
    }
}
