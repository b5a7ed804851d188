/*!
compare.rs - CMP / CPX / CPY opcode family

```text
    CMP: C9, C5, D5, CD, DD*, D9*, C1, D1*
    CPX: E0, E4, EC
    CPY: C0, C4, CC
```

Flags: C = reg >= M, Z = reg == M, N = bit 7 of (reg - M). Registers are
never modified.
*/

use crate::cpu::addressing::OperandLocation;
use crate::cpu::dispatch::finalize::InstrResult;
use crate::cpu::execute::compare;
use crate::cpu::state::CpuState;
use crate::memory::MemoryMap;

pub(crate) fn cmp(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    InstrResult::czn(compare(cpu.a(), op.get(cpu, mem)))
}

pub(crate) fn cpx(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    InstrResult::czn(compare(cpu.x(), op.get(cpu, mem)))
}

pub(crate) fn cpy(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    InstrResult::czn(compare(cpu.y(), op.get(cpu, mem)))
}
