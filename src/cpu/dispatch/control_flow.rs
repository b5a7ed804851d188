/*!
control_flow.rs - JMP / JSR / RTS / RTI / BRK

```text
    JMP abs   4C   PC = operand address
    JMP ind   6C   PC = pointer (with the $xxFF page-wrap quirk, see addressing)
    JSR abs   20   push (PC - 1) high then low; PC = operand address
    RTS       60   pull low, high; PC = value + 1
    RTI       40   pull status (Break ignored), then PC low, high
    BRK       00   request an IRQ-class interrupt via the result record
```

BRK does not push anything itself: the tick loop rewinds PC to the opcode
and runs the shared interrupt sequence, which pushes opcode + 2 (the byte
after BRK is a padding/signature byte skipped on return).
*/

use crate::cpu::addressing::OperandLocation;
use crate::cpu::dispatch::finalize::InstrResult;
use crate::cpu::execute::{pop, pop_word, push_word};
use crate::cpu::state::{BREAK, CpuState};
use crate::memory::MemoryMap;

pub(crate) fn jmp(cpu: &mut CpuState, _: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    if let Some(target) = op.address() {
        cpu.set_pc(target);
    }
    InstrResult::none()
}

pub(crate) fn jsr(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    if let Some(target) = op.address() {
        let ret = cpu.pc().wrapping_sub(1);
        push_word(cpu, mem, ret);
        cpu.set_pc(target);
    }
    InstrResult::none()
}

pub(crate) fn rts(cpu: &mut CpuState, mem: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    let ret = pop_word(cpu, mem);
    cpu.set_pc(ret.wrapping_add(1));
    InstrResult::none()
}

pub(crate) fn rti(cpu: &mut CpuState, mem: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    let status = pop(cpu, mem);
    cpu.set_status(status & !BREAK);
    let pc = pop_word(cpu, mem);
    cpu.set_pc(pc);
    InstrResult::none()
}

pub(crate) fn brk(_: &mut CpuState, _: &mut MemoryMap, _: OperandLocation) -> InstrResult {
    InstrResult::brk()
}
