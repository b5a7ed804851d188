/*!
arithmetic.rs - ADC / SBC opcode family

```text
    ADC: 69, 65, 75, 6D, 7D*, 79*, 61, 71*
    SBC: E9, E5, F5, ED, FD*, F9*, E1, F1*
```

Binary arithmetic only: the Decimal flag is carried in the status register
but never consulted here (the NES 2A03 has no BCD unit).

SBC is ADC of the operand's one's complement, so its carry-out means
"no borrow" and the same `value > 0xFF` rule applies.
*/

use crate::cpu::addressing::OperandLocation;
use crate::cpu::dispatch::finalize::InstrResult;
use crate::cpu::execute::add_with_carry;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::CpuState;
use crate::memory::MemoryMap;

pub(crate) fn adc(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let m = op.get(cpu, mem);
    add(cpu, m)
}

pub(crate) fn sbc(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let m = op.get(cpu, mem);
    add(cpu, !m)
}

#[inline]
fn add<C: CpuRegs>(cpu: &mut C, m: u8) -> InstrResult {
    let (raw, overflow) = add_with_carry(cpu.a(), m, cpu.carry_bit());
    cpu.set_a(raw as u8);
    InstrResult::arithmetic(raw, overflow)
}
