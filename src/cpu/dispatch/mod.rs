/*!
dispatch - Orchestrator for a single 6502 CPU tick (fetch / decode / execute / interrupts)

Overview
========
Coordinates exactly one instruction:
1. Snapshot registers, fetch the opcode byte at PC, advance PC.
2. Look up the opcode row in the static table (unknown bytes use the NOP row).
3. Resolve the operand through `addressing::resolve` (advances PC further).
4. Run the family handler against the resolved operand.
5. Apply the flag side effects recorded in the handler's `InstrResult`.
6. BRK check: with Interrupt-disable clear, rewind PC to the opcode and
   enter the IRQ sequence.
7. Cycle total = base + page-cross penalty + branch-taken extra.
8. Service a latched NMI request (fixed check point, after the handler).

Interrupts
==========
`interrupt` is the one entry sequence shared by IRQ / NMI / RESET. Only the
pushed return address, the Break bit of the pushed status and the vector
differ between kinds:

```text
    Irq  push PC + 2, status with Break set,   vector $FFFE
    Nmi  push PC,     status with Break clear, vector $FFFA
    Rst  push PC,     status with Break clear, vector $FFFC
```

Afterwards every flag is cleared and Interrupt-disable is set.
*/

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod finalize;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;

use log::{debug, trace};

use crate::config::CpuConfig;
use crate::cpu::addressing::{fetch_byte, resolve};
use crate::cpu::cycles::page_cross_penalty;
use crate::cpu::execute::{push, push_word};
use crate::cpu::instruction::Instruction;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CpuState, IRQ_DISABLE};
use crate::cpu::table;
use crate::memory::MemoryMap;
use crate::memory::regions::{IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
use finalize::apply_flags;

/// Interrupt sources that share the entry sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InterruptKind {
    /// Maskable interrupt; also raised by BRK.
    Irq,
    /// Non-maskable interrupt.
    Nmi,
    /// Reset.
    Rst,
}

impl InterruptKind {
    /// Address of the little-endian vector for this kind.
    pub const fn vector(self) -> u16 {
        match self {
            InterruptKind::Irq => IRQ_VECTOR,
            InterruptKind::Nmi => NMI_VECTOR,
            InterruptKind::Rst => RESET_VECTOR,
        }
    }
}

/// Run the interrupt entry sequence for `kind`.
pub(crate) fn interrupt<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap, kind: InterruptKind) {
    let ret = match kind {
        InterruptKind::Irq => cpu.pc().wrapping_add(2),
        InterruptKind::Nmi | InterruptKind::Rst => cpu.pc(),
    };
    push_word(cpu, mem, ret);
    let status = cpu.compose_status_for_push(kind == InterruptKind::Irq);
    push(cpu, mem, status);

    let target = mem.read_word(kind.vector());
    cpu.set_pc(target);
    cpu.set_status(IRQ_DISABLE);
    debug!("{kind:?} -> ${target:04X} (return ${ret:04X})");
}

/// Execute one instruction and return its diagnostic record.
pub(crate) fn step(
    cpu: &mut CpuState,
    mem: &mut MemoryMap,
    config: &CpuConfig,
    nmi_pending: bool,
) -> Instruction {
    let registers = *cpu;
    let pc = cpu.pc();

    let opcode = fetch_byte(cpu, mem);
    let entry = table::lookup(opcode);
    if table::entry(opcode).is_none() {
        debug!("unknown opcode ${opcode:02X} at ${pc:04X}, executing as NOP");
    }

    let resolved = resolve(entry.mode, cpu, mem);
    let result = (entry.handler)(cpu, mem, resolved.location);
    apply_flags(cpu, &result, config.overflow_rule);

    let break_taken = result.brk && !cpu.is_flag_set(IRQ_DISABLE);
    if break_taken {
        cpu.set_pc(pc);
        interrupt(cpu, mem, InterruptKind::Irq);
    }

    let cycles = entry.cycles as u32
        + page_cross_penalty(entry.page_penalty, resolved.page_crossed)
        + result.branch_cycles;

    let mut serviced = None;
    if nmi_pending {
        interrupt(cpu, mem, InterruptKind::Nmi);
        serviced = Some(InterruptKind::Nmi);
    } else if break_taken {
        serviced = Some(InterruptKind::Irq);
    }

    let instruction = Instruction {
        pc,
        opcode,
        mnemonic: entry.mnemonic,
        mode: entry.mode,
        operand: resolved.bytes,
        operand_len: resolved.len,
        location: resolved.location,
        page_crossed: resolved.page_crossed,
        base_cycles: entry.cycles,
        branch_cycles: result.branch_cycles,
        cycles,
        registers,
        break_taken,
        interrupt: serviced,
    };
    trace!("{instruction}");
    instruction
}
