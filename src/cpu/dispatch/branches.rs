/*!
branches.rs - Relative branch opcodes (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ)

Cycle Rules
===========
Base cost: 2 cycles (from the opcode table).
If branch is taken: +1 cycle.
If branch is taken and target crosses a page boundary: +2 total (vs base).

The displacement is resolved as an inline operand; PC already points at the
following instruction, which is the base the displacement is applied to.
*/

use crate::cpu::addressing::OperandLocation;
use crate::cpu::cycles::branch_taken_cycles;
use crate::cpu::dispatch::finalize::InstrResult;
use crate::cpu::state::{CARRY, CpuState, NEGATIVE, OVERFLOW, ZERO};
use crate::memory::MemoryMap;

/// Take the branch when `cond` holds; returns the extra cycle cost.
#[inline]
fn branch_if(cpu: &mut CpuState, mem: &MemoryMap, op: OperandLocation, cond: bool) -> InstrResult {
    if !cond {
        return InstrResult::branch(0);
    }
    let disp = op.get(cpu, mem) as i8;
    let from = cpu.pc();
    let target = from.wrapping_add(disp as i16 as u16);
    cpu.set_pc(target);
    InstrResult::branch(branch_taken_cycles(from, target))
}

pub(crate) fn bpl(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let cond = !cpu.is_flag_set(NEGATIVE);
    branch_if(cpu, mem, op, cond)
}

pub(crate) fn bmi(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let cond = cpu.is_flag_set(NEGATIVE);
    branch_if(cpu, mem, op, cond)
}

pub(crate) fn bvc(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let cond = !cpu.is_flag_set(OVERFLOW);
    branch_if(cpu, mem, op, cond)
}

pub(crate) fn bvs(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let cond = cpu.is_flag_set(OVERFLOW);
    branch_if(cpu, mem, op, cond)
}

pub(crate) fn bcc(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let cond = !cpu.is_flag_set(CARRY);
    branch_if(cpu, mem, op, cond)
}

pub(crate) fn bcs(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let cond = cpu.is_flag_set(CARRY);
    branch_if(cpu, mem, op, cond)
}

pub(crate) fn bne(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let cond = !cpu.is_flag_set(ZERO);
    branch_if(cpu, mem, op, cond)
}

pub(crate) fn beq(cpu: &mut CpuState, mem: &mut MemoryMap, op: OperandLocation) -> InstrResult {
    let cond = cpu.is_flag_set(ZERO);
    branch_if(cpu, mem, op, cond)
}

#[cfg(test)]
mod tests {
    use crate::cpu::state::{CARRY, ZERO};
    use crate::test_utils::{cpu_with_program, cpu_with_program_at};

    #[test]
    fn not_taken_costs_base_only() {
        // SEC ; BCC +4
        let mut cpu = cpu_with_program(&[0x38, 0x90, 0x04]);
        cpu.tick();
        cpu.tick();
        assert_eq!(cpu.pc(), 0x8003);
        assert_eq!(cpu.last_cycles(), 2);
    }

    #[test]
    fn taken_same_page_costs_one_extra() {
        // CLC ; BCC +4
        let mut cpu = cpu_with_program(&[0x18, 0x90, 0x04]);
        cpu.tick();
        cpu.tick();
        assert_eq!(cpu.pc(), 0x8007);
        assert_eq!(cpu.last_cycles(), 3);
    }

    #[test]
    fn taken_across_page_costs_two_extra() {
        // Program at $80F0: SEC ; BCS +$20 -> $80F3 + $20 = $8113
        let mut cpu = cpu_with_program_at(0x80F0, &[0x38, 0xB0, 0x20]);
        cpu.tick();
        cpu.tick();
        assert_eq!(cpu.pc(), 0x8113);
        assert_eq!(cpu.last_cycles(), 4);
    }

    #[test]
    fn backward_branch_across_page() {
        // Program at $8100: LDA #$00 ; BEQ -$10 -> $8104 - $10 = $80F4
        let mut cpu = cpu_with_program_at(0x8100, &[0xA9, 0x00, 0xF0, 0xF0]);
        cpu.tick();
        assert!(cpu.get_flag(ZERO));
        cpu.tick();
        assert_eq!(cpu.pc(), 0x80F4);
        assert_eq!(cpu.last_cycles(), 4);
    }

    #[test]
    fn bne_loop_counts_down() {
        // LDX #$03 ; DEX ; BNE -3 ; (falls through at X == 0)
        let mut cpu = cpu_with_program(&[0xA2, 0x03, 0xCA, 0xD0, 0xFD, 0xEA]);
        cpu.tick();
        for _ in 0..6 {
            cpu.tick();
        }
        assert_eq!(cpu.x(), 0);
        assert_eq!(cpu.pc(), 0x8005);
        assert_eq!(cpu.last_cycles(), 2);
        assert!(!cpu.get_flag(CARRY));
    }

    #[test]
    fn every_branch_honors_its_flag() {
        // Each pair: flag setup, branch +0 (target == next instruction).
        let cases: [(u8, u8, bool); 8] = [
            (0x10, 0x00, true),  // BPL with N clear
            (0x30, 0x00, false), // BMI with N clear
            (0x50, 0x00, true),  // BVC with V clear
            (0x70, 0x00, false), // BVS with V clear
            (0x90, 0x00, true),  // BCC with C clear
            (0xB0, 0x00, false), // BCS with C clear
            (0xD0, 0x00, true),  // BNE with Z clear
            (0xF0, 0x00, false), // BEQ with Z clear
        ];
        for (opcode, disp, taken) in cases {
            let mut cpu = cpu_with_program(&[opcode, disp]);
            cpu.set_status(0);
            cpu.tick();
            assert_eq!(cpu.pc(), 0x8002, "opcode {opcode:#04X}");
            let expect = if taken { 3 } else { 2 };
            assert_eq!(cpu.last_cycles(), expect, "opcode {opcode:#04X}");
        }
    }
}
