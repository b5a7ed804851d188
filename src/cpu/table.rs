/*!
table.rs - Static opcode table: opcode -> (mnemonic, mode, base cycles, handler).

Purpose
=======
One 256-entry table keyed by opcode byte drives decode for every documented
6502 instruction. Each row carries everything the tick loop needs:

- `mnemonic`      : three-letter name (diagnostics only)
- `mode`          : addressing mode handed to `addressing::resolve`
- `cycles`        : base cycle count from the hardware reference
- `page_penalty`  : +1 cycle when the resolved address crossed a page
- `handler`       : semantic function operating on the resolved operand

Undocumented opcodes have no row (`None`) and execute as a 2-cycle NOP.

Design
------
The table is built in a `const` block so it lives in read-only data and can
be indexed without any runtime initialization.
*/

use crate::cpu::addressing::{AddressingMode, OperandLocation};
use crate::cpu::cycles::UNKNOWN_OPCODE_CYCLES;
use crate::cpu::dispatch::finalize::InstrResult;
use crate::cpu::dispatch::{
    arithmetic, branches, compare, control_flow, load_store, logical, misc, rmw,
};
use crate::cpu::state::CpuState;
use crate::memory::MemoryMap;

/// Opcode semantic function.
pub type OpHandler = fn(&mut CpuState, &mut MemoryMap, OperandLocation) -> InstrResult;

/// One decoded opcode row.
#[derive(Copy, Clone)]
pub struct OpcodeEntry {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    pub cycles: u8,
    pub page_penalty: bool,
    pub handler: OpHandler,
}

impl std::fmt::Debug for OpcodeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpcodeEntry")
            .field("mnemonic", &self.mnemonic)
            .field("mode", &self.mode)
            .field("cycles", &self.cycles)
            .field("page_penalty", &self.page_penalty)
            .finish()
    }
}

/// Row used for opcodes without a table entry.
pub static UNKNOWN: OpcodeEntry = OpcodeEntry {
    mnemonic: "???",
    mode: AddressingMode::Implied,
    cycles: UNKNOWN_OPCODE_CYCLES,
    page_penalty: false,
    handler: misc::nop,
};

const fn op(mnemonic: &'static str, mode: AddressingMode, cycles: u8, handler: OpHandler) -> Option<OpcodeEntry> {
    Some(OpcodeEntry {
        mnemonic,
        mode,
        cycles,
        page_penalty: false,
        handler,
    })
}

/// Same as `op` but charges +1 on a page cross.
const fn op_pc(mnemonic: &'static str, mode: AddressingMode, cycles: u8, handler: OpHandler) -> Option<OpcodeEntry> {
    Some(OpcodeEntry {
        mnemonic,
        mode,
        cycles,
        page_penalty: true,
        handler,
    })
}

static OPCODES: [Option<OpcodeEntry>; 256] = {
    use AddressingMode::*;

    let mut t: [Option<OpcodeEntry>; 256] = [None; 256];

    // ---------------- Load / Store ----------------
    t[0xA9] = op("LDA", Immediate, 2, load_store::lda);
    t[0xA5] = op("LDA", ZeroPage, 3, load_store::lda);
    t[0xB5] = op("LDA", ZeroPageX, 4, load_store::lda);
    t[0xAD] = op("LDA", Absolute, 4, load_store::lda);
    t[0xBD] = op_pc("LDA", AbsoluteX, 4, load_store::lda);
    t[0xB9] = op_pc("LDA", AbsoluteY, 4, load_store::lda);
    t[0xA1] = op("LDA", IndexedIndirectX, 6, load_store::lda);
    t[0xB1] = op_pc("LDA", IndirectIndexedY, 5, load_store::lda);

    t[0xA2] = op("LDX", Immediate, 2, load_store::ldx);
    t[0xA6] = op("LDX", ZeroPage, 3, load_store::ldx);
    t[0xB6] = op("LDX", ZeroPageY, 4, load_store::ldx);
    t[0xAE] = op("LDX", Absolute, 4, load_store::ldx);
    t[0xBE] = op_pc("LDX", AbsoluteY, 4, load_store::ldx);

    t[0xA0] = op("LDY", Immediate, 2, load_store::ldy);
    t[0xA4] = op("LDY", ZeroPage, 3, load_store::ldy);
    t[0xB4] = op("LDY", ZeroPageX, 4, load_store::ldy);
    t[0xAC] = op("LDY", Absolute, 4, load_store::ldy);
    t[0xBC] = op_pc("LDY", AbsoluteX, 4, load_store::ldy);

    t[0x85] = op("STA", ZeroPage, 3, load_store::sta);
    t[0x95] = op("STA", ZeroPageX, 4, load_store::sta);
    t[0x8D] = op("STA", Absolute, 4, load_store::sta);
    t[0x9D] = op("STA", AbsoluteX, 5, load_store::sta);
    t[0x99] = op("STA", AbsoluteY, 5, load_store::sta);
    t[0x81] = op("STA", IndexedIndirectX, 6, load_store::sta);
    t[0x91] = op("STA", IndirectIndexedY, 6, load_store::sta);

    t[0x86] = op("STX", ZeroPage, 3, load_store::stx);
    t[0x96] = op("STX", ZeroPageY, 4, load_store::stx);
    t[0x8E] = op("STX", Absolute, 4, load_store::stx);

    t[0x84] = op("STY", ZeroPage, 3, load_store::sty);
    t[0x94] = op("STY", ZeroPageX, 4, load_store::sty);
    t[0x8C] = op("STY", Absolute, 4, load_store::sty);

    // ---------------- Arithmetic ----------------
    t[0x69] = op("ADC", Immediate, 2, arithmetic::adc);
    t[0x65] = op("ADC", ZeroPage, 3, arithmetic::adc);
    t[0x75] = op("ADC", ZeroPageX, 4, arithmetic::adc);
    t[0x6D] = op("ADC", Absolute, 4, arithmetic::adc);
    t[0x7D] = op_pc("ADC", AbsoluteX, 4, arithmetic::adc);
    t[0x79] = op_pc("ADC", AbsoluteY, 4, arithmetic::adc);
    t[0x61] = op("ADC", IndexedIndirectX, 6, arithmetic::adc);
    t[0x71] = op_pc("ADC", IndirectIndexedY, 5, arithmetic::adc);

    t[0xE9] = op("SBC", Immediate, 2, arithmetic::sbc);
    t[0xE5] = op("SBC", ZeroPage, 3, arithmetic::sbc);
    t[0xF5] = op("SBC", ZeroPageX, 4, arithmetic::sbc);
    t[0xED] = op("SBC", Absolute, 4, arithmetic::sbc);
    t[0xFD] = op_pc("SBC", AbsoluteX, 4, arithmetic::sbc);
    t[0xF9] = op_pc("SBC", AbsoluteY, 4, arithmetic::sbc);
    t[0xE1] = op("SBC", IndexedIndirectX, 6, arithmetic::sbc);
    t[0xF1] = op_pc("SBC", IndirectIndexedY, 5, arithmetic::sbc);

    // ---------------- Logical ----------------
    t[0x29] = op("AND", Immediate, 2, logical::and);
    t[0x25] = op("AND", ZeroPage, 3, logical::and);
    t[0x35] = op("AND", ZeroPageX, 4, logical::and);
    t[0x2D] = op("AND", Absolute, 4, logical::and);
    t[0x3D] = op_pc("AND", AbsoluteX, 4, logical::and);
    t[0x39] = op_pc("AND", AbsoluteY, 4, logical::and);
    t[0x21] = op("AND", IndexedIndirectX, 6, logical::and);
    t[0x31] = op_pc("AND", IndirectIndexedY, 5, logical::and);

    t[0x09] = op("ORA", Immediate, 2, logical::ora);
    t[0x05] = op("ORA", ZeroPage, 3, logical::ora);
    t[0x15] = op("ORA", ZeroPageX, 4, logical::ora);
    t[0x0D] = op("ORA", Absolute, 4, logical::ora);
    t[0x1D] = op_pc("ORA", AbsoluteX, 4, logical::ora);
    t[0x19] = op_pc("ORA", AbsoluteY, 4, logical::ora);
    t[0x01] = op("ORA", IndexedIndirectX, 6, logical::ora);
    t[0x11] = op_pc("ORA", IndirectIndexedY, 5, logical::ora);

    t[0x49] = op("EOR", Immediate, 2, logical::eor);
    t[0x45] = op("EOR", ZeroPage, 3, logical::eor);
    t[0x55] = op("EOR", ZeroPageX, 4, logical::eor);
    t[0x4D] = op("EOR", Absolute, 4, logical::eor);
    t[0x5D] = op_pc("EOR", AbsoluteX, 4, logical::eor);
    t[0x59] = op_pc("EOR", AbsoluteY, 4, logical::eor);
    t[0x41] = op("EOR", IndexedIndirectX, 6, logical::eor);
    t[0x51] = op_pc("EOR", IndirectIndexedY, 5, logical::eor);

    t[0x24] = op("BIT", ZeroPage, 3, logical::bit);
    t[0x2C] = op("BIT", Absolute, 4, logical::bit);

    // ---------------- Compare ----------------
    t[0xC9] = op("CMP", Immediate, 2, compare::cmp);
    t[0xC5] = op("CMP", ZeroPage, 3, compare::cmp);
    t[0xD5] = op("CMP", ZeroPageX, 4, compare::cmp);
    t[0xCD] = op("CMP", Absolute, 4, compare::cmp);
    t[0xDD] = op_pc("CMP", AbsoluteX, 4, compare::cmp);
    t[0xD9] = op_pc("CMP", AbsoluteY, 4, compare::cmp);
    t[0xC1] = op("CMP", IndexedIndirectX, 6, compare::cmp);
    t[0xD1] = op_pc("CMP", IndirectIndexedY, 5, compare::cmp);

    t[0xE0] = op("CPX", Immediate, 2, compare::cpx);
    t[0xE4] = op("CPX", ZeroPage, 3, compare::cpx);
    t[0xEC] = op("CPX", Absolute, 4, compare::cpx);

    t[0xC0] = op("CPY", Immediate, 2, compare::cpy);
    t[0xC4] = op("CPY", ZeroPage, 3, compare::cpy);
    t[0xCC] = op("CPY", Absolute, 4, compare::cpy);

    // ---------------- Shifts / Rotates ----------------
    t[0x0A] = op("ASL", Accumulator, 2, rmw::asl);
    t[0x06] = op("ASL", ZeroPage, 5, rmw::asl);
    t[0x16] = op("ASL", ZeroPageX, 6, rmw::asl);
    t[0x0E] = op("ASL", Absolute, 6, rmw::asl);
    t[0x1E] = op("ASL", AbsoluteX, 7, rmw::asl);

    t[0x4A] = op("LSR", Accumulator, 2, rmw::lsr);
    t[0x46] = op("LSR", ZeroPage, 5, rmw::lsr);
    t[0x56] = op("LSR", ZeroPageX, 6, rmw::lsr);
    t[0x4E] = op("LSR", Absolute, 6, rmw::lsr);
    t[0x5E] = op("LSR", AbsoluteX, 7, rmw::lsr);

    t[0x2A] = op("ROL", Accumulator, 2, rmw::rol);
    t[0x26] = op("ROL", ZeroPage, 5, rmw::rol);
    t[0x36] = op("ROL", ZeroPageX, 6, rmw::rol);
    t[0x2E] = op("ROL", Absolute, 6, rmw::rol);
    t[0x3E] = op("ROL", AbsoluteX, 7, rmw::rol);

    t[0x6A] = op("ROR", Accumulator, 2, rmw::ror);
    t[0x66] = op("ROR", ZeroPage, 5, rmw::ror);
    t[0x76] = op("ROR", ZeroPageX, 6, rmw::ror);
    t[0x6E] = op("ROR", Absolute, 6, rmw::ror);
    t[0x7E] = op("ROR", AbsoluteX, 7, rmw::ror);

    // ---------------- Increment / Decrement ----------------
    t[0xE6] = op("INC", ZeroPage, 5, rmw::inc);
    t[0xF6] = op("INC", ZeroPageX, 6, rmw::inc);
    t[0xEE] = op("INC", Absolute, 6, rmw::inc);
    t[0xFE] = op("INC", AbsoluteX, 7, rmw::inc);

    t[0xC6] = op("DEC", ZeroPage, 5, rmw::dec);
    t[0xD6] = op("DEC", ZeroPageX, 6, rmw::dec);
    t[0xCE] = op("DEC", Absolute, 6, rmw::dec);
    t[0xDE] = op("DEC", AbsoluteX, 7, rmw::dec);

    t[0xE8] = op("INX", Implied, 2, rmw::inx);
    t[0xC8] = op("INY", Implied, 2, rmw::iny);
    t[0xCA] = op("DEX", Implied, 2, rmw::dex);
    t[0x88] = op("DEY", Implied, 2, rmw::dey);

    // ---------------- Branches ----------------
    t[0x10] = op("BPL", Relative, 2, branches::bpl);
    t[0x30] = op("BMI", Relative, 2, branches::bmi);
    t[0x50] = op("BVC", Relative, 2, branches::bvc);
    t[0x70] = op("BVS", Relative, 2, branches::bvs);
    t[0x90] = op("BCC", Relative, 2, branches::bcc);
    t[0xB0] = op("BCS", Relative, 2, branches::bcs);
    t[0xD0] = op("BNE", Relative, 2, branches::bne);
    t[0xF0] = op("BEQ", Relative, 2, branches::beq);

    // ---------------- Control flow ----------------
    t[0x4C] = op("JMP", Absolute, 3, control_flow::jmp);
    t[0x6C] = op("JMP", Indirect, 5, control_flow::jmp);
    t[0x20] = op("JSR", Absolute, 6, control_flow::jsr);
    t[0x60] = op("RTS", Implied, 6, control_flow::rts);
    t[0x40] = op("RTI", Implied, 6, control_flow::rti);
    t[0x00] = op("BRK", Implied, 7, control_flow::brk);

    // ---------------- Stack ----------------
    t[0x48] = op("PHA", Implied, 3, misc::pha);
    t[0x08] = op("PHP", Implied, 3, misc::php);
    t[0x68] = op("PLA", Implied, 4, misc::pla);
    t[0x28] = op("PLP", Implied, 4, misc::plp);

    // ---------------- Transfers ----------------
    t[0xAA] = op("TAX", Implied, 2, misc::tax);
    t[0xA8] = op("TAY", Implied, 2, misc::tay);
    t[0x8A] = op("TXA", Implied, 2, misc::txa);
    t[0x98] = op("TYA", Implied, 2, misc::tya);
    t[0xBA] = op("TSX", Implied, 2, misc::tsx);
    t[0x9A] = op("TXS", Implied, 2, misc::txs);

    // ---------------- Flags ----------------
    t[0x18] = op("CLC", Implied, 2, misc::clc);
    t[0x38] = op("SEC", Implied, 2, misc::sec);
    t[0x58] = op("CLI", Implied, 2, misc::cli);
    t[0x78] = op("SEI", Implied, 2, misc::sei);
    t[0xB8] = op("CLV", Implied, 2, misc::clv);
    t[0xD8] = op("CLD", Implied, 2, misc::cld);
    t[0xF8] = op("SED", Implied, 2, misc::sed);

    t[0xEA] = op("NOP", Implied, 2, misc::nop);

    t
};

/// Table row for a documented opcode.
#[inline]
pub fn entry(opcode: u8) -> Option<&'static OpcodeEntry> {
    OPCODES[opcode as usize].as_ref()
}

/// Table row for any opcode, falling back to the NOP row for unknown bytes.
#[inline]
pub fn lookup(opcode: u8) -> &'static OpcodeEntry {
    entry(opcode).unwrap_or(&UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_opcode_count() {
        let count = (0..=255u8).filter(|&op| entry(op).is_some()).count();
        assert_eq!(count, 151);
    }

    #[test]
    fn base_cycles_within_hardware_range() {
        for op in 0..=255u8 {
            if let Some(e) = entry(op) {
                assert!((2..=7).contains(&e.cycles), "{op:#04X} {}", e.mnemonic);
            }
        }
    }

    #[test]
    fn page_penalty_only_on_indexed_reads() {
        for op in 0..=255u8 {
            if let Some(e) = entry(op) {
                if e.page_penalty {
                    assert!(e.mode.can_cross_page(), "{op:#04X}");
                    assert!(
                        matches!(
                            e.mnemonic,
                            "LDA" | "LDX" | "LDY" | "ADC" | "SBC" | "AND" | "ORA" | "EOR" | "CMP"
                        ),
                        "{op:#04X} {}",
                        e.mnemonic
                    );
                }
            }
        }
        // Stores and RMW never pay it.
        assert!(!lookup(0x9D).page_penalty);
        assert!(!lookup(0x91).page_penalty);
        assert!(!lookup(0x1E).page_penalty);
    }

    #[test]
    fn eor_rows_are_eor() {
        for op in [0x49u8, 0x45, 0x55, 0x4D, 0x5D, 0x59, 0x41, 0x51] {
            let e = lookup(op);
            assert_eq!(e.mnemonic, "EOR");
            assert!(std::ptr::fn_addr_eq(e.handler, logical::eor as OpHandler));
        }
    }

    #[test]
    fn spot_check_modes_and_cycles() {
        let e = lookup(0xB1);
        assert_eq!((e.mnemonic, e.mode, e.cycles), ("LDA", AddressingMode::IndirectIndexedY, 5));
        let e = lookup(0x6C);
        assert_eq!((e.mnemonic, e.mode, e.cycles), ("JMP", AddressingMode::Indirect, 5));
        let e = lookup(0xBE);
        assert_eq!((e.mode, e.page_penalty), (AddressingMode::AbsoluteY, true));
        let e = lookup(0x96);
        assert_eq!(e.mode, AddressingMode::ZeroPageY);
    }

    #[test]
    fn unknown_opcodes_fall_back_to_nop_row() {
        let e = lookup(0xFF);
        assert_eq!(e.mnemonic, "???");
        assert_eq!(e.cycles, 2);
        assert_eq!(e.mode, AddressingMode::Implied);
        assert!(entry(0xFF).is_none());
    }
}
