/*!
instruction.rs - Diagnostic record of the most recently executed instruction.

The tick loop builds one `Instruction` per tick and hands it to the `Cpu`
facade, which keeps it as "previous". Nothing in execution reads it back;
it exists for trace views and tests.

`Display` renders a single trace line:

```text
    8000  BD FF 02  LDA $02FF,X   A:00 X:01 Y:00 P:24 SP:FD  CYC:5
```
*/

use std::fmt;

use crate::cpu::addressing::{AddressingMode, OperandLocation};
use crate::cpu::dispatch::InterruptKind;
use crate::cpu::state::CpuState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Address of the opcode byte.
    pub pc: u16,
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    /// Raw operand bytes; only the first `operand_len` are meaningful.
    pub operand: [u8; 2],
    pub operand_len: u8,
    pub location: OperandLocation,
    pub page_crossed: bool,
    pub base_cycles: u8,
    /// Extra cycles from a taken branch.
    pub branch_cycles: u32,
    /// Total cost of the instruction, excluding a trailing NMI entry.
    pub cycles: u32,
    /// Registers before execution.
    pub registers: CpuState,
    /// BRK was executed with interrupts enabled and vectored through IRQ.
    pub break_taken: bool,
    /// Interrupt entered at the end of the tick, if any.
    pub interrupt: Option<InterruptKind>,
}

impl Instruction {
    pub fn operand_bytes(&self) -> &[u8] {
        &self.operand[..self.operand_len as usize]
    }

    /// Operand in assembler syntax (`#$10`, `$1234,X`, `($20),Y`, `A`).
    pub fn operand_text(&self) -> String {
        let b = self.operand[0];
        let w = u16::from_le_bytes(self.operand);
        match self.mode {
            AddressingMode::Implied => String::new(),
            AddressingMode::Accumulator => "A".to_string(),
            AddressingMode::Immediate => format!("#${b:02X}"),
            AddressingMode::ZeroPage => format!("${b:02X}"),
            AddressingMode::ZeroPageX => format!("${b:02X},X"),
            AddressingMode::ZeroPageY => format!("${b:02X},Y"),
            AddressingMode::Absolute => format!("${w:04X}"),
            AddressingMode::AbsoluteX => format!("${w:04X},X"),
            AddressingMode::AbsoluteY => format!("${w:04X},Y"),
            AddressingMode::Indirect => format!("(${w:04X})"),
            AddressingMode::IndexedIndirectX => format!("(${b:02X},X)"),
            AddressingMode::IndirectIndexedY => format!("(${b:02X}),Y"),
            AddressingMode::Relative => {
                let target = self.pc.wrapping_add(2).wrapping_add(b as i8 as i16 as u16);
                format!("${target:04X}")
            }
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes = format!("{:02X}", self.opcode);
        for b in self.operand_bytes() {
            bytes.push_str(&format!(" {b:02X}"));
        }
        let asm = format!("{} {}", self.mnemonic, self.operand_text());
        write!(
            f,
            "{:04X}  {:<8}  {:<12}  {}  CYC:{}",
            self.pc,
            bytes,
            asm.trim_end(),
            self.registers,
            self.cycles
        )?;
        if let Some(kind) = self.interrupt {
            write!(f, "  -> {kind:?}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(mode: AddressingMode, mnemonic: &'static str, operand: [u8; 2], len: u8) -> Instruction {
        Instruction {
            pc: 0x8000,
            opcode: 0x00,
            mnemonic,
            mode,
            operand,
            operand_len: len,
            location: OperandLocation::None,
            page_crossed: false,
            base_cycles: 2,
            branch_cycles: 0,
            cycles: 2,
            registers: CpuState::new(),
            break_taken: false,
            interrupt: None,
        }
    }

    #[test]
    fn operand_text_per_mode() {
        let cases = [
            (AddressingMode::Implied, [0, 0], 0, ""),
            (AddressingMode::Accumulator, [0, 0], 0, "A"),
            (AddressingMode::Immediate, [0x10, 0], 1, "#$10"),
            (AddressingMode::ZeroPage, [0x44, 0], 1, "$44"),
            (AddressingMode::ZeroPageX, [0x44, 0], 1, "$44,X"),
            (AddressingMode::ZeroPageY, [0x44, 0], 1, "$44,Y"),
            (AddressingMode::Absolute, [0x34, 0x12], 2, "$1234"),
            (AddressingMode::AbsoluteX, [0x34, 0x12], 2, "$1234,X"),
            (AddressingMode::AbsoluteY, [0x34, 0x12], 2, "$1234,Y"),
            (AddressingMode::Indirect, [0xFF, 0x02], 2, "($02FF)"),
            (AddressingMode::IndexedIndirectX, [0x20, 0], 1, "($20,X)"),
            (AddressingMode::IndirectIndexedY, [0x20, 0], 1, "($20),Y"),
        ];
        for (mode, bytes, len, expected) in cases {
            assert_eq!(record(mode, "XXX", bytes, len).operand_text(), expected, "{mode:?}");
        }
    }

    #[test]
    fn relative_operand_shows_target() {
        assert_eq!(record(AddressingMode::Relative, "BNE", [0xFD, 0], 1).operand_text(), "$7FFF");
        assert_eq!(record(AddressingMode::Relative, "BEQ", [0x10, 0], 1).operand_text(), "$8012");
    }

    #[test]
    fn display_is_one_trace_line() {
        let mut ins = record(AddressingMode::Immediate, "LDA", [0x10, 0], 1);
        ins.opcode = 0xA9;
        let line = ins.to_string();
        assert!(line.starts_with("8000  A9 10     LDA #$10"));
        assert!(line.contains("SP:FD"));
        assert!(line.ends_with("CYC:2"));
        assert!(!line.contains('\n'));
    }
}
