/*!
addressing.rs - 6502 addressing modes and operand resolution.

Overview
========
Provides:
- `AddressingMode`: the thirteen documented modes.
- `OperandLocation`: where an instruction's operand lives once resolved
  (a memory cell, the accumulator, an inline byte, or nothing). It offers
  uniform `get` / `set` / `modify` so read-modify-write instructions have a
  single code path for memory and accumulator operands.
- `resolve`: consumes the mode's operand bytes from the instruction stream
  (advancing PC) and computes the operand location plus a page-cross flag.

Caller Assumptions
==================
- PC points at the first operand byte (the opcode has already been fetched).
- Callers advance PC exclusively via these helpers.

Byte Consumption
================
```text
    Implied, Accumulator                                   0
    Immediate, Relative, ZeroPage(X/Y), (Ind,X), (Ind),Y   1
    Absolute(X/Y), Indirect                                2
```

Pointer Quirks
==============
- Zero-page pointers for (Ind,X) and (Ind),Y wrap within page zero.
- JMP ($xxFF) fetches its high byte from $xx00 (hardware page-wrap bug).
*/

use crate::cpu::regs::CpuRegs;
use crate::memory::MemoryMap;

/// Documented 6502 addressing modes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndexedIndirectX,
    IndirectIndexedY,
    Relative,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::Relative
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndexedIndirectX
            | AddressingMode::IndirectIndexedY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// True for the modes that can report a page-boundary crossing.
    pub const fn can_cross_page(self) -> bool {
        matches!(
            self,
            AddressingMode::AbsoluteX | AddressingMode::AbsoluteY | AddressingMode::IndirectIndexedY
        )
    }
}

/// Resolved operand of an instruction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OperandLocation {
    /// Effective address in the CPU address space.
    Memory(u16),
    /// The accumulator register.
    Accumulator,
    /// Inline operand byte (immediate value or relative displacement).
    Immediate(u8),
    /// Implied operand.
    None,
}

impl OperandLocation {
    /// Effective address, if the operand lives in memory.
    pub fn address(self) -> Option<u16> {
        match self {
            OperandLocation::Memory(addr) => Some(addr),
            _ => None,
        }
    }

    /// Read the operand value. Implied operands read as 0.
    #[inline]
    pub fn get<C: CpuRegs>(self, cpu: &C, mem: &MemoryMap) -> u8 {
        match self {
            OperandLocation::Memory(addr) => mem.read(addr),
            OperandLocation::Accumulator => cpu.a(),
            OperandLocation::Immediate(v) => v,
            OperandLocation::None => 0,
        }
    }

    /// Store into the operand. Immediate and implied operands ignore writes.
    #[inline]
    pub fn set<C: CpuRegs>(self, cpu: &mut C, mem: &mut MemoryMap, value: u8) {
        match self {
            OperandLocation::Memory(addr) => *mem.address_of(addr) = value,
            OperandLocation::Accumulator => cpu.set_a(value),
            OperandLocation::Immediate(_) | OperandLocation::None => {}
        }
    }

    /// Read-modify-write through the operand.
    ///
    /// `f` returns a widened result; its low byte is written back and the
    /// full value is returned so callers can recover a carry-out in bit 8.
    #[inline]
    pub fn modify<C: CpuRegs>(
        self,
        cpu: &mut C,
        mem: &mut MemoryMap,
        f: impl FnOnce(u8) -> u16,
    ) -> u16 {
        match self {
            OperandLocation::Memory(addr) => {
                let cell = mem.address_of(addr);
                let raw = f(*cell);
                *cell = raw as u8;
                raw
            }
            OperandLocation::Accumulator => {
                let raw = f(cpu.a());
                cpu.set_a(raw as u8);
                raw
            }
            OperandLocation::Immediate(v) => f(v),
            OperandLocation::None => f(0),
        }
    }
}

/// Outcome of operand resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub location: OperandLocation,
    /// Indexing changed the high byte of the base address.
    pub page_crossed: bool,
    /// Raw operand bytes as they appeared in the instruction stream.
    pub bytes: [u8; 2],
    pub len: u8,
}

impl Resolved {
    /// The operand bytes actually consumed.
    pub fn operand_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

/// Fetch next byte from the instruction stream, incrementing PC.
#[inline]
pub(crate) fn fetch_byte<C: CpuRegs>(cpu: &mut C, mem: &MemoryMap) -> u8 {
    let v = mem.read(cpu.pc());
    cpu.advance_pc_one();
    v
}

/// Resolve the operand for `mode`, consuming operand bytes at PC.
pub fn resolve<C: CpuRegs>(mode: AddressingMode, cpu: &mut C, mem: &MemoryMap) -> Resolved {
    let mut bytes = [0u8; 2];
    let len = mode.operand_len();
    for slot in bytes.iter_mut().take(len as usize) {
        *slot = fetch_byte(cpu, mem);
    }
    let byte = bytes[0];
    let word = u16::from_le_bytes(bytes);

    let (location, page_crossed) = match mode {
        AddressingMode::Implied => (OperandLocation::None, false),
        AddressingMode::Accumulator => (OperandLocation::Accumulator, false),
        AddressingMode::Immediate | AddressingMode::Relative => {
            (OperandLocation::Immediate(byte), false)
        }
        AddressingMode::ZeroPage => (OperandLocation::Memory(byte as u16), false),
        AddressingMode::ZeroPageX => (
            OperandLocation::Memory(byte.wrapping_add(cpu.x()) as u16),
            false,
        ),
        AddressingMode::ZeroPageY => (
            OperandLocation::Memory(byte.wrapping_add(cpu.y()) as u16),
            false,
        ),
        AddressingMode::Absolute => (OperandLocation::Memory(word), false),
        AddressingMode::AbsoluteX => index_with_cross(word, cpu.x()),
        AddressingMode::AbsoluteY => index_with_cross(word, cpu.y()),
        AddressingMode::Indirect => (
            OperandLocation::Memory(read_word_indirect_bug(mem, word)),
            false,
        ),
        AddressingMode::IndexedIndirectX => {
            let ptr = read_word_zp(mem, byte.wrapping_add(cpu.x()));
            (OperandLocation::Memory(ptr), false)
        }
        AddressingMode::IndirectIndexedY => index_with_cross(read_word_zp(mem, byte), cpu.y()),
    };

    Resolved {
        location,
        page_crossed,
        bytes,
        len,
    }
}

#[inline]
fn index_with_cross(base: u16, index: u8) -> (OperandLocation, bool) {
    let addr = base.wrapping_add(index as u16);
    let crossed = (base & 0xFF00) != (addr & 0xFF00);
    (OperandLocation::Memory(addr), crossed)
}

/// Read a 16-bit little endian pointer from zero page with wraparound
/// on the high byte (standard 6502 zero-page indirect behavior).
#[inline]
pub(crate) fn read_word_zp(mem: &MemoryMap, base: u8) -> u16 {
    let lo = mem.read(base as u16) as u16;
    let hi = mem.read(base.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// Emulate the original 6502 JMP (indirect) hardware bug: when the
/// low byte of the indirect vector is 0xFF, the high byte does not
/// cross to the next page; it wraps within the same page.
#[inline]
pub(crate) fn read_word_indirect_bug(mem: &MemoryMap, addr: u16) -> u16 {
    let lo = mem.read(addr) as u16;
    let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
    let hi = mem.read(hi_addr) as u16;
    (hi << 8) | lo
}
