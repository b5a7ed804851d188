/*!
memory - CPU-visible 64 KiB memory map.

Overview
========
`MemoryMap` owns every byte the CPU can address, organized as named
fixed-size regions (see `regions`). All accesses go through `decode`, which
applies the NES mirroring rules, so no address is ever unmapped and no
access can land outside a backing store.

Responsibilities
================
- Byte `read` / `write` honoring RAM and PPU I/O mirroring.
- `address_of`: a mutable reference to the single backing byte of an
  address, used by read-modify-write instructions.
- `update_prg_rom`: install the two 16 KiB PRG-ROM banks supplied by the
  cartridge collaborator. Callable repeatedly for bank switching.

Non-Responsibilities
====================
- No PPU/APU side effects: the I/O windows are plain storage.
- No write protection: writes to ROM windows land in the installed bank copy.
*/

pub mod ram;
pub mod regions;

#[cfg(test)]
mod tests;

pub use ram::Ram;
pub use regions::{
    APU_IO_SIZE, CPU_RAM_SIZE, EXPANSION_ROM_SIZE, IRQ_VECTOR, NMI_VECTOR, PPU_IO_SIZE,
    PRG_ROM_BANK_SIZE, RESET_VECTOR, Region, SRAM_SIZE, STACK_BASE, decode,
};

/// The CPU address space.
#[derive(Clone)]
pub struct MemoryMap {
    ram: Ram,
    ppu_io: [u8; PPU_IO_SIZE],
    apu_io: [u8; APU_IO_SIZE],
    expansion_rom: [u8; EXPANSION_ROM_SIZE],
    sram: [u8; SRAM_SIZE],
    prg_rom_low: [u8; PRG_ROM_BANK_SIZE],
    prg_rom_high: [u8; PRG_ROM_BANK_SIZE],
}

impl Default for MemoryMap {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryMap")
            .field("reset_vector", &format_args!("{:#06X}", self.read_word(RESET_VECTOR)))
            .finish_non_exhaustive()
    }
}

impl MemoryMap {
    /// Zero-initialized address space.
    pub fn new() -> Self {
        Self {
            ram: Ram::new(),
            ppu_io: [0; PPU_IO_SIZE],
            apu_io: [0; APU_IO_SIZE],
            expansion_rom: [0; EXPANSION_ROM_SIZE],
            sram: [0; SRAM_SIZE],
            prg_rom_low: [0; PRG_ROM_BANK_SIZE],
            prg_rom_high: [0; PRG_ROM_BANK_SIZE],
        }
    }

    /// Zero every region, including the installed PRG banks.
    pub fn clear(&mut self) {
        self.ram.reset();
        self.ppu_io.fill(0);
        self.apu_io.fill(0);
        self.expansion_rom.fill(0);
        self.sram.fill(0);
        self.prg_rom_low.fill(0);
        self.prg_rom_high.fill(0);
    }

    /// Read a byte from the CPU address space.
    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        let (region, offset) = decode(addr);
        match region {
            Region::ZeroPage | Region::Stack | Region::Ram => self.ram.read(addr),
            Region::PpuIo => self.ppu_io[offset],
            Region::ApuIo => self.apu_io[offset],
            Region::ExpansionRom => self.expansion_rom[offset],
            Region::Sram => self.sram[offset],
            Region::PrgRomLow => self.prg_rom_low[offset],
            Region::PrgRomHigh => self.prg_rom_high[offset],
        }
    }

    /// Write a byte into the CPU address space.
    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        *self.address_of(addr) = value;
    }

    /// Mutable reference to the backing byte for `addr` (after mirroring).
    #[inline]
    pub fn address_of(&mut self, addr: u16) -> &mut u8 {
        let (region, offset) = decode(addr);
        match region {
            Region::ZeroPage | Region::Stack | Region::Ram => self.ram.cell_mut(addr),
            Region::PpuIo => &mut self.ppu_io[offset],
            Region::ApuIo => &mut self.apu_io[offset],
            Region::ExpansionRom => &mut self.expansion_rom[offset],
            Region::Sram => &mut self.sram[offset],
            Region::PrgRomLow => &mut self.prg_rom_low[offset],
            Region::PrgRomHigh => &mut self.prg_rom_high[offset],
        }
    }

    /// Little-endian 16-bit read; the high byte address wraps at $FFFF.
    #[inline]
    pub fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Copy a run of bytes starting at `addr`, wrapping at $FFFF.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let mut a = addr;
        for &b in bytes {
            self.write(a, b);
            a = a.wrapping_add(1);
        }
    }

    /// Install PRG-ROM banks into $8000-$BFFF (low) and $C000-$FFFF (high).
    pub fn update_prg_rom(
        &mut self,
        low_bank: &[u8; PRG_ROM_BANK_SIZE],
        high_bank: &[u8; PRG_ROM_BANK_SIZE],
    ) {
        self.prg_rom_low.copy_from_slice(low_bank);
        self.prg_rom_high.copy_from_slice(high_bank);
    }

    /// Internal RAM (read-only view).
    pub fn ram(&self) -> &Ram {
        &self.ram
    }
}
