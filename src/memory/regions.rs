/*!
regions.rs - CPU address space layout and address decoding.

Overview
========
The 64 KiB CPU address space is carved into fixed regions. Each region has
a CPU-visible address span and a (possibly smaller) physical backing store;
mirroring is expressed purely by the offset computation in `decode`.

Layout
======
```text
    $0000-$00FF  Zero page        \
    $0100-$01FF  Stack             > 2 KiB internal RAM, mirrored to $1FFF
    $0200-$07FF  Internal RAM     /
    $2000-$3FFF  PPU I/O          8 registers mirrored every 8 bytes
    $4000-$401F  APU / I/O        32 registers, no mirroring
    $4020-$5FFF  Expansion ROM
    $6000-$7FFF  Cartridge SRAM
    $8000-$BFFF  PRG-ROM lower bank
    $C000-$FFFF  PRG-ROM upper bank
```

Every `u16` decodes to exactly one `(Region, offset)` pair and every offset is
strictly below the region's `physical_len`.
*/

/// Size of CPU internal RAM (in bytes).
pub const CPU_RAM_SIZE: usize = 0x0800;
/// Number of distinct PPU I/O registers.
pub const PPU_IO_SIZE: usize = 0x0008;
/// APU and controller I/O register block.
pub const APU_IO_SIZE: usize = 0x0020;
/// Expansion ROM window ($4020-$5FFF).
pub const EXPANSION_ROM_SIZE: usize = 0x1FE0;
/// Cartridge SRAM window ($6000-$7FFF).
pub const SRAM_SIZE: usize = 0x2000;
/// One PRG-ROM bank as installed into the CPU address space.
pub const PRG_ROM_BANK_SIZE: usize = 0x4000;

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Interrupt vector locations (little-endian pointer pairs).
pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Named region of the CPU address space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    ZeroPage,
    Stack,
    Ram,
    PpuIo,
    ApuIo,
    ExpansionRom,
    Sram,
    PrgRomLow,
    PrgRomHigh,
}

impl Region {
    /// All regions in ascending address order.
    pub const ALL: [Region; 9] = [
        Region::ZeroPage,
        Region::Stack,
        Region::Ram,
        Region::PpuIo,
        Region::ApuIo,
        Region::ExpansionRom,
        Region::Sram,
        Region::PrgRomLow,
        Region::PrgRomHigh,
    ];

    /// Inclusive CPU address range covered by this region, mirrors included.
    ///
    /// The three RAM sub-regions only list their primary window; their
    /// mirrors in $0800-$1FFF are attributed back by `decode`.
    pub const fn span(self) -> (u16, u16) {
        match self {
            Region::ZeroPage => (0x0000, 0x00FF),
            Region::Stack => (0x0100, 0x01FF),
            Region::Ram => (0x0200, 0x1FFF),
            Region::PpuIo => (0x2000, 0x3FFF),
            Region::ApuIo => (0x4000, 0x401F),
            Region::ExpansionRom => (0x4020, 0x5FFF),
            Region::Sram => (0x6000, 0x7FFF),
            Region::PrgRomLow => (0x8000, 0xBFFF),
            Region::PrgRomHigh => (0xC000, 0xFFFF),
        }
    }

    /// Number of CPU addresses attributed to the region.
    pub const fn span_len(self) -> usize {
        let (start, end) = self.span();
        (end as usize) - (start as usize) + 1
    }

    /// Number of physical bytes backing the region.
    ///
    /// Zero page, stack and RAM share one 2 KiB store; their lengths here
    /// are their slices of it.
    pub const fn physical_len(self) -> usize {
        match self {
            Region::ZeroPage | Region::Stack => 0x0100,
            Region::Ram => CPU_RAM_SIZE - 0x0200,
            Region::PpuIo => PPU_IO_SIZE,
            Region::ApuIo => APU_IO_SIZE,
            Region::ExpansionRom => EXPANSION_ROM_SIZE,
            Region::Sram => SRAM_SIZE,
            Region::PrgRomLow | Region::PrgRomHigh => PRG_ROM_BANK_SIZE,
        }
    }
}

/// Decode a CPU address into its region and the physical offset inside that
/// region's backing store.
///
/// For the RAM family the offset is the index into the shared 2 KiB store
/// (i.e. `addr & 0x07FF`), not the index relative to the sub-region start.
#[inline]
pub const fn decode(addr: u16) -> (Region, usize) {
    match addr {
        0x0000..=0x1FFF => {
            let idx = (addr as usize) & (CPU_RAM_SIZE - 1);
            let region = match idx {
                0x0000..=0x00FF => Region::ZeroPage,
                0x0100..=0x01FF => Region::Stack,
                _ => Region::Ram,
            };
            (region, idx)
        }
        0x2000..=0x3FFF => (Region::PpuIo, (addr as usize - 0x2000) % PPU_IO_SIZE),
        0x4000..=0x401F => (Region::ApuIo, addr as usize - 0x4000),
        0x4020..=0x5FFF => (Region::ExpansionRom, addr as usize - 0x4020),
        0x6000..=0x7FFF => (Region::Sram, addr as usize - 0x6000),
        0x8000..=0xBFFF => (Region::PrgRomLow, addr as usize - 0x8000),
        0xC000..=0xFFFF => (Region::PrgRomHigh, addr as usize - 0xC000),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_cover_whole_address_space() {
        let total: usize = Region::ALL.iter().map(|r| r.span_len()).sum();
        assert_eq!(total, 0x10000);

        // Adjacent regions must abut with no gap or overlap.
        for pair in Region::ALL.windows(2) {
            let (_, end) = pair[0].span();
            let (start, _) = pair[1].span();
            assert_eq!(end as u32 + 1, start as u32, "{:?} -> {:?}", pair[0], pair[1]);
        }
        assert_eq!(Region::ALL[0].span().0, 0x0000);
        assert_eq!(Region::ALL[Region::ALL.len() - 1].span().1, 0xFFFF);
    }

    #[test]
    fn every_address_decodes_in_bounds() {
        for addr in 0..=0xFFFFu16 {
            let (region, offset) = decode(addr);
            match region {
                Region::ZeroPage | Region::Stack | Region::Ram => {
                    assert!(offset < CPU_RAM_SIZE, "addr {addr:#06X}")
                }
                _ => assert!(offset < region.physical_len(), "addr {addr:#06X}"),
            }
        }
    }

    #[test]
    fn ram_sub_regions() {
        assert_eq!(decode(0x0042), (Region::ZeroPage, 0x42));
        assert_eq!(decode(0x01FD), (Region::Stack, 0x1FD));
        assert_eq!(decode(0x0900), (Region::Stack, 0x100));
        assert_eq!(decode(0x1FFF), (Region::Ram, 0x7FF));
    }

    #[test]
    fn io_and_cartridge_windows() {
        assert_eq!(decode(0x2000), (Region::PpuIo, 0));
        assert_eq!(decode(0x3FFF), (Region::PpuIo, 7));
        assert_eq!(decode(0x2009), (Region::PpuIo, 1));
        assert_eq!(decode(0x4015), (Region::ApuIo, 0x15));
        assert_eq!(decode(0x4020), (Region::ExpansionRom, 0));
        assert_eq!(decode(0x6000), (Region::Sram, 0));
        assert_eq!(decode(0x8000), (Region::PrgRomLow, 0));
        assert_eq!(decode(0xC000), (Region::PrgRomHigh, 0));
        assert_eq!(decode(0xFFFF), (Region::PrgRomHigh, 0x3FFF));
    }
}
