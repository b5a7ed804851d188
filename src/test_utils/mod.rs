//! Shared test utilities: minimal iNES (v1) ROM images and ready-to-tick CPUs.
//!
//! The image builders back the cartridge and emulator tests; the
//! `cpu_with_*` helpers run an image through the real loader, install the
//! bank pair and reset, so opcode tests start from the same state a ROM
//! would.
//!
//! Notes on iNES header fields used here:
//! - bytes[0..4] = b"NES\x1A"
//! - byte 4 = PRG ROM size in 16 KiB units
//! - byte 5 = CHR ROM size in 8 KiB units (0 => the loader allocates 8 KiB CHR RAM)
//! - byte 6 = Flags 6 (mirroring, battery, trainer, mapper low nibble)
//! - byte 7 = Flags 7 (PlayChoice/NES 2.0 indicator, mapper high nibble)
//! - byte 8 = PRG RAM size in 8 KiB units (0 => commonly interpreted as 8 KiB by convention)
//! - bytes 9..15 = padding/reserved
//!
//! Vectors:
//! - For 16 KiB PRG (NROM-128): vectors are at PRG offset 0x3FFA..=0x3FFF
//! - For 32 KiB PRG (NROM-256): vectors are at PRG offset 0x7FFA..=0x7FFF
//!

use crate::cartridge::{CHR_BANK_SIZE, Cartridge};
use crate::config::CpuConfig;
use crate::cpu::Cpu;
use crate::memory::regions::PRG_ROM_BANK_SIZE;

/// Minimal iNES (v1) image. PRG bytes are filled with 0xAA and CHR bytes
/// with 0xCC so tests can tell the sections apart.
///
/// `prg_16k` / `chr_8k` are the bank counts written to bytes 4 and 5;
/// `flags6`, `flags7` and `prg_ram_8k` go to bytes 6, 7 and 8 unchanged.
pub fn build_ines(
    prg_16k: usize,
    chr_8k: usize,
    flags6: u8,
    flags7: u8,
    prg_ram_8k: u8,
    trainer: Option<&[u8; 512]>,
) -> Vec<u8> {
    let mut header = [0u8; 16];
    header[..4].copy_from_slice(b"NES\x1A");
    header[4] = prg_16k as u8;
    header[5] = chr_8k as u8;
    header[6] = flags6;
    header[7] = flags7;
    header[8] = prg_ram_8k;

    let mut rom = header.to_vec();
    if let Some(t) = trainer {
        rom.extend_from_slice(t);
    }
    rom.extend(std::iter::repeat_n(0xAA, prg_16k * PRG_ROM_BANK_SIZE));
    rom.extend(std::iter::repeat_n(0xCC, chr_8k * CHR_BANK_SIZE));
    rom
}

/// Single-bank NROM image with `prg` at the start of the bank ($8000) and
/// the (reset, nmi, irq) vectors at its end. Vectors default to $8000.
pub fn build_nrom_with_prg(
    prg: &[u8],
    chr_8k: usize,
    prg_ram_8k: u8,
    vectors: Option<(u16, u16, u16)>,
) -> Vec<u8> {
    assert!(prg.len() <= PRG_ROM_BANK_SIZE, "program larger than one PRG bank");

    let mut rom = build_ines(1, chr_8k, 0, 0, prg_ram_8k, None);
    let bank = &mut rom[16..16 + PRG_ROM_BANK_SIZE];
    bank[..prg.len()].copy_from_slice(prg);
    let (reset, nmi, irq) = vectors.unwrap_or((0x8000, 0x8000, 0x8000));
    set_vectors_in_prg(bank, reset, nmi, irq);
    rom
}

/// Write the NMI, RESET and IRQ vectors into the last six bytes of a 16 KiB
/// or 32 KiB PRG slice (they land at $FFFA-$FFFF once installed).
pub fn set_vectors_in_prg(prg: &mut [u8], reset: u16, nmi: u16, irq: u16) {
    assert!(
        prg.len() == PRG_ROM_BANK_SIZE || prg.len() == 2 * PRG_ROM_BANK_SIZE,
        "vectors need a 16 KiB or 32 KiB PRG slice, got {} bytes",
        prg.len()
    );
    let base = prg.len() - 6;
    for (i, v) in [nmi, reset, irq].into_iter().enumerate() {
        prg[base + 2 * i..base + 2 * i + 2].copy_from_slice(&v.to_le_bytes());
    }
}

/// CPU with `prg` at $8000 and every vector pointing at $8000, after reset.
pub fn cpu_with_program(prg: &[u8]) -> Cpu {
    cpu_with_vectors(prg, 0x8000, 0x8000, 0x8000)
}

/// CPU with `prg` placed at `addr` (inside the 16 KiB bank) and RESET
/// pointing at it.
pub fn cpu_with_program_at(addr: u16, prg: &[u8]) -> Cpu {
    let offset = (addr - 0x8000) as usize;
    let mut image = vec![0xEA; offset];
    image.extend_from_slice(prg);
    cpu_from_rom(
        &build_nrom_with_prg(&image, 1, 1, Some((addr, 0x8000, 0x8000))),
        CpuConfig::default(),
    )
}

pub fn cpu_with_config(prg: &[u8], config: CpuConfig) -> Cpu {
    cpu_from_rom(&build_nrom_with_prg(prg, 1, 1, None), config)
}

/// CPU with `prg` at $8000 and explicit (reset, nmi, irq) vectors.
pub fn cpu_with_vectors(prg: &[u8], reset: u16, nmi: u16, irq: u16) -> Cpu {
    cpu_from_rom(
        &build_nrom_with_prg(prg, 1, 1, Some((reset, nmi, irq))),
        CpuConfig::default(),
    )
}

fn cpu_from_rom(rom: &[u8], config: CpuConfig) -> Cpu {
    let cart = Cartridge::from_ines_bytes(rom).expect("parse");
    let mut cpu = Cpu::create_and_initialize(config);
    let (low, high) = cart.prg_bank_pair();
    cpu.update_prg_rom(low, high);
    cpu.reset();
    cpu
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_fields_and_size() {
        let rom = build_ines(2, 1, 0x01, 0x00, 1, None);
        assert_eq!(&rom[0..9], b"NES\x1A\x02\x01\x01\x00\x01");
        assert_eq!(rom.len(), 16 + 2 * PRG_ROM_BANK_SIZE + CHR_BANK_SIZE);
        assert_eq!(rom[16], 0xAA);
        assert_eq!(rom[rom.len() - 1], 0xCC);
    }

    #[test]
    fn vectors_land_in_last_six_bytes() {
        for len in [PRG_ROM_BANK_SIZE, 2 * PRG_ROM_BANK_SIZE] {
            let mut prg = vec![0u8; len];
            set_vectors_in_prg(&mut prg, 0x8123, 0x8456, 0x8ABC);
            assert_eq!(&prg[len - 6..], &[0x56, 0x84, 0x23, 0x81, 0xBC, 0x8A]);
        }
    }

    #[test]
    fn nrom_image_carries_program_and_vectors() {
        let rom = build_nrom_with_prg(&[0xA9, 0x01], 1, 1, Some((0x8010, 0x8020, 0x8030)));
        assert_eq!(rom[4], 1);
        assert_eq!(&rom[16..18], &[0xA9, 0x01]);
        assert_eq!(rom[18], 0xAA);
        assert_eq!(&rom[16 + 0x3FFA..16 + 0x4000], &[0x20, 0x80, 0x10, 0x80, 0x30, 0x80]);
    }

    #[test]
    fn cpu_helpers_start_at_program() {
        let cpu = cpu_with_program(&[0xA9, 0x01]);
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.memory().read(0x8000), 0xA9);

        let cpu = cpu_with_program_at(0x80F0, &[0x38]);
        assert_eq!(cpu.pc(), 0x80F0);
        assert_eq!(cpu.memory().read(0x80F0), 0x38);
        assert_eq!(cpu.memory().read(0x80EF), 0xEA);
    }
}
