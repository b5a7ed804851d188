use super::*;

fn bank(fill: u8, first: u8) -> [u8; PRG_ROM_BANK_SIZE] {
    let mut b = [fill; PRG_ROM_BANK_SIZE];
    b[0] = first;
    b
}

#[test]
fn ram_mirroring_holds_for_every_address() {
    let mut mem = MemoryMap::new();
    for addr in 0x0000..=0x1FFFu16 {
        let base = addr & 0x07FF;
        let v = (addr as u8) ^ 0x5A;
        mem.write(base, v);
        assert_eq!(mem.read(addr), mem.read(base), "addr {addr:#06X}");
        assert_eq!(mem.read(addr), v);
    }
}

#[test]
fn write_through_mirror_is_visible_at_base() {
    let mut mem = MemoryMap::new();
    mem.write(0x1234, 0x77);
    assert_eq!(mem.read(0x0234), 0x77);
    assert_eq!(mem.read(0x0A34), 0x77);
}

#[test]
fn ppu_io_registers_mirror_every_eight_bytes() {
    let mut mem = MemoryMap::new();
    for reg in 0..8u16 {
        mem.write(0x2000 + reg, 0x10 + reg as u8);
    }
    for addr in 0x2000..=0x3FFFu16 {
        let expect = mem.read(0x2000 + ((addr - 0x2000) % 8));
        assert_eq!(mem.read(addr), expect, "addr {addr:#06X}");
    }
    mem.write(0x3FFE, 0xEE);
    assert_eq!(mem.read(0x2006), 0xEE);
}

#[test]
fn apu_io_is_not_mirrored() {
    let mut mem = MemoryMap::new();
    mem.write(0x4000, 0x11);
    mem.write(0x401F, 0x22);
    assert_eq!(mem.read(0x4000), 0x11);
    assert_eq!(mem.read(0x401F), 0x22);
    assert_eq!(mem.read(0x4020), 0x00);
}

#[test]
fn expansion_and_sram_are_flat() {
    let mut mem = MemoryMap::new();
    mem.write(0x4020, 0x01);
    mem.write(0x5FFF, 0x02);
    mem.write(0x6000, 0x03);
    mem.write(0x7FFF, 0x04);
    assert_eq!(mem.read(0x4020), 0x01);
    assert_eq!(mem.read(0x5FFF), 0x02);
    assert_eq!(mem.read(0x6000), 0x03);
    assert_eq!(mem.read(0x7FFF), 0x04);
}

#[test]
fn update_prg_rom_installs_both_banks() {
    let mut mem = MemoryMap::new();
    let low = bank(0xEA, 0x4C);
    let high = bank(0x00, 0xA9);
    mem.update_prg_rom(&low, &high);
    assert_eq!(mem.read(0x8000), 0x4C);
    assert_eq!(mem.read(0x8001), 0xEA);
    assert_eq!(mem.read(0xBFFF), 0xEA);
    assert_eq!(mem.read(0xC000), 0xA9);
    assert_eq!(mem.read(0xFFFF), 0x00);
}

#[test]
fn update_prg_rom_can_swap_banks() {
    let mut mem = MemoryMap::new();
    mem.update_prg_rom(&bank(0, 1), &bank(0, 2));
    mem.update_prg_rom(&bank(0, 3), &bank(0, 4));
    assert_eq!(mem.read(0x8000), 3);
    assert_eq!(mem.read(0xC000), 4);
}

#[test]
fn rom_windows_accept_writes() {
    let mut mem = MemoryMap::new();
    mem.write(0xFFFC, 0x34);
    mem.write(0xFFFD, 0x12);
    assert_eq!(mem.read_word(RESET_VECTOR), 0x1234);
}

#[test]
fn address_of_aliases_backing_byte() {
    let mut mem = MemoryMap::new();
    *mem.address_of(0x0810) += 5;
    assert_eq!(mem.read(0x0010), 5);

    *mem.address_of(0x2FFF) = 0x9C;
    assert_eq!(mem.read(0x2007), 0x9C);

    let cell = mem.address_of(0x6001);
    *cell = cell.wrapping_sub(1);
    assert_eq!(mem.read(0x6001), 0xFF);
}

#[test]
fn read_word_wraps_at_top_of_address_space() {
    let mut mem = MemoryMap::new();
    mem.write(0xFFFF, 0xCD);
    mem.write(0x0000, 0xAB);
    assert_eq!(mem.read_word(0xFFFF), 0xABCD);
}

#[test]
fn load_and_clear() {
    let mut mem = MemoryMap::new();
    mem.load(0x0300, &[1, 2, 3]);
    assert_eq!(mem.read(0x0302), 3);
    mem.clear();
    assert_eq!(mem.read(0x0300), 0);
    assert!(mem.ram().as_slice().iter().all(|&b| b == 0));
}
