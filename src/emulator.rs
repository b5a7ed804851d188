/*!
emulator.rs - Driver tying a parsed `Cartridge` to the CPU core.

Responsibilities:
- Build the `Cpu`, install the cartridge's power-on PRG bank pair and run
  the RESET sequence.
- Forward ticks, collecting the diagnostic record of each instruction.
- Copy other PRG banks into the memory map on request (between ticks).

Only a successfully parsed `Cartridge` can reach this type, so malformed
images never touch the memory map.
*/

use log::info;

use crate::cartridge::{Cartridge, CartridgeError};
use crate::config::CpuConfig;
use crate::cpu::{Cpu, Instruction};

#[derive(Debug)]
pub struct Emulator {
    cpu: Cpu,
    cartridge: Cartridge,
}

impl Emulator {
    /// Install the cartridge's first/last PRG banks and reset the CPU.
    pub fn new(cartridge: Cartridge, config: CpuConfig) -> Self {
        let mut cpu = Cpu::create_and_initialize(config);
        let (low, high) = cartridge.prg_bank_pair();
        cpu.update_prg_rom(low, high);
        info!(
            "installed PRG banks 0 and {} of {}",
            cartridge.prg_bank_count() - 1,
            cartridge.prg_bank_count()
        );
        cpu.reset();
        Self { cpu, cartridge }
    }

    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Execute one instruction and return its record.
    pub fn step(&mut self) -> Option<Instruction> {
        self.cpu.tick();
        self.cpu.previous_instruction().cloned()
    }

    /// Execute `ticks` instructions.
    pub fn run(&mut self, ticks: usize) {
        self.cpu.run(ticks);
    }

    /// Copy PRG banks `low` and `high` into $8000 and $C000.
    pub fn select_prg_banks(&mut self, low: usize, high: usize) -> Result<(), CartridgeError> {
        let lo = self.cartridge.prg_bank(low)?;
        let hi = self.cartridge.prg_bank(high)?;
        self.cpu.update_prg_rom(lo, hi);
        info!("selected PRG banks {low} / {high}");
        Ok(())
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::IRQ_DISABLE;
    use crate::memory::regions::PRG_ROM_BANK_SIZE;
    use crate::test_utils::{build_ines, build_nrom_with_prg, set_vectors_in_prg};

    fn cart(rom: &[u8]) -> Cartridge {
        Cartridge::from_ines_bytes(rom).expect("parse")
    }

    #[test]
    fn new_installs_banks_and_resets() {
        // LDA #$10 ; ADC #$05 ; STA $0200
        let rom = build_nrom_with_prg(&[0xA9, 0x10, 0x69, 0x05, 0x8D, 0x00, 0x02], 1, 1, None);
        let mut emu = Emulator::new(cart(&rom), CpuConfig::default());
        assert_eq!(emu.cpu().pc(), 0x8000);
        assert_eq!(emu.cpu().status(), IRQ_DISABLE);
        // Single bank mirrored into the upper half.
        assert_eq!(emu.cpu().memory().read(0xC000), 0xA9);

        let ins = emu.step().expect("record");
        assert_eq!(ins.mnemonic, "LDA");
        emu.run(2);
        assert_eq!(emu.cpu().a(), 0x15);
        assert_eq!(emu.cpu().memory().read(0x0200), 0x15);
    }

    #[test]
    fn select_prg_banks_swaps_between_ticks() {
        let mut rom = build_ines(3, 1, 0, 0, 1, None);
        let prg = 16..16 + 3 * PRG_ROM_BANK_SIZE;
        for bank in 0..3 {
            rom[prg.start + bank * PRG_ROM_BANK_SIZE] = 0x10 + bank as u8;
        }
        let last = prg.start + 2 * PRG_ROM_BANK_SIZE..prg.end;
        set_vectors_in_prg(&mut rom[last], 0x8000, 0x8000, 0x8000);

        let mut emu = Emulator::new(cart(&rom), CpuConfig::default());
        assert_eq!(emu.cpu().memory().read(0x8000), 0x10);
        assert_eq!(emu.cpu().memory().read(0xC000), 0x12);

        emu.select_prg_banks(1, 2).expect("banks");
        assert_eq!(emu.cpu().memory().read(0x8000), 0x11);

        let err = emu.select_prg_banks(0, 3).unwrap_err();
        assert!(matches!(err, CartridgeError::BankOutOfRange { bank: 3, count: 3 }));
        assert_eq!(emu.cpu().memory().read(0x8000), 0x11);
    }

    #[test]
    fn reset_returns_to_vector() {
        let rom = build_nrom_with_prg(&[0xEA, 0xEA, 0xEA], 1, 1, Some((0x8001, 0x8000, 0x8000)));
        let mut emu = Emulator::new(cart(&rom), CpuConfig::default());
        assert_eq!(emu.cpu().pc(), 0x8001);
        emu.run(2);
        assert_eq!(emu.cpu().pc(), 0x8003);
        emu.reset();
        assert_eq!(emu.cpu().pc(), 0x8001);
        assert_eq!(emu.cartridge().prg_bank_count(), 1);
        emu.cpu_mut().set_a(9);
        assert_eq!(emu.cpu().a(), 9);
    }
}
