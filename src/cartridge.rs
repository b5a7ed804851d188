/*!
Cartridge with iNES (v1) loader supplying PRG-ROM banks to the CPU core.

Features:
- Parse iNES (v1) header from bytes or file path
- Slice PRG ROM into 16 KiB banks, keep CHR (ROM, or 8 KiB CHR RAM when CHR size == 0)
- Determine mirroring, battery-backed RAM, trainer presence, mapper number
- Hand out the (low, high) PRG bank pair the memory map is loaded with

Notes:
- iNES 2.0 is detected and rejected with an error.
- PRG RAM size: if header byte 8 is 0, 8 KiB by convention; otherwise units * 8 KiB.
- Bank pair: first and last PRG bank. A single-bank image (NROM-128) therefore
  mirrors into both $8000-$BFFF and $C000-$FFFF; a two-bank image (NROM-256)
  maps linearly. Switching other banks in is left to the caller
  (`Emulator::select_prg_banks`); mapper registers are not emulated.
*/

use std::fmt;
use std::fs;
use std::path::Path;

use log::info;

use crate::memory::regions::PRG_ROM_BANK_SIZE;

/// Size of one CHR bank in the file.
pub const CHR_BANK_SIZE: usize = 0x2000;
const HEADER_LEN: usize = 16;
const TRAINER_LEN: usize = 512;
const PRG_RAM_UNIT: usize = 0x2000;

/// One 16 KiB PRG-ROM bank.
pub type PrgBank = [u8; PRG_ROM_BANK_SIZE];

/// Errors produced while loading an iNES image.
#[derive(Debug)]
pub enum CartridgeError {
    Io(std::io::Error),
    /// Fewer than 16 bytes: no room for the header.
    TooShort { len: usize },
    BadMagic,
    /// NES 2.0 headers are recognized but not supported.
    Nes20Unsupported,
    /// A section declared by the header extends past the end of the data.
    Truncated {
        section: &'static str,
        needed: usize,
        available: usize,
    },
    /// Header declares zero PRG banks.
    NoPrgRom,
    BankOutOfRange { bank: usize, count: usize },
}

impl fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartridgeError::Io(e) => write!(f, "failed to read iNES file: {e}"),
            CartridgeError::TooShort { len } => {
                write!(f, "data too small for iNES header ({len} bytes)")
            }
            CartridgeError::BadMagic => write!(f, "invalid iNES header magic (expected NES<1A>)"),
            CartridgeError::Nes20Unsupported => write!(f, "NES 2.0 format is not supported"),
            CartridgeError::Truncated {
                section,
                needed,
                available,
            } => write!(
                f,
                "data too small for {section}: need {needed} bytes, {available} available"
            ),
            CartridgeError::NoPrgRom => write!(f, "image declares no PRG ROM"),
            CartridgeError::BankOutOfRange { bank, count } => {
                write!(f, "PRG bank {bank} out of range ({count} banks)")
            }
        }
    }
}

impl std::error::Error for CartridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CartridgeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CartridgeError {
    fn from(e: std::io::Error) -> Self {
        CartridgeError::Io(e)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

/// Board family named by the iNES mapper number.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MapperKind {
    Nrom,
    Mmc1,
    Unrom,
    Cnrom,
    Mmc3,
    Mmc5,
    FfeF4xxx,
    Aorom,
    FfeF3xxx,
    Mmc2,
    Mmc4,
    Other(u8),
}

impl MapperKind {
    pub fn from_id(id: u8) -> Self {
        match id {
            0 => MapperKind::Nrom,
            1 => MapperKind::Mmc1,
            2 => MapperKind::Unrom,
            3 => MapperKind::Cnrom,
            4 => MapperKind::Mmc3,
            5 => MapperKind::Mmc5,
            6 => MapperKind::FfeF4xxx,
            7 => MapperKind::Aorom,
            8 => MapperKind::FfeF3xxx,
            9 => MapperKind::Mmc2,
            10 => MapperKind::Mmc4,
            n => MapperKind::Other(n),
        }
    }
}

/// Decoded 16-byte iNES header.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InesHeader {
    pub prg_banks: u8,
    pub chr_banks: u8,
    pub mapper_id: u8,
    pub mirroring: Mirroring,
    pub battery: bool,
    pub has_trainer: bool,
    /// PRG RAM size in 8 KiB units as stored (0 means 8 KiB by convention).
    pub prg_ram_units: u8,
}

impl InesHeader {
    pub fn parse(data: &[u8]) -> Result<Self, CartridgeError> {
        if data.len() < HEADER_LEN {
            return Err(CartridgeError::TooShort { len: data.len() });
        }
        if &data[0..4] != b"NES\x1A" {
            return Err(CartridgeError::BadMagic);
        }

        let flags6 = data[6];
        let flags7 = data[7];
        // NES 2.0 if (flags7 & 0x0C) == 0x08.
        if (flags7 & 0x0C) == 0x08 {
            return Err(CartridgeError::Nes20Unsupported);
        }

        let mirroring = if flags6 & 0b0000_1000 != 0 {
            Mirroring::FourScreen
        } else if flags6 & 0b0000_0001 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };

        Ok(Self {
            prg_banks: data[4],
            chr_banks: data[5],
            mapper_id: (flags7 & 0xF0) | (flags6 >> 4),
            mirroring,
            battery: flags6 & 0b0000_0010 != 0,
            has_trainer: flags6 & 0b0000_0100 != 0,
            prg_ram_units: data[8],
        })
    }

    pub fn mapper(&self) -> MapperKind {
        MapperKind::from_id(self.mapper_id)
    }
}

pub struct Cartridge {
    header: InesHeader,
    prg_banks: Vec<PrgBank>,
    chr: Vec<u8>,
    chr_is_ram: bool,
    prg_ram_len: usize,
}

impl fmt::Debug for Cartridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cartridge")
            .field("header", &self.header)
            .field("prg_banks", &self.prg_banks.len())
            .field("chr_len", &self.chr.len())
            .field("chr_is_ram", &self.chr_is_ram)
            .field("prg_ram_len", &self.prg_ram_len)
            .finish()
    }
}

impl Cartridge {
    // -------------- Construction --------------

    /// Parse a cartridge from raw iNES bytes.
    pub fn from_ines_bytes(data: &[u8]) -> Result<Self, CartridgeError> {
        let header = InesHeader::parse(data)?;
        if header.prg_banks == 0 {
            return Err(CartridgeError::NoPrgRom);
        }

        let mut offset = HEADER_LEN;
        if header.has_trainer {
            require(data, offset, TRAINER_LEN, "iNES trainer")?;
            offset += TRAINER_LEN;
        }

        let prg_len = header.prg_banks as usize * PRG_ROM_BANK_SIZE;
        require(data, offset, prg_len, "PRG ROM")?;
        let prg_banks: Vec<PrgBank> = data[offset..offset + prg_len]
            .chunks_exact(PRG_ROM_BANK_SIZE)
            .map(|chunk| {
                let mut bank = [0u8; PRG_ROM_BANK_SIZE];
                bank.copy_from_slice(chunk);
                bank
            })
            .collect();
        offset += prg_len;

        let chr_is_ram = header.chr_banks == 0;
        let chr = if chr_is_ram {
            vec![0; CHR_BANK_SIZE]
        } else {
            let chr_len = header.chr_banks as usize * CHR_BANK_SIZE;
            require(data, offset, chr_len, "CHR ROM")?;
            data[offset..offset + chr_len].to_vec()
        };

        let prg_ram_len = match header.prg_ram_units {
            0 => PRG_RAM_UNIT,
            n => n as usize * PRG_RAM_UNIT,
        };

        info!(
            "iNES: mapper {} ({:?}), {} PRG bank(s), {} CHR bank(s), {:?} mirroring",
            header.mapper_id,
            header.mapper(),
            header.prg_banks,
            header.chr_banks,
            header.mirroring
        );

        Ok(Self {
            header,
            prg_banks,
            chr,
            chr_is_ram,
            prg_ram_len,
        })
    }

    /// Load a cartridge from an iNES file (.nes).
    pub fn from_ines_file<P: AsRef<Path>>(path: P) -> Result<Self, CartridgeError> {
        let bytes = fs::read(path)?;
        Self::from_ines_bytes(&bytes)
    }

    // -------------- PRG banks --------------

    pub fn prg_bank_count(&self) -> usize {
        self.prg_banks.len()
    }

    pub fn prg_bank(&self, bank: usize) -> Result<&PrgBank, CartridgeError> {
        self.prg_banks
            .get(bank)
            .ok_or(CartridgeError::BankOutOfRange {
                bank,
                count: self.prg_banks.len(),
            })
    }

    /// Banks installed at power-on: (first, last).
    pub fn prg_bank_pair(&self) -> (&PrgBank, &PrgBank) {
        // Parsing guarantees at least one bank.
        let last = self.prg_banks.len() - 1;
        (&self.prg_banks[0], &self.prg_banks[last])
    }

    // -------------- Accessors --------------

    pub fn header(&self) -> &InesHeader {
        &self.header
    }

    pub fn mapper(&self) -> MapperKind {
        self.header.mapper()
    }

    pub fn mirroring(&self) -> Mirroring {
        self.header.mirroring
    }

    pub fn battery_backed(&self) -> bool {
        self.header.battery
    }

    pub fn prg_rom_len(&self) -> usize {
        self.prg_banks.len() * PRG_ROM_BANK_SIZE
    }

    pub fn chr(&self) -> &[u8] {
        &self.chr
    }

    pub fn chr_is_ram(&self) -> bool {
        self.chr_is_ram
    }

    pub fn prg_ram_len(&self) -> usize {
        self.prg_ram_len
    }
}

fn require(data: &[u8], offset: usize, len: usize, section: &'static str) -> Result<(), CartridgeError> {
    let available = data.len().saturating_sub(offset);
    if available < len {
        return Err(CartridgeError::Truncated {
            section,
            needed: len,
            available,
        });
    }
    Ok(())
}
