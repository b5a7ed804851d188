use std::path::PathBuf;

use clap::Parser;
use log::{Level, LevelFilter, Log, Metadata, Record};
use nescpu::{Cartridge, CpuConfig, Emulator, OverflowRule};

/// Run the NES 6502 core against an iNES image (or a built-in demo program)
#[derive(Parser, Debug)]
#[command(name = "nescpu")]
#[command(about = "NES 6502 CPU core runner", long_about = None)]
struct Args {
    /// Path to an iNES ROM file; a demo program is assembled when omitted
    #[arg(short, long)]
    rom: Option<PathBuf>,

    /// Number of instructions to execute
    #[arg(short, long, default_value = "1000")]
    ticks: usize,

    /// Derive ADC/SBC overflow from the carry-out instead of the sign rule
    #[arg(long)]
    unsigned_overflow: bool,

    /// Print every executed instruction
    #[arg(long)]
    trace: bool,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// NROM-128 image: add, store, count X up to wrap, BRK through the IRQ
/// handler, then spin.
fn build_demo_ines() -> Vec<u8> {
    let mut rom = Vec::with_capacity(16 + 0x4000);
    rom.extend_from_slice(b"NES\x1A");
    rom.extend_from_slice(&[1, 0, 0, 0, 1]);
    rom.extend_from_slice(&[0u8; 7]);

    let mut prg = vec![0xEAu8; 0x4000];
    let program: &[u8] = &[
        0x58, // CLI
        0xA9, 0x10, // LDA #$10
        0x69, 0x05, // ADC #$05 => A = 0x15
        0x8D, 0x00, 0x02, // STA $0200
        0xE8, // INX
        0xD0, 0xFD, // BNE -3
        0x00, 0xEA, // BRK (returns to $800D)
        0x4C, 0x0D, 0x80, // JMP $800D
    ];
    prg[..program.len()].copy_from_slice(program);
    // IRQ handler at $8020: RTI
    prg[0x20] = 0x40;
    // NMI, RESET, IRQ
    prg[0x3FFA..].copy_from_slice(&[0x00, 0x80, 0x00, 0x80, 0x20, 0x80]);

    rom.extend_from_slice(&prg);
    rom
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let cartridge = match &args.rom {
        Some(path) => Cartridge::from_ines_file(path),
        None => Cartridge::from_ines_bytes(&build_demo_ines()),
    };
    let cartridge = match cartridge {
        Ok(cart) => cart,
        Err(e) => {
            eprintln!("Failed to load cartridge: {e}");
            std::process::exit(1);
        }
    };

    let mut config = CpuConfig::default();
    if args.unsigned_overflow {
        config = config.with_overflow_rule(OverflowRule::Unsigned);
    }

    println!("Loaded cartridge:");
    println!("  PRG ROM: {} bytes", cartridge.prg_rom_len());
    println!("  Mapper: {:?}", cartridge.mapper());

    let mut emu = Emulator::new(cartridge, config);
    for _ in 0..args.ticks {
        let ins = emu.step();
        if args.trace {
            if let Some(ins) = ins {
                println!("{ins}");
            }
        }
    }

    let cpu = emu.cpu();
    println!("\nAfter {} instructions ({} cycles):", args.ticks, cpu.total_cycles());
    println!("  {}  PC:{:04X}", cpu.state(), cpu.pc());
    println!("  P (flags): 0b{:08b}", cpu.status());
    println!("  mem[0x0200]: 0x{:02X}", cpu.memory().read(0x0200));
    if log::log_enabled!(Level::Debug) {
        log::debug!("last instruction: {:?}", cpu.previous_instruction());
    }
}
