//! ARM FPA emulator CLI.
//!
//! This binary drives the emulator outside a trap handler. It performs:
//! 1. **Run:** Loads a flat image or ELF executable, seeds registers, and takes one
//!    trap entry at the chosen address, then prints the resulting state.
//! 2. **Disasm:** Lists words from an image, or words given on the command line, as
//!    FPA instructions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::{fs, process};
use tracing_subscriber::EnvFilter;

use armfpe_core::config::FaultPolicy;
use armfpe_core::core::AbortHandler;
use armfpe_core::isa::disasm;
use armfpe_core::sim::loader;
use armfpe_core::{Bus, Emulator, EmulatorConfig, Fault, Ram, SavedRegisters};

/// Default size of a flat image region, in bytes.
const DEFAULT_RAM_SIZE: usize = 64 * 1024;

/// Bytes reserved after the last ELF segment.
const ELF_SLACK: usize = 16 * 1024;

/// Exit status after a fatal fault.
const FAULT_EXIT_CODE: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "fpe",
    author,
    version,
    about = "ARM FPA floating-point emulator",
    long_about = "Emulate FPA coprocessor instructions the way an undefined-instruction trap handler would.\n\nExamples:\n  fpe run --image prog.bin --base 0x8000 --freg f0=2.5\n  fpe run --elf prog.elf --trace --stats\n  fpe disasm ee100189 ed931104"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take one trap entry and print the resulting state.
    Run(RunArgs),

    /// Disassemble words from an image or from the command line.
    Disasm {
        /// Flat image to list.
        #[arg(long)]
        image: Option<PathBuf>,

        /// Load address of the image.
        #[arg(long, default_value = "0", value_parser = parse_u32)]
        base: u32,

        /// Hexadecimal words to list when no image is given.
        words: Vec<String>,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Flat binary image.
    #[arg(long, conflicts_with = "elf")]
    image: Option<PathBuf>,

    /// 32-bit ELF executable; the entry point becomes the default trap address.
    #[arg(long)]
    elf: Option<PathBuf>,

    /// Load address of a flat image.
    #[arg(long, default_value = "0", value_parser = parse_u32)]
    base: u32,

    /// Size of the flat image region in bytes.
    #[arg(long, default_value_t = DEFAULT_RAM_SIZE)]
    size: usize,

    /// Address of the trapping instruction (defaults to the base or ELF entry).
    #[arg(long, value_parser = parse_u32)]
    pc: Option<u32>,

    /// Integer register seed, e.g. `r12=0x8000`. Repeatable.
    #[arg(long = "reg", value_parser = parse_reg)]
    regs: Vec<(usize, u32)>,

    /// Floating register seed, e.g. `f0=2.5` or `f0=0x4004000000000000`. Repeatable.
    #[arg(long = "freg", value_parser = parse_freg)]
    fregs: Vec<(usize, u64)>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Trace every emulated instruction.
    #[arg(long)]
    trace: bool,

    /// Stop at a fault instead of exiting with an error.
    #[arg(long)]
    stop: bool,

    /// Print emulation statistics.
    #[arg(long)]
    stats: bool,

    /// Print the final state as JSON.
    #[arg(long)]
    json: bool,
}

/// Reports a fatal fault and exits with [`FAULT_EXIT_CODE`].
#[derive(Debug)]
struct ExitOnFault;

impl AbortHandler for ExitOnFault {
    fn abort(&self, fault: &Fault) -> ! {
        eprintln!("\n[!] FATAL: {fault}");
        process::exit(FAULT_EXIT_CODE);
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => cmd_run(&args),
        Commands::Disasm { image, base, words } => cmd_disasm(image, base, &words),
    }
}

fn init_tracing(trace: bool) {
    let default = if trace { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    process::exit(1);
}

fn load_config(args: &RunArgs) -> EmulatorConfig {
    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .unwrap_or_else(|e| fail(format!("could not read '{}': {e}", path.display())));
            EmulatorConfig::from_json(&json).unwrap_or_else(|e| fail(e))
        }
        None => EmulatorConfig::default(),
    };
    if args.trace {
        config = config.with_trace(true);
    }
    if args.stop {
        config = config.with_fault_policy(FaultPolicy::Stop);
    }
    config
}

fn load_memory(args: &RunArgs) -> (Ram, u32) {
    match (&args.image, &args.elf) {
        (Some(path), _) => {
            let ram = loader::load_flat(path, args.base, args.size).unwrap_or_else(|e| fail(e));
            (ram, args.base)
        }
        (None, Some(path)) => {
            let image = loader::load_elf(path, ELF_SLACK).unwrap_or_else(|e| fail(e));
            (image.ram, image.entry)
        }
        (None, None) => {
            eprintln!("Error: specify --image <binary> or --elf <executable>");
            eprintln!("  fpe run --image prog.bin --base 0x8000");
            process::exit(1);
        }
    }
}

fn cmd_run(args: &RunArgs) {
    let config = load_config(args);
    init_tracing(config.trace);

    let (mut ram, entry) = load_memory(args);
    let pc = args.pc.unwrap_or(entry);

    let mut regs = SavedRegisters::new();
    for &(idx, val) in &args.regs {
        regs.write(idx, val);
    }

    let mut emu = Emulator::new(config);
    for &(idx, bits) in &args.fregs {
        emu.fpr_mut().write(idx, bits);
    }

    let resume = emu.emulate_trap_with(&mut ram, &mut regs, pc, &ExitOnFault);
    let consumed = resume.wrapping_sub(pc) / 4;

    if args.json {
        let fregs: Vec<String> = (0..8)
            .map(|i| format!("{:#018x}", emu.fpr().read(i)))
            .collect();
        let state = serde_json::json!({
            "pc": pc,
            "resume": resume,
            "words": consumed,
            "regs": regs.as_array(),
            "fregs": fregs,
        });
        println!("{state:#}");
    } else {
        println!("trap at {pc:#010x}, resume at {resume:#010x} ({consumed} words)");
        if resume == pc {
            println!("no progress: the host would deliver the original trap");
        } else if let Ok(next) = ram.read_u32(resume) {
            println!("next: {}", disasm::listing(resume, next));
        }
        println!("\n{regs}");
        println!("{}", emu.fpr());
    }

    if args.stats {
        println!("{}", emu.stats());
    }
}

fn cmd_disasm(image: Option<PathBuf>, base: u32, words: &[String]) {
    let words: Vec<u32> = match image {
        Some(path) => {
            let bytes = loader::load_binary(&path).unwrap_or_else(|e| fail(e));
            bytes
                .chunks_exact(4)
                .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect()
        }
        None => words
            .iter()
            .map(|w| {
                u32::from_str_radix(w.trim_start_matches("0x"), 16)
                    .unwrap_or_else(|e| fail(format!("bad word '{w}': {e}")))
            })
            .collect(),
    };

    let mut pc = base;
    for word in words {
        println!("{}", disasm::listing(pc, word));
        pc = pc.wrapping_add(4);
    }
}

/// Parses a decimal or `0x`-prefixed hexadecimal address.
fn parse_u32(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid number '{s}': {e}"))
}

/// Parses `rN=VALUE`.
fn parse_reg(s: &str) -> Result<(usize, u32), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected rN=VALUE, got '{s}'"))?;
    let idx: usize = name
        .strip_prefix('r')
        .and_then(|n| n.parse().ok())
        .filter(|&n| n < 16)
        .ok_or_else(|| format!("invalid integer register '{name}'"))?;
    Ok((idx, parse_u32(value)?))
}

/// Parses `fN=FLOAT` or `fN=0xBITS`.
fn parse_freg(s: &str) -> Result<(usize, u64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected fN=VALUE, got '{s}'"))?;
    let idx: usize = name
        .strip_prefix('f')
        .and_then(|n| n.parse().ok())
        .filter(|&n| n < 8)
        .ok_or_else(|| format!("invalid floating register '{name}'"))?;
    let bits = match value.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16).map_err(|e| e.to_string())?,
        None => value
            .parse::<f64>()
            .map_err(|e| format!("invalid float '{value}': {e}"))?
            .to_bits(),
    };
    Ok((idx, bits))
}
