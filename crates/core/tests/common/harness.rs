use armfpe_core::config::{EmulatorConfig, FaultPolicy};
use armfpe_core::core::AbortHandler;
use armfpe_core::{Bus, Emulator, Fault, Ram, SavedRegisters};

/// Address programs are loaded at.
pub const PROGRAM_BASE: u32 = 0x8000;

/// Base of the data area (r12 in idiom tests).
pub const DATA_BASE: u32 = 0x9000;

/// Size of the RAM image.
pub const RAM_SIZE: usize = 0x2000;

/// Owns everything one trap entry needs.
pub struct TestContext {
    pub emu: Emulator,
    pub ram: Ram,
    pub regs: SavedRegisters,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(EmulatorConfig::default().with_fault_policy(FaultPolicy::Stop))
    }

    pub fn with_config(config: EmulatorConfig) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();

        Self {
            emu: Emulator::new(config),
            ram: Ram::new(PROGRAM_BASE, RAM_SIZE),
            regs: SavedRegisters::new(),
        }
    }

    /// Load a sequence of words at `PROGRAM_BASE`.
    pub fn load_program(mut self, words: &[u32]) -> Self {
        self.ram.load_words(PROGRAM_BASE, words).unwrap();
        self
    }

    /// Store one word of data.
    pub fn poke(&mut self, addr: u32, val: u32) {
        self.ram.write_u32(addr, val).unwrap();
    }

    pub fn peek(&mut self, addr: u32) -> u32 {
        self.ram.read_u32(addr).unwrap()
    }

    pub fn set_reg(&mut self, reg: usize, val: u32) {
        self.regs.write(reg, val);
    }

    pub fn get_reg(&self, reg: usize) -> u32 {
        self.regs.read(reg)
    }

    pub fn set_freg(&mut self, reg: usize, val: f64) {
        self.emu.fpr_mut().write(reg, val.to_bits());
    }

    pub fn get_freg(&self, reg: usize) -> f64 {
        f64::from_bits(self.emu.fpr().read(reg))
    }

    /// One dispatcher step at `pc`.
    pub fn step_at(&mut self, pc: u32) -> Result<u32, Fault> {
        self.emu.step(&mut self.ram, &mut self.regs, pc)
    }

    /// One trap entry at `PROGRAM_BASE`; returns the resume address.
    pub fn trap(&mut self) -> u32 {
        self.emu
            .emulate_trap_with(&mut self.ram, &mut self.regs, PROGRAM_BASE, &PanicOnFault)
    }
}

/// Abort handler that panics with the fault's message, for `catch_unwind` and
/// `#[should_panic]` tests.
#[derive(Debug)]
pub struct PanicOnFault;

impl AbortHandler for PanicOnFault {
    fn abort(&self, fault: &Fault) -> ! {
        panic!("emulation aborted: {fault}");
    }
}
