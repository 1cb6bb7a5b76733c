//! Emulation statistics.
//!
//! This module counts what an emulation session has done. It provides:
//! 1. **Entry counts:** Trap entries and how many of them made progress.
//! 2. **Instruction mix:** Moves, multiplies, compares, loads, stores, and idioms.
//! 3. **Reporting:** A fixed-width text summary.

use std::fmt;

/// Category of an emulated operation, as counted by [`EmulationStats`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpKind {
    /// `mvf`.
    Move,
    /// `muf`.
    Multiply,
    /// `cmf`.
    Compare,
    /// `ldf` outside the idiom.
    Load,
    /// `stf` outside the idiom.
    Store,
    /// Constant-load idiom (three words).
    ConstantLoad,
}

/// Counters for one emulation session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmulationStats {
    /// Calls to the trap entry point.
    pub entries: u64,
    /// Entries that emulated nothing (the trap was not a floating instruction).
    pub entries_without_progress: u64,
    /// Instruction words consumed across all entries.
    pub words_consumed: u64,
    /// `mvf` instructions.
    pub moves: u64,
    /// `muf` instructions.
    pub multiplies: u64,
    /// `cmf` instructions.
    pub compares: u64,
    /// `ldf` instructions.
    pub loads: u64,
    /// `stf` instructions.
    pub stores: u64,
    /// Constant-load idioms.
    pub constant_loads: u64,
    /// Fatal faults raised.
    pub faults: u64,
}

impl EmulationStats {
    /// Counts one emulated operation.
    pub fn record(&mut self, kind: OpKind) {
        let counter = match kind {
            OpKind::Move => &mut self.moves,
            OpKind::Multiply => &mut self.multiplies,
            OpKind::Compare => &mut self.compares,
            OpKind::Load => &mut self.loads,
            OpKind::Store => &mut self.stores,
            OpKind::ConstantLoad => &mut self.constant_loads,
        };
        *counter += 1;
    }

    /// Total operations emulated, counting an idiom once.
    pub fn operations(&self) -> u64 {
        self.moves + self.multiplies + self.compares + self.loads + self.stores + self.constant_loads
    }
}

impl fmt::Display for EmulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "FPA EMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "entries                  {}", self.entries)?;
        writeln!(f, "entries.no_progress      {}", self.entries_without_progress)?;
        writeln!(f, "words_consumed           {}", self.words_consumed)?;
        writeln!(f, "operations               {}", self.operations())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "  op.mvf                 {}", self.moves)?;
        writeln!(f, "  op.muf                 {}", self.multiplies)?;
        writeln!(f, "  op.cmf                 {}", self.compares)?;
        writeln!(f, "  op.ldf                 {}", self.loads)?;
        writeln!(f, "  op.stf                 {}", self.stores)?;
        writeln!(f, "  op.fpconst             {}", self.constant_loads)?;
        writeln!(f, "  faults                 {}", self.faults)
    }
}
