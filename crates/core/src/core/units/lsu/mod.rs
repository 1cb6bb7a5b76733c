//! Load/Store Unit (LSU).
//!
//! This module executes FPA data transfers (`ldf`/`stf`). Only the addressing mode a
//! compiler emits is modeled: coprocessor 1, pre-indexed, no write-back, single or
//! double length, and a base register below r14. Anything else is fatal, since
//! executing it under a guessed meaning would silently corrupt state.
//!
//! Single-precision values are widened to double patterns on load and narrowed on
//! store by the [`convert`](crate::core::units::convert) routines; double-precision
//! values move as two raw words.

use crate::common::constants::MAX_BASE_REGISTER;
use crate::common::{Fault, SavedRegisters};
use crate::core::arch::FloatRegisterFile;
use crate::core::units::convert::{double_to_single, single_to_double};
use crate::isa::decode::{Precision, Transfer};
use crate::isa::disasm;
use crate::isa::opcodes::COPROC_FPA;
use crate::soc::Bus;

/// Load/Store Unit for floating data transfers.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Checks a decoded transfer against the modeled addressing subset.
    ///
    /// # Arguments
    ///
    /// * `pc` - Address of the instruction, for the diagnostic.
    /// * `t`  - The decoded transfer.
    pub fn validate(pc: u32, t: &Transfer) -> Result<(), Fault> {
        let reason = if t.coproc != COPROC_FPA {
            "coprocessor"
        } else if !t.pre_index {
            "post-indexed"
        } else if t.write_back {
            "write-back"
        } else if !t.length.is_modeled() {
            "transfer length"
        } else if t.base > MAX_BASE_REGISTER {
            "base register"
        } else {
            return Ok(());
        };
        Err(Fault::MalformedTransfer {
            pc,
            reason,
            listing: disasm::listing(pc, t.raw),
        })
    }

    /// Performs a data transfer between memory and the register file.
    ///
    /// # Arguments
    ///
    /// * `pc`   - Address of the instruction, for diagnostics.
    /// * `t`    - The decoded transfer.
    /// * `regs` - Saved general registers supplying the base address.
    /// * `fpr`  - The floating register file.
    /// * `bus`  - Memory of the trapping thread.
    ///
    /// # Returns
    ///
    /// The effective address on success. Validation happens before any access, and a
    /// failed load leaves the register file unchanged.
    pub fn execute(
        pc: u32,
        t: &Transfer,
        regs: &SavedRegisters,
        fpr: &mut FloatRegisterFile,
        bus: &mut dyn Bus,
    ) -> Result<u32, Fault> {
        Self::validate(pc, t)?;
        let addr = t.effective_address(regs.read(t.base));

        match (t.load, t.length) {
            (true, Precision::Double) => {
                let bits = bus.read_u64(addr).map_err(Fault::bus(pc))?;
                fpr.write(t.fd, bits);
            }
            (true, _) => {
                let bits = bus.read_u32(addr).map_err(Fault::bus(pc))?;
                fpr.write(t.fd, single_to_double(bits));
            }
            (false, Precision::Double) => {
                bus.write_u64(addr, fpr.read(t.fd))
                    .map_err(Fault::bus(pc))?;
            }
            (false, _) => {
                bus.write_u32(addr, double_to_single(fpr.read(t.fd)))
                    .map_err(Fault::bus(pc))?;
            }
        }
        Ok(addr)
    }
}
