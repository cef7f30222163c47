//! Memory geometry descriptions for AVR chips
//!
//! Flashing a bootloader onto an AVR requires knowing where the top of
//! flash memory sits for the exact chip variant being programmed. This
//! crate holds a small registry of per-chip memory parameters, keyed by
//! the chip name, and computes where a bootloader section of a given
//! size must start so that its last byte lands on `FLASHEND`.
//!
//! The registry is fixed at compile time and never mutated, so it can be
//! shared freely between threads of a host program.
//!
#![warn(missing_docs)]

mod chip;
mod registry;
pub(crate) mod serialize;

pub use chip::Chip;
pub use registry::{Registry, RegistryError};

/// Computes the start address of a bootloader section of `size_bytes`
/// bytes on the chip named `chip_name`, using the builtin chip table.
///
/// The section is anchored at the top of flash: it spans from the
/// returned address to the chip's `FLASHEND`, inclusive.
pub fn boot_start_address(chip_name: &str, size_bytes: u32) -> Result<u32, RegistryError> {
    Registry::from_builtin_chips().boot_start_address(chip_name, size_bytes)
}
