use crate::serialize::hex_u_int;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A single AVR chip variant.
///
/// This describes the fixed memory geometry of one exact variant, e.g.
/// the `atmega88` as opposed to the `atmega168`. The two share a die
/// layout but differ in flash size, so each gets its own entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Chip {
    /// The name of the chip, e.g. `atmega88`.
    ///
    /// Names are unique and case-sensitive; this is the key used for
    /// registry lookups.
    pub name: String,
    /// Address of the last valid byte of RAM (the `RAMEND` value from
    /// the datasheet).
    #[serde(serialize_with = "hex_u_int")]
    pub ramend: u32,
    /// Address of the last valid byte of flash (the `FLASHEND` value
    /// from the datasheet).
    #[serde(serialize_with = "hex_u_int")]
    pub flashend: u32,
}

impl Chip {
    /// Returns the total flash size in bytes. Flash starts at address 0.
    pub fn flash_size(&self) -> u32 {
        self.flashend + 1
    }

    /// Returns the total RAM size in bytes.
    ///
    /// On the AVRs described here the data address space below RAMEND is
    /// registers and I/O, so this is an upper bound on usable SRAM.
    pub fn ram_size(&self) -> u32 {
        self.ramend + 1
    }

    /// Returns the address range covered by flash.
    pub fn flash_range(&self) -> Range<u32> {
        0..self.flashend + 1
    }

    /// Returns the address range covered by RAM.
    pub fn ram_range(&self) -> Range<u32> {
        0..self.ramend + 1
    }

    /// Computes the start address of a bootloader section of
    /// `size_bytes` bytes, anchored so that its last byte is `FLASHEND`.
    ///
    /// Returns `None` if `size_bytes` is zero or larger than the flash,
    /// since no such section fits.
    pub fn boot_start_address(&self, size_bytes: u32) -> Option<u32> {
        if size_bytes == 0 || size_bytes > self.flash_size() {
            return None;
        }
        Some(self.flash_size() - size_bytes)
    }
}
