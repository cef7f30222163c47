use crate::Chip;
use thiserror::Error;

/// Errors returned by registry lookups and calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The requested chip was not found in the registry.
    #[error("The chip '{0}' was not found in the registry.")]
    ChipNotFound(String),
    /// The requested bootloader section does not fit in flash.
    #[error(
        "A bootloader section of {size} bytes does not fit in {flash_size} bytes of flash."
    )]
    InvalidBootloaderSize {
        /// The requested section size in bytes.
        size: u32,
        /// The total flash size of the chip in bytes.
        flash_size: u32,
    },
}

/// The registry of known chips.
pub struct Registry {
    /// All the available chips.
    chips: Vec<Chip>,
}

impl Registry {
    /// Creates a registry populated with the builtin chip definitions.
    pub fn from_builtin_chips() -> Self {
        Self {
            chips: builtin_chips(),
        }
    }

    /// Returns all chips in the registry.
    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    /// Looks up a chip by its exact, case-sensitive name.
    pub fn get_chip(&self, name: &str) -> Result<&Chip, RegistryError> {
        log::debug!("Looking up chip {name} in the registry");
        self.chips
            .iter()
            .find(|chip| chip.name == name)
            .ok_or_else(|| RegistryError::ChipNotFound(name.to_string()))
    }

    /// Computes the start address of a bootloader section of
    /// `size_bytes` bytes on the chip named `chip_name`.
    ///
    /// The section spans from the returned address to the chip's
    /// `FLASHEND`, inclusive. Fails if the chip is unknown or the
    /// section does not fit in flash.
    pub fn boot_start_address(
        &self,
        chip_name: &str,
        size_bytes: u32,
    ) -> Result<u32, RegistryError> {
        let chip = self.get_chip(chip_name)?;
        chip.boot_start_address(size_bytes)
            .ok_or(RegistryError::InvalidBootloaderSize {
                size: size_bytes,
                flash_size: chip.flash_size(),
            })
    }
}

fn builtin_chips() -> Vec<Chip> {
    vec![
        Chip {
            name: "atmega88".to_string(),
            ramend: 0x4FF,
            flashend: 0x1FFF,
        },
        Chip {
            name: "atmega168".to_string(),
            ramend: 0x4FF,
            flashend: 0x3FFF,
        },
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builtin_atmega88() {
        let registry = Registry::from_builtin_chips();
        let chip = registry.get_chip("atmega88").unwrap();
        assert_eq!(chip.ramend, 0x4FF);
        assert_eq!(chip.flashend, 0x1FFF);
    }

    #[test]
    fn builtin_atmega168() {
        let registry = Registry::from_builtin_chips();
        let chip = registry.get_chip("atmega168").unwrap();
        assert_eq!(chip.ramend, 0x4FF);
        assert_eq!(chip.flashend, 0x3FFF);
    }

    #[test]
    fn unknown_chip() {
        let registry = Registry::from_builtin_chips();
        assert_eq!(
            registry.get_chip("attiny85"),
            Err(RegistryError::ChipNotFound("attiny85".to_string()))
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = Registry::from_builtin_chips();
        assert!(registry.get_chip("ATmega88").is_err());
    }

    #[test]
    fn one_byte_bootloader_starts_at_flashend() {
        let registry = Registry::from_builtin_chips();
        for chip in registry.chips() {
            assert_eq!(
                registry.boot_start_address(&chip.name, 1).unwrap(),
                chip.flashend
            );
        }
    }

    #[test]
    fn oversized_bootloader_is_rejected() {
        let registry = Registry::from_builtin_chips();
        assert_eq!(
            registry.boot_start_address("atmega88", 0x4000),
            Err(RegistryError::InvalidBootloaderSize {
                size: 0x4000,
                flash_size: 0x2000,
            })
        );
    }

    #[test]
    fn zero_size_bootloader_is_rejected() {
        let registry = Registry::from_builtin_chips();
        assert!(matches!(
            registry.boot_start_address("atmega168", 0),
            Err(RegistryError::InvalidBootloaderSize { .. })
        ));
    }
}
