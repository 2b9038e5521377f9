//! Address validation (EIP-55 aware)
//!
//! Purely syntactic: prefix, length, hex digits and, for mixed-case input,
//! the checksum. Nothing here touches the network.

use alloy_primitives::Address;

use super::error::{AddressFault, InspectError, Result};

#[derive(Debug, Clone, Copy)]
pub struct AddressValidator {
    strict_checksum: bool,
}

impl Default for AddressValidator {
    fn default() -> Self {
        Self {
            strict_checksum: true,
        }
    }
}

impl AddressValidator {
    pub fn new(strict_checksum: bool) -> Self {
        Self { strict_checksum }
    }

    pub fn strict_checksum(&self) -> bool {
        self.strict_checksum
    }

    /// Convert operator text into an address, or fail with `InvalidAddress`
    pub fn validate(&self, raw: &str) -> Result<Address> {
        let trimmed = raw.trim();
        let fail = |fault| InspectError::invalid_address(raw, fault);

        let payload = trimmed
            .strip_prefix("0x")
            .ok_or_else(|| fail(AddressFault::MissingPrefix))?;

        if !payload.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(fail(AddressFault::NonHex));
        }
        if payload.len() != 40 {
            return Err(fail(AddressFault::WrongLength));
        }

        let address: Address = trimmed
            .parse()
            .map_err(|_| fail(AddressFault::NonHex))?;

        if self.strict_checksum && is_mixed_case(payload) && to_checksum(&address) != trimmed {
            return Err(fail(AddressFault::BadChecksum));
        }

        Ok(address)
    }
}

/// Validate with checksum enforcement on
pub fn validate(raw: &str) -> Result<Address> {
    AddressValidator::default().validate(raw)
}

/// Canonical display form
pub fn to_checksum(address: &Address) -> String {
    address.to_checksum(None)
}

fn is_mixed_case(payload: &str) -> bool {
    let has_lower = payload.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = payload.chars().any(|c| c.is_ascii_uppercase());
    has_lower && has_upper
}
