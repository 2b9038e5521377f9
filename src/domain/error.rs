//! Tagged error kinds surfaced by the inspection core

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the core
pub type Result<T, E = InspectError> = std::result::Result<T, E>;

/// Why an operator-supplied string is not an address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFault {
    MissingPrefix,
    WrongLength,
    NonHex,
    BadChecksum,
}

impl fmt::Display for AddressFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AddressFault::MissingPrefix => "missing 0x prefix",
            AddressFault::WrongLength => "expected 40 hex digits",
            AddressFault::NonHex => "non-hex characters",
            AddressFault::BadChecksum => "checksum mismatch",
        };
        f.write_str(text)
    }
}

/// Discriminant of [`InspectError`], used by the presentation boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidAddress,
    Wallet,
    Network,
}

impl ErrorKind {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::InvalidAddress => "invalid address",
            ErrorKind::Wallet => "wallet error",
            ErrorKind::Network => "network error",
        }
    }
}

#[derive(Error, Debug)]
pub enum InspectError {
    /// Detected locally, before any I/O.
    #[error("Invalid address {input:?}: {fault}")]
    InvalidAddress { input: String, fault: AddressFault },

    #[error("Wallet error: {message}")]
    Wallet { message: String },

    #[error("Network error: {message}")]
    Network { message: String },
}

impl InspectError {
    pub fn invalid_address(input: impl Into<String>, fault: AddressFault) -> Self {
        Self::InvalidAddress {
            input: input.into(),
            fault,
        }
    }

    pub fn wallet(message: impl Into<String>) -> Self {
        Self::Wallet {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            InspectError::InvalidAddress { .. } => ErrorKind::InvalidAddress,
            InspectError::Wallet { .. } => ErrorKind::Wallet,
            InspectError::Network { .. } => ErrorKind::Network,
        }
    }

    /// Message without the kind prefix
    pub fn detail(&self) -> String {
        match self {
            InspectError::InvalidAddress { input, fault } => format!("{:?} ({})", input, fault),
            InspectError::Wallet { message } | InspectError::Network { message } => message.clone(),
        }
    }
}

impl From<alloy::transports::TransportError> for InspectError {
    fn from(err: alloy::transports::TransportError) -> Self {
        InspectError::network(err.to_string())
    }
}

impl From<alloy_sol_types::Error> for InspectError {
    fn from(err: alloy_sol_types::Error) -> Self {
        InspectError::network(format!("malformed contract response: {}", err))
    }
}
