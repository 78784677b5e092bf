//! Typed errors for address parsing and subnet planning.

use std::fmt;
use thiserror::Error;

/// Category of a [`VlsmError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed dotted-decimal address or out-of-range octet.
    InvalidAddress,
    /// Missing or malformed prefix suffix, or prefix outside 0..=32.
    InvalidCidr,
    /// Empty subnet name or non-positive host count.
    InvalidInput,
    /// A single request needs more addresses than the 32-bit space holds.
    SubnetTooLarge,
    /// Allocation ran past 255.255.255.255 with requests still pending.
    AddressSpaceExhausted,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidAddress => "invalid address",
            ErrorKind::InvalidCidr => "invalid CIDR",
            ErrorKind::InvalidInput => "invalid input",
            ErrorKind::SubnetTooLarge => "subnet too large",
            ErrorKind::AddressSpaceExhausted => "address space exhausted",
        };
        f.write_str(name)
    }
}

/// Error returned by the address codec and the planner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct VlsmError {
    kind: ErrorKind,
    message: String,
}

impl VlsmError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        VlsmError {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human readable detail, without the kind prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn invalid_address(text: &str) -> Self {
        Self::new(ErrorKind::InvalidAddress, format!("'{text}' is not a valid IPv4 address"))
    }

    pub(crate) fn invalid_cidr(text: &str, reason: &str) -> Self {
        Self::new(ErrorKind::InvalidCidr, format!("'{text}': {reason}"))
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    pub(crate) fn exhausted() -> Self {
        Self::new(
            ErrorKind::AddressSpaceExhausted,
            "Too many hosts for given network!",
        )
    }
}
