//! Unified error types for the management core.
//!
//! Control operations fail with [`Error`]; frame decoding fails with
//! [`DecodeError`].  All variants are `Copy` so they can be returned from
//! the control facade and wrapped by the provisioning layer without
//! allocation.

use core::fmt;

use crate::mgmt::opcode::CommandCode;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The transport (or the kernel behind it) refused the command.
    Rejected(CommandCode),
    /// Advertising data could not be packed into its fixed buffer.
    Advertising(AdError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(code) => write!(f, "command {code} rejected"),
            Self::Advertising(e) => write!(f, "advertising: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Advertising builder errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdError {
    /// Appending the entry would run past the end of the buffer.
    Overflow { needed: usize, available: usize },
    /// The entry payload cannot be described by a one-byte length field.
    EntryTooLong(usize),
}

impl fmt::Display for AdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { needed, available } => {
                write!(f, "entry needs {needed} bytes, {available} left")
            }
            Self::EntryTooLong(len) => write!(f, "entry payload of {len} bytes too long"),
        }
    }
}

impl std::error::Error for AdError {}

impl From<AdError> for Error {
    fn from(e: AdError) -> Self {
        Self::Advertising(e)
    }
}

// ---------------------------------------------------------------------------
// Decode errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer bytes than the fixed layout requires.
    Truncated { needed: usize, got: usize },
    /// Header length field disagrees with the bytes that follow it.
    LengthMismatch { declared: usize, actual: usize },
    /// Frame carries a command the payload type is never sent with.
    UnexpectedCode(CommandCode),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { needed, got } => write!(f, "need {needed} bytes, got {got}"),
            Self::LengthMismatch { declared, actual } => {
                write!(f, "header declares {declared} payload bytes, {actual} present")
            }
            Self::UnexpectedCode(code) => write!(f, "unexpected command {code}"),
        }
    }
}

impl std::error::Error for DecodeError {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
