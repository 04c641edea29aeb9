//! Management command frame codec.
//!
//! Wire format:
//! ```text
//! ┌───────────┬──────────────────┬──────────────────┬─────────────────────┐
//! │ Code (2B) │ Controller (2B)  │ Length (2B)      │ Payload (Length B)  │
//! │ LE u16    │ LE u16           │ LE u16           │ fixed per command   │
//! └───────────┴──────────────────┴──────────────────┴─────────────────────┘
//! ```
//!
//! The kernel parses these bytes positionally, so every field is written at
//! a fixed offset.  Nothing here depends on the in-memory layout of Rust
//! structs.

use crate::error::DecodeError;

use super::opcode::CommandCode;

/// Header size: code, controller index and payload length.
pub const HEADER_SIZE: usize = 6;

// ───────────────────────────────────────────────────────────────
// Header
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandHeader {
    pub code: CommandCode,
    pub controller_index: u16,
    /// Byte size of the payload that follows, never including the header.
    pub payload_len: u16,
}

impl CommandHeader {
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..2].copy_from_slice(&self.code.to_le_bytes());
        out[2..4].copy_from_slice(&self.controller_index.to_le_bytes());
        out[4..6].copy_from_slice(&self.payload_len.to_le_bytes());
        out
    }

    /// Decode the header from the first [`HEADER_SIZE`] bytes of `bytes`.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() < HEADER_SIZE {
            return Err(DecodeError::Truncated {
                needed: HEADER_SIZE,
                got: bytes.len(),
            });
        }

        Ok(Self {
            code: CommandCode(u16::from_le_bytes([bytes[0], bytes[1]])),
            controller_index: u16::from_le_bytes([bytes[2], bytes[3]]),
            payload_len: u16::from_le_bytes([bytes[4], bytes[5]]),
        })
    }
}

// ───────────────────────────────────────────────────────────────
// Payload contract
// ───────────────────────────────────────────────────────────────

/// A fixed-size command payload.
pub trait Payload: Sized {
    /// Exact encoded size in bytes.
    const SIZE: usize;

    /// Write the payload into `out`, which is exactly [`Self::SIZE`] bytes.
    fn encode_into(&self, out: &mut [u8]);

    /// Decode from exactly [`Self::SIZE`] bytes.
    fn decode(bytes: &[u8]) -> Result<Self, DecodeError>;

    /// Whether this payload shape may be sent under `code`.
    fn accepts(code: CommandCode) -> bool {
        let _ = code;
        true
    }
}

/// Reject `bytes` unless it is exactly `size` long.
pub(crate) fn expect_len(bytes: &[u8], size: usize) -> Result<(), DecodeError> {
    if bytes.len() < size {
        return Err(DecodeError::Truncated {
            needed: size,
            got: bytes.len(),
        });
    }
    if bytes.len() > size {
        return Err(DecodeError::LengthMismatch {
            declared: size,
            actual: bytes.len(),
        });
    }
    Ok(())
}

// ───────────────────────────────────────────────────────────────
// Frame
// ───────────────────────────────────────────────────────────────

/// A header composed with one payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFrame<P> {
    pub header: CommandHeader,
    pub payload: P,
}

impl<P: Payload> CommandFrame<P> {
    pub fn new(code: CommandCode, controller_index: u16, payload: P) -> Self {
        Self {
            header: CommandHeader {
                code,
                controller_index,
                payload_len: P::SIZE as u16,
            },
            payload,
        }
    }

    pub const fn encoded_len(&self) -> usize {
        HEADER_SIZE + P::SIZE
    }

    /// Encode header and payload into one contiguous buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; HEADER_SIZE + P::SIZE];
        out[..HEADER_SIZE].copy_from_slice(&self.header.encode());
        self.payload.encode_into(&mut out[HEADER_SIZE..]);
        out
    }

    /// Decode a complete frame previously produced by [`Self::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let (header, body) = decode_frame(bytes)?;
        if !P::accepts(header.code) {
            return Err(DecodeError::UnexpectedCode(header.code));
        }
        let payload = P::decode(body)?;
        Ok(Self { header, payload })
    }
}

/// Split `bytes` into its header and the payload slice it declares.
///
/// The declared length must match the remaining bytes exactly; trailing
/// garbage is an error, not ignored.
pub fn decode_frame(bytes: &[u8]) -> Result<(CommandHeader, &[u8]), DecodeError> {
    let header = CommandHeader::decode(bytes)?;
    let body = &bytes[HEADER_SIZE..];
    let declared = header.payload_len as usize;

    if body.len() != declared {
        return Err(DecodeError::LengthMismatch {
            declared,
            actual: body.len(),
        });
    }

    Ok((header, body))
}
