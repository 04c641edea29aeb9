//! Bounded AD structure buffers.

use crate::error::AdError;
use crate::mgmt::payload::{ADV_DATA_SIZE, SCAN_RSP_SIZE};

/// Advertising data buffer (31 bytes).
pub type AdvertisingData = AdBuffer<ADV_DATA_SIZE>;
/// Scan response buffer (17 bytes).
pub type ScanResponseData = AdBuffer<SCAN_RSP_SIZE>;

/// An AD structure stream that can never grow past `N` bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdBuffer<const N: usize> {
    bytes: heapless::Vec<u8, N>,
}

impl<const N: usize> AdBuffer<N> {
    pub const fn new() -> Self {
        Self {
            bytes: heapless::Vec::new(),
        }
    }

    /// Append one `{length, type, payload}` entry at the running offset.
    ///
    /// Returns the new offset.  An entry that does not fit is rejected
    /// before anything is written, leaving the buffer unchanged.
    pub fn append_entry(&mut self, ad_type: u8, payload: &[u8]) -> Result<usize, AdError> {
        // The length byte covers the type byte plus the payload.
        if payload.len() >= u8::MAX as usize {
            return Err(AdError::EntryTooLong(payload.len()));
        }

        let needed = payload.len() + 2;
        let available = self.remaining();
        let overflow = AdError::Overflow { needed, available };
        if needed > available {
            return Err(overflow);
        }

        self.bytes
            .push((payload.len() + 1) as u8)
            .and_then(|()| self.bytes.push(ad_type))
            .map_err(|_| overflow)?;
        self.bytes.extend_from_slice(payload).map_err(|()| overflow)?;

        Ok(self.bytes.len())
    }

    /// Meaningful bytes written so far.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn remaining(&self) -> usize {
        N - self.bytes.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The full fixed-size buffer, zero after [`Self::len`].
    pub fn to_padded(&self) -> [u8; N] {
        let mut out = [0u8; N];
        out[..self.bytes.len()].copy_from_slice(&self.bytes);
        out
    }

    pub fn entries(&self) -> AdEntries<'_> {
        AdEntries::new(&self.bytes)
    }
}

/// Iterator over `(type, payload)` pairs of an AD structure stream.
///
/// Stops at the first zero length byte (padding) or at an entry that runs
/// past the end of the data.
pub struct AdEntries<'a> {
    data: &'a [u8],
}

impl<'a> AdEntries<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }
}

impl<'a> Iterator for AdEntries<'a> {
    type Item = (u8, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let (&len, rest) = self.data.split_first()?;
        let len = len as usize;
        if len == 0 || len > rest.len() {
            self.data = &[];
            return None;
        }

        let (entry, tail) = rest.split_at(len);
        self.data = tail;
        Some((entry[0], &entry[1..]))
    }
}
