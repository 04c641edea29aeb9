//! Per-command payload layouts.
//!
//! | Payload                   | Size | Sent under                         |
//! |---------------------------|------|------------------------------------|
//! | [`SetNamePayload`]        | 260  | Set Local Name                     |
//! | [`SetStatePayload`]       | 1    | Set Powered, Set LE, Set BR/EDR... |
//! | [`AddAdvertisingPayload`] | 59   | Add Advertising                    |

use crate::error::DecodeError;

use super::codec::{Payload, expect_len};
use super::opcode::CommandCode;

/// Name field size, including the terminating null.
pub const NAME_FIELD_SIZE: usize = 249;
/// Short name field size, including the terminating null.
pub const SHORT_NAME_FIELD_SIZE: usize = 11;
/// Advertising data buffer size.
pub const ADV_DATA_SIZE: usize = 31;
/// Scan response buffer size.
pub const SCAN_RSP_SIZE: usize = 17;

// ───────────────────────────────────────────────────────────────
// Set Local Name
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetNamePayload {
    pub name: [u8; NAME_FIELD_SIZE],
    pub short_name: [u8; SHORT_NAME_FIELD_SIZE],
}

impl SetNamePayload {
    /// Copy both strings into zeroed fields.
    ///
    /// Copying stops at the first embedded null, and anything that would
    /// overwrite the final null byte is cut; callers normally pass names
    /// already shortened by [`crate::name`].
    pub fn new(name: &str, short_name: &str) -> Self {
        let mut payload = Self {
            name: [0; NAME_FIELD_SIZE],
            short_name: [0; SHORT_NAME_FIELD_SIZE],
        };
        copy_c_string(&mut payload.name, name.as_bytes());
        copy_c_string(&mut payload.short_name, short_name.as_bytes());
        payload
    }

    /// Name bytes up to the first null.
    pub fn name_bytes(&self) -> &[u8] {
        until_nul(&self.name)
    }

    /// Short name bytes up to the first null.
    pub fn short_name_bytes(&self) -> &[u8] {
        until_nul(&self.short_name)
    }
}

fn copy_c_string(field: &mut [u8], src: &[u8]) {
    let src = until_nul(src);
    let n = src.len().min(field.len() - 1);
    field[..n].copy_from_slice(&src[..n]);
}

fn until_nul(field: &[u8]) -> &[u8] {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    &field[..end]
}

impl Payload for SetNamePayload {
    const SIZE: usize = NAME_FIELD_SIZE + SHORT_NAME_FIELD_SIZE;

    fn encode_into(&self, out: &mut [u8]) {
        out[..NAME_FIELD_SIZE].copy_from_slice(&self.name);
        out[NAME_FIELD_SIZE..Self::SIZE].copy_from_slice(&self.short_name);
    }

    fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        expect_len(bytes, Self::SIZE)?;
        let mut payload = Self {
            name: [0; NAME_FIELD_SIZE],
            short_name: [0; SHORT_NAME_FIELD_SIZE],
        };
        payload.name.copy_from_slice(&bytes[..NAME_FIELD_SIZE]);
        payload.short_name.copy_from_slice(&bytes[NAME_FIELD_SIZE..]);
        Ok(payload)
    }

    fn accepts(code: CommandCode) -> bool {
        code == CommandCode::SET_LOCAL_NAME
    }
}

// ───────────────────────────────────────────────────────────────
// Single-byte settings
// ───────────────────────────────────────────────────────────────

/// One state byte; its meaning depends on the command it is sent under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetStatePayload {
    pub state: u8,
}

impl Payload for SetStatePayload {
    const SIZE: usize = 1;

    fn encode_into(&self, out: &mut [u8]) {
        out[0] = self.state;
    }

    fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        expect_len(bytes, Self::SIZE)?;
        Ok(Self { state: bytes[0] })
    }

    fn accepts(code: CommandCode) -> bool {
        matches!(
            code,
            CommandCode::SET_POWERED
                | CommandCode::SET_CONNECTABLE
                | CommandCode::SET_BONDABLE
                | CommandCode::SET_LOW_ENERGY
                | CommandCode::SET_ADVERTISING
                | CommandCode::SET_BREDR
                | CommandCode::SET_SECURE_CONNECTIONS
        )
    }
}

// ───────────────────────────────────────────────────────────────
// Add Advertising
// ───────────────────────────────────────────────────────────────

/// Advertising instance registration.
///
/// `adv_data_len` and `scan_rsp_len` count the meaningful bytes at the
/// front of each buffer.  The remaining bytes are still transmitted and
/// must be zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAdvertisingPayload {
    pub instance: u8,
    /// Kernel advertising flags. Currently always sent as zero; non-zero
    /// values have not been verified against the kernel.
    pub flags: u32,
    pub duration: u16,
    pub timeout: u16,
    pub adv_data_len: u8,
    pub scan_rsp_len: u8,
    pub adv_data: [u8; ADV_DATA_SIZE],
    pub scan_rsp_data: [u8; SCAN_RSP_SIZE],
}

const ADV_DATA_OFFSET: usize = 11;
const SCAN_RSP_OFFSET: usize = ADV_DATA_OFFSET + ADV_DATA_SIZE;

impl Payload for AddAdvertisingPayload {
    const SIZE: usize = SCAN_RSP_OFFSET + SCAN_RSP_SIZE;

    fn encode_into(&self, out: &mut [u8]) {
        out[0] = self.instance;
        out[1..5].copy_from_slice(&self.flags.to_le_bytes());
        out[5..7].copy_from_slice(&self.duration.to_le_bytes());
        out[7..9].copy_from_slice(&self.timeout.to_le_bytes());
        out[9] = self.adv_data_len;
        out[10] = self.scan_rsp_len;
        out[ADV_DATA_OFFSET..SCAN_RSP_OFFSET].copy_from_slice(&self.adv_data);
        out[SCAN_RSP_OFFSET..Self::SIZE].copy_from_slice(&self.scan_rsp_data);
    }

    fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        expect_len(bytes, Self::SIZE)?;
        let mut adv_data = [0u8; ADV_DATA_SIZE];
        adv_data.copy_from_slice(&bytes[ADV_DATA_OFFSET..SCAN_RSP_OFFSET]);
        let mut scan_rsp_data = [0u8; SCAN_RSP_SIZE];
        scan_rsp_data.copy_from_slice(&bytes[SCAN_RSP_OFFSET..]);

        Ok(Self {
            instance: bytes[0],
            flags: u32::from_le_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]),
            duration: u16::from_le_bytes([bytes[5], bytes[6]]),
            timeout: u16::from_le_bytes([bytes[7], bytes[8]]),
            adv_data_len: bytes[9],
            scan_rsp_len: bytes[10],
            adv_data,
            scan_rsp_data,
        })
    }

    fn accepts(code: CommandCode) -> bool {
        code == CommandCode::ADD_ADVERTISING
    }
}
