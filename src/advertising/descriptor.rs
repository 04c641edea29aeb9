//! Advertising instance descriptions.

use serde::{Deserialize, Serialize};

use crate::error::AdError;
use crate::mgmt::payload::{ADV_DATA_SIZE, AddAdvertisingPayload};

use super::builder::{AdvertisingData, ScanResponseData};
use super::{FLAG_BR_EDR_NOT_SUPPORTED, FLAG_LE_GENERAL_DISCOVERABLE, ad_type};

/// Largest payload a single AD structure can carry in the advertising buffer.
pub const MAX_ENTRY_PAYLOAD: usize = ADV_DATA_SIZE - 2;

/// One AD structure, not yet placed in a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdStructure {
    pub ad_type: u8,
    pub data: heapless::Vec<u8, MAX_ENTRY_PAYLOAD>,
}

impl AdStructure {
    pub fn new(ad_type: u8, data: &[u8]) -> Result<Self, AdError> {
        let data = heapless::Vec::from_slice(data).map_err(|()| AdError::EntryTooLong(data.len()))?;
        Ok(Self { ad_type, data })
    }

    /// Flags entry with the given bits.
    pub fn flags(bits: u8) -> Self {
        let mut data = heapless::Vec::new();
        // Capacity is far above one byte.
        let _ = data.push(bits);
        Self {
            ad_type: ad_type::FLAGS,
            data,
        }
    }

    /// LE-only, generally discoverable.
    pub fn le_general_discoverable() -> Self {
        Self::flags(FLAG_BR_EDR_NOT_SUPPORTED | FLAG_LE_GENERAL_DISCOVERABLE)
    }

    pub fn complete_local_name(name: &str) -> Result<Self, AdError> {
        Self::new(ad_type::COMPLETE_LOCAL_NAME, name.as_bytes())
    }

    pub fn shortened_local_name(name: &str) -> Result<Self, AdError> {
        Self::new(ad_type::SHORTENED_LOCAL_NAME, name.as_bytes())
    }

    /// Manufacturer-specific data: little-endian company id followed by `data`.
    pub fn manufacturer_data(company_id: u16, data: &[u8]) -> Result<Self, AdError> {
        let mut entry = Self::new(ad_type::MANUFACTURER_SPECIFIC_DATA, &company_id.to_le_bytes())?;
        entry
            .data
            .extend_from_slice(data)
            .map_err(|()| AdError::EntryTooLong(data.len() + 2))?;
        Ok(entry)
    }

    /// Bytes this entry occupies once framed.
    pub fn encoded_len(&self) -> usize {
        self.data.len() + 2
    }
}

impl From<&ManufacturerStatus> for AdStructure {
    fn from(status: &ManufacturerStatus) -> Self {
        let bytes = status.to_bytes();
        let mut data = heapless::Vec::new();
        // 16 bytes always fit in MAX_ENTRY_PAYLOAD.
        let _ = data.extend_from_slice(&bytes);
        Self {
            ad_type: ad_type::MANUFACTURER_SPECIFIC_DATA,
            data,
        }
    }
}

/// Vendor status record broadcast in manufacturer-specific data.
///
/// ```text
/// ┌────────────┬───────┬──────┬────────┬─────────┬─────────────┐
/// │ Company 2B │ Model │ PCBA │ Status │ Battery │ Serial 10B  │
/// └────────────┴───────┴──────┴────────┴─────────┴─────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerStatus {
    pub company_id: u16,
    pub model: u8,
    pub pcba_version: u8,
    pub error_status: u8,
    pub battery_percent: u8,
    pub serial: [u8; 10],
}

impl ManufacturerStatus {
    pub const ENCODED_LEN: usize = 16;

    pub fn to_bytes(&self) -> [u8; Self::ENCODED_LEN] {
        let mut out = [0u8; Self::ENCODED_LEN];
        out[0..2].copy_from_slice(&self.company_id.to_le_bytes());
        out[2] = self.model;
        out[3] = self.pcba_version;
        out[4] = self.error_status;
        out[5] = self.battery_percent;
        out[6..].copy_from_slice(&self.serial);
        out
    }
}

/// A complete advertising instance: timing plus both AD streams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertisingDescriptor {
    /// Instance id, 1-based.
    pub instance: u8,
    #[serde(default)]
    pub flags: u32,
    /// Seconds per rotation slot; 0 lets the kernel pick.
    #[serde(default)]
    pub duration: u16,
    /// Seconds until the instance is removed; 0 means never.
    #[serde(default)]
    pub timeout: u16,
    #[serde(default)]
    pub adv_data: Vec<AdStructure>,
    #[serde(default)]
    pub scan_rsp: Vec<AdStructure>,
}

impl Default for AdvertisingDescriptor {
    fn default() -> Self {
        Self::new(1)
    }
}

impl AdvertisingDescriptor {
    pub fn new(instance: u8) -> Self {
        Self {
            instance,
            flags: 0,
            duration: 0,
            timeout: 0,
            adv_data: Vec::new(),
            scan_rsp: Vec::new(),
        }
    }

    pub fn with_adv(mut self, entry: AdStructure) -> Self {
        self.adv_data.push(entry);
        self
    }

    pub fn with_scan_rsp(mut self, entry: AdStructure) -> Self {
        self.scan_rsp.push(entry);
        self
    }

    /// Pack both streams and build the Add Advertising payload.
    pub fn encode(&self) -> Result<AddAdvertisingPayload, AdError> {
        let mut adv = AdvertisingData::new();
        for entry in &self.adv_data {
            adv.append_entry(entry.ad_type, &entry.data)?;
        }

        let mut scan_rsp = ScanResponseData::new();
        for entry in &self.scan_rsp {
            scan_rsp.append_entry(entry.ad_type, &entry.data)?;
        }

        Ok(AddAdvertisingPayload {
            instance: self.instance,
            flags: self.flags,
            duration: self.duration,
            timeout: self.timeout,
            adv_data_len: adv.len() as u8,
            scan_rsp_len: scan_rsp.len() as u8,
            adv_data: adv.to_padded(),
            scan_rsp_data: scan_rsp.to_padded(),
        })
    }
}
