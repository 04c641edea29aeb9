//! Adapter configuration
//!
//! The desired state of one controller: which radios are on, how it names
//! itself and what it advertises.  Loaded from JSON, or from a compact
//! postcard blob when persisted.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::advertising::{AdStructure, AdvertisingDescriptor};
use crate::mgmt::payload::SCAN_RSP_SIZE;
use crate::name::{MAX_NAME_LENGTH, MAX_SHORT_NAME_LENGTH};

/// Controller index the kernel uses for "no controller".
pub const NON_CONTROLLER_INDEX: u16 = 0xFFFF;

/// Desired adapter state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// `hciN` index of the controller to configure.
    pub controller_index: u16,
    pub name: String,
    pub short_name: String,

    // --- Radios ---
    pub powered: bool,
    pub le: bool,
    pub bredr: bool,

    // --- Pairing / connections ---
    pub bondable: bool,
    pub connectable: bool,
    /// 0 = off, 1 = on, 2 = Secure Connections Only.
    pub secure_connections: u8,

    // --- Advertising ---
    /// 0 = off, 1 = on, 2 = on and connectable.
    pub advertising: u8,
    /// Optional custom advertising instance registered during bring-up.
    pub advertisement: Option<AdvertisingDescriptor>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            controller_index: 0,
            name: String::from("btmgmt"),
            short_name: String::from("btmgmt"),

            // LE-only peripheral
            powered: true,
            le: true,
            bredr: false,

            bondable: true,
            connectable: true,
            secure_connections: 1,

            advertising: 1,
            advertisement: None,
        }
    }
}

impl AdapterConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|_| ConfigError::Malformed)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|_| ConfigError::Malformed)
    }

    /// Decode a persisted postcard blob.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Malformed)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(|_| ConfigError::Malformed)
    }

    /// Reject values the kernel would refuse or silently mangle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.controller_index == NON_CONTROLLER_INDEX {
            return Err(ConfigError::ValidationFailed("controller_index is the non-controller index"));
        }
        if self.name.is_empty() {
            return Err(ConfigError::ValidationFailed("name is empty"));
        }
        if self.name.len() > MAX_NAME_LENGTH {
            return Err(ConfigError::ValidationFailed("name longer than 248 bytes"));
        }
        if self.short_name.len() > MAX_SHORT_NAME_LENGTH {
            return Err(ConfigError::ValidationFailed("short_name longer than 10 bytes"));
        }
        if self.secure_connections > 2 {
            return Err(ConfigError::ValidationFailed("secure_connections must be 0, 1 or 2"));
        }
        if self.advertising > 2 {
            return Err(ConfigError::ValidationFailed("advertising must be 0, 1 or 2"));
        }
        if !self.le && (self.advertising > 0 || self.advertisement.is_some()) {
            return Err(ConfigError::ValidationFailed("advertising requires le"));
        }
        if let Some(ad) = &self.advertisement {
            if ad.instance == 0 {
                return Err(ConfigError::ValidationFailed("advertisement instance must be >= 1"));
            }
            if ad.encode().is_err() {
                return Err(ConfigError::ValidationFailed("advertisement does not fit its buffers"));
            }
        }
        Ok(())
    }

    /// Advertising instance carrying the flags entry and this adapter's
    /// complete name in the scan response, if the name fits.
    pub fn default_advertisement(&self) -> AdvertisingDescriptor {
        let mut ad = AdvertisingDescriptor::default().with_adv(AdStructure::le_general_discoverable());
        let name = AdStructure::complete_local_name(&self.name)
            .ok()
            .filter(|entry| entry.encoded_len() <= SCAN_RSP_SIZE);
        if let Some(entry) = name {
            ad = ad.with_scan_rsp(entry);
        }
        ad
    }
}

// ───────────────────────────────────────────────────────────────
// Errors
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Document could not be parsed or serialised.
    Malformed,
    /// A field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "config malformed"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
