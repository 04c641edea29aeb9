//! Advertising payload construction.
//!
//! Advertising and scan-response data are streams of AD structures:
//!
//! ```text
//! ┌────────────┬──────────┬───────────────────┐ ┌────────────┬─ ─ ─
//! │ Length (1) │ Type (1) │ Data (Length - 1) │ │ Length (1) │ ...
//! └────────────┴──────────┴───────────────────┘ └────────────┴─ ─ ─
//! ```
//!
//! The Add Advertising command carries a 31-byte advertising buffer and a
//! 17-byte scan-response buffer; [`builder::AdBuffer`] enforces both
//! ceilings and [`descriptor::AdvertisingDescriptor`] describes a complete
//! advertising instance.

pub mod builder;
pub mod descriptor;

pub use builder::{AdBuffer, AdEntries, AdvertisingData, ScanResponseData};
pub use descriptor::{AdStructure, AdvertisingDescriptor, ManufacturerStatus};

/// AD type codes (Bluetooth Assigned Numbers, Generic Access Profile).
pub mod ad_type {
    pub const FLAGS: u8 = 0x01;
    pub const INCOMPLETE_16BIT_UUIDS: u8 = 0x02;
    pub const COMPLETE_16BIT_UUIDS: u8 = 0x03;
    pub const SHORTENED_LOCAL_NAME: u8 = 0x08;
    pub const COMPLETE_LOCAL_NAME: u8 = 0x09;
    pub const TX_POWER_LEVEL: u8 = 0x0A;
    pub const APPEARANCE: u8 = 0x19;
    pub const MANUFACTURER_SPECIFIC_DATA: u8 = 0xFF;
}

/// Bits of the Flags AD structure (CSS Part A §1.3).
pub const FLAG_LE_LIMITED_DISCOVERABLE: u8 = 0x01;
pub const FLAG_LE_GENERAL_DISCOVERABLE: u8 = 0x02;
pub const FLAG_BR_EDR_NOT_SUPPORTED: u8 = 0x04;
