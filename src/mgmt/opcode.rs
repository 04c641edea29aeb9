//! Management command codes.
//!
//! Numbering follows the kernel management API (`lib/mgmt.h` in BlueZ).
//! Only the commands this crate issues are named; anything else still
//! round-trips through [`CommandCode`] and renders as hex.

use core::fmt;

/// A 16-bit management command code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandCode(pub u16);

impl CommandCode {
    pub const SET_POWERED: Self = Self(0x0005);
    pub const SET_CONNECTABLE: Self = Self(0x0007);
    pub const SET_BONDABLE: Self = Self(0x0009);
    pub const SET_LOW_ENERGY: Self = Self(0x000D);
    pub const SET_LOCAL_NAME: Self = Self(0x000F);
    pub const SET_ADVERTISING: Self = Self(0x0029);
    pub const SET_BREDR: Self = Self(0x002A);
    pub const SET_SECURE_CONNECTIONS: Self = Self(0x002D);
    pub const ADD_ADVERTISING: Self = Self(0x003E);

    /// Human-readable command name, or `None` for codes this crate never sends.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0x0005 => Some("Set Powered"),
            0x0007 => Some("Set Connectable"),
            0x0009 => Some("Set Bondable"),
            0x000D => Some("Set Low Energy"),
            0x000F => Some("Set Local Name"),
            0x0029 => Some("Set Advertising"),
            0x002A => Some("Set BR/EDR"),
            0x002D => Some("Set Secure Connections"),
            0x003E => Some("Add Advertising"),
            _ => None,
        }
    }

    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

impl From<u16> for CommandCode {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl fmt::Display for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "0x{:04x}", self.0),
        }
    }
}
