//! Bluetooth management-socket command codec and adapter control.
//!
//! Encodes adapter settings (power, LE, BR/EDR, name, advertising) into
//! the kernel management protocol's fixed binary frames and dispatches
//! them through a [`MgmtTransport`](mgmt::transport::MgmtTransport).
//! Socket ownership and kernel event handling belong to the transport.

#![deny(unused_must_use)]

pub mod advertising;
pub mod config;
pub mod control;
pub mod mgmt;
pub mod name;
pub mod provision;

mod error;

pub use control::{AdapterControl, AdvertisingMode, SecureConnections};
pub use error::{AdError, DecodeError, Error, Result};
