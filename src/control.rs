//! Adapter control facade.
//!
//! [`AdapterControl`] turns adapter settings into management commands for
//! one controller.  Each call encodes exactly one frame, hands it to the
//! transport and reports the verdict; nothing is cached, retried or
//! queued.
//!
//! ```text
//!  set_powered(true) ──▶ SetStatePayload{1} ──▶ CommandFrame ──▶ MgmtTransport
//!  set_name(..)      ──▶ SetNamePayload      ──┘
//!  add_advertising() ──▶ AddAdvertisingPayload ┘
//! ```

use log::{info, warn};

use crate::advertising::AdvertisingDescriptor;
use crate::error::{Error, Result};
use crate::mgmt::codec::{CommandFrame, Payload};
use crate::mgmt::opcode::CommandCode;
use crate::mgmt::payload::{SetNamePayload, SetStatePayload};
use crate::mgmt::transport::MgmtTransport;
use crate::name::{truncate_name, truncate_short_name};

// ───────────────────────────────────────────────────────────────
// Setting levels
// ───────────────────────────────────────────────────────────────

/// Values accepted by Set Advertising.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AdvertisingMode {
    Disabled = 0,
    /// Enabled, connectable only if the connectable setting is on.
    Enabled = 1,
    /// Enabled and always connectable.
    Connectable = 2,
}

impl From<AdvertisingMode> for u8 {
    fn from(mode: AdvertisingMode) -> Self {
        mode as u8
    }
}

/// Values accepted by Set Secure Connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SecureConnections {
    Disabled = 0,
    Enabled = 1,
    /// Secure Connections Only mode.
    Only = 2,
}

impl From<SecureConnections> for u8 {
    fn from(level: SecureConnections) -> Self {
        level as u8
    }
}

// ───────────────────────────────────────────────────────────────
// AdapterControl
// ───────────────────────────────────────────────────────────────

/// Management command issuer bound to a single controller.
pub struct AdapterControl<T: MgmtTransport> {
    transport: T,
    controller_index: u16,
}

impl<T: MgmtTransport> AdapterControl<T> {
    /// Bind to `controller_index` and sync the transport to it.
    pub fn new(mut transport: T, controller_index: u16) -> Self {
        transport.sync(controller_index);
        info!("AdapterControl bound to hci{}", controller_index);
        Self {
            transport,
            controller_index,
        }
    }

    pub fn controller_index(&self) -> u16 {
        self.controller_index
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    // ── Name ──────────────────────────────────────────────────

    /// Set the adapter name and short name.
    ///
    /// Both are truncated to [`crate::name::MAX_NAME_LENGTH`] and
    /// [`crate::name::MAX_SHORT_NAME_LENGTH`] bytes first.
    pub fn set_name(&mut self, name: &str, short_name: &str) -> Result<()> {
        let name = truncate_name(name);
        let short_name = truncate_short_name(short_name);
        let payload = SetNamePayload::new(name, short_name);

        self.send(CommandCode::SET_LOCAL_NAME, self.controller_index, payload)
            .map_err(|detail| {
                warn!("Set Local Name to '{}' / '{}' failed: {}", name, short_name, detail);
                Error::Rejected(CommandCode::SET_LOCAL_NAME)
            })
    }

    // ── Single-byte settings ──────────────────────────────────

    /// Send `new_state` under `code` for `controller_id`.
    ///
    /// The value is forwarded as-is; range checking is left to the kernel.
    pub fn set_state(&mut self, code: CommandCode, controller_id: u16, new_state: u8) -> Result<()> {
        self.send(code, controller_id, SetStatePayload { state: new_state })
            .map_err(|detail| {
                warn!("{} to {} failed: {}", code, new_state, detail);
                Error::Rejected(code)
            })
    }

    pub fn set_powered(&mut self, on: bool) -> Result<()> {
        self.set_state(CommandCode::SET_POWERED, self.controller_index, u8::from(on))
    }

    pub fn set_bredr(&mut self, enabled: bool) -> Result<()> {
        self.set_state(CommandCode::SET_BREDR, self.controller_index, u8::from(enabled))
    }

    pub fn set_bondable(&mut self, enabled: bool) -> Result<()> {
        self.set_state(CommandCode::SET_BONDABLE, self.controller_index, u8::from(enabled))
    }

    pub fn set_connectable(&mut self, enabled: bool) -> Result<()> {
        self.set_state(CommandCode::SET_CONNECTABLE, self.controller_index, u8::from(enabled))
    }

    pub fn set_le(&mut self, enabled: bool) -> Result<()> {
        self.set_state(CommandCode::SET_LOW_ENERGY, self.controller_index, u8::from(enabled))
    }

    /// Accepts an [`AdvertisingMode`] or a raw level.
    pub fn set_advertising(&mut self, mode: impl Into<u8>) -> Result<()> {
        self.set_state(CommandCode::SET_ADVERTISING, self.controller_index, mode.into())
    }

    /// Accepts a [`SecureConnections`] level or a raw level.
    pub fn set_secure_connections(&mut self, level: impl Into<u8>) -> Result<()> {
        self.set_state(CommandCode::SET_SECURE_CONNECTIONS, self.controller_index, level.into())
    }

    // ── Advertising ───────────────────────────────────────────

    /// Register the advertising instance described by `descriptor`.
    ///
    /// If either AD stream does not fit its buffer no command is sent.
    pub fn add_advertising(&mut self, descriptor: &AdvertisingDescriptor) -> Result<()> {
        let payload = descriptor.encode().map_err(|e| {
            warn!("Add Advertising instance {} not sent: {}", descriptor.instance, e);
            Error::Advertising(e)
        })?;

        self.send(CommandCode::ADD_ADVERTISING, self.controller_index, payload)
            .map_err(|detail| {
                warn!("Add Advertising instance {} failed: {}", descriptor.instance, detail);
                Error::Rejected(CommandCode::ADD_ADVERTISING)
            })
    }

    // ── Internal ──────────────────────────────────────────────

    /// Encode and send one frame; the transport's error is rendered for logging.
    fn send<P: Payload>(
        &mut self,
        code: CommandCode,
        controller_id: u16,
        payload: P,
    ) -> core::result::Result<(), String> {
        let frame = CommandFrame::new(code, controller_id, payload);
        self.transport
            .send_command(&frame.to_bytes())
            .map_err(|e| format!("{e:?}"))
    }
}
