//! Adapter bring-up.
//!
//! Applies an [`AdapterConfig`] through [`AdapterControl`].  Most settings
//! are only changeable while the controller is off, so the sequence is:
//!
//! ```text
//!  power off → BR/EDR → SC → bondable → connectable → LE
//!            → advertising → name → [add advertising] → power on
//! ```
//!
//! The first rejected command aborts the sequence; the returned error
//! names the step.

use anyhow::{Context, Result, bail};
use log::info;

use crate::config::AdapterConfig;
use crate::control::AdapterControl;
use crate::mgmt::transport::MgmtTransport;

/// Bind a controller to `transport` and apply `config` to it.
pub fn bring_up<T: MgmtTransport>(transport: T, config: &AdapterConfig) -> Result<AdapterControl<T>> {
    let mut ctl = AdapterControl::new(transport, config.controller_index);
    apply_config(&mut ctl, config)?;
    Ok(ctl)
}

/// Apply `config` to the controller `ctl` is bound to.
pub fn apply_config<T: MgmtTransport>(ctl: &mut AdapterControl<T>, config: &AdapterConfig) -> Result<()> {
    config.validate().context("invalid adapter config")?;
    if ctl.controller_index() != config.controller_index {
        bail!(
            "config targets hci{} but control is bound to hci{}",
            config.controller_index,
            ctl.controller_index()
        );
    }

    ctl.set_powered(false).context("power down")?;
    ctl.set_bredr(config.bredr).context("set BR/EDR")?;
    ctl.set_secure_connections(config.secure_connections)
        .context("set secure connections")?;
    ctl.set_bondable(config.bondable).context("set bondable")?;
    ctl.set_connectable(config.connectable).context("set connectable")?;
    ctl.set_le(config.le).context("set LE")?;
    ctl.set_advertising(config.advertising).context("set advertising")?;
    ctl.set_name(&config.name, &config.short_name).context("set name")?;

    if let Some(ad) = &config.advertisement {
        ctl.add_advertising(ad)
            .with_context(|| format!("add advertising instance {}", ad.instance))?;
    }

    if config.powered {
        ctl.set_powered(true).context("power up")?;
    }

    info!(
        "hci{} configured: name='{}' le={} bredr={} adv={}",
        config.controller_index, config.name, config.le, config.bredr, config.advertising
    );
    Ok(())
}
