//! Integration tests: AdapterConfig → bring-up command sequence.

use btmgmt::advertising::{AdStructure, AdvertisingDescriptor};
use btmgmt::config::AdapterConfig;
use btmgmt::mgmt::opcode::CommandCode;
use btmgmt::provision::{apply_config, bring_up};
use btmgmt::AdapterControl;

use crate::log_capture;
use crate::mock_transport::MockTransport;

fn codes(transport: &MockTransport) -> Vec<CommandCode> {
    transport.headers().iter().map(|h| h.code).collect()
}

#[test]
fn bring_up_issues_commands_in_order() {
    let ctl = bring_up(MockTransport::accepting(), &AdapterConfig::default()).unwrap();
    assert_eq!(
        codes(ctl.transport()),
        vec![
            CommandCode::SET_POWERED,
            CommandCode::SET_BREDR,
            CommandCode::SET_SECURE_CONNECTIONS,
            CommandCode::SET_BONDABLE,
            CommandCode::SET_CONNECTABLE,
            CommandCode::SET_LOW_ENERGY,
            CommandCode::SET_ADVERTISING,
            CommandCode::SET_LOCAL_NAME,
            CommandCode::SET_POWERED,
        ]
    );
    let first = &ctl.transport().frames[0];
    let last = ctl.transport().frames.last().unwrap();
    assert_eq!(first[6], 0, "power down first");
    assert_eq!(last[6], 1, "power up last");
}

#[test]
fn bring_up_syncs_configured_controller() {
    let config = AdapterConfig {
        controller_index: 2,
        ..AdapterConfig::default()
    };
    let ctl = bring_up(MockTransport::accepting(), &config).unwrap();
    assert_eq!(ctl.transport().synced, vec![2]);
    assert!(ctl.transport().headers().iter().all(|h| h.controller_index == 2));
}

#[test]
fn advertisement_is_registered_before_power_up() {
    let config = AdapterConfig {
        advertising: 0,
        advertisement: Some(
            AdvertisingDescriptor::new(1)
                .with_adv(AdStructure::le_general_discoverable())
                .with_scan_rsp(AdStructure::complete_local_name("Gobbledegook").unwrap()),
        ),
        ..AdapterConfig::default()
    };
    let ctl = bring_up(MockTransport::accepting(), &config).unwrap();
    let sent = codes(ctl.transport());
    assert_eq!(sent.len(), 10);
    assert_eq!(sent[8], CommandCode::ADD_ADVERTISING);
    assert_eq!(sent[9], CommandCode::SET_POWERED);
}

#[test]
fn first_rejection_stops_the_sequence() {
    log_capture::start();
    // Position 3 is Set Bondable.
    let mut ctl = AdapterControl::new(MockTransport::rejecting_at(3), 0);
    let err = apply_config(&mut ctl, &AdapterConfig::default()).unwrap_err();

    assert!(format!("{err:#}").contains("set bondable"), "{err:#}");
    assert_eq!(ctl.transport().frames.len(), 4);
    assert_eq!(log_capture::warnings().len(), 1);
}

#[test]
fn invalid_config_never_reaches_transport() {
    let config = AdapterConfig {
        name: String::new(),
        ..AdapterConfig::default()
    };
    let err = bring_up(MockTransport::accepting(), &config).err().unwrap();
    assert!(format!("{err:#}").contains("name is empty"));
}
