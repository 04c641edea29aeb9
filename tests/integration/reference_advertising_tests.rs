//! Conformance fixture: the vendor advertising instance the adapter was
//! first deployed with.  Checks the exact bytes of the Add Advertising frame.

use btmgmt::AdapterControl;
use btmgmt::advertising::{AdStructure, AdvertisingDescriptor, ManufacturerStatus};
use btmgmt::mgmt::codec::CommandFrame;
use btmgmt::mgmt::opcode::CommandCode;
use btmgmt::mgmt::payload::AddAdvertisingPayload;

use crate::mock_transport::MockTransport;

fn reference_descriptor() -> AdvertisingDescriptor {
    let status = ManufacturerStatus {
        company_id: 0x02A6,
        model: 0x00,
        pcba_version: 0x00,
        error_status: 0x00,
        battery_percent: 100,
        serial: [0xB0, 0xD0, 0x56, 0xF2, 0xB5, 0x12, 0x00, 0x00, 0x00, 0x00],
    };

    AdvertisingDescriptor::new(1)
        .with_adv(AdStructure::le_general_discoverable())
        .with_adv(AdStructure::from(&status))
        .with_scan_rsp(AdStructure::complete_local_name("SKYWALKER-XXXXX").unwrap())
}

fn sent_payload() -> (CommandFrame<AddAdvertisingPayload>, usize) {
    let mut ctl = AdapterControl::new(MockTransport::accepting(), 0);
    ctl.add_advertising(&reference_descriptor()).unwrap();
    let bytes = &ctl.transport().frames[0];
    (CommandFrame::from_bytes(bytes).unwrap(), bytes.len())
}

#[test]
fn header_declares_fixed_payload_size() {
    let (frame, total) = sent_payload();
    assert_eq!(frame.header.code, CommandCode::ADD_ADVERTISING);
    assert_eq!(frame.header.payload_len, 59);
    assert_eq!(total, 65);
}

#[test]
fn lengths_count_meaningful_bytes() {
    let (frame, _) = sent_payload();
    assert_eq!(frame.payload.adv_data_len, 21);
    assert_eq!(frame.payload.scan_rsp_len, 17);
}

#[test]
fn instance_timing_and_flags_are_zeroed() {
    let (frame, _) = sent_payload();
    assert_eq!(frame.payload.instance, 1);
    assert_eq!(frame.payload.flags, 0);
    assert_eq!(frame.payload.duration, 0);
    assert_eq!(frame.payload.timeout, 0);
}

#[test]
fn advertising_data_bytes() {
    let (frame, _) = sent_payload();
    let expected: [u8; 21] = [
        0x02, 0x01, 0x06, // flags: LE general discoverable, BR/EDR not supported
        0x11, 0xFF, 0xA6, 0x02, // manufacturer data, company 0x02A6
        0x00, 0x00, 0x00, 100, // model, PCBA, status, battery
        0xB0, 0xD0, 0x56, 0xF2, 0xB5, 0x12, 0x00, 0x00, 0x00, 0x00, // serial
    ];
    assert_eq!(&frame.payload.adv_data[..21], &expected);
    assert!(frame.payload.adv_data[21..].iter().all(|&b| b == 0));
}

#[test]
fn scan_response_bytes() {
    let (frame, _) = sent_payload();
    assert_eq!(frame.payload.scan_rsp_data[0], 0x10);
    assert_eq!(frame.payload.scan_rsp_data[1], 0x09);
    assert_eq!(&frame.payload.scan_rsp_data[2..], b"SKYWALKER-XXXXX");
}

#[test]
fn third_adv_entry_would_overflow() {
    let descriptor = reference_descriptor()
        .with_adv(AdStructure::complete_local_name("SKYWALKER").unwrap());
    let mut ctl = AdapterControl::new(MockTransport::accepting(), 0);
    assert!(ctl.add_advertising(&descriptor).is_err());
    assert!(ctl.transport().frames.is_empty());
}
