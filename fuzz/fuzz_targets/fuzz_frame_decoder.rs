//! Fuzz target: `decode_frame` and the typed payload decoders
//!
//! Drives arbitrary byte sequences through frame decoding and asserts that
//! it never panics, that an accepted frame's declared length matches its
//! body, and that any frame a typed decoder accepts re-encodes to the
//! exact input bytes.
//!
//! cargo fuzz run fuzz_frame_decoder

#![no_main]

use btmgmt::mgmt::codec::{CommandFrame, Payload, decode_frame};
use btmgmt::mgmt::payload::{AddAdvertisingPayload, SetNamePayload, SetStatePayload};
use libfuzzer_sys::fuzz_target;

fn check_roundtrip<P: Payload>(data: &[u8]) {
    if let Ok(frame) = CommandFrame::<P>::from_bytes(data) {
        assert_eq!(frame.to_bytes(), data, "typed decode must be lossless");
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok((header, body)) = decode_frame(data) {
        assert_eq!(header.payload_len as usize, body.len());
    }

    check_roundtrip::<SetStatePayload>(data);
    check_roundtrip::<SetNamePayload>(data);
    check_roundtrip::<AddAdvertisingPayload>(data);
});
