//! Fuzz target: `AdBuffer::append_entry`
//!
//! Interprets the input as a stream of `(type, len, payload)` records and
//! appends them to both advertising buffers.  The buffers must never grow
//! past 31 / 17 bytes and a refused append must leave them untouched.
//!
//! cargo fuzz run fuzz_ad_builder

#![no_main]

use btmgmt::advertising::{AdEntries, AdvertisingData, ScanResponseData};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut adv = AdvertisingData::new();
    let mut rsp = ScanResponseData::new();
    let mut rest = data;

    while let [ad_type, len, tail @ ..] = rest {
        let n = (*len as usize).min(tail.len());
        let (payload, next) = tail.split_at(n);
        rest = next;

        let before = adv.len();
        if adv.append_entry(*ad_type, payload).is_err() {
            assert_eq!(adv.len(), before);
        }
        let before = rsp.len();
        if rsp.append_entry(*ad_type, payload).is_err() {
            assert_eq!(rsp.len(), before);
        }
    }

    assert!(adv.len() <= 31);
    assert!(rsp.len() <= 17);
    let _ = AdEntries::new(adv.as_bytes()).count();
});
