//! Integration test driver for `tests/integration/` submodules.
//!
//! Each `mod` below exercises the public API against a mock transport.
//! No Bluetooth hardware or management socket is required.

mod log_capture;
mod mock_transport;
mod provisioning_tests;
mod reference_advertising_tests;
