//! Kernel management protocol plumbing.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     Command path                           │
//! │                                                            │
//! │  ┌──────────┐   ┌──────────┐   ┌───────────────────────┐   │
//! │  │ Payload  │──▶│  Codec   │──▶│  Transport (trait)    │   │
//! │  │ (fixed)  │   │ (header) │   │  → kernel mgmt socket │   │
//! │  └──────────┘   └──────────┘   └───────────────────────┘   │
//! └────────────────────────────────────────────────────────────┘
//! ```

pub mod codec;
pub mod opcode;
pub mod payload;
pub mod transport;
