//! Mock management transport for integration tests.
//!
//! Records every sync and every frame so tests can assert on the exact
//! bytes the kernel would have received.

use btmgmt::mgmt::codec::{CommandHeader, decode_frame};
use btmgmt::mgmt::transport::MgmtTransport;

/// Kernel status codes the mock can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MgmtStatus {
    Rejected,
    InvalidParameters,
}

pub struct MockTransport {
    pub synced: Vec<u16>,
    pub frames: Vec<Vec<u8>>,
    /// Reject the command at this position (0-based); `None` accepts all.
    reject_at: Option<usize>,
    reject_all: bool,
}

impl MockTransport {
    pub fn accepting() -> Self {
        Self {
            synced: Vec::new(),
            frames: Vec::new(),
            reject_at: None,
            reject_all: false,
        }
    }

    pub fn rejecting() -> Self {
        Self {
            reject_all: true,
            ..Self::accepting()
        }
    }

    pub fn rejecting_at(index: usize) -> Self {
        Self {
            reject_at: Some(index),
            ..Self::accepting()
        }
    }

    pub fn headers(&self) -> Vec<CommandHeader> {
        self.frames
            .iter()
            .map(|f| decode_frame(f).expect("mock only stores encoded frames").0)
            .collect()
    }

    pub fn last_payload(&self) -> &[u8] {
        let frame = self.frames.last().expect("no frame sent");
        decode_frame(frame).expect("valid frame").1
    }
}

impl MgmtTransport for MockTransport {
    type Error = MgmtStatus;

    fn sync(&mut self, controller_index: u16) {
        self.synced.push(controller_index);
    }

    fn send_command(&mut self, frame: &[u8]) -> Result<(), MgmtStatus> {
        let position = self.frames.len();
        self.frames.push(frame.to_vec());

        if self.reject_all {
            return Err(MgmtStatus::Rejected);
        }
        if self.reject_at == Some(position) {
            return Err(MgmtStatus::InvalidParameters);
        }
        Ok(())
    }
}
