//! Transport abstraction over whatever owns the management socket.
//!
//! The transport opens the socket, synchronises with kernel event
//! delivery and reports whether each command was accepted.  The control
//! facade is generic over [`MgmtTransport`], so a real socket, a test
//! double and a dry-run logger are interchangeable.

use core::fmt;

use log::debug;

/// Command channel to the kernel management interface.
pub trait MgmtTransport {
    /// Error reported when a command is refused.
    type Error: fmt::Debug;

    /// Prepare the transport for `controller_index`.
    ///
    /// Called once, before any command is sent.
    fn sync(&mut self, controller_index: u16);

    /// Send one fully encoded frame and wait for the kernel's verdict.
    fn send_command(&mut self, frame: &[u8]) -> Result<(), Self::Error>;
}

impl<T: MgmtTransport + ?Sized> MgmtTransport for &mut T {
    type Error = T::Error;

    fn sync(&mut self, controller_index: u16) {
        (**self).sync(controller_index);
    }

    fn send_command(&mut self, frame: &[u8]) -> Result<(), T::Error> {
        (**self).send_command(frame)
    }
}

/// A transport that accepts and discards every command.
pub struct NullTransport;

impl MgmtTransport for NullTransport {
    type Error = ();

    fn sync(&mut self, _controller_index: u16) {}

    fn send_command(&mut self, _frame: &[u8]) -> Result<(), ()> {
        Ok(())
    }
}

/// Dry-run transport: logs a hex dump of every frame and accepts it.
#[derive(Debug, Default)]
pub struct LogTransport {
    sent: usize,
}

impl LogTransport {
    pub fn new() -> Self {
        Self { sent: 0 }
    }

    /// Frames accepted so far.
    pub fn sent(&self) -> usize {
        self.sent
    }
}

impl MgmtTransport for LogTransport {
    type Error = ();

    fn sync(&mut self, controller_index: u16) {
        debug!("MGMT | sync hci{}", controller_index);
    }

    fn send_command(&mut self, frame: &[u8]) -> Result<(), ()> {
        self.sent += 1;
        debug!("MGMT | tx {} bytes | {}", frame.len(), HexDump(frame));
        Ok(())
    }
}

struct HexDump<'a>(&'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}
