//! # Print Transport Layer
//!
//! This module provides the hand-off point between an assembled
//! document and the outside world. The dispatcher only requires the
//! [`Transport`] trait; delivering bytes to a physical embosser is a
//! collaborator concern, not part of document assembly.
//!
//! ## Available Transports
//!
//! - [`device`]: character-device / spool-file writes (serial and
//!   USB-serial embosser links)
//! - [`memory`]: in-memory capture for tests
//!
//! ## Future Transports
//!
//! - Network (TCP port 9100 style)

pub mod device;
pub mod memory;

pub use device::DeviceTransport;
pub use memory::MemoryTransport;

use crate::error::RelieveError;

/// A destination for an assembled document's bytes.
///
/// `send` delivers one complete payload. It may block on device I/O;
/// the crate defines no timeout — callers needing responsiveness run
/// the dispatcher on a worker of their own.
pub trait Transport {
    /// Deliver the payload.
    ///
    /// ## Errors
    ///
    /// Returns [`RelieveError::TransportRejected`] when the device
    /// refuses or drops the payload.
    fn send(&mut self, data: &[u8]) -> Result<(), RelieveError>;
}
