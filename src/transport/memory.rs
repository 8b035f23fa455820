//! # Memory Transport
//!
//! Captures sent payloads in memory instead of touching hardware.
//! Used by the dispatcher tests and handy for callers that want to
//! inspect the exact bytes a print run would produce.

use crate::error::RelieveError;

use super::Transport;

/// # Memory Transport
///
/// Records every payload passed to [`Transport::send`]. Can be
/// configured to refuse payloads to exercise rejection paths.
///
/// ## Example
///
/// ```
/// use relieve::transport::{MemoryTransport, Transport};
///
/// let mut transport = MemoryTransport::new();
/// transport.send(&[1, 2, 3])?;
/// assert_eq!(transport.sent(), &[vec![1, 2, 3]]);
/// # Ok::<(), relieve::RelieveError>(())
/// ```
#[derive(Debug, Default)]
pub struct MemoryTransport {
    sent: Vec<Vec<u8>>,
    reject_reason: Option<String>,
}

impl MemoryTransport {
    /// Create a transport that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport that refuses every payload with the given
    /// reason.
    pub fn rejecting(reason: &str) -> Self {
        Self {
            sent: Vec::new(),
            reject_reason: Some(reason.to_string()),
        }
    }

    /// Payloads accepted so far, in send order.
    pub fn sent(&self) -> &[Vec<u8>] {
        &self.sent
    }
}

impl Transport for MemoryTransport {
    fn send(&mut self, data: &[u8]) -> Result<(), RelieveError> {
        if let Some(reason) = &self.reject_reason {
            return Err(RelieveError::TransportRejected(reason.clone()));
        }
        self.sent.push(data.to_vec());
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
