//! # Device Transport
//!
//! Writes assembled documents to a character device or spool file.
//! Embossers typically appear as a serial or USB-serial device
//! (`/dev/ttyUSB0`, `/dev/usb/lp0`); a plain file path also works and
//! doubles as a spool target.
//!
//! ## TTY Configuration
//!
//! When the target is a TTY, it is switched to raw mode so binary
//! data passes through unmodified:
//!
//! - **No input processing**: IGNBRK, BRKINT, PARMRK, ISTRIP, INLCR,
//!   IGNCR, ICRNL, IXON, IXOFF, IXANY all disabled
//! - **No output processing**: OPOST disabled (no CR/LF translation)
//! - **8-bit characters**: CS8, no parity
//! - **No echo, non-canonical**: ECHO, ECHONL, ICANON, ISIG, IEXTEN disabled
//!
//! IXON/IXOFF matter in particular: 0x11 (XON) and 0x13 (XOFF) are
//! perfectly valid encoded cell bytes.
//!
//! ## Chunked Writes
//!
//! Large documents are written in chunks with a small delay between
//! them so a slow embosser's input buffer is not overrun. The default
//! chunk size is 4096 bytes.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::error::RelieveError;

use super::Transport;

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// Delay between chunks (milliseconds)
const CHUNK_DELAY_MS: u64 = 2;

/// # Device Transport
///
/// Manages a write connection to an embosser device path.
///
/// ## Example
///
/// ```no_run
/// use relieve::transport::{DeviceTransport, Transport};
///
/// let mut transport = DeviceTransport::for_device("/dev/ttyUSB0")?;
/// transport.send(&[0x1B, 0x40])?;
/// # Ok::<(), relieve::RelieveError>(())
/// ```
pub struct DeviceTransport {
    file: File,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl DeviceTransport {
    /// Open the transport for a device name (path).
    ///
    /// ## Errors
    ///
    /// Returns [`RelieveError::TransportUnavailable`] when no device
    /// matches the name — the path does not exist, cannot be opened
    /// for writing, or TTY configuration fails.
    pub fn for_device<P: AsRef<Path>>(device: P) -> Result<Self, RelieveError> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            RelieveError::TransportUnavailable(format!(
                "no embosser at {}: {}",
                path.display(),
                e
            ))
        })?;

        // Raw mode only applies to TTY targets; spool files pass through.
        if unsafe { libc::isatty(file.as_raw_fd()) } == 1 {
            configure_tty_raw(file.as_raw_fd())?;
        }

        Ok(Self {
            file,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::from_millis(CHUNK_DELAY_MS),
        })
    }

    /// Set the chunk size for large writes.
    ///
    /// Larger chunks are faster but may overrun a slow embosser's
    /// input buffer. Default is 4096 bytes.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks. Default is 2ms.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }

    fn write_chunked(&mut self, data: &[u8]) -> io::Result<()> {
        if data.len() <= self.chunk_size {
            self.file.write_all(data)?;
        } else {
            for chunk in data.chunks(self.chunk_size) {
                self.file.write_all(chunk)?;
                if !self.chunk_delay.is_zero() {
                    thread::sleep(self.chunk_delay);
                }
            }
        }
        self.file.flush()
    }
}

impl Transport for DeviceTransport {
    fn send(&mut self, data: &[u8]) -> Result<(), RelieveError> {
        self.write_chunked(data)
            .map_err(|e| RelieveError::TransportRejected(format!("device write failed: {}", e)))
    }
}

/// Configure a file descriptor for raw TTY mode.
///
/// Disables all input/output processing so binary data passes through
/// unmodified.
#[cfg(unix)]
fn configure_tty_raw(fd: i32) -> Result<(), RelieveError> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(RelieveError::TransportUnavailable(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    // Input flags: no break/parity handling, no CR/LF mapping, and no
    // XON/XOFF flow control (0x11/0x13 appear in cell data).
    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    // Output flags: disable post-processing
    termios.c_oflag &= !libc::OPOST;

    // Local flags: disable echo, canonical mode, signals
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    // Control flags: 8-bit characters, no parity
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(RelieveError::TransportUnavailable(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

#[cfg(not(unix))]
fn configure_tty_raw(_fd: i32) -> Result<(), RelieveError> {
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_device_is_unavailable() {
        let result = DeviceTransport::for_device("/dev/does-not-exist-relieve");
        assert!(matches!(
            result,
            Err(RelieveError::TransportUnavailable(_))
        ));
    }

    #[test]
    fn test_spool_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "relieve-spool-{}.bin",
            std::process::id()
        ));
        std::fs::write(&path, b"").unwrap();

        let payload: Vec<u8> = (0..=255).collect();
        {
            let mut transport = DeviceTransport::for_device(&path).unwrap();
            transport.send(&payload).unwrap();
        }

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, payload);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_chunked_write_preserves_order() {
        let path = std::env::temp_dir().join(format!(
            "relieve-chunked-{}.bin",
            std::process::id()
        ));
        std::fs::write(&path, b"").unwrap();

        let payload: Vec<u8> = (0..10_000).map(|i| (i % 251) as u8).collect();
        {
            let mut transport = DeviceTransport::for_device(&path).unwrap();
            transport.set_chunk_size(512);
            transport.set_chunk_delay(Duration::ZERO);
            transport.send(&payload).unwrap();
        }

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, payload);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_chunk_size_never_zero() {
        let path = std::env::temp_dir().join(format!(
            "relieve-zero-{}.bin",
            std::process::id()
        ));
        std::fs::write(&path, b"").unwrap();

        let mut transport = DeviceTransport::for_device(&path).unwrap();
        transport.set_chunk_size(0);
        transport.set_chunk_delay(Duration::ZERO);
        transport.send(&[1, 2, 3]).unwrap();
        std::fs::remove_file(&path).ok();
    }
}
