//! # Embosser Control Commands
//!
//! Escape-sequence builders for the Index-style direct protocol. Every
//! control sequence is a fixed two-byte code: `ESC` followed by a mode
//! byte. Payload bytes between the framing sequences are raw encoded
//! cell data.
//!
//! ## Command Summary
//!
//! | Command | Bytes | Purpose |
//! |---------|-------|---------|
//! | `ESC @` | 1B 40 | Reset embosser state |
//! | `ESC 05` | 1B 05 | Enter image (graphic) mode |
//! | `ESC 06` | 1B 06 | Select image type |
//! | `ESC 07` | 1B 07 | Exit image mode |
//! | `ESC F` | 1B 46 | Begin floating-dot area |
//! | `ESC E` | 1B 45 | End floating-dot area |
//! | `FF` | 0C | Eject page |
//!
//! ## Byte Order
//!
//! Multi-byte integers in payloads use **little-endian** encoding:
//! `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Every control sequence in the direct protocol begins with ESC
/// (0x1B). This byte signals the start of a mode change rather than
/// embossable cell data.
pub const ESC: u8 = 0x1B;

/// FF (Form Feed) - Eject the current page
pub const FF: u8 = 0x0C;

/// Mode byte for entering image mode
pub const IMAGE_MODE_ENTER: u8 = 0x05;

/// Mode byte for selecting the image type
pub const IMAGE_MODE_TYPE: u8 = 0x06;

/// Mode byte for exiting image mode
pub const IMAGE_MODE_EXIT: u8 = 0x07;

/// Mode byte for beginning a floating-dot area
pub const FLOATING_BEGIN: u8 = b'F';

/// Mode byte for ending a floating-dot area
pub const FLOATING_END: u8 = b'E';

// ============================================================================
// BASIC COMMANDS
// ============================================================================

/// # Initialize Embosser (ESC @)
///
/// Resets the embosser to its power-on default state. Clears any
/// half-entered mode; stored tables and firmware settings are not
/// affected.
///
/// ## Example
///
/// ```
/// use relieve::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// # Eject Page (FF)
///
/// Embosses any buffered data and feeds to the top of the next page.
#[inline]
pub fn form_feed() -> Vec<u8> {
    vec![FF]
}

// ============================================================================
// IMAGE MODE FRAMING
// ============================================================================

/// # Enter Image Mode (ESC 05)
///
/// Switches the embosser from text interpretation to graphic
/// interpretation: subsequent payload bytes are taken as encoded dot
/// cells, not characters. Must be paired with [`exit_image_mode`].
///
/// ## Example
///
/// ```
/// use relieve::protocol::commands;
///
/// assert_eq!(commands::enter_image_mode(), vec![0x1B, 0x05]);
/// ```
#[inline]
pub fn enter_image_mode() -> Vec<u8> {
    vec![ESC, IMAGE_MODE_ENTER]
}

/// # Set Image Type (ESC 06)
///
/// Declares the payload encoding for the current image-mode session.
/// Sent immediately after [`enter_image_mode`], before any payload.
#[inline]
pub fn set_image_type() -> Vec<u8> {
    vec![ESC, IMAGE_MODE_TYPE]
}

/// # Exit Image Mode (ESC 07)
///
/// Returns the embosser to text interpretation. Closes the session
/// opened by [`enter_image_mode`].
#[inline]
pub fn exit_image_mode() -> Vec<u8> {
    vec![ESC, IMAGE_MODE_EXIT]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ## Example
///
/// ```
/// use relieve::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(300), [0x2C, 0x01]);
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================
