//! # Floating-Dot Area Wire Format
//!
//! Embossers with floating-dot firmware accept dot positions in
//! physical units instead of cell-grid positions. This module builds
//! the byte layout for one floating-dot area:
//!
//! ```text
//! ┌──────┬───────────┬──────────────────────────┬──────┐
//! │ 1B 46│ count u16 │ point records (5 B each) │ 1B 45│
//! │ "F"  │ LE        │ in insertion order       │ "E"  │
//! └──────┴───────────┴──────────────────────────┴──────┘
//!
//! point record:
//! ┌──────────┬──────────┬───────────┐
//! │ x u16 LE │ y u16 LE │ intensity │
//! │ 0.1 mm   │ 0.1 mm   │ 1 byte    │
//! └──────────┴──────────┴───────────┘
//! ```
//!
//! ## Coordinate Units
//!
//! Coordinates are transmitted in tenths of a millimeter, giving a
//! 0–6553.5 mm addressable range per axis at 0.1 mm resolution —
//! finer than any embosser's mechanical dot pitch.

use crate::error::RelieveError;

use super::commands::{ESC, FLOATING_BEGIN, FLOATING_END, u16_le};

/// Size of one serialized point record in bytes.
pub const POINT_RECORD_LEN: usize = 5;

/// # Begin Floating-Dot Area (ESC F count)
///
/// Opens a floating-dot area and declares how many point records
/// follow.
///
/// ## Example
///
/// ```
/// use relieve::protocol::floating;
///
/// assert_eq!(floating::area_header(300), vec![0x1B, 0x46, 0x2C, 0x01]);
/// ```
#[inline]
pub fn area_header(count: u16) -> Vec<u8> {
    let [lo, hi] = u16_le(count);
    vec![ESC, FLOATING_BEGIN, lo, hi]
}

/// # End Floating-Dot Area (ESC E)
#[inline]
pub fn area_trailer() -> Vec<u8> {
    vec![ESC, FLOATING_END]
}

/// Serialize one point record: x, y in tenths of a millimeter
/// (little-endian), then the intensity byte.
///
/// ## Errors
///
/// Returns [`RelieveError::InvalidValue`] if either coordinate is
/// negative, not finite, or beyond the 6553.5 mm addressable range.
pub fn point_record(x_mm: f32, y_mm: f32, value: u8) -> Result<[u8; POINT_RECORD_LEN], RelieveError> {
    let [xl, xh] = u16_le(mm_to_decimm(x_mm)?);
    let [yl, yh] = u16_le(mm_to_decimm(y_mm)?);
    Ok([xl, xh, yl, yh, value])
}

/// Convert millimeters to wire units (tenths of a millimeter).
pub fn mm_to_decimm(mm: f32) -> Result<u16, RelieveError> {
    if !mm.is_finite() || mm < 0.0 {
        return Err(RelieveError::InvalidValue(format!(
            "coordinate {} mm is not a valid physical position",
            mm
        )));
    }
    let units = (mm * 10.0).round();
    if units > u16::MAX as f32 {
        return Err(RelieveError::InvalidValue(format!(
            "coordinate {} mm exceeds the addressable area",
            mm
        )));
    }
    Ok(units as u16)
}

// ============================================================================
// TESTS
// ============================================================================
