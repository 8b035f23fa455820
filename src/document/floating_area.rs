//! # Floating Dot Area Builder
//!
//! Serializes a [`FloatingPointSet`] directly into the floating-dot
//! wire format — no cell quantization and therefore no braille table.
//! Points go on the wire in insertion order; see
//! [`crate::protocol::floating`] for the byte layout.

use crate::dispatch::Capability;
use crate::error::RelieveError;
use crate::floating::FloatingPointSet;
use crate::protocol::floating;

use super::Document;

/// # Floating Dot Area Builder
///
/// Assembles a floating-dot document: area header with the point
/// count, one five-byte record per point, area trailer.
///
/// ## Example
///
/// ```
/// use relieve::document::FloatingDotAreaBuilder;
/// use relieve::floating::FloatingPointSet;
///
/// let mut points = FloatingPointSet::new();
/// points.push(1.0, 2.0, 1);
/// let doc = FloatingDotAreaBuilder::new().assemble(&points)?;
/// assert_eq!(doc.as_bytes()[..4], [0x1B, 0x46, 0x01, 0x00]);
/// # Ok::<(), relieve::RelieveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FloatingDotAreaBuilder;

impl FloatingDotAreaBuilder {
    /// Create a floating-dot builder. No table is needed: floating
    /// mode does not quantize into cells.
    pub fn new() -> Self {
        Self
    }

    /// Assemble a floating-dot document from a point set.
    ///
    /// ## Errors
    ///
    /// - [`RelieveError::NullInput`] for an empty point set
    /// - [`RelieveError::InvalidValue`] for coordinates outside the
    ///   addressable area, or more points than the u16 count field
    ///   can declare
    pub fn assemble(&self, points: &FloatingPointSet) -> Result<Document, RelieveError> {
        if points.is_empty() {
            return Err(RelieveError::NullInput(
                "cannot assemble an empty floating point set".to_string(),
            ));
        }

        let count = u16::try_from(points.len()).map_err(|_| {
            RelieveError::InvalidValue(format!(
                "{} points exceed the per-area maximum of {}",
                points.len(),
                u16::MAX
            ))
        })?;

        let mut bytes =
            Vec::with_capacity(6 + points.len() * floating::POINT_RECORD_LEN);
        bytes.extend(floating::area_header(count));
        for dot in points {
            bytes.extend(floating::point_record(dot.x_mm, dot.y_mm, dot.value)?);
        }
        bytes.extend(floating::area_trailer());

        Ok(Document::new(Capability::FloatingDot, bytes))
    }
}

// ============================================================================
// TESTS
// ============================================================================
