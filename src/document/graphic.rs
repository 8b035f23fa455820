//! # Graphic Print Builder
//!
//! Embossers with graphic firmware interpret cell bytes at the finer
//! graphic dot pitch, but only inside an image-mode session. This
//! builder wraps the standard cell encoding with the two-byte
//! mode-entry and mode-exit sequences:
//!
//! ```text
//! ┌───────┬───────┬─────────────────────┬───────┐
//! │ 1B 05 │ 1B 06 │ encoded cell bytes  │ 1B 07 │
//! │ enter │ type  │ (same as plain)     │ exit  │
//! └───────┴───────┴─────────────────────┴───────┘
//! ```

use crate::dispatch::Capability;
use crate::error::RelieveError;
use crate::matrix::DotMatrix;
use crate::protocol::commands;
use crate::table::BrailleTable;

use super::{Document, encode_cells};

/// # Graphic Print Builder
///
/// Same per-cell encoding as [`super::NormalBuilder`], framed with the
/// image-mode escape sequences so the embosser interprets the payload
/// as graphics.
///
/// ## Example
///
/// ```
/// use relieve::document::GraphicPrintBuilder;
/// use relieve::matrix::DotMatrix;
/// use relieve::table::BrailleTable;
///
/// let table = BrailleTable::from_properties_str("000000=0\n")?;
/// let doc = GraphicPrintBuilder::new(table).assemble(&DotMatrix::new(3, 2))?;
/// assert_eq!(doc.as_bytes(), &[0x1B, 0x05, 0x1B, 0x06, 0x00, 0x1B, 0x07]);
/// # Ok::<(), relieve::RelieveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GraphicPrintBuilder {
    table: BrailleTable,
}

impl GraphicPrintBuilder {
    /// Create a builder around a loaded braille table.
    pub fn new(table: BrailleTable) -> Self {
        Self { table }
    }

    /// Assemble a graphic-mode document from a dot matrix.
    ///
    /// ## Errors
    ///
    /// Same contract as [`super::NormalBuilder::assemble`]; framing is
    /// only added around a successfully encoded payload.
    pub fn assemble(&self, matrix: &DotMatrix) -> Result<Document, RelieveError> {
        let payload = encode_cells(matrix, &self.table)?;

        let mut bytes = Vec::with_capacity(payload.len() + 6);
        bytes.extend(commands::enter_image_mode());
        bytes.extend(commands::set_image_type());
        bytes.extend(payload);
        bytes.extend(commands::exit_image_mode());

        Ok(Document::new(Capability::Graphic, bytes))
    }
}

// ============================================================================
// TESTS
// ============================================================================
