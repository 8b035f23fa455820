//! # Normal (Plain Raster) Builder
//!
//! The lowest-common-denominator assembly path: encoded cell bytes
//! with no framing, for embossers that stay in their default text/cell
//! interpretation. Every embosser supports this mode, which is why the
//! dispatcher falls back to it for unknown capabilities.

use crate::dispatch::Capability;
use crate::error::RelieveError;
use crate::matrix::DotMatrix;
use crate::table::BrailleTable;

use super::{Document, encode_cells};

/// # Normal Builder
///
/// Consumes a [`DotMatrix`] via the standard 2×3 cell traversal and
/// emits one table-resolved byte per cell, with no control sequences.
///
/// ## Example
///
/// ```
/// use relieve::document::NormalBuilder;
/// use relieve::matrix::DotMatrix;
/// use relieve::table::BrailleTable;
///
/// let table = BrailleTable::from_properties_str("000000=32\n")?;
/// let builder = NormalBuilder::new(table);
/// let doc = builder.assemble(&DotMatrix::new(3, 2))?;
/// assert_eq!(doc.as_bytes(), &[32]);
/// # Ok::<(), relieve::RelieveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NormalBuilder {
    table: BrailleTable,
}

impl NormalBuilder {
    /// Create a builder around a loaded braille table.
    pub fn new(table: BrailleTable) -> Self {
        Self { table }
    }

    /// Assemble a plain document from a dot matrix.
    ///
    /// Pure function of the input: the same matrix always yields a
    /// byte-identical document.
    ///
    /// ## Errors
    ///
    /// - [`RelieveError::NullInput`] for an empty matrix
    /// - [`RelieveError::MissingKey`] from table resolution, unchanged
    pub fn assemble(&self, matrix: &DotMatrix) -> Result<Document, RelieveError> {
        let bytes = encode_cells(matrix, &self.table)?;
        Ok(Document::new(Capability::Plain, bytes))
    }
}

// ============================================================================
// TESTS
// ============================================================================
