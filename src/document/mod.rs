//! # Document Assembly
//!
//! This module turns rasterized dot data into the finished byte buffer
//! an embosser consumes. Each builder targets one printer capability:
//!
//! | Builder | Capability | Input | Framing |
//! |---------|------------|-------|---------|
//! | [`NormalBuilder`] | `PLAIN` | [`DotMatrix`] | none |
//! | [`GraphicPrintBuilder`] | `GRAPHIC` | [`DotMatrix`] | image-mode escapes |
//! | [`FloatingDotAreaBuilder`] | `FLOATING_DOT` | [`crate::floating::FloatingPointSet`] | floating-area escapes |
//!
//! ## Cell Encoding
//!
//! The matrix-consuming builders share one procedure: traverse the
//! matrix with [`DotMatrix::dot_iterator`] at the standard 2×3 cell
//! size, accumulate each run of six dots into a
//! [`crate::cell::BrailleCell`], resolve the cell's bit pattern
//! through the [`BrailleTable`], and append the resolved byte.
//!
//! ## Purity
//!
//! `assemble` is a pure function of its input: builders hold no
//! mutable state beyond the table loaded at construction, so
//! assembling the same source twice yields byte-identical documents.

mod floating_area;
mod graphic;
mod normal;

pub use floating_area::FloatingDotAreaBuilder;
pub use graphic::GraphicPrintBuilder;
pub use normal::NormalBuilder;

use crate::cell::{BrailleCell, STANDARD_DOTS};
use crate::dispatch::Capability;
use crate::error::RelieveError;
use crate::matrix::DotMatrix;
use crate::table::BrailleTable;

/// Dot columns per standard braille cell.
pub const CELL_WIDTH: usize = 2;

/// Dot rows per standard braille cell.
pub const CELL_HEIGHT: usize = 3;

/// # Document
///
/// An owned byte buffer assembled by one of the builders, tagged with
/// the capability it was assembled for. Read-only after assembly; no
/// partial or streaming state is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    capability: Capability,
    bytes: Vec<u8>,
}

impl Document {
    pub(crate) fn new(capability: Capability, bytes: Vec<u8>) -> Self {
        Self { capability, bytes }
    }

    /// The capability this document was assembled for.
    #[inline]
    pub fn capability(&self) -> Capability {
        self.capability
    }

    /// The assembled byte buffer.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length of the assembled buffer in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Encode a matrix into per-cell output bytes (no framing).
///
/// Shared by [`NormalBuilder`] and [`GraphicPrintBuilder`]: six
/// consecutive traversal values fill one cell, the cell's bit pattern
/// is resolved through `table`, and the resulting byte is appended.
///
/// ## Errors
///
/// - [`RelieveError::NullInput`] for an empty matrix
/// - [`RelieveError::MissingKey`] when a produced bit pattern has no
///   table entry (fatal configuration error, surfaced unchanged)
pub(crate) fn encode_cells(
    matrix: &DotMatrix,
    table: &BrailleTable,
) -> Result<Vec<u8>, RelieveError> {
    if matrix.is_empty() {
        return Err(RelieveError::NullInput(
            "cannot assemble an empty dot matrix".to_string(),
        ));
    }

    let mut iter = matrix.dot_iterator(CELL_WIDTH, CELL_HEIGHT)?;
    let mut output = Vec::with_capacity(iter.total_dots() / STANDARD_DOTS);

    loop {
        let mut cell: BrailleCell = BrailleCell::new();
        for slot in 0..STANDARD_DOTS {
            match iter.next() {
                Some(value) => cell.set(slot, value)?,
                // The traversal yields whole blocks, so it can only end
                // on a cell boundary.
                None if slot == 0 => return Ok(output),
                None => unreachable!("dot traversal ended mid-cell"),
            }
        }
        output.push(table.value(&cell.bit_string())?);
    }
}

// ============================================================================
// TESTS
// ============================================================================
