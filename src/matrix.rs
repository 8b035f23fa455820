//! # Dot Matrix
//!
//! This module defines the rectangular grid of embossing dots produced
//! by the (external) chart rasterizer, plus the cell-order traversal
//! that feeds dot values to the document builders.
//!
//! ## Coordinate System
//!
//! ```text
//! (0,0) ──────────────► column
//!   │
//!   │   · · · ·   one intensity value per dot position
//!   │   · · · ·   (0 = blank, non-zero = emboss)
//!   ▼
//!  row (paper feed direction)
//! ```
//!
//! ## Cell-Order Traversal
//!
//! Embossers consume dots cell by cell, not row by row. For a requested
//! cell size of W×H the matrix is partitioned into W×H blocks; blocks
//! are visited in row-major order (left-to-right across a block row,
//! then down), but **within** a block dots are visited column-major
//! (top-to-bottom, then left-to-right) — the same order as
//! [`crate::cell::BrailleCell`] slot numbering.
//!
//! For a 6×4 matrix traversed with W=2, H=3, the visit order is:
//!
//! ```text
//!  columns:   0    1    2    3
//!           ┌────┬────┼────┬────┐
//!  row 0    │  1 │  4 │  7 │ 10 │   block (0,0): 1..6
//!  row 1    │  2 │  5 │  8 │ 11 │   block (0,1): 7..12
//!  row 2    │  3 │  6 │  9 │ 12 │
//!           ├────┼────┼────┼────┤
//!  row 3    │ 13 │ 16 │ 19 │ 22 │   block (1,0): 13..18
//!  row 4    │ 14 │ 17 │ 20 │ 23 │   block (1,1): 19..24
//!  row 5    │ 15 │ 18 │ 21 │ 24 │
//!           └────┴────┴────┴────┘
//! ```
//!
//! This order is a literal wire contract: encoders accumulate exactly
//! W×H consecutive values into one braille cell.
//!
//! ## Partial Blocks
//!
//! Matrices whose dimensions are not multiples of the cell size still
//! yield complete blocks: positions beyond the matrix edge read as
//! intensity 0 (blank). A 7-row matrix traversed with H=3 therefore
//! produces three block rows, the last one two-thirds padding.

use crate::error::RelieveError;

/// # Dot Matrix
///
/// A rectangular grid of `u8` embossing intensities with a fixed
/// row/column count set at construction. Produced once by the
/// rasterizer and read-only during document assembly.
///
/// ## Example
///
/// ```
/// use relieve::matrix::DotMatrix;
///
/// let mut matrix = DotMatrix::new(6, 4);
/// matrix.set_value(0, 0, 1)?;
/// assert_eq!(matrix.value(0, 0)?, 1);
/// assert_eq!(matrix.value(5, 3)?, 0); // unset dots are blank
/// # Ok::<(), relieve::RelieveError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotMatrix {
    rows: usize,
    columns: usize,
    data: Vec<u8>,
}

impl DotMatrix {
    /// Create a matrix of the given dimensions with every dot blank.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            data: vec![0; rows * columns],
        }
    }

    /// Number of dot rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of dot columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// True if the matrix has no dots at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read the intensity at (`row`, `column`).
    ///
    /// ## Errors
    ///
    /// Returns [`RelieveError::InvalidValue`] when either coordinate is
    /// out of range.
    pub fn value(&self, row: usize, column: usize) -> Result<u8, RelieveError> {
        self.index(row, column).map(|i| self.data[i])
    }

    /// Set the intensity at (`row`, `column`).
    ///
    /// ## Errors
    ///
    /// Returns [`RelieveError::InvalidValue`] when either coordinate is
    /// out of range.
    pub fn set_value(&mut self, row: usize, column: usize, value: u8) -> Result<(), RelieveError> {
        let i = self.index(row, column)?;
        self.data[i] = value;
        Ok(())
    }

    /// Intensity at (`row`, `column`), or 0 for positions outside the
    /// matrix. This is the padding rule for partial trailing blocks.
    #[inline]
    fn value_or_blank(&self, row: usize, column: usize) -> u8 {
        if row < self.rows && column < self.columns {
            self.data[row * self.columns + column]
        } else {
            0
        }
    }

    /// Traverse the matrix in cell-consumption order (see module docs).
    ///
    /// The iterator is finite and single-pass; request a new one to
    /// restart. Every block yields exactly `cell_width * cell_height`
    /// values, with out-of-range positions padded as 0.
    ///
    /// ## Errors
    ///
    /// Returns [`RelieveError::InvalidValue`] when either cell dimension
    /// is zero.
    ///
    /// ## Example
    ///
    /// ```
    /// use relieve::matrix::DotMatrix;
    ///
    /// let mut matrix = DotMatrix::new(3, 2);
    /// matrix.set_value(1, 1, 9)?;
    /// let dots: Vec<u8> = matrix.dot_iterator(2, 3)?.collect();
    /// // one 2x3 block, column-major: (0,0) (1,0) (2,0) (0,1) (1,1) (2,1)
    /// assert_eq!(dots, vec![0, 0, 0, 0, 9, 0]);
    /// # Ok::<(), relieve::RelieveError>(())
    /// ```
    pub fn dot_iterator(
        &self,
        cell_width: usize,
        cell_height: usize,
    ) -> Result<DotIterator<'_>, RelieveError> {
        if cell_width == 0 || cell_height == 0 {
            return Err(RelieveError::InvalidValue(format!(
                "cell size {}x{} must be non-zero",
                cell_width, cell_height
            )));
        }
        Ok(DotIterator {
            matrix: self,
            cell_width,
            cell_height,
            block_rows: self.rows.div_ceil(cell_height),
            block_columns: self.columns.div_ceil(cell_width),
            position: 0,
        })
    }

    fn index(&self, row: usize, column: usize) -> Result<usize, RelieveError> {
        if row >= self.rows || column >= self.columns {
            return Err(RelieveError::InvalidValue(format!(
                "dot ({}, {}) out of range for {}x{} matrix",
                row, column, self.rows, self.columns
            )));
        }
        Ok(row * self.columns + column)
    }
}

/// Lazy cell-order traversal over a [`DotMatrix`].
///
/// Created by [`DotMatrix::dot_iterator`]. Yields exactly
/// `block_rows * block_columns * cell_width * cell_height` values.
#[derive(Debug)]
pub struct DotIterator<'a> {
    matrix: &'a DotMatrix,
    cell_width: usize,
    cell_height: usize,
    block_rows: usize,
    block_columns: usize,
    /// Linear position in traversal order.
    position: usize,
}

impl DotIterator<'_> {
    /// Total number of dots this iterator will yield.
    pub fn total_dots(&self) -> usize {
        self.block_rows * self.block_columns * self.cell_width * self.cell_height
    }
}

impl Iterator for DotIterator<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.position >= self.total_dots() {
            return None;
        }

        // Decompose the linear position into (block row, block column,
        // column within block, row within block). Within a block the
        // fastest-varying coordinate is the row (column-major).
        let per_block = self.cell_width * self.cell_height;
        let block = self.position / per_block;
        let within = self.position % per_block;

        let block_row = block / self.block_columns;
        let block_column = block % self.block_columns;
        let dot_column = within / self.cell_height;
        let dot_row = within % self.cell_height;

        let row = block_row * self.cell_height + dot_row;
        let column = block_column * self.cell_width + dot_column;

        self.position += 1;
        Some(self.matrix.value_or_blank(row, column))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_dots() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DotIterator<'_> {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Fill a matrix with 1.. in traversal order for the given cell size.
    fn numbered_in_traversal_order(
        rows: usize,
        columns: usize,
        cell_width: usize,
        cell_height: usize,
    ) -> DotMatrix {
        let mut matrix = DotMatrix::new(rows, columns);
        let mut next = 1u8;
        for block_row in 0..rows.div_ceil(cell_height) {
            for block_column in 0..columns.div_ceil(cell_width) {
                for dot_column in 0..cell_width {
                    for dot_row in 0..cell_height {
                        let row = block_row * cell_height + dot_row;
                        let column = block_column * cell_width + dot_column;
                        if row < rows && column < columns {
                            matrix.set_value(row, column, next).unwrap();
                        }
                        next += 1;
                    }
                }
            }
        }
        matrix
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut matrix = DotMatrix::new(4, 5);
        for row in 0..4 {
            for column in 0..5 {
                matrix.set_value(row, column, (row * 5 + column) as u8).unwrap();
            }
        }
        for row in 0..4 {
            for column in 0..5 {
                assert_eq!(matrix.value(row, column).unwrap(), (row * 5 + column) as u8);
            }
        }
    }

    #[test]
    fn test_out_of_range_access() {
        let mut matrix = DotMatrix::new(3, 3);
        assert!(matches!(
            matrix.value(3, 0),
            Err(RelieveError::InvalidValue(_))
        ));
        assert!(matches!(
            matrix.value(0, 3),
            Err(RelieveError::InvalidValue(_))
        ));
        assert!(matches!(
            matrix.set_value(4, 4, 1),
            Err(RelieveError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_dot_iterator_canonical_order() {
        // The regression scenario: a 6x4 matrix numbered 1..24 in block
        // order must iterate in strictly increasing order with a 2x3 cell.
        let matrix = numbered_in_traversal_order(6, 4, 2, 3);
        let dots: Vec<u8> = matrix.dot_iterator(2, 3).unwrap().collect();
        let expected: Vec<u8> = (1..=24).collect();
        assert_eq!(dots, expected);
    }

    #[test]
    fn test_dot_iterator_yields_every_dot_once() {
        let matrix = numbered_in_traversal_order(6, 4, 2, 3);
        let mut dots: Vec<u8> = matrix.dot_iterator(2, 3).unwrap().collect();
        assert_eq!(dots.len(), 24);
        dots.sort_unstable();
        dots.dedup();
        assert_eq!(dots.len(), 24);
    }

    #[test]
    fn test_dot_iterator_not_row_major() {
        // Guard against regressing to full-matrix row-major order.
        let mut matrix = DotMatrix::new(6, 4);
        matrix.set_value(0, 2, 7).unwrap(); // first dot of block (0,1)
        let dots: Vec<u8> = matrix.dot_iterator(2, 3).unwrap().collect();
        assert_eq!(dots[6], 7);
        assert_eq!(dots[1], 0); // row-major would put (0,1) here
    }

    #[test]
    fn test_partial_blocks_zero_padded() {
        // 7x3 with a 2x3 cell: 3 block rows x 2 block columns, each block
        // still yields 6 dots. 36 total, out-of-range positions blank.
        let mut matrix = DotMatrix::new(7, 3);
        matrix.set_value(6, 2, 5).unwrap(); // bottom-right corner
        let iter = matrix.dot_iterator(2, 3).unwrap();
        assert_eq!(iter.total_dots(), 36);
        let dots: Vec<u8> = iter.collect();
        assert_eq!(dots.len(), 36);

        // Block (2,1) covers rows 6..9, columns 2..4; dot (6,2) is its
        // first yielded value.
        let last_block = &dots[30..36];
        assert_eq!(last_block, &[5, 0, 0, 0, 0, 0]);

        // Everything outside the matrix reads as 0.
        assert_eq!(dots.iter().filter(|&&v| v != 0).count(), 1);
    }

    #[test]
    fn test_iterator_restartable() {
        let matrix = numbered_in_traversal_order(6, 4, 2, 3);
        let first: Vec<u8> = matrix.dot_iterator(2, 3).unwrap().collect();
        let second: Vec<u8> = matrix.dot_iterator(2, 3).unwrap().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        let matrix = DotMatrix::new(3, 3);
        assert!(matches!(
            matrix.dot_iterator(0, 3),
            Err(RelieveError::InvalidValue(_))
        ));
        assert!(matches!(
            matrix.dot_iterator(2, 0),
            Err(RelieveError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_size_hint_exact() {
        let matrix = DotMatrix::new(6, 4);
        let mut iter = matrix.dot_iterator(2, 3).unwrap();
        assert_eq!(iter.size_hint(), (24, Some(24)));
        iter.next();
        assert_eq!(iter.size_hint(), (23, Some(23)));
    }
}
