//! # Braille Cell
//!
//! This module defines the braille cell, the smallest embossed unit: a
//! fixed arrangement of dot positions that is looked up as one output
//! byte during document assembly.
//!
//! ## Dot Layout
//!
//! Slots are indexed column-major — top-to-bottom, then left-to-right —
//! matching standard braille dot numbering (dot 1 = slot 0):
//!
//! ```text
//! 6-dot cell          8-dot cell
//! ┌───┬───┐           ┌───┬───┐
//! │ 0 │ 3 │           │ 0 │ 4 │
//! ├───┼───┤           ├───┼───┤
//! │ 1 │ 4 │           │ 1 │ 5 │
//! ├───┼───┤           ├───┼───┤
//! │ 2 │ 5 │           │ 2 │ 6 │
//! └───┴───┘           ├───┼───┤
//!                     │ 3 │ 7 │
//!                     └───┴───┘
//! ```
//!
//! This is the same order the [`crate::matrix::DotMatrix`] dot iterator
//! produces within one cell block, so builders fill slots 0..N straight
//! from the iterator.
//!
//! ## Intensity
//!
//! Slots hold `u8` intensity values. Binary embossing uses 0/1; graded
//! embossers may store strength levels. [`BrailleCell::bit_string`] is
//! only meaningful for binary data (any non-zero slot reads as `'1'`).

use crate::error::RelieveError;

/// Number of dots in a standard braille cell.
pub const STANDARD_DOTS: usize = 6;

/// # Braille Cell
///
/// A fixed-size container of `N` dot intensity slots (6 by default,
/// 8 for embossers with eight-dot cells). There is no implicit
/// resizing: a cell always has exactly `N` slots.
///
/// Cells are built once per cell window during document assembly,
/// encoded through a [`crate::table::BrailleTable`], and discarded.
///
/// ## Example
///
/// ```
/// use relieve::cell::BrailleCell;
///
/// let mut cell: BrailleCell = BrailleCell::new();
/// cell.set(0, 1)?;
/// cell.set(2, 1)?;
/// assert_eq!(cell.bit_string(), "101000");
/// # Ok::<(), relieve::RelieveError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrailleCell<const N: usize = STANDARD_DOTS> {
    slots: [u8; N],
}

impl<const N: usize> BrailleCell<N> {
    /// Create a cell with all slots blank (intensity 0).
    pub fn new() -> Self {
        Self { slots: [0; N] }
    }

    /// Number of dot slots in this cell.
    #[inline]
    pub const fn dots(&self) -> usize {
        N
    }

    /// Read the intensity at `index`.
    ///
    /// ## Errors
    ///
    /// Returns [`RelieveError::InvalidValue`] if `index` is outside
    /// `[0, N)`.
    pub fn get(&self, index: usize) -> Result<u8, RelieveError> {
        self.slots
            .get(index)
            .copied()
            .ok_or_else(|| Self::out_of_range(index))
    }

    /// Set the intensity at `index`.
    ///
    /// ## Errors
    ///
    /// Returns [`RelieveError::InvalidValue`] if `index` is outside
    /// `[0, N)`.
    pub fn set(&mut self, index: usize, value: u8) -> Result<(), RelieveError> {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Self::out_of_range(index)),
        }
    }

    /// Render the cell as a fixed-width bit-pattern string, one
    /// character per slot: non-zero intensity → `'1'`, zero → `'0'`.
    ///
    /// This string is the lookup key for
    /// [`crate::table::BrailleTable::value`].
    ///
    /// ## Precondition
    ///
    /// Only well-defined for binary intensity data. Graded intensities
    /// collapse to `'1'` here; graded encoders must not go through the
    /// bit-string path.
    ///
    /// ## Example
    ///
    /// ```
    /// use relieve::cell::BrailleCell;
    ///
    /// let mut cell: BrailleCell = BrailleCell::new();
    /// cell.set(5, 1)?;
    /// assert_eq!(cell.bit_string(), "000001");
    /// # Ok::<(), relieve::RelieveError>(())
    /// ```
    pub fn bit_string(&self) -> String {
        self.slots
            .iter()
            .map(|&v| if v != 0 { '1' } else { '0' })
            .collect()
    }

    fn out_of_range(index: usize) -> RelieveError {
        RelieveError::InvalidValue(format!(
            "dot index {} out of range for {}-dot cell",
            index, N
        ))
    }
}

impl<const N: usize> Default for BrailleCell<N> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_blank() {
        let cell: BrailleCell = BrailleCell::new();
        assert_eq!(cell.dots(), 6);
        assert_eq!(cell.bit_string(), "000000");
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut cell: BrailleCell = BrailleCell::new();
        for i in 0..6 {
            cell.set(i, (i + 1) as u8).unwrap();
        }
        for i in 0..6 {
            assert_eq!(cell.get(i).unwrap(), (i + 1) as u8);
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let cell: BrailleCell = BrailleCell::new();
        assert!(matches!(
            cell.get(6),
            Err(RelieveError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_set_out_of_range() {
        let mut cell: BrailleCell = BrailleCell::new();
        assert!(matches!(
            cell.set(6, 1),
            Err(RelieveError::InvalidValue(_))
        ));
        // 8-dot cell accepts index 6 and 7
        let mut wide: BrailleCell<8> = BrailleCell::new();
        wide.set(7, 1).unwrap();
        assert!(matches!(
            wide.set(8, 1),
            Err(RelieveError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_bit_string_all_on() {
        let mut cell: BrailleCell = BrailleCell::new();
        for i in 0..6 {
            cell.set(i, 1).unwrap();
        }
        assert_eq!(cell.bit_string(), "111111");
    }

    #[test]
    fn test_bit_string_single_dot() {
        let mut cell: BrailleCell = BrailleCell::new();
        cell.set(2, 1).unwrap();
        assert_eq!(cell.bit_string(), "001000");
    }

    #[test]
    fn test_bit_string_truthiness() {
        // Any non-zero intensity reads as '1'
        let mut cell: BrailleCell = BrailleCell::new();
        cell.set(0, 255).unwrap();
        cell.set(3, 7).unwrap();
        assert_eq!(cell.bit_string(), "100100");
    }

    #[test]
    fn test_eight_dot_bit_string_width() {
        let cell: BrailleCell<8> = BrailleCell::new();
        assert_eq!(cell.bit_string(), "00000000");
    }
}
