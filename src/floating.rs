//! # Floating Dot Set
//!
//! Some embossers (Index Everest-D V4 in graphic firmware and newer)
//! can place dots at arbitrary continuous coordinates instead of a
//! fixed cell grid. This module holds the sparse representation the
//! rasterizer produces for that mode: valued points in physical
//! millimeters, kept in insertion order.
//!
//! Insertion order is part of the wire contract — the floating-dot
//! builder serializes points exactly in the order they were added, and
//! nothing is deduplicated.

/// One embossing point at continuous physical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingDot {
    /// Horizontal position in millimeters from the left print edge.
    pub x_mm: f32,
    /// Vertical position in millimeters from the top of the area.
    pub y_mm: f32,
    /// Embossing intensity (0 = blank, non-zero = emboss; graded
    /// embossers interpret the magnitude as dot height).
    pub value: u8,
}

/// # Floating Point Set
///
/// An insertion-ordered collection of [`FloatingDot`]s. Populated
/// incrementally by the rasterizer, consumed once by the floating-dot
/// document builder.
///
/// ## Example
///
/// ```
/// use relieve::floating::FloatingPointSet;
///
/// let mut points = FloatingPointSet::new();
/// points.push(10.0, 5.5, 1);
/// points.push(10.0, 5.5, 1); // duplicates are kept
/// assert_eq!(points.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloatingPointSet {
    dots: Vec<FloatingDot>,
}

impl FloatingPointSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point. Order is preserved; no deduplication.
    pub fn push(&mut self, x_mm: f32, y_mm: f32, value: u8) {
        self.dots.push(FloatingDot { x_mm, y_mm, value });
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    /// True if no points have been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Iterate points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FloatingDot> {
        self.dots.iter()
    }
}

impl<'a> IntoIterator for &'a FloatingPointSet {
    type Item = &'a FloatingDot;
    type IntoIter = std::slice::Iter<'a, FloatingDot>;

    fn into_iter(self) -> Self::IntoIter {
        self.dots.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
