//! # Embosser Configuration
//!
//! This module defines hardware specifications for supported braille
//! embossers.
//!
//! ## Supported Embossers
//!
//! | Model | Cells/line | Lines/page | Default capability |
//! |-------|------------|------------|--------------------|
//! | Index Everest-D V4 | 48 | 28 | `GRAPHIC` |
//! | Index Basic-D V4 | 44 | 28 | `PLAIN` |
//!
//! ## Braille Geometry
//!
//! Standard (Marburg Medium) braille spacing, shared by both models:
//!
//! ```text
//! ├─ 2.5mm ─┤ dot-to-dot within a cell
//! ├── 6.0mm ──┤ cell-to-cell horizontally
//! ├─── 10.0mm ───┤ line-to-line vertically
//! ```

use crate::dispatch::Capability;
use crate::matrix::DotMatrix;

/// # Embosser Configuration
///
/// Hardware characteristics of one embosser model: page capacity in
/// cells, physical dot geometry, and the capability its firmware
/// declares by default.
///
/// ## Example
///
/// ```
/// use relieve::embosser::EmbosserConfig;
///
/// let config = EmbosserConfig::EVEREST_D_V4;
/// assert_eq!(config.max_matrix_columns(), 96); // 48 cells x 2 dots
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EmbosserConfig {
    /// Embosser model name
    pub name: &'static str,

    /// Braille cells per line
    pub cells_per_line: u16,

    /// Braille lines per page
    pub lines_per_page: u16,

    /// Dot-to-dot spacing within a cell (mm)
    pub dot_pitch_mm: f32,

    /// Cell-to-cell horizontal spacing (mm)
    pub cell_pitch_mm: f32,

    /// Line-to-line vertical spacing (mm)
    pub line_pitch_mm: f32,

    /// The capability tag this model's firmware declares
    pub default_capability: Capability,
}

impl EmbosserConfig {
    /// # Index Everest-D V4
    ///
    /// Sheet-fed embosser with graphic firmware (image mode and
    /// floating dot are both available; image mode is the default).
    pub const EVEREST_D_V4: Self = Self {
        name: "Index Everest-D V4",
        cells_per_line: 48,
        lines_per_page: 28,
        dot_pitch_mm: 2.5,
        cell_pitch_mm: 6.0,
        line_pitch_mm: 10.0,
        default_capability: Capability::Graphic,
    };

    /// # Index Basic-D V4
    ///
    /// Tractor-fed embosser without graphic firmware; plain cell
    /// output only.
    pub const BASIC_D_V4: Self = Self {
        name: "Index Basic-D V4",
        cells_per_line: 44,
        lines_per_page: 28,
        dot_pitch_mm: 2.5,
        cell_pitch_mm: 6.0,
        line_pitch_mm: 10.0,
        default_capability: Capability::Plain,
    };

    /// Look up a built-in profile by name tag.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "everest" | "everest-d-v4" => Some(Self::EVEREST_D_V4),
            "basic" | "basic-d-v4" => Some(Self::BASIC_D_V4),
            _ => None,
        }
    }

    /// Maximum dot columns a matrix may have for this embosser
    /// (2 dot columns per cell).
    #[inline]
    pub fn max_matrix_columns(&self) -> usize {
        self.cells_per_line as usize * 2
    }

    /// Maximum dot rows a matrix may have for this embosser
    /// (3 dot rows per cell).
    #[inline]
    pub fn max_matrix_rows(&self) -> usize {
        self.lines_per_page as usize * 3
    }

    /// Whether a matrix fits on one page of this embosser.
    pub fn fits(&self, matrix: &DotMatrix) -> bool {
        matrix.columns() <= self.max_matrix_columns()
            && matrix.rows() <= self.max_matrix_rows()
    }

    /// Printable width in millimeters.
    #[inline]
    pub fn width_mm(&self) -> f32 {
        self.cells_per_line as f32 * self.cell_pitch_mm
    }

    /// Printable height in millimeters.
    #[inline]
    pub fn height_mm(&self) -> f32 {
        self.lines_per_page as f32 * self.line_pitch_mm
    }
}

impl Default for EmbosserConfig {
    fn default() -> Self {
        Self::EVEREST_D_V4
    }
}

// ============================================================================
// TESTS
// ============================================================================
