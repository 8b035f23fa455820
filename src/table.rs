//! # Braille Table Lookup
//!
//! Different embosser firmwares expect different output bytes for the
//! same dot pattern. This module loads that mapping from an external
//! table resource and resolves a cell's bit-pattern key (see
//! [`crate::cell::BrailleCell::bit_string`]) to the byte the target
//! embosser expects.
//!
//! ## Table Formats
//!
//! The loader is selected by file extension:
//!
//! | Extension | Format |
//! |-----------|--------|
//! | `.properties` | flat `key=value` lines, decimal byte values |
//! | `.json` | flat object of string keys to byte numbers |
//!
//! Any other extension fails with
//! [`RelieveError::UnsupportedFormat`]. The format set is closed: every
//! loader that exists here actually works.
//!
//! ## Properties Format
//!
//! ```text
//! # Index direct protocol, 6-dot
//! 100000=1
//! 110000=3
//! 111111=63
//! ```
//!
//! Keys are fixed-length bit-pattern strings, one character per dot
//! slot in cell order. Values are decimal bytes. Lines starting with
//! `#` or `!` are comments. A key repeated later in the file replaces
//! the earlier entry (standard properties-file behavior).
//!
//! ## Error Contract
//!
//! A key queried during assembly that is absent from the table is a
//! fatal configuration error ([`RelieveError::MissingKey`]) — lookups
//! never fall back to a default byte.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::RelieveError;

/// # Braille Table
///
/// An immutable mapping from bit-pattern keys to embosser output
/// bytes. Loaded once at builder construction time and never mutated;
/// builders share it by reference.
///
/// ## Example
///
/// ```
/// use relieve::table::BrailleTable;
///
/// let table = BrailleTable::from_properties_str("100000=1\n111111=63\n")?;
/// assert_eq!(table.value("111111")?, 63);
/// assert!(table.value("000001").is_err());
/// # Ok::<(), relieve::RelieveError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrailleTable {
    entries: HashMap<String, u8>,
}

impl BrailleTable {
    /// Load a table from a resource path, choosing the loader by file
    /// extension.
    ///
    /// ## Errors
    ///
    /// - [`RelieveError::UnsupportedFormat`] for an unrecognized (or
    ///   missing) extension
    /// - [`RelieveError::Io`] when the file cannot be read
    /// - [`RelieveError::InvalidValue`] for malformed table contents
    pub fn resolve<P: AsRef<Path>>(path: P) -> Result<Self, RelieveError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "properties" => Self::from_properties_str(&fs::read_to_string(path)?),
            "json" => Self::from_json_str(&fs::read_to_string(path)?),
            _ => Err(RelieveError::UnsupportedFormat(format!(
                "no table loader for '{}' (supported: .properties, .json)",
                path.display()
            ))),
        }
    }

    /// Parse a `.properties`-style table from text.
    ///
    /// Blank lines and `#`/`!` comments are skipped; each remaining
    /// line must be `bitpattern=decimal` (a `:` separator is also
    /// accepted). Later duplicates replace earlier entries.
    pub fn from_properties_str(text: &str) -> Result<Self, RelieveError> {
        let mut entries = HashMap::new();

        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let (key, value) = line
                .split_once('=')
                .or_else(|| line.split_once(':'))
                .ok_or_else(|| {
                    RelieveError::InvalidValue(format!(
                        "table line {}: expected 'key=value', got '{}'",
                        number + 1,
                        line
                    ))
                })?;

            let key = key.trim();
            let value: u8 = value.trim().parse().map_err(|_| {
                RelieveError::InvalidValue(format!(
                    "table line {}: '{}' is not a byte value",
                    number + 1,
                    value.trim()
                ))
            })?;

            entries.insert(key.to_string(), value);
        }

        Ok(Self { entries })
    }

    /// Parse a JSON table: a flat object of bit-pattern keys to byte
    /// numbers, e.g. `{"100000": 1, "111111": 63}`.
    pub fn from_json_str(text: &str) -> Result<Self, RelieveError> {
        let entries: HashMap<String, u8> = serde_json::from_str(text).map_err(|e| {
            RelieveError::InvalidValue(format!("invalid JSON table: {}", e))
        })?;
        Ok(Self { entries })
    }

    /// Resolve a bit-pattern key to its output byte.
    ///
    /// ## Errors
    ///
    /// Returns [`RelieveError::MissingKey`] if the key is not in the
    /// table. There is no default byte.
    pub fn value(&self, bit_pattern: &str) -> Result<u8, RelieveError> {
        self.entries
            .get(bit_pattern)
            .copied()
            .ok_or_else(|| RelieveError::MissingKey(bit_pattern.to_string()))
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
