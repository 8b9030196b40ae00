//! Formatted Hex Output Module
//!
//! Serializes unsigned integer sequences as comma-delimited, line-wrapped,
//! fixed-width C array literals.

pub mod hex;

pub use hex::HexTableWriter;

use std::path::Path;

/// Identifier prefix for a generated table: the input's base file name with
/// path and extension stripped. No sanitization is applied; a file name that
/// is not a valid C identifier produces an invalid one.
pub fn table_prefix(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
