//! Line-wrapped fixed-width hex table emission
//!
//! One `HexTableWriter` is created per table and discarded once the final
//! element has been written. Elements stream straight to the underlying
//! writer; there is no buffering and no way to retract a partially-written
//! table.

use crate::error::Result;
use std::io::Write;

/// Emits a fixed-length sequence of unsigned integers as the body of a C
/// array literal: comma/space delimited, wrapped after a fixed number of
/// elements per line, each element zero-padded `0x` hex.
///
/// The column counter starts saturated, so the first element always opens a
/// fresh indented line below the caller's `... = {` declaration. Writing the
/// last element appends the closing ` };` delimiter and a blank line.
pub struct HexTableWriter<'a, W: Write> {
    out: &'a mut W,
    count: usize,
    index: usize,
    digits: usize,
    columns: usize,
    column: usize,
}

impl<'a, W: Write> HexTableWriter<'a, W> {
    /// Start a table of `count` elements, wrapped after `columns` elements
    /// per line, each rendered with `digits` hex digits.
    pub fn new(out: &'a mut W, count: usize, columns: usize, digits: usize) -> Self {
        Self {
            out,
            count,
            index: 0,
            digits,
            columns,
            column: columns,
        }
    }

    /// Write the next element. Must be called exactly `count` times.
    pub fn write(&mut self, value: u32) -> Result<()> {
        if self.index > 0 {
            self.out.write_all(b",")?;
            // Space after the comma unless this element starts a new line
            if self.column < self.columns - 1 {
                self.out.write_all(b" ")?;
            }
        }
        self.column += 1;
        if self.column >= self.columns {
            self.out.write_all(b"\n  ")?;
            self.column = 0;
        }
        write!(self.out, "0x{:0digits$X}", value, digits = self.digits)?;
        self.index += 1;
        if self.index >= self.count {
            write!(self.out, " }};\n\n")?;
        }
        Ok(())
    }

    /// True once the final element (and the closing delimiter) is out.
    pub fn is_finished(&self) -> bool {
        self.index >= self.count
    }
}
