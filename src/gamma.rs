//! Gamma correction lookup tables
//!
//! Two power-curve brightness tables sized for 5-bit and 6-bit color
//! channels. Emitted once per run, after all inputs, if any image converted.

use crate::error::Result;
use crate::format::HexTableWriter;
use std::io::Write;

/// Entry counts for the 5-bit and 6-bit channel tables.
pub const GAMMA5_SIZE: usize = 32;
pub const GAMMA6_SIZE: usize = 64;

/// Map table index `i` of a `size`-entry table onto [0, 255] through a
/// power curve. Round-half-up; `int(x + 0.5)` semantics on a non-negative
/// domain, not banker's rounding.
pub fn gamma_value(i: usize, size: usize, exponent: f64) -> u8 {
    let top = (size - 1) as f64;
    ((i as f64 / top).powf(exponent) * 255.0 + 0.5).floor() as u8
}

/// Build one complete gamma table.
pub fn gamma_table(size: usize, exponent: f64) -> Vec<u8> {
    (0..size).map(|i| gamma_value(i, size, exponent)).collect()
}

/// Emit the 5-bit table then the 6-bit table as `uint8_t` array literals.
pub fn emit_gamma_tables<W: Write>(out: &mut W, exponent: f64) -> Result<()> {
    for (name, size) in [("gamma5", GAMMA5_SIZE), ("gamma6", GAMMA6_SIZE)] {
        write!(out, "const uint8_t PROGMEM {}[] = {{", name)?;
        let mut table = HexTableWriter::new(out, size, 12, 2);
        for value in gamma_table(size, exponent) {
            table.write(value as u32)?;
        }
    }
    Ok(())
}
