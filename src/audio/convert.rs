//! WAV to 8-bit unsigned audio table conversion

use crate::audio::wav::{ByteReader, WavHeader, has_wav_signature};
use crate::error::{HexbakeError, Result};
use crate::format::{HexTableWriter, table_prefix};
use std::io::Write;
use std::path::Path;

/// How a WAV conversion attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioOutcome {
    Converted { sample_rate: u32 },
    NotAWav,
    Unreadable { message: String },
}

/// Parse `path` as a WAV file, downmix its channels to 8-bit unsigned mono,
/// and emit a sample-rate `#define` plus a `uint8_t` audio table to `out`.
///
/// A file that fails after its declaration line has been emitted leaves an
/// unterminated array literal on `out`; the element stream cannot be
/// retracted. `Err` is reserved for output stream failures.
pub fn convert_wav<W: Write>(path: &Path, out: &mut W) -> Result<AudioOutcome> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            return Ok(AudioOutcome::Unreadable {
                message: e.to_string(),
            });
        }
    };

    if !has_wav_signature(&bytes) {
        return Ok(AudioOutcome::NotAWav);
    }

    let header = match WavHeader::parse(&bytes) {
        Ok(header) => header,
        Err(e) => {
            return Ok(AudioOutcome::Unreadable {
                message: e.to_string(),
            });
        }
    };

    let prefix = table_prefix(path);
    write!(
        out,
        "#define {prefix}SampleRate {rate}\n\nconst uint8_t PROGMEM {prefix}AudioData[] = {{",
        prefix = prefix,
        rate = header.sample_rate,
    )?;

    let mut table = HexTableWriter::new(out, header.sample_count(), 12, 2);
    match emit_samples(&header, &ByteReader::new(&bytes), &mut table) {
        Ok(()) => Ok(AudioOutcome::Converted {
            sample_rate: header.sample_rate,
        }),
        // Truncated sample data: report the file, keep whatever was emitted
        Err(HexbakeError::Audio { message }) => Ok(AudioOutcome::Unreadable { message }),
        Err(e) => Err(e),
    }
}

/// Downmix every frame to one 8-bit unsigned value and stream it out.
///
/// Sub-samples are summed across channels before scaling; a 16-bit
/// sub-sample contributes `low + (high << 8)`. The divisor folds the
/// channel average and the 16-to-8-bit reduction into one truncating
/// division.
fn emit_samples<W: Write>(
    header: &WavHeader,
    reader: &ByteReader<'_>,
    table: &mut HexTableWriter<'_, W>,
) -> Result<()> {
    let divisor = if header.bits_per_sample == 16 {
        header.channels as u32 * 256
    } else {
        header.channels as u32
    };

    let mut offset = header.data_offset();
    for _ in 0..header.sample_count() {
        let mut sum: u32 = 0;
        for _ in 0..header.channels {
            if header.bits_per_sample == 8 {
                sum += reader.read_u8(offset)? as u32;
                offset += 1;
            } else {
                let low = reader.read_u8(offset)? as u32;
                let high = reader.read_u8(offset + 1)? as u32;
                sum += low + (high << 8);
                offset += 2;
            }
        }
        table.write(sum / divisor)?;
    }
    Ok(())
}
