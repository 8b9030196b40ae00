//! WAV container parsing
//!
//! Header fields live at fixed byte offsets from the start of the file, on
//! the assumption (matching the target toolchain's asset files) that the fmt
//! chunk immediately follows the RIFF header and the data chunk immediately
//! follows fmt. A chunk-walking reader would accept more files but would not
//! reproduce those offsets, so parsing stays at the byte level.

use crate::error::{HexbakeError, Result};

/// Bounds-checked little-endian reader over a raw file buffer.
pub struct ByteReader<'a> {
    buf: &'a [u8],
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Borrow `len` bytes starting at `offset`.
    pub fn bytes(&self, offset: usize, len: usize) -> Result<&'a [u8]> {
        self.buf
            .get(offset..offset + len)
            .ok_or_else(|| HexbakeError::audio(format!("Read past end of file at offset {}", offset)))
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8> {
        Ok(self.bytes(offset, 1)?[0])
    }

    pub fn read_u16_le(&self, offset: usize) -> Result<u16> {
        let b = self.bytes(offset, 2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_u32_le(&self, offset: usize) -> Result<u32> {
        let b = self.bytes(offset, 4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }
}

/// True if the buffer starts with the literal `RIFF` / `WAVEfmt ` markers.
pub fn has_wav_signature(bytes: &[u8]) -> bool {
    bytes.len() >= 16 && &bytes[0..4] == b"RIFF" && &bytes[8..16] == b"WAVEfmt "
}

/// WAV header fields, read from their fixed offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavHeader {
    pub fmt_chunk_size: u32,
    pub channels: u16,
    pub sample_rate: u32,
    pub bytes_per_frame: u16,
    pub bits_per_sample: u16,
    pub data_len: u32,
}

impl WavHeader {
    /// Parse the header of a buffer whose signature has already been checked
    /// with [`has_wav_signature`].
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let reader = ByteReader::new(bytes);
        let fmt_chunk_size = reader.read_u32_le(16)?;
        let header = Self {
            fmt_chunk_size,
            channels: reader.read_u16_le(22)?,
            sample_rate: reader.read_u32_le(24)?,
            bytes_per_frame: reader.read_u16_le(32)?,
            bits_per_sample: reader.read_u16_le(34)?,
            data_len: reader.read_u32_le(fmt_chunk_size as usize + 24)?,
        };
        header.validate()?;
        Ok(header)
    }

    fn validate(&self) -> Result<()> {
        if self.channels == 0 {
            return Err(HexbakeError::audio("Channel count is 0"));
        }
        if self.bytes_per_frame == 0 {
            return Err(HexbakeError::audio("Bytes per frame is 0"));
        }
        if self.bits_per_sample != 8 && self.bits_per_sample != 16 {
            return Err(HexbakeError::audio(format!(
                "Unsupported bits per sample: {}",
                self.bits_per_sample
            )));
        }
        Ok(())
    }

    /// Offset of the first sample byte.
    pub fn data_offset(&self) -> usize {
        self.fmt_chunk_size as usize + 28
    }

    /// Number of output samples; truncating division.
    pub fn sample_count(&self) -> usize {
        (self.data_len / self.bytes_per_frame as u32) as usize
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a minimal canonical WAV byte buffer: RIFF header, 16-byte fmt
    /// chunk, then a data chunk.
    pub(crate) fn wav_bytes(channels: u16, sample_rate: u32, bits: u16, data: &[u8]) -> Vec<u8> {
        let bytes_per_frame = channels * (bits / 8);
        let mut out = Vec::new();
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + data.len() as u32).to_le_bytes());
        out.extend_from_slice(b"WAVEfmt ");
        out.extend_from_slice(&16u32.to_le_bytes()); // fmt chunk size
        out.extend_from_slice(&1u16.to_le_bytes()); // PCM
        out.extend_from_slice(&channels.to_le_bytes());
        out.extend_from_slice(&sample_rate.to_le_bytes());
        out.extend_from_slice(&(sample_rate * bytes_per_frame as u32).to_le_bytes());
        out.extend_from_slice(&bytes_per_frame.to_le_bytes());
        out.extend_from_slice(&bits.to_le_bytes());
        out.extend_from_slice(b"data");
        out.extend_from_slice(&(data.len() as u32).to_le_bytes());
        out.extend_from_slice(data);
        out
    }

    #[test]
    fn test_byte_reader_bounds() {
        let reader = ByteReader::new(&[1, 2, 3]);
        assert_eq!(reader.read_u8(2).unwrap(), 3);
        assert!(reader.read_u8(3).is_err());
        assert!(reader.read_u16_le(2).is_err());
        assert!(reader.read_u32_le(0).is_err());
    }

    #[test]
    fn test_byte_reader_little_endian() {
        let reader = ByteReader::new(&[0x34, 0x12, 0x78, 0x56]);
        assert_eq!(reader.read_u16_le(0).unwrap(), 0x1234);
        assert_eq!(reader.read_u32_le(0).unwrap(), 0x5678_1234);
    }

    #[test]
    fn test_signature_check() {
        assert!(has_wav_signature(&wav_bytes(1, 8000, 8, &[0])));
        assert!(!has_wav_signature(b"RIFFxxxxWAVEFMT x"));
        assert!(!has_wav_signature(b"FORMxxxxWAVEfmt x"));
        assert!(!has_wav_signature(b"RIFF")); // too short
        assert!(!has_wav_signature(b""));
    }

    #[test]
    fn test_header_parse() {
        let bytes = wav_bytes(2, 22050, 16, &[0; 12]);
        let header = WavHeader::parse(&bytes).unwrap();
        assert_eq!(header.fmt_chunk_size, 16);
        assert_eq!(header.channels, 2);
        assert_eq!(header.sample_rate, 22050);
        assert_eq!(header.bytes_per_frame, 4);
        assert_eq!(header.bits_per_sample, 16);
        assert_eq!(header.data_len, 12);
        assert_eq!(header.data_offset(), 44);
        assert_eq!(header.sample_count(), 3);
    }

    #[test]
    fn test_sample_count_truncates() {
        // 13 data bytes at 4 bytes per frame: 3 whole samples
        let bytes = wav_bytes(2, 8000, 16, &[0; 13]);
        let header = WavHeader::parse(&bytes).unwrap();
        assert_eq!(header.sample_count(), 3);
    }

    #[test]
    fn test_header_rejects_zero_channels() {
        let mut bytes = wav_bytes(1, 8000, 8, &[0]);
        bytes[22..24].copy_from_slice(&0u16.to_le_bytes());
        assert!(WavHeader::parse(&bytes).is_err());
    }

    #[test]
    fn test_header_rejects_odd_bit_depths() {
        let mut bytes = wav_bytes(1, 8000, 8, &[0]);
        bytes[34..36].copy_from_slice(&24u16.to_le_bytes());
        assert!(WavHeader::parse(&bytes).is_err());
    }

    #[test]
    fn test_truncated_header_is_error() {
        let bytes = wav_bytes(1, 8000, 8, &[0]);
        assert!(WavHeader::parse(&bytes[..20]).is_err());
    }
}
