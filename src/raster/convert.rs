//! Image to RGB565 pixel table conversion

use crate::config::Config;
use crate::error::Result;
use crate::format::{HexTableWriter, table_prefix};
use std::io::Write;
use std::path::Path;

/// Required image height, matching the target device's pixel matrix rows.
pub const MATRIX_HEIGHT: u32 = 10;

/// How an image conversion attempt ended. The two failure arms are distinct
/// so the driver can tell "not this format" from "this format, but invalid".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    Converted,
    WrongHeight { height: u32 },
    NotAnImage { message: String },
}

/// Pack an 8-bit RGB triple into RGB565 (RRRRRGGGGGGBBBBB).
pub fn pack_rgb565(r: u8, g: u8, b: u8) -> u16 {
    (((r & 0xF8) as u16) << 8) | (((g & 0xFC) as u16) << 3) | ((b >> 3) as u16)
}

/// Decode `path`, quantize it to RGB565, and emit an FPS `#define` plus a
/// `uint16_t` pixel table to `out`.
///
/// Pixels are emitted column-major (outer loop over x) because the device
/// scans its matrix one column at a time. `Err` is reserved for output
/// stream failures; everything about the input itself is an [`ImageOutcome`].
pub fn convert_image<W: Write>(path: &Path, out: &mut W, config: &Config) -> Result<ImageOutcome> {
    let decoded = match image::open(path) {
        Ok(decoded) => decoded,
        Err(e) => {
            return Ok(ImageOutcome::NotAnImage {
                message: e.to_string(),
            });
        }
    };

    if decoded.height() != MATRIX_HEIGHT {
        return Ok(ImageOutcome::WrongHeight {
            height: decoded.height(),
        });
    }

    let rgb = decoded.to_rgb8();
    let prefix = table_prefix(path);
    let num_words = (rgb.width() * rgb.height()) as usize;

    write!(
        out,
        "#define {prefix}FPS {fps}\n\nconst uint16_t PROGMEM {prefix}PixelData[] = {{",
        prefix = prefix,
        fps = config.frame_rate(),
    )?;

    let mut table = HexTableWriter::new(out, num_words, 9, 4);
    for x in 0..rgb.width() {
        for y in 0..rgb.height() {
            let pixel = rgb.get_pixel(x, y);
            table.write(pack_rgb565(pixel[0], pixel[1], pixel[2]) as u32)?;
        }
    }

    Ok(ImageOutcome::Converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    fn save_image(dir: &TempDir, name: &str, img: &RgbImage) -> std::path::PathBuf {
        let path = dir.path().join(name);
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_pack_rgb565_exact_values() {
        assert_eq!(pack_rgb565(248, 252, 255), 0xFFFF);
        assert_eq!(pack_rgb565(255, 255, 255), 0xFFFF);
        assert_eq!(pack_rgb565(0, 0, 0), 0x0000);
        assert_eq!(pack_rgb565(255, 0, 0), 0xF800);
        assert_eq!(pack_rgb565(0, 255, 0), 0x07E0);
        assert_eq!(pack_rgb565(0, 0, 255), 0x001F);
    }

    #[test]
    fn test_pack_rgb565_drops_low_bits() {
        // Bits below the kept 5/6/5 never reach the output
        assert_eq!(pack_rgb565(7, 3, 7), 0x0000);
        assert_eq!(pack_rgb565(8, 4, 8), pack_rgb565(15, 7, 15));
    }

    #[test]
    fn test_wrong_height_is_typed_outcome() {
        let dir = TempDir::new().unwrap();
        let path = save_image(&dir, "tall.png", &RgbImage::new(4, 12));

        let mut out = Vec::new();
        let outcome = convert_image(&path, &mut out, &Config::default()).unwrap();
        assert_eq!(outcome, ImageOutcome::WrongHeight { height: 12 });
        assert!(out.is_empty(), "nothing may be emitted for a rejected image");
    }

    #[test]
    fn test_non_image_is_typed_outcome() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "definitely not pixels").unwrap();

        let mut out = Vec::new();
        let outcome = convert_image(&path, &mut out, &Config::default()).unwrap();
        assert!(matches!(outcome, ImageOutcome::NotAnImage { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_single_column_black_image_golden_output() {
        let dir = TempDir::new().unwrap();
        let path = save_image(&dir, "black.png", &RgbImage::new(1, 10));

        let mut out = Vec::new();
        let outcome = convert_image(&path, &mut out, &Config::default()).unwrap();
        assert_eq!(outcome, ImageOutcome::Converted);

        let expected = "#define blackFPS 30\n\n\
                        const uint16_t PROGMEM blackPixelData[] = {\n  \
                        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,\n  \
                        0x0000 };\n\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_column_major_pixel_order() {
        // 2x10 image: left column red, right column blue. Column-major
        // emission puts all ten red words before any blue word.
        let mut img = RgbImage::new(2, 10);
        for y in 0..10 {
            img.put_pixel(0, y, Rgb([255, 0, 0]));
            img.put_pixel(1, y, Rgb([0, 0, 255]));
        }
        let dir = TempDir::new().unwrap();
        let path = save_image(&dir, "stripes.png", &img);

        let mut out = Vec::new();
        convert_image(&path, &mut out, &Config::default()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let first_blue = text.find("0x001F").unwrap();
        let last_red = text.rfind("0xF800").unwrap();
        assert!(last_red < first_blue);
        assert_eq!(text.matches("0xF800").count(), 10);
        assert_eq!(text.matches("0x001F").count(), 10);
    }

    #[test]
    fn test_frame_rate_from_config() {
        let dir = TempDir::new().unwrap();
        let path = save_image(&dir, "anim.png", &RgbImage::new(1, 10));

        let mut config = Config::default();
        config.image.frame_rate = 24;

        let mut out = Vec::new();
        convert_image(&path, &mut out, &config).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("#define animFPS 24\n"));
    }
}
