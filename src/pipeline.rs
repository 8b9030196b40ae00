//! Conversion Pipeline
//!
//! Drives the per-file image-then-WAV fallback and the end-of-run gamma
//! table emission. Every per-file failure is logged and skipped; nothing
//! here aborts the run.

use crate::audio::{AudioOutcome, convert_wav};
use crate::config::Config;
use crate::error::Result;
use crate::gamma::emit_gamma_tables;
use crate::raster::{ImageOutcome, MATRIX_HEIGHT, convert_image};
use log::{debug, info, warn};
use std::io::Write;

/// What a run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub images: usize,
    pub wavs: usize,
    pub failures: usize,
    pub gamma_emitted: bool,
}

impl RunSummary {
    pub fn converted(&self) -> usize {
        self.images + self.wavs
    }
}

/// Convert every configured input, writing tables to `out` and diagnostics
/// to the log. Inputs are tried as images first; anything an image decoder
/// rejects (or that has the wrong geometry) falls back to WAV conversion.
/// If at least one image converted, the gamma tables follow the last input.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    let mut any_image = false;

    for path in &config.inputs {
        match convert_image(path, out, config)? {
            ImageOutcome::Converted => {
                info!("Image OK: {}", path.display());
                any_image = true;
                summary.images += 1;
                continue;
            }
            ImageOutcome::WrongHeight { height } => {
                warn!(
                    "Image must be {} pixels tall: {} is {} pixels tall",
                    MATRIX_HEIGHT,
                    path.display(),
                    height
                );
            }
            ImageOutcome::NotAnImage { message } => {
                debug!("Not an image file: {}: {}", path.display(), message);
            }
        }

        match convert_wav(path, out)? {
            AudioOutcome::Converted { sample_rate } => {
                info!("WAV OK: {} ({} Hz)", path.display(), sample_rate);
                summary.wavs += 1;
            }
            AudioOutcome::NotAWav => {
                warn!("Not a WAV file: {}", path.display());
                summary.failures += 1;
            }
            AudioOutcome::Unreadable { message } => {
                warn!("Can't open {}: {}", path.display(), message);
                summary.failures += 1;
            }
        }
    }

    if any_image {
        emit_gamma_tables(out, config.gamma_exponent())?;
        summary.gamma_emitted = true;
    }

    Ok(summary)
}
