//! Raster Image Module
//!
//! Decodes raster images and quantizes them into RGB565 pixel tables for the
//! target LED matrix.

pub mod convert;

pub use convert::{ImageOutcome, MATRIX_HEIGHT, convert_image, pack_rgb565};
