//! Error Types - Simplified

use std::fmt;

/// Main error type
#[derive(Debug, Clone)]
pub enum HexbakeError {
    Image { message: String },
    Audio { message: String },
    Config { message: String },
    Io { message: String },
}

impl fmt::Display for HexbakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image { message } => write!(f, "Image error: {}", message),
            Self::Audio { message } => write!(f, "Audio error: {}", message),
            Self::Config { message } => write!(f, "Config error: {}", message),
            Self::Io { message } => write!(f, "IO error: {}", message),
        }
    }
}

impl std::error::Error for HexbakeError {}

impl HexbakeError {
    pub fn image<S: Into<String>>(msg: S) -> Self { Self::Image { message: msg.into() } }
    pub fn audio<S: Into<String>>(msg: S) -> Self { Self::Audio { message: msg.into() } }
    pub fn config<S: Into<String>>(msg: S) -> Self { Self::Config { message: msg.into() } }
    pub fn io<S: Into<String>>(msg: S) -> Self { Self::Io { message: msg.into() } }
}

pub type Result<T> = std::result::Result<T, HexbakeError>;

impl From<std::io::Error> for HexbakeError {
    fn from(err: std::io::Error) -> Self { Self::io(err.to_string()) }
}

impl From<image::ImageError> for HexbakeError {
    fn from(err: image::ImageError) -> Self { Self::image(err.to_string()) }
}
