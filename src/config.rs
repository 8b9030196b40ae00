//! Configuration management for table generation

use crate::error::{HexbakeError, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub image: ImageConfig,
    pub gamma: GammaConfig,
    pub verbose: bool,
    pub inputs: Vec<PathBuf>,
    pub output_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Value emitted for the per-image FPS #define
    pub frame_rate: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GammaConfig {
    /// Exponent of the brightness correction power curve
    pub exponent: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image: ImageConfig::default(),
            gamma: GammaConfig::default(),
            verbose: false,
            inputs: Vec::new(),
            output_path: None,
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self { frame_rate: 30 }
    }
}

impl Default for GammaConfig {
    fn default() -> Self {
        Self { exponent: 2.7 }
    }
}

impl Config {
    /// Get image frame rate (convenience method)
    pub fn frame_rate(&self) -> u32 {
        self.image.frame_rate
    }

    /// Get gamma curve exponent (convenience method)
    pub fn gamma_exponent(&self) -> f64 {
        self.gamma.exponent
    }

    /// Get verbose mode (convenience method)
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[derive(Debug, Parser, Clone)]
#[command(name = "hexbake", about = "PROGMEM hex table generator", version)]
pub struct Args {
    #[arg(required = true, help = "Input files; each is tried as an image first, then as a WAV")]
    pub inputs: Vec<PathBuf>,

    #[arg(short = 'o', long = "output", help = "Write generated tables to this file instead of stdout")]
    pub output: Option<PathBuf>,

    #[arg(long = "fps", help = "Frame rate emitted for image tables")]
    pub fps: Option<u32>,

    #[arg(long = "gamma", help = "Gamma correction curve exponent")]
    pub gamma: Option<f64>,

    #[arg(short = 'c', long = "config", help = "Config file path (TOML format)")]
    pub config_file: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", help = "Enable verbose output mode")]
    pub verbose: bool,
}

impl Config {
    /// Create config from command line arguments
    pub fn from_args() -> Result<Self> {
        let args = Args::parse();
        Self::from_args_and_config(args)
    }

    /// Create config from command line arguments and config file
    pub fn from_args_and_config(args: Args) -> Result<Self> {
        // First load config file (if provided)
        let mut config = if let Some(config_path) = &args.config_file {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        // Command line arguments override config file settings
        config.inputs = args.inputs;
        config.output_path = args.output;
        if let Some(fps) = args.fps {
            config.image.frame_rate = fps;
        }
        if let Some(exponent) = args.gamma {
            config.gamma.exponent = exponent;
        }
        config.verbose = args.verbose;

        // Validate config
        config.validate()?;

        Ok(config)
    }

    /// Load config from TOML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| HexbakeError::config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| HexbakeError::config(format!("Failed to parse config file: {}", e)))
    }

    /// Validate configuration parameter validity
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(HexbakeError::config("No input files given"));
        }

        if self.image.frame_rate == 0 {
            return Err(HexbakeError::config("Frame rate must be greater than 0"));
        }
        if self.image.frame_rate > 1000 {
            return Err(HexbakeError::config("Frame rate cannot exceed 1000"));
        }

        if !self.gamma.exponent.is_finite() || self.gamma.exponent <= 0.0 {
            return Err(HexbakeError::config("Gamma exponent must be a positive finite number"));
        }

        Ok(())
    }

    /// Save config to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| HexbakeError::config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| HexbakeError::config(format!("Failed to write config file: {}", e)))
    }
}
