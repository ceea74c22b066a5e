//! Configuration loading traits and types.
//!
//! This module provides a standardized way to load TOML configuration files
//! for the sunxi gpio crates, and the board description consumed at bring-up.
//!
//! # Usage
//!
//! ```rust,no_run
//! use sunxi_common::config::{BoardConfig, ConfigError};
//! use std::path::Path;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = BoardConfig::load_validated(Path::new("board.toml"))?;
//!     println!("Chip: {}", config.board.chip);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::consts::{DEFAULT_DRIVER, DEFAULT_SYSFS_ROOT, PINS_PER_BANK, SERVICE_NAME};
use crate::table::ChipVariant;

/// Error type for configuration loading operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Configuration file not found at specified path.
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// TOML parsing failed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Log level for application logging.
///
/// Uses lowercase serde values for TOML compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Most verbose, detailed tracing information.
    Trace,
    /// Debug information useful during development.
    Debug,
    /// General information about application operation.
    #[default]
    Info,
    /// Warning messages for potentially problematic situations.
    Warn,
    /// Error messages for serious problems.
    Error,
}

impl LogLevel {
    /// Matching `tracing` level.
    pub fn as_tracing(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

fn default_service_name() -> String {
    SERVICE_NAME.to_string()
}

/// Common configuration fields.
///
/// # TOML Example
///
/// ```toml
/// [shared]
/// log_level = "debug"
/// service_name = "sunxi-opi-pc"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedConfig {
    /// Logging verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Application instance identifier.
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            service_name: default_service_name(),
        }
    }
}

impl SharedConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if `service_name` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "service_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// One physical bank of the board's pin registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankConfig {
    /// Bank letter (`A`..`Z`).
    pub bank: char,
    /// Pins in the bank, at most 32.
    pub count: u32,
}

fn default_driver() -> String {
    DEFAULT_DRIVER.to_string()
}

fn default_sysfs_root() -> PathBuf {
    PathBuf::from(DEFAULT_SYSFS_ROOT)
}

/// `[board]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardSection {
    /// Active chip variant.
    pub chip: ChipVariant,

    /// OS gpio driver name (`sysfs` or `simulation`).
    #[serde(default = "default_driver")]
    pub driver: String,

    /// sysfs gpio class directory.
    #[serde(default = "default_sysfs_root")]
    pub sysfs_root: PathBuf,

    /// Pin banks; defaults to the chip variant's layout when empty.
    #[serde(default)]
    pub banks: Vec<BankConfig>,

    /// Optional function table file replacing the built-in one.
    #[serde(default)]
    pub table: Option<PathBuf>,

    /// Pin numbers exposed by the simulation driver (`0..count`).
    #[serde(default)]
    pub simulated_pin_count: Option<u32>,

    /// Pin numbers the simulation driver hides.
    #[serde(default)]
    pub simulated_missing: Vec<u32>,
}

impl BoardSection {
    /// Section with defaults for the given chip.
    pub fn for_chip(chip: ChipVariant) -> Self {
        Self {
            chip,
            driver: default_driver(),
            sysfs_root: default_sysfs_root(),
            banks: Vec::new(),
            table: None,
            simulated_pin_count: None,
            simulated_missing: Vec::new(),
        }
    }

    /// Configured banks, or the chip's own layout when none are listed.
    pub fn effective_banks(&self) -> Vec<BankConfig> {
        if self.banks.is_empty() {
            self.chip
                .banks()
                .iter()
                .map(|&(bank, count)| BankConfig { bank, count })
                .collect()
        } else {
            self.banks.clone()
        }
    }
}

/// Board bring-up configuration.
///
/// # TOML Example
///
/// ```toml
/// [shared]
/// service_name = "sunxi-opi-pc"
///
/// [board]
/// chip = "h3"
/// driver = "sysfs"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Common settings.
    #[serde(default)]
    pub shared: SharedConfig,
    /// Board settings.
    pub board: BoardSection,
}

impl BoardConfig {
    /// Configuration with defaults for the given chip.
    pub fn for_chip(chip: ChipVariant) -> Self {
        Self {
            shared: SharedConfig::default(),
            board: BoardSection::for_chip(chip),
        }
    }

    /// Load and validate a board configuration file.
    pub fn load_validated(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if:
    /// - `service_name` is empty
    /// - `driver` is empty
    /// - a bank letter is not `A`..`Z`, is listed twice, or has a pin count
    ///   of zero or above 32
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;

        if self.board.driver.is_empty() {
            return Err(ConfigError::ValidationError(
                "board.driver cannot be empty".to_string(),
            ));
        }

        let mut seen = Vec::with_capacity(self.board.banks.len());
        for bank in &self.board.banks {
            if !bank.bank.is_ascii_uppercase() {
                return Err(ConfigError::ValidationError(format!(
                    "invalid bank letter '{}'",
                    bank.bank
                )));
            }
            if bank.count == 0 || bank.count > PINS_PER_BANK {
                return Err(ConfigError::ValidationError(format!(
                    "bank {} pin count {} must be 1..={PINS_PER_BANK}",
                    bank.bank, bank.count
                )));
            }
            if seen.contains(&bank.bank) {
                return Err(ConfigError::ValidationError(format!(
                    "bank {} listed twice",
                    bank.bank
                )));
            }
            seen.push(bank.bank);
        }
        Ok(())
    }
}

/// Trait for loading configuration from TOML files.
///
/// # Contract
///
/// - Returns `ConfigError::FileNotFound` if the file does not exist
/// - Returns `ConfigError::ParseError` if TOML syntax is invalid
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Load configuration from a TOML file.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound(path.to_path_buf())
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

// Blanket implementation for all types that implement DeserializeOwned.
impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}
