//! Board bring-up.
//!
//! `Board` ties the pieces together: it builds the pin registry from the
//! configured banks, creates and initializes the OS gpio driver, selects the
//! function table and runs the registrar. Any failure aborts bring-up; the
//! board must not be used to drive gpio afterwards.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use sunxi_common::config::{BoardConfig, ConfigError};
use sunxi_common::gpio::driver::{GpioDriver, HalError};
use sunxi_common::table::{FunctionTable, TableError};
use thiserror::Error;
use tracing::info;

use crate::driver_registry::DriverRegistry;
use crate::registrar::{self, RegistrationError, RegistrationSummary};
use crate::registry::{PinRegistry, RegistryError};

/// Bring-up failure.
#[derive(Debug, Error)]
pub enum BringupError {
    /// Configuration or table file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Built-in function table is malformed.
    #[error(transparent)]
    Table(#[from] TableError),

    /// Driver lookup or initialization failed.
    #[error(transparent)]
    Driver(#[from] HalError),

    /// Pin registry could not be built.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Capability registration failed.
    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

/// A board with gpio capabilities registered.
pub struct Board {
    config: BoardConfig,
    table: FunctionTable,
    pins: Arc<PinRegistry>,
    driver: Box<dyn GpioDriver>,
    summary: RegistrationSummary,
}

impl Board {
    /// Bring up gpio support for the configured board.
    ///
    /// Relative table paths are resolved against `config_dir`.
    ///
    /// # Errors
    /// Returns the first failure; nothing is partially registered.
    pub fn bring_up(
        config: BoardConfig,
        config_dir: &Path,
        drivers: &DriverRegistry,
    ) -> Result<Self, BringupError> {
        let banks = config.board.effective_banks();
        let mut pins = PinRegistry::with_banks(&banks)?;
        info!(
            "Pin registry built: {} pins in {} banks",
            pins.len(),
            banks.len()
        );

        let mut driver = drivers.create_driver(&config.board.driver)?;
        driver.init(&config)?;
        info!(
            "Driver '{}' v{} ready: {} lines",
            driver.name(),
            driver.version(),
            driver.pin_count()
        );

        let table = Self::load_table(&config, config_dir)?;
        let summary = registrar::register(&table, &mut pins, driver.as_ref())?;

        Ok(Self {
            config,
            table,
            pins: Arc::new(pins),
            driver,
            summary,
        })
    }

    /// Function table for the configured chip, or the override file.
    pub fn load_table(config: &BoardConfig, config_dir: &Path) -> Result<FunctionTable, BringupError> {
        match &config.board.table {
            Some(path) => {
                let full_path = resolve_path(config_dir, path);
                info!("Loading function table from {:?}", full_path);
                Ok(FunctionTable::load(&full_path)?)
            }
            None => {
                info!("Using built-in {} function table", config.board.chip);
                Ok(config.board.chip.function_table()?)
            }
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Registered function table.
    pub fn table(&self) -> &FunctionTable {
        &self.table
    }

    /// Configured pin registry, shareable with readers.
    pub fn pins(&self) -> &Arc<PinRegistry> {
        &self.pins
    }

    /// OS gpio driver.
    pub fn driver(&self) -> &dyn GpioDriver {
        self.driver.as_ref()
    }

    /// Registration outcome.
    pub fn summary(&self) -> &RegistrationSummary {
        &self.summary
    }
}

/// Resolve a path relative to the config directory.
fn resolve_path(config_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        config_dir.join(path)
    }
}
