//! Simulation driver.
//!
//! Exposes an in-memory set of gpio lines so registration can run on hosts
//! without sunxi hardware.

use std::collections::BTreeMap;
use std::sync::Arc;

use sunxi_common::config::BoardConfig;
use sunxi_common::consts::PINS_PER_BANK;
use sunxi_common::gpio::driver::{GpioDriver, HalError, OsPin};
use tracing::{debug, info};

/// Registered driver name.
pub const DRIVER_NAME: &str = "simulation";

/// Simulated gpio line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedPin {
    number: u32,
}

impl OsPin for SimulatedPin {
    fn number(&self) -> u32 {
        self.number
    }

    fn label(&self) -> String {
        format!("sim{}", self.number)
    }
}

/// Simulation driver implementing the GpioDriver trait.
#[derive(Debug, Default)]
pub struct SimulationDriver {
    lines: BTreeMap<u32, Arc<SimulatedPin>>,
    initialized: bool,
}

impl SimulationDriver {
    /// Create an uninitialized driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a driver exposing exactly `numbers`.
    pub fn with_numbers(numbers: impl IntoIterator<Item = u32>) -> Self {
        let mut driver = Self::new();
        driver.populate(numbers);
        driver
    }

    fn populate(&mut self, numbers: impl IntoIterator<Item = u32>) {
        self.lines = numbers
            .into_iter()
            .map(|number| (number, Arc::new(SimulatedPin { number })))
            .collect();
        self.initialized = true;
    }
}

/// One past the highest conventional number of the configured banks.
fn default_pin_count(config: &BoardConfig) -> u32 {
    config
        .board
        .effective_banks()
        .iter()
        .map(|b| (b.bank as u32 - 'A' as u32) * PINS_PER_BANK + b.count)
        .max()
        .unwrap_or(0)
}

impl GpioDriver for SimulationDriver {
    fn name(&self) -> &'static str {
        DRIVER_NAME
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn init(&mut self, config: &BoardConfig) -> Result<(), HalError> {
        let count = config
            .board
            .simulated_pin_count
            .unwrap_or_else(|| default_pin_count(config));
        let missing = &config.board.simulated_missing;

        self.populate((0..count).filter(|n| !missing.contains(n)));

        info!(
            "Simulation driver initialized: {} lines ({} hidden)",
            self.lines.len(),
            missing.len()
        );
        debug!("Hidden lines: {:?}", missing);
        Ok(())
    }

    fn pin(&self, number: u32) -> Option<Arc<dyn OsPin>> {
        if !self.initialized {
            return None;
        }
        self.lines
            .get(&number)
            .map(|line| Arc::clone(line) as Arc<dyn OsPin>)
    }

    fn pin_count(&self) -> usize {
        self.lines.len()
    }
}

/// Factory function to create a simulation driver instance.
pub fn create_driver() -> Box<dyn GpioDriver> {
    Box::new(SimulationDriver::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sunxi_common::table::ChipVariant;

    #[test]
    fn uninitialized_exposes_nothing() {
        let driver = SimulationDriver::new();
        assert!(driver.pin(0).is_none());
        assert_eq!(driver.pin_count(), 0);
    }

    #[test]
    fn default_count_covers_chip_banks() {
        let mut driver = SimulationDriver::new();
        driver.init(&BoardConfig::for_chip(ChipVariant::H3)).unwrap();
        // Bank L (index 11) holds 12 pins on the H3.
        assert_eq!(driver.pin_count(), 11 * 32 + 12);
        assert!(driver.pin(363).is_some());
        assert!(driver.pin(364).is_none());
    }

    #[test]
    fn hidden_lines_are_missing() {
        let mut config = BoardConfig::for_chip(ChipVariant::H3);
        config.board.simulated_pin_count = Some(32);
        config.board.simulated_missing = vec![6];

        let mut driver = SimulationDriver::new();
        driver.init(&config).unwrap();
        assert_eq!(driver.pin_count(), 31);
        assert!(driver.pin(6).is_none());
        assert_eq!(driver.pin(7).unwrap().label(), "sim7");
    }

    #[test]
    fn handles_are_shared() {
        let driver = SimulationDriver::with_numbers([4]);
        let a = driver.pin(4).unwrap();
        let b = driver.pin(4).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
