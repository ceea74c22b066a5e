//! OS gpio driver implementations.
//!
//! This module contains all built-in drivers:
//!
//! - [`sysfs`] - Linux sysfs gpio class enumeration
//! - [`simulation`] - In-memory line table for development and testing
//!
//! # Adding New Drivers
//!
//! 1. Create a new submodule under `drivers/`
//! 2. Implement the `GpioDriver` trait from `sunxi_common::gpio::driver`
//! 3. Register the driver in [`register_all_drivers`]

pub mod simulation;
pub mod sysfs;

use crate::driver_registry::DriverRegistry;

/// Register all built-in drivers.
pub fn register_all_drivers(registry: &mut DriverRegistry) {
    registry.register(sysfs::DRIVER_NAME, sysfs::create_driver);
    registry.register(simulation::DRIVER_NAME, simulation::create_driver);
}
