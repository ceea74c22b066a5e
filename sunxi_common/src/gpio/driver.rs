//! OS gpio driver trait and error types.
//!
//! This module defines:
//! - `OsPin` trait - Handle to an OS-owned gpio line
//! - `GpioDriver` trait - Interface for pluggable OS gpio backends
//! - `HalError` enum - Error types for driver operations
//! - `DriverFactory` type alias - Factory function type

use crate::config::BoardConfig;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Error types for driver operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HalError {
    /// Driver initialization failed
    #[error("Initialization failed: {0}")]
    InitFailed(String),

    /// Driver not found
    #[error("Driver not found: {0}")]
    DriverNotFound(String),
}

/// Factory function type for creating driver instances.
pub type DriverFactory = fn() -> Box<dyn GpioDriver>;

/// Handle to a gpio line owned by the OS gpio subsystem.
///
/// Handles are shared: the subsystem keeps its own reference and every
/// logical pin bound to the line holds another.
pub trait OsPin: fmt::Debug + Send + Sync {
    /// Numeric identity of the line.
    fn number(&self) -> u32;

    /// Subsystem-specific label (e.g. `gpio68`).
    fn label(&self) -> String;
}

/// Trait defining the interface for OS gpio drivers.
///
/// # Lifecycle
///
/// 1. `init()` - Called once during board bring-up
/// 2. `pin()` - Local table lookups, any number of times
pub trait GpioDriver: Send + Sync {
    /// Returns the driver's unique identifier (e.g., "sysfs", "simulation").
    fn name(&self) -> &'static str;

    /// Returns the driver's semantic version.
    fn version(&self) -> &'static str;

    /// Initialize the driver with the board configuration.
    ///
    /// # Errors
    /// Return `HalError::InitFailed` if the subsystem cannot be enumerated.
    fn init(&mut self, config: &BoardConfig) -> Result<(), HalError>;

    /// Handle for a numeric pin identity, or `None` if the subsystem does
    /// not expose that line.
    ///
    /// This is a local lookup; it never performs device I/O.
    fn pin(&self, number: u32) -> Option<Arc<dyn OsPin>>;

    /// Number of lines the subsystem exposes.
    fn pin_count(&self) -> usize;
}
