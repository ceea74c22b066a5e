//! # sunxi HAL Library
//!
//! Gpio pin capability registration with pluggable OS gpio drivers.
//!
//! Drivers implement the `GpioDriver` trait defined in
//! `sunxi_common::gpio::driver`.
//!
//! # Module Structure
//!
//! - [`registry`] - Logical pins and the name-keyed pin registry
//! - [`registrar`] - One-time capability registration pass
//! - [`driver_registry`] - Driver factory registration
//! - [`drivers`] - OS gpio driver implementations
//! - [`board`] - Board bring-up
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                     sunxi_hal                                    │
//! │  ┌───────────────┐    ┌──────────────┐    ┌───────────────────┐  │
//! │  │ FunctionTable │───►│  Registrar   │◄───│  Driver Registry  │  │
//! │  │(sunxi_common) │    │  (one pass)  │    │                   │  │
//! │  └───────────────┘    └──────┬───────┘    └─────────┬─────────┘  │
//! │                              │ &mut                 │            │
//! │                              ▼                      ▼            │
//! │                      ┌──────────────┐      ┌────────────────┐    │
//! │                      │ PinRegistry  │─────►│  GpioDriver    │    │
//! │                      │ (LogicalPin) │ Arc  │  (OsPin)       │    │
//! │                      └──────────────┘      └────────────────┘    │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

#![deny(warnings)]
#![deny(missing_docs)]

pub mod board;
pub mod driver_registry;
pub mod drivers;
pub mod registrar;
pub mod registry;

// Re-export key types for convenience
pub use crate::board::{Board, BringupError};
pub use crate::driver_registry::DriverRegistry;
pub use crate::registrar::{register, RegistrationError, RegistrationSummary};
pub use crate::registry::{LogicalPin, PinRegistry, PinState};
