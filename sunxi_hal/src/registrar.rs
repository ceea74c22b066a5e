//! Capability registrar: the one-time pass that materializes a function
//! table onto the pin registry.
//!
//! For every table entry the registrar resolves the pin by name, stores its
//! mux slots verbatim, marks it available, derives edge-interrupt support and
//! binds the OS handle found under the pin's number.
//!
//! # Failure policy
//!
//! The pass is all-or-nothing. Every entry is resolved (pin and OS handle)
//! before any pin is written, in table order, so the error names the first
//! failing entry and a failed pass leaves the registry untouched.
//!
//! # Concurrency
//!
//! `register` takes `&mut PinRegistry`; nothing else can observe the pins
//! while it runs. Entries are independent of each other, so the resulting
//! state does not depend on iteration order.

use std::sync::Arc;

use serde::Serialize;
use sunxi_common::gpio::driver::{GpioDriver, OsPin};
use sunxi_common::pin::{FunctionSlot, PinName};
use sunxi_common::table::FunctionTable;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::registry::PinRegistry;

/// Registration failure. Neither kind is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Table names a pin the board does not have.
    #[error("table '{table}' references unknown pin {name}")]
    UnknownPin {
        /// Table being registered.
        table: String,
        /// Missing pin.
        name: PinName,
    },

    /// OS gpio subsystem exposes no line for the pin's number.
    #[error("driver '{driver}' has no gpio line {number} for pin {name}")]
    MissingOsPin {
        /// Driver consulted.
        driver: &'static str,
        /// Pin being bound.
        name: PinName,
        /// Numeric identity looked up.
        number: u32,
    },
}

/// Outcome of a successful pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationSummary {
    /// Table that was applied.
    pub table: String,
    /// Pins configured.
    pub configured: usize,
    /// Pins with edge-interrupt support.
    pub edge_capable: usize,
}

/// Resolved effects of one table entry.
struct PinUpdate {
    name: PinName,
    alt_funcs: Vec<FunctionSlot>,
    supports_edge: bool,
    os_pin: Arc<dyn OsPin>,
}

/// Apply `table` to `pins`, binding handles from `gpio`.
///
/// Idempotent: running it again with the same table and driver yields the
/// same field values. Running it with a different table after a successful
/// pass is a caller error; it is logged but not prevented.
///
/// # Errors
/// - [`RegistrationError::UnknownPin`] if a table pin is not in `pins`
/// - [`RegistrationError::MissingOsPin`] if `gpio` has no line for a pin
///
/// On error no pin is modified.
pub fn register(
    table: &FunctionTable,
    pins: &mut PinRegistry,
    gpio: &dyn GpioDriver,
) -> Result<RegistrationSummary, RegistrationError> {
    debug!(
        "Registering table '{}' ({} entries) via driver '{}'",
        table.name(),
        table.len(),
        gpio.name()
    );

    let updates = resolve(table, pins, gpio)?;

    if let Some(previous) = pins.configured_by() {
        if previous != table.name() {
            warn!(
                "Pin registry already configured by table '{}', re-registering with '{}'",
                previous,
                table.name()
            );
        }
    }

    let configured = updates.len();
    let edge_capable = updates.iter().filter(|u| u.supports_edge).count();

    for update in updates {
        let Some(pin) = pins.get_mut(&update.name) else {
            continue;
        };
        debug!(
            "  {} -> gpio{}: {} slots, edge={}",
            update.name,
            pin.number(),
            update.alt_funcs.len(),
            update.supports_edge
        );
        pin.configure(update.alt_funcs, update.supports_edge, update.os_pin);
    }
    pins.set_configured_by(table.name());

    info!(
        "Table '{}' registered: {} pins configured, {} edge-capable",
        table.name(),
        configured,
        edge_capable
    );

    Ok(RegistrationSummary {
        table: table.name().to_string(),
        configured,
        edge_capable,
    })
}

fn resolve(
    table: &FunctionTable,
    pins: &PinRegistry,
    gpio: &dyn GpioDriver,
) -> Result<Vec<PinUpdate>, RegistrationError> {
    let mut updates = Vec::with_capacity(table.len());

    for (name, slots) in table.iter() {
        let pin = pins
            .get(name)
            .ok_or_else(|| RegistrationError::UnknownPin {
                table: table.name().to_string(),
                name: *name,
            })?;

        let os_pin = gpio
            .pin(pin.number())
            .ok_or(RegistrationError::MissingOsPin {
                driver: gpio.name(),
                name: *name,
                number: pin.number(),
            })?;

        updates.push(PinUpdate {
            name: *name,
            alt_funcs: slots.to_vec(),
            supports_edge: table.supports_edge(slots),
            os_pin,
        });
    }

    Ok(updates)
}
