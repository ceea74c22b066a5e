//! Prelude module for common re-exports.
//!
//! ```rust
//! use sunxi_common::prelude::*;
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{BoardConfig, ConfigError, ConfigLoader, LogLevel, SharedConfig};

// ─── Constants ──────────────────────────────────────────────────────
pub use crate::consts::{EINT_MARKER, MAX_FUNCTION_SLOTS, PINS_PER_BANK};

// ─── Pins & tables ──────────────────────────────────────────────────
pub use crate::pin::{FunctionSlot, PinName};
pub use crate::table::{ChipVariant, FunctionTable, TableError};

// ─── OS gpio ────────────────────────────────────────────────────────
pub use crate::gpio::driver::{GpioDriver, HalError, OsPin};
