//! System-wide constants.
//!
//! Single source of truth for pin layout and function table limits.

use static_assertions::const_assert;

/// Number of pins addressed per bank (the sunxi numbering stride).
pub const PINS_PER_BANK: u32 = 32;

/// Highest bank letter accepted in a pin name.
pub const MAX_BANK: char = 'Z';

/// Slot count of the richest built-in chip variant.
pub const MAX_FUNCTION_SLOTS: usize = 5;

/// Substring marking an external-interrupt function token.
pub const EINT_MARKER: &str = "_EINT";

/// Number of trailing slots inspected for the interrupt marker.
pub const EINT_SLOTS: usize = 2;

/// Default sysfs gpio class directory.
pub const DEFAULT_SYSFS_ROOT: &str = "/sys/class/gpio";

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/sunxi/board.toml";

/// Default driver name.
pub const DEFAULT_DRIVER: &str = "sysfs";

/// Canonical service name (used for logging).
pub const SERVICE_NAME: &str = "sunxi_hal";

const_assert!(EINT_SLOTS <= MAX_FUNCTION_SLOTS);
const_assert!(PINS_PER_BANK.is_power_of_two());
