//! Pin registry: name-keyed store of logical pins.
//!
//! Built by board bring-up before registration. The registry owns every
//! [`LogicalPin`]; the registrar only borrows it mutably for the duration of
//! one pass. After bring-up the registry is read-only and may be shared
//! behind an `Arc`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use sunxi_common::config::BankConfig;
use sunxi_common::gpio::driver::OsPin;
use sunxi_common::pin::{FunctionSlot, PinName};
use thiserror::Error;

// ─── Error Types ────────────────────────────────────────────────────

/// Pin registry construction error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two pins share a name.
    #[error("pin {0} already registered")]
    DuplicateName(PinName),

    /// Two pins share a numeric identity.
    #[error("pin number {number} used by both {existing} and {new}")]
    DuplicateNumber {
        /// Shared number.
        number: u32,
        /// Pin registered first.
        existing: PinName,
        /// Pin rejected.
        new: PinName,
    },

    /// Bank letter or pin count cannot form valid pin names.
    #[error("bank {bank} with {count} pins cannot be addressed")]
    InvalidBank {
        /// Bank letter.
        bank: char,
        /// Requested pin count.
        count: u32,
    },
}

// ─── LogicalPin ─────────────────────────────────────────────────────

/// Registration state of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PinState {
    /// No capability information yet.
    Unconfigured,
    /// Capabilities written and OS handle bound. Terminal.
    Configured,
}

/// A physical pin known to the board.
#[derive(Debug, Clone)]
pub struct LogicalPin {
    name: PinName,
    number: u32,
    alt_funcs: Vec<FunctionSlot>,
    available: bool,
    supports_edge: bool,
    os_pin: Option<Arc<dyn OsPin>>,
}

impl LogicalPin {
    /// Unconfigured pin with the conventional sunxi number.
    pub fn new(name: PinName) -> Self {
        Self::with_number(name, name.number())
    }

    /// Unconfigured pin with an explicit number.
    pub fn with_number(name: PinName, number: u32) -> Self {
        Self {
            name,
            number,
            alt_funcs: Vec::new(),
            available: false,
            supports_edge: false,
            os_pin: None,
        }
    }

    /// Pin name.
    pub fn name(&self) -> PinName {
        self.name
    }

    /// Numeric identity used by the OS gpio subsystem.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Alternate functions by mux slot, absent slots included.
    pub fn alt_funcs(&self) -> &[FunctionSlot] {
        &self.alt_funcs
    }

    /// Function at a mux slot; `None` if the slot is absent or past the end.
    pub fn func(&self, slot: usize) -> Option<&str> {
        self.alt_funcs.get(slot).and_then(FunctionSlot::token)
    }

    /// Assigned function tokens, in slot order.
    pub fn supported_funcs(&self) -> impl Iterator<Item = &str> {
        self.alt_funcs.iter().filter_map(FunctionSlot::token)
    }

    /// Mux position that selects `token`.
    pub fn mux_position(&self, token: &str) -> Option<usize> {
        self.alt_funcs.iter().position(|s| s.token() == Some(token))
    }

    /// Whether the pin is a known, configurable gpio.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Whether the pin can report level transitions.
    pub fn supports_edge(&self) -> bool {
        self.supports_edge
    }

    /// Bound OS handle.
    pub fn os_pin(&self) -> Option<&Arc<dyn OsPin>> {
        self.os_pin.as_ref()
    }

    /// Registration state.
    pub fn state(&self) -> PinState {
        if self.available && self.os_pin.is_some() {
            PinState::Configured
        } else {
            PinState::Unconfigured
        }
    }

    pub(crate) fn configure(
        &mut self,
        alt_funcs: Vec<FunctionSlot>,
        supports_edge: bool,
        os_pin: Arc<dyn OsPin>,
    ) {
        self.alt_funcs = alt_funcs;
        self.available = true;
        self.supports_edge = supports_edge;
        self.os_pin = Some(os_pin);
    }

    /// Serializable view of the pin.
    pub fn report(&self) -> PinReport<'_> {
        PinReport {
            name: self.name,
            number: self.number,
            state: self.state(),
            functions: &self.alt_funcs,
            supports_edge: self.supports_edge,
            os_pin: self.os_pin.as_ref().map(|p| p.label()),
        }
    }
}

// OS handles compare by the line they refer to.
impl PartialEq for LogicalPin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.number == other.number
            && self.alt_funcs == other.alt_funcs
            && self.available == other.available
            && self.supports_edge == other.supports_edge
            && self.os_pin.as_ref().map(|p| p.number()) == other.os_pin.as_ref().map(|p| p.number())
    }
}

impl Eq for LogicalPin {}

impl fmt::Display for LogicalPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (gpio{})", self.name, self.number)
    }
}

/// JSON-friendly pin summary.
#[derive(Debug, Serialize)]
pub struct PinReport<'a> {
    /// Pin name.
    pub name: PinName,
    /// Numeric identity.
    pub number: u32,
    /// Registration state.
    pub state: PinState,
    /// Mux slots; absent slots serialize as `null`.
    pub functions: &'a [FunctionSlot],
    /// Edge-interrupt support.
    pub supports_edge: bool,
    /// OS handle label.
    pub os_pin: Option<String>,
}

// ─── PinRegistry ────────────────────────────────────────────────────

/// Name-keyed registry of logical pins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinRegistry {
    pins: BTreeMap<PinName, LogicalPin>,
    numbers: HashMap<u32, PinName>,
    configured_by: Option<String>,
}

impl PinRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every pin of the given banks, conventionally numbered.
    pub fn with_banks(banks: &[BankConfig]) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for bank in banks {
            for index in 0..bank.count {
                let name = PinName::new(bank.bank, index).ok_or(RegistryError::InvalidBank {
                    bank: bank.bank,
                    count: bank.count,
                })?;
                registry.insert(LogicalPin::new(name))?;
            }
        }
        Ok(registry)
    }

    /// Add a pin.
    ///
    /// # Errors
    /// Rejects a pin whose name or number is already present.
    pub fn insert(&mut self, pin: LogicalPin) -> Result<(), RegistryError> {
        if self.pins.contains_key(&pin.name) {
            return Err(RegistryError::DuplicateName(pin.name));
        }
        if let Some(existing) = self.numbers.get(&pin.number) {
            return Err(RegistryError::DuplicateNumber {
                number: pin.number,
                existing: *existing,
                new: pin.name,
            });
        }
        self.numbers.insert(pin.number, pin.name);
        self.pins.insert(pin.name, pin);
        Ok(())
    }

    /// Look up a pin by name.
    pub fn get(&self, name: &PinName) -> Option<&LogicalPin> {
        self.pins.get(name)
    }

    /// Look up a pin by its string name. Malformed names yield `None`.
    pub fn get_by_str(&self, name: &str) -> Option<&LogicalPin> {
        let name: PinName = name.parse().ok()?;
        self.get(&name)
    }

    pub(crate) fn get_mut(&mut self, name: &PinName) -> Option<&mut LogicalPin> {
        self.pins.get_mut(name)
    }

    /// Look up a pin by numeric identity.
    pub fn by_number(&self, number: u32) -> Option<&LogicalPin> {
        self.numbers.get(&number).and_then(|name| self.pins.get(name))
    }

    /// All pins in bank, then index order.
    pub fn iter(&self) -> impl Iterator<Item = &LogicalPin> {
        self.pins.values()
    }

    /// Configured pins only.
    pub fn configured(&self) -> impl Iterator<Item = &LogicalPin> {
        self.pins
            .values()
            .filter(|p| p.state() == PinState::Configured)
    }

    /// Number of pins.
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// True if the registry holds no pins.
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Name of the table that last configured this registry.
    pub fn configured_by(&self) -> Option<&str> {
        self.configured_by.as_deref()
    }

    pub(crate) fn set_configured_by(&mut self, table: &str) {
        self.configured_by = Some(table.to_string());
    }
}
