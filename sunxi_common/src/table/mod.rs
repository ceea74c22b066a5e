//! Function tables: per-variant pin → alternate-function mapping.
//!
//! A [`FunctionTable`] is built once and never mutated. Keys are unique pin
//! names; values are the ordered mux slots of that pin. Pins without an entry
//! have no known alternate function and are not an error.
//!
//! # Slot layout
//!
//! Position encodes the mux-select value. By convention the last slot carries
//! the external-interrupt function of interrupt-capable pins; some variants
//! put it in the second-to-last slot instead. Entries may be shorter than the
//! table's `max_slots`; missing trailing slots are absent.

mod data;
mod variant;

pub use variant::ChipVariant;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::config::{ConfigError, ConfigLoader};
use crate::consts::{EINT_SLOTS, MAX_FUNCTION_SLOTS};
use crate::pin::{FunctionSlot, PinName, PinNameError};

use data::RawEntry;

// ─── Error Types ────────────────────────────────────────────────────

/// Function table construction error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Entry key is not a valid pin name.
    #[error("invalid pin name in table '{table}': {source}")]
    InvalidPinName {
        /// Table being built.
        table: String,
        /// Parse failure.
        source: PinNameError,
    },

    /// Same pin listed twice.
    #[error("pin {pin} listed twice in table '{table}'")]
    DuplicatePin {
        /// Table being built.
        table: String,
        /// Duplicated pin.
        pin: PinName,
    },

    /// Entry has more slots than the table allows.
    #[error("pin {pin} has {slots} slots in table '{table}' (max {max})")]
    TooManySlots {
        /// Table being built.
        table: String,
        /// Offending pin.
        pin: PinName,
        /// Slots supplied.
        slots: usize,
        /// Table maximum.
        max: usize,
    },

    /// `max_slots` of zero.
    #[error("table '{0}' must allow at least one slot")]
    NoSlots(String),
}

// ─── FunctionTable ──────────────────────────────────────────────────

/// Immutable alternate-function table for one chip variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionTable {
    name: String,
    max_slots: usize,
    entries: BTreeMap<PinName, Vec<FunctionSlot>>,
}

impl FunctionTable {
    /// Build a table from `(pin name, slots)` pairs.
    ///
    /// Returns the first error encountered: malformed name, duplicate pin, or
    /// an entry longer than `max_slots`.
    pub fn from_entries<I, S>(
        name: impl Into<String>,
        max_slots: usize,
        entries: I,
    ) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, Vec<FunctionSlot>)>,
        S: AsRef<str>,
    {
        let name = name.into();
        if max_slots == 0 {
            return Err(TableError::NoSlots(name));
        }

        let mut map = BTreeMap::new();
        for (pin_str, slots) in entries {
            let pin: PinName =
                pin_str
                    .as_ref()
                    .parse()
                    .map_err(|source| TableError::InvalidPinName {
                        table: name.clone(),
                        source,
                    })?;

            if slots.len() > max_slots {
                return Err(TableError::TooManySlots {
                    table: name,
                    pin,
                    slots: slots.len(),
                    max: max_slots,
                });
            }

            if map.insert(pin, slots).is_some() {
                return Err(TableError::DuplicatePin { table: name, pin });
            }
        }

        Ok(Self {
            name,
            max_slots,
            entries: map,
        })
    }

    /// Build a table from transcribed static rows.
    pub(crate) fn from_raw(
        name: &str,
        max_slots: usize,
        rows: &'static [RawEntry],
    ) -> Result<Self, TableError> {
        Self::from_entries(
            name,
            max_slots,
            rows.iter().map(|(pin, tokens)| {
                (
                    *pin,
                    tokens
                        .iter()
                        .map(|t| FunctionSlot::from_static(*t))
                        .collect::<Vec<_>>(),
                )
            }),
        )
    }

    /// Parse a table from TOML text.
    ///
    /// ```toml
    /// name = "custom-h3"
    /// max_slots = 5
    ///
    /// [pins]
    /// PA6 = ["SIM_PWREN", "", "", "", "PA_EINT6"]
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: TableFile =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        file.into_table()
    }

    /// Load a table from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        TableFile::load(path)?.into_table()
    }

    /// Table name (variant or file-supplied).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum slot count per entry.
    pub fn max_slots(&self) -> usize {
        self.max_slots
    }

    /// Slots for a pin, or `None` if the pin has no entry.
    pub fn get(&self, pin: &PinName) -> Option<&[FunctionSlot]> {
        self.entries.get(pin).map(Vec::as_slice)
    }

    /// Slots for a pin given by name. Malformed names yield `None`.
    pub fn get_by_name(&self, name: &str) -> Option<&[FunctionSlot]> {
        let pin: PinName = name.parse().ok()?;
        self.get(&pin)
    }

    /// Whether the pin has an entry.
    pub fn contains(&self, pin: &PinName) -> bool {
        self.entries.contains_key(pin)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in bank, then index order.
    pub fn iter(&self) -> impl Iterator<Item = (&PinName, &[FunctionSlot])> {
        self.entries.iter().map(|(pin, slots)| (pin, slots.as_slice()))
    }

    /// Edge-interrupt support of an entry.
    ///
    /// True iff the last or second-to-last of this table's `max_slots`
    /// positions holds an interrupt token. Positions past the end of a short
    /// entry are absent and contribute false.
    pub fn supports_edge(&self, slots: &[FunctionSlot]) -> bool {
        supports_edge(slots, self.max_slots)
    }
}

/// Edge-interrupt derivation for a table allowing `max_slots` positions.
pub fn supports_edge(slots: &[FunctionSlot], max_slots: usize) -> bool {
    (max_slots.saturating_sub(EINT_SLOTS)..max_slots)
        .any(|pos| slots.get(pos).is_some_and(FunctionSlot::is_interrupt))
}

// ─── Table file ─────────────────────────────────────────────────────

fn default_max_slots() -> usize {
    MAX_FUNCTION_SLOTS
}

/// On-disk table layout.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    name: String,
    #[serde(default = "default_max_slots")]
    max_slots: usize,
    #[serde(default)]
    pins: BTreeMap<String, Vec<String>>,
}

impl TableFile {
    fn into_table(self) -> Result<FunctionTable, ConfigError> {
        let entries = self.pins.into_iter().map(|(pin, tokens)| {
            let slots: Vec<FunctionSlot> =
                tokens.into_iter().map(FunctionSlot::from_token).collect();
            (pin, slots)
        });
        FunctionTable::from_entries(self.name, self.max_slots, entries)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(tokens: &[&'static str]) -> Vec<FunctionSlot> {
        tokens.iter().map(|t| FunctionSlot::from_static(*t)).collect()
    }

    fn pin(name: &str) -> PinName {
        name.parse().unwrap()
    }

    #[test]
    fn build_and_lookup() {
        let table = FunctionTable::from_entries(
            "test",
            5,
            [
                ("PA18", slots(&["PCM0_SYNC", "TWI1_SCK", "", "", "PA_EINT18"])),
                ("PC4", slots(&["NAND_CE0"])),
            ],
        )
        .unwrap();

        assert_eq!(table.name(), "test");
        assert_eq!(table.len(), 2);
        assert!(table.contains(&pin("PA18")));
        assert!(!table.contains(&pin("PA19")));
        assert_eq!(table.get(&pin("PC4")).unwrap(), slots(&["NAND_CE0"]).as_slice());
        assert!(table.get_by_name("PA18").is_some());
        assert!(table.get_by_name("not-a-pin").is_none());
    }

    #[test]
    fn absent_slots_kept_verbatim() {
        let table = FunctionTable::from_entries(
            "test",
            5,
            [("PA18", slots(&["PCM0_SYNC", "TWI1_SCK", "", "", "PA_EINT18"]))],
        )
        .unwrap();
        let entry = table.get(&pin("PA18")).unwrap();
        assert_eq!(entry.len(), 5);
        assert!(entry[2].is_absent());
        assert!(entry[3].is_absent());
    }

    #[test]
    fn iteration_is_sorted() {
        let table = FunctionTable::from_entries(
            "test",
            5,
            [
                ("PB0", slots(&["X"])),
                ("PA10", slots(&["Y"])),
                ("PA2", slots(&["Z"])),
            ],
        )
        .unwrap();
        let names: Vec<String> = table.iter().map(|(p, _)| p.to_string()).collect();
        assert_eq!(names, vec!["PA2", "PA10", "PB0"]);
    }

    #[test]
    fn duplicate_pin_rejected() {
        let err = FunctionTable::from_entries(
            "test",
            5,
            [("PA6", slots(&["A"])), ("PA6", slots(&["B"]))],
        )
        .unwrap_err();
        assert!(matches!(err, TableError::DuplicatePin { .. }));
    }

    #[test]
    fn too_many_slots_rejected() {
        let err =
            FunctionTable::from_entries("test", 2, [("PA6", slots(&["A", "B", "C"]))]).unwrap_err();
        assert!(matches!(
            err,
            TableError::TooManySlots {
                slots: 3,
                max: 2,
                ..
            }
        ));
    }

    #[test]
    fn invalid_name_rejected() {
        let err =
            FunctionTable::from_entries("test", 5, [("GPIO6", slots(&["A"]))]).unwrap_err();
        assert!(matches!(err, TableError::InvalidPinName { .. }));
    }

    #[test]
    fn zero_slots_rejected() {
        let err = FunctionTable::from_entries("test", 0, Vec::<(&str, _)>::new()).unwrap_err();
        assert!(matches!(err, TableError::NoSlots(_)));
    }

    #[test]
    fn edge_from_last_slot() {
        assert!(supports_edge(
            &slots(&["PCM0_SYNC", "TWI1_SCK", "", "", "PA_EINT18"]),
            5
        ));
    }

    #[test]
    fn edge_from_second_to_last_slot() {
        assert!(supports_edge(&slots(&["LCD1_D21", "", "SMC_VCCEN", "PH_EINT21"]), 5));
        assert!(supports_edge(&slots(&["A", "", "", "PX_EINT1", "B"]), 5));
    }

    #[test]
    fn edge_ignores_earlier_slots() {
        assert!(!supports_edge(&slots(&["PX_EINT1", "", "", "", ""]), 5));
        assert!(!supports_edge(&slots(&["A", "PX_EINT1", "C"]), 5));
    }

    #[test]
    fn edge_tolerates_short_and_absent() {
        assert!(!supports_edge(&slots(&["NAND_CE0"]), 5));
        assert!(!supports_edge(&slots(&[""]), 5));
        assert!(!supports_edge(&[], 5));
        assert!(supports_edge(&slots(&["PX_EINT0"]), 1));
    }

    #[test]
    fn from_toml_table() {
        let table = FunctionTable::from_toml(
            r#"
name = "custom"
max_slots = 5

[pins]
PA6 = ["SIM_PWREN", "", "", "", "PA_EINT6"]
PD14 = [""]
"#,
        )
        .unwrap();
        assert_eq!(table.name(), "custom");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&pin("PD14")).unwrap(), &[FunctionSlot::Absent]);
        assert!(table.supports_edge(table.get(&pin("PA6")).unwrap()));
    }

    #[test]
    fn from_toml_default_max_slots() {
        let table = FunctionTable::from_toml("name = \"x\"\n[pins]\nPA0 = [\"A\"]\n").unwrap();
        assert_eq!(table.max_slots(), MAX_FUNCTION_SLOTS);
    }

    #[test]
    fn from_toml_validation_error() {
        let err = FunctionTable::from_toml(
            "name = \"x\"\nmax_slots = 1\n[pins]\nPA0 = [\"A\", \"B\"]\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn from_toml_parse_error() {
        let err = FunctionTable::from_toml("name = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
