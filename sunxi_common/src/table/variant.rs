//! Chip variants and their built-in function tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::data::{
    A20_BANKS, A20_FUNCTIONS, A64_BANKS, A64_FUNCTIONS, H3_BANKS, H3_FUNCTIONS, RawEntry,
};
use super::{FunctionTable, TableError};
use crate::consts::MAX_FUNCTION_SLOTS;

/// Supported system-on-chip variant.
///
/// Chosen by configuration; detecting the running chip is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipVariant {
    /// Allwinner H3.
    H3,
    /// Allwinner A20.
    A20,
    /// Allwinner A64.
    A64,
}

impl ChipVariant {
    /// All built-in variants.
    pub const ALL: [ChipVariant; 3] = [Self::H3, Self::A20, Self::A64];

    /// Lowercase identifier used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::H3 => "h3",
            Self::A20 => "a20",
            Self::A64 => "a64",
        }
    }

    /// Slot count of this variant's mux tables.
    pub fn max_slots(&self) -> usize {
        MAX_FUNCTION_SLOTS
    }

    /// Physical banks and their pin counts.
    pub fn banks(&self) -> &'static [(char, u32)] {
        match self {
            Self::H3 => H3_BANKS,
            Self::A20 => A20_BANKS,
            Self::A64 => A64_BANKS,
        }
    }

    fn raw_functions(&self) -> &'static [RawEntry] {
        match self {
            Self::H3 => H3_FUNCTIONS,
            Self::A20 => A20_FUNCTIONS,
            Self::A64 => A64_FUNCTIONS,
        }
    }

    /// Build this variant's function table.
    pub fn function_table(&self) -> Result<FunctionTable, TableError> {
        FunctionTable::from_raw(self.as_str(), self.max_slots(), self.raw_functions())
    }
}

impl fmt::Display for ChipVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChipVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown chip variant '{s}' (expected h3, a20 or a64)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pin::{FunctionSlot, PinName};

    fn pin(name: &str) -> PinName {
        name.parse().unwrap()
    }

    #[test]
    fn builtin_tables_are_valid() {
        for variant in ChipVariant::ALL {
            let table = variant.function_table().unwrap();
            assert_eq!(table.name(), variant.as_str());
            assert!(!table.is_empty());
        }
    }

    #[test]
    fn table_pins_exist_in_banks() {
        for variant in ChipVariant::ALL {
            let table = variant.function_table().unwrap();
            for (name, _) in table.iter() {
                let bank = variant
                    .banks()
                    .iter()
                    .find(|(b, _)| *b == name.bank())
                    .unwrap_or_else(|| panic!("{variant}: {name} in unknown bank"));
                assert!(name.index() < bank.1, "{variant}: {name} beyond bank size");
            }
        }
    }

    #[test]
    fn h3_port_a_interrupts() {
        let table = ChipVariant::H3.function_table().unwrap();
        let pa18 = table.get(&pin("PA18")).unwrap();
        assert_eq!(
            pa18,
            &[
                FunctionSlot::from_static("PCM0_SYNC"),
                FunctionSlot::from_static("TWI1_SCK"),
                FunctionSlot::Absent,
                FunctionSlot::Absent,
                FunctionSlot::from_static("PA_EINT18"),
            ]
        );
        assert!(table.supports_edge(pa18));
        assert!(!table.supports_edge(table.get(&pin("PC4")).unwrap()));
    }

    #[test]
    fn a20_scenario_entries() {
        let table = ChipVariant::A20.function_table().unwrap();
        assert_eq!(
            table.get(&pin("PC4")).unwrap(),
            &[FunctionSlot::from_static("NAND_CE0")]
        );
        assert_eq!(table.get(&pin("PD14")).unwrap(), &[FunctionSlot::Absent]);
        assert!(table.supports_edge(table.get(&pin("PH21")).unwrap()));
    }

    #[test]
    fn parse_variant() {
        assert_eq!("h3".parse::<ChipVariant>().unwrap(), ChipVariant::H3);
        assert_eq!("A64".parse::<ChipVariant>().unwrap(), ChipVariant::A64);
        assert!("h5".parse::<ChipVariant>().is_err());
    }

    #[test]
    fn variant_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            chip: ChipVariant,
        }
        let w: Wrapper = toml::from_str("chip = \"a20\"").unwrap();
        assert_eq!(w.chip, ChipVariant::A20);
    }
}
