//! Pin name parsing and numbering.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::consts::{MAX_BANK, PINS_PER_BANK};

/// Error returned when a string is not a valid pin name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinNameError {
    /// Name does not start with `P`.
    #[error("pin name '{0}' must start with 'P'")]
    MissingPrefix(String),

    /// Bank letter missing or outside `A..=Z`.
    #[error("pin name '{0}' has an invalid bank letter")]
    InvalidBank(String),

    /// Index missing, non-numeric or written with a leading zero.
    #[error("pin name '{0}' has an invalid index")]
    InvalidIndex(String),

    /// Index does not fit in one bank.
    #[error("pin name '{name}' index {index} is outside its bank")]
    IndexOutOfRange {
        /// Offending name.
        name: String,
        /// Parsed index.
        index: u32,
    },
}

/// Stable pin identity: a bank letter and an index within the bank.
///
/// Ordering is by bank, then index, so `PA2 < PA10 < PB0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PinName {
    bank: u8,
    index: u8,
}

impl PinName {
    /// Build a pin name from its parts.
    ///
    /// Returns `None` if the bank is not an uppercase ASCII letter or the
    /// index does not fit in one bank.
    pub fn new(bank: char, index: u32) -> Option<Self> {
        if !bank.is_ascii_uppercase() || bank > MAX_BANK || index >= PINS_PER_BANK {
            return None;
        }
        Some(Self {
            bank: bank as u8,
            index: index as u8,
        })
    }

    /// Bank letter (`'A'` for `PA6`).
    pub fn bank(&self) -> char {
        self.bank as char
    }

    /// Index within the bank (`6` for `PA6`).
    pub fn index(&self) -> u32 {
        u32::from(self.index)
    }

    /// Conventional sunxi gpio number: `(bank - 'A') * 32 + index`.
    pub fn number(&self) -> u32 {
        u32::from(self.bank - b'A') * PINS_PER_BANK + u32::from(self.index)
    }
}

impl fmt::Display for PinName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{}", self.bank as char, self.index)
    }
}

impl FromStr for PinName {
    type Err = PinNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix('P')
            .ok_or_else(|| PinNameError::MissingPrefix(s.to_string()))?;

        let mut chars = rest.chars();
        let bank = chars
            .next()
            .filter(|c| c.is_ascii_uppercase())
            .ok_or_else(|| PinNameError::InvalidBank(s.to_string()))?;

        let digits = chars.as_str();
        let canonical = !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && (digits == "0" || !digits.starts_with('0'));
        if !canonical {
            return Err(PinNameError::InvalidIndex(s.to_string()));
        }

        let index: u32 = digits
            .parse()
            .map_err(|_| PinNameError::InvalidIndex(s.to_string()))?;

        PinName::new(bank, index).ok_or_else(|| PinNameError::IndexOutOfRange {
            name: s.to_string(),
            index,
        })
    }
}

impl Serialize for PinName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
