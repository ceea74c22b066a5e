//! Alternate-function slot.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::consts::EINT_MARKER;

/// One position in a pin's function multiplexer.
///
/// `Absent` means the mux position is unassigned for this pin and must not
/// be selected. Source data writes an absent slot as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FunctionSlot {
    /// Unassigned mux position.
    #[default]
    Absent,
    /// Hardware function token (e.g. `TWI1_SCK`).
    Assigned(Cow<'static, str>),
}

impl FunctionSlot {
    /// Slot from a static token; `""` yields `Absent`.
    pub const fn from_static(token: &'static str) -> Self {
        if token.is_empty() {
            Self::Absent
        } else {
            Self::Assigned(Cow::Borrowed(token))
        }
    }

    /// Slot from an owned token; `""` yields `Absent`.
    pub fn from_token(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.is_empty() {
            Self::Absent
        } else {
            Self::Assigned(Cow::Owned(token))
        }
    }

    /// Token of an assigned slot.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Assigned(token) => Some(token),
        }
    }

    /// True for `Absent`.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// True if the token names an external-interrupt function.
    pub fn is_interrupt(&self) -> bool {
        self.token().is_some_and(|t| t.contains(EINT_MARKER))
    }
}

impl fmt::Display for FunctionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token().unwrap_or(""))
    }
}

impl Serialize for FunctionSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.token() {
            Some(token) => serializer.serialize_some(token),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_absent() {
        assert_eq!(FunctionSlot::from_static(""), FunctionSlot::Absent);
        assert_eq!(FunctionSlot::from_token(String::new()), FunctionSlot::Absent);
        assert!(FunctionSlot::default().is_absent());
    }

    #[test]
    fn interrupt_marker_is_substring_match() {
        assert!(FunctionSlot::from_static("PA_EINT18").is_interrupt());
        assert!(FunctionSlot::from_static("S_PL_EINT0").is_interrupt());
        assert!(!FunctionSlot::from_static("EINT22").is_interrupt());
        assert!(!FunctionSlot::from_static("NAND_CE0").is_interrupt());
        assert!(!FunctionSlot::Absent.is_interrupt());
    }

    #[test]
    fn static_and_owned_tokens_compare_equal() {
        assert_eq!(
            FunctionSlot::from_static("TWI1_SCK"),
            FunctionSlot::from_token("TWI1_SCK")
        );
    }
}
