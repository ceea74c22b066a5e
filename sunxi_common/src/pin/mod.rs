//! Pin identities and alternate-function slots.
//!
//! A pin is named `P<bank><index>` (e.g. `PA6`) and owns an ordered list of
//! [`FunctionSlot`]s, one per multiplexer position. The implicit `in`/`out`
//! functions available on every gpio are never stored.

mod func;
mod name;

pub use func::FunctionSlot;
pub use name::{PinName, PinNameError};
