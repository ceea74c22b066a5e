//! Transcribed alternate-function tables.
//!
//! Each entry lists the functions selected by mux values 2 and up, so slot
//! `0` is mux value 2. Empty strings mark unassigned positions.

mod a20;
mod a64;
mod h3;

pub(crate) use a20::{A20_BANKS, A20_FUNCTIONS};
pub(crate) use a64::{A64_BANKS, A64_FUNCTIONS};
pub(crate) use h3::{H3_BANKS, H3_FUNCTIONS};

/// Raw table row: pin name and its slot tokens.
pub(crate) type RawEntry = (&'static str, &'static [&'static str]);
