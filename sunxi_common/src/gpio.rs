//! OS gpio subsystem interface.
//!
//! This module contains the driver trait through which the OS hands back a
//! live pin handle for a numeric pin identity.

pub mod driver;
