//! sunxi Common Library
//!
//! This crate provides the shared data model for sunxi gpio capability
//! registration: pin names, alternate-function slots, per-variant function
//! tables, the OS gpio driver interface, and configuration loading.
//!
//! # Module Structure
//!
//! - [`pin`] - Pin names and alternate-function slots
//! - [`table`] - Function tables and chip variants
//! - [`gpio`] - OS gpio driver trait and error types
//! - [`config`] - Configuration loading traits and types
//! - [`consts`] - Shared constants
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use sunxi_common::prelude::*;
//!
//! let table = ChipVariant::H3.function_table().unwrap();
//! assert!(table.contains(&"PA18".parse::<PinName>().unwrap()));
//! ```

pub mod config;
pub mod consts;
pub mod gpio;
pub mod pin;
pub mod prelude;
pub mod table;
