//! Read-only inspector for Base and Base Sepolia.
//!
//! Layers:
//! - [`domain`]: networks, address validation, formatting, reports, errors
//! - [`infrastructure`]: Alloy-backed chain readers, client factory, wallet
//! - [`modules`]: the query operations and the network switcher
//! - [`app`]: the presentation boundary that turns commands into reports

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod logs;
pub mod modules;

pub use domain::{InspectError, Report, Result};
pub use modules::Inspector;
