//! Query operations
//!
//! Each operation builds a fresh client, dispatches its reads together and
//! waits for all of them. Any failed read fails the whole operation; errors
//! are never swallowed here.

mod connect;
mod erc20;
mod probe;
mod snapshot;

pub use connect::connect;
pub use erc20::probe_erc20;
pub use probe::{has_bytecode, probe_address};
pub use snapshot::snapshot;
