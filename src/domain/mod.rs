//! Domain layer - chain-agnostic types and rules
//!
//! Nothing here performs I/O.

pub mod address;
pub mod error;
pub mod network;
pub mod report;
pub mod units;

pub use address::{to_checksum, validate, AddressValidator};
pub use error::{AddressFault, ErrorKind, InspectError, Result};
pub use network::{ChainDescriptor, NativeCurrency, Network, NetworkRegistry};
pub use report::Report;
