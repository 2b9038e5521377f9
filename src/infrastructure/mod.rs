//! Infrastructure layer - External service integrations
//!
//! This layer contains:
//! - Alloy-based chain readers and the client factory
//! - The ERC-20 read surface
//! - Wallet capability implementations

pub mod ethereum;
