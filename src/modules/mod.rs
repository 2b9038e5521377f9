//! Operations offered to the presentation layer
//!
//! - query: connect, snapshot, probe address, probe ERC-20
//! - switcher: active network toggle
//!
//! [`Inspector`] bundles the client factory, validator and wallet so callers
//! hold a single handle.

pub mod query;
pub mod switcher;

use std::sync::Arc;

use crate::domain::{AddressValidator, Network, NetworkRegistry, Report, Result};
use crate::infrastructure::ethereum::{ClientFactory, Wallet};

#[derive(Clone)]
pub struct Inspector {
    factory: ClientFactory,
    validator: AddressValidator,
    wallet: Arc<dyn Wallet>,
}

impl Inspector {
    pub fn new(factory: ClientFactory, validator: AddressValidator, wallet: Arc<dyn Wallet>) -> Self {
        Self {
            factory,
            validator,
            wallet,
        }
    }

    pub fn registry(&self) -> &NetworkRegistry {
        self.factory.registry()
    }

    pub fn active(&self) -> Network {
        self.registry().active()
    }

    pub fn ready(&self) -> Report {
        Report::new("Ready")
            .field("Active network", self.active().label)
            .line("Read-only mode")
    }

    pub async fn connect(&self) -> Result<Report> {
        query::connect(&self.factory, &self.validator, self.wallet.as_ref()).await
    }

    pub async fn snapshot(&self) -> Result<Report> {
        query::snapshot(&self.factory).await
    }

    pub async fn probe_address(&self, target: &str) -> Result<Report> {
        query::probe_address(&self.factory, &self.validator, target).await
    }

    pub async fn probe_erc20(&self, token: &str, holder: &str) -> Result<Report> {
        query::probe_erc20(&self.factory, &self.validator, token, holder).await
    }

    pub fn toggle(&self) -> Report {
        switcher::toggle(self.registry())
    }
}
