//! Wallet connection: account, chain id and native balance

use tracing::{info, warn};

use crate::domain::{to_checksum, units::format_units, AddressValidator, InspectError, Report, Result};
use crate::infrastructure::ethereum::{ClientFactory, Wallet};

pub async fn connect(
    factory: &ClientFactory,
    validator: &AddressValidator,
    wallet: &dyn Wallet,
) -> Result<Report> {
    let accounts = wallet.request_accounts().await?;
    let Some(raw) = accounts.into_iter().next().filter(|a| !a.trim().is_empty()) else {
        return Err(InspectError::wallet("Wallet returned no address"));
    };

    let wallet_chain_id = wallet.request_chain_id().await?.to_decimal()?;
    let address = validator.validate(&raw)?;

    let client = factory.client();
    let network = client.network();
    let balance = client.balance(address).await?;
    info!(network = %network.label, address = %address, "wallet connected");

    let currency = &network.chain.native_currency;
    let mut report = Report::new("Connection established")
        .field("Network", &network.label)
        .field("chainId", wallet_chain_id)
        .field("Address", to_checksum(&address))
        .field(
            &format!("{} balance", currency.symbol),
            format!("{} {}", format_units(balance, currency.decimals), currency.symbol),
        )
        .field("Explorer", network.address_url(&address));

    if wallet_chain_id != network.chain_id {
        warn!(
            wallet_chain_id,
            active_chain_id = network.chain_id,
            "wallet is on a different chain than the active network"
        );
        report = report.field(
            "Note",
            format!(
                "wallet is on chain {} but the active network is {} ({}); reads use the active network",
                wallet_chain_id, network.label, network.chain_id
            ),
        );
    }

    Ok(report)
}
