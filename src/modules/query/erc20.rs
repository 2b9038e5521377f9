//! ERC-20 inspection: metadata, supply and one holder's balance

use tracing::debug;

use crate::domain::{to_checksum, units::format_units, AddressValidator, Report, Result};
use crate::infrastructure::ethereum::{ClientFactory, Erc20};

pub async fn probe_erc20(
    factory: &ClientFactory,
    validator: &AddressValidator,
    token: &str,
    holder: &str,
) -> Result<Report> {
    let token = validator.validate(token)?;
    let holder = validator.validate(holder)?;

    let client = factory.client();
    let network = client.network();
    debug!(network = %network.label, token = %token, "dispatching token reads");

    let contract = Erc20::new(client.reader(), token);
    let (name, symbol, decimals, supply, balance) = futures::try_join!(
        contract.name(),
        contract.symbol(),
        contract.decimals(),
        contract.total_supply(),
        contract.balance_of(holder),
    )?;

    Ok(Report::new("ERC-20 inspection")
        .field("Network", &network.label)
        .field("Token", to_checksum(&token))
        .field("Holder", to_checksum(&holder))
        .field("Name", name)
        .field("Symbol", symbol)
        .field("Total supply", format_units(supply, decimals))
        .field("Holder balance", format_units(balance, decimals))
        .line(network.address_url(&token)))
}
