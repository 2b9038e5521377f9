//! Address probe: balance, nonce and code presence

use alloy::primitives::Bytes;
use tracing::debug;

use crate::domain::{to_checksum, units::format_units, AddressValidator, Report, Result};
use crate::infrastructure::ethereum::ClientFactory;

pub async fn probe_address(
    factory: &ClientFactory,
    validator: &AddressValidator,
    target: &str,
) -> Result<Report> {
    let address = validator.validate(target)?;

    let client = factory.client();
    let network = client.network();
    debug!(network = %network.label, address = %address, "dispatching address reads");

    let (balance, nonce, code) = futures::try_join!(
        client.balance(address),
        client.transaction_count(address),
        client.code(address),
    )?;

    let currency = &network.chain.native_currency;
    Ok(Report::new("Address probe")
        .field("Network", &network.label)
        .field("Address", to_checksum(&address))
        .field(
            &format!("{} balance", currency.symbol),
            format!("{} {}", format_units(balance, currency.decimals), currency.symbol),
        )
        .field("Transaction count", nonce)
        .field(
            "Contract bytecode present",
            if has_bytecode(&code) { "yes" } else { "no" },
        )
        .line(network.address_url(&address)))
}

/// `0x` (no code) decodes to empty bytes
pub fn has_bytecode(code: &Bytes) -> bool {
    !code.is_empty()
}
