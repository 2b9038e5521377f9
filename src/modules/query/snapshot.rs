//! Network snapshot: head block, gas price and latest block header

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{Report, Result};
use crate::infrastructure::ethereum::ClientFactory;

pub async fn snapshot(factory: &ClientFactory) -> Result<Report> {
    let client = factory.client();
    let network = client.network();
    debug!(network = %network.label, "dispatching snapshot reads");

    let (number, gas_price, block) = futures::try_join!(
        client.block_number(),
        client.gas_price(),
        client.latest_block(),
    )?;

    Ok(Report::new("Network snapshot")
        .field("Network", &network.label)
        .field("Block number", number)
        .field("Timestamp", render_timestamp(block.timestamp))
        .field("Gas price (wei)", gas_price)
        .field("Gas used", block.gas_used)
        .line(network.block_url(number)))
}

/// Raw seconds, followed by the UTC date when representable
fn render_timestamp(seconds: u64) -> String {
    let utc = i64::try_from(seconds)
        .ok()
        .and_then(|s| DateTime::<Utc>::from_timestamp(s, 0));
    match utc {
        Some(ts) => format!("{} ({})", seconds, ts.format("%Y-%m-%d %H:%M:%S UTC")),
        None => seconds.to_string(),
    }
}
