//! Network switcher

use tracing::info;

use crate::domain::{NetworkRegistry, Report};

/// Flip between the two configured networks, keyed on chain id.
///
/// The wallet keeps its own chain selection, so the operator is told to
/// reconnect.
pub fn toggle(registry: &NetworkRegistry) -> Report {
    let first = &registry.networks()[0];
    let next = if registry.active().chain_id == first.chain_id {
        1
    } else {
        0
    };
    registry.select(next);

    let active = registry.active();
    info!(network = %active.label, chain_id = active.chain_id, "switched network");
    Report::new(format!("Switched to {}. Reconnect wallet.", active.label))
}
