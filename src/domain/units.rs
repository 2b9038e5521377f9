//! Decimal scaling of integer on-chain amounts

use alloy_primitives::U256;

/// Decimals of the native currency on both supported networks
pub const ETHER_DECIMALS: u8 = 18;

/// Render `value / 10^decimals` exactly, trimming trailing fractional zeros.
///
/// Works on the decimal string so any `decimals` (up to 255) is exact.
pub fn format_units(value: U256, decimals: u8) -> String {
    let digits = value.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    let padded = format!("{:0>width$}", digits, width = decimals + 1);
    let (whole, frac) = padded.split_at(padded.len() - decimals);
    let frac = frac.trim_end_matches('0');

    if frac.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, frac)
    }
}

/// Wei rendered as ether
pub fn format_ether(wei: U256) -> String {
    format_units(wei, ETHER_DECIMALS)
}
