//! Fixed-point helpers shared by the quote and pricing paths.

use alloy::primitives::U256;

use crate::constants::DENOMINATOR;

/// 1e18, the scale the price getter reports unit prices in.
pub const WAD: u64 = 1_000_000_000_000_000_000;

/// Convert a human-readable percentage into basis points.
///
/// The canonical convention is a single division by 100: `0.5% -> 50 bps`
/// with a denominator of 10 000. Rounding keeps the conversion exact for any
/// multiple of 0.01% despite the f64 representation. Negative inputs clamp
/// to zero.
pub fn pct_to_bps(pct: f64) -> u64 {
    let bps = (pct * DENOMINATOR as f64 / 100.0).round();
    if bps <= 0.0 { 0 } else { bps as u64 }
}

/// USD estimate for `amount` of a token whose 1e18-scaled unit price is
/// `unit_price`. Saturates instead of overflowing; a zero price yields a
/// zero estimate.
pub fn usd_value(unit_price: U256, amount: U256) -> U256 {
    unit_price
        .checked_mul(amount)
        .map(|v| v / U256::from(WAD))
        .unwrap_or(U256::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bps_conversion_is_exact_for_hundredths() {
        assert_eq!(pct_to_bps(0.5), 50);
        assert_eq!(pct_to_bps(0.01), 1);
        assert_eq!(pct_to_bps(0.29), 29);
        assert_eq!(pct_to_bps(3.0), 300);
        assert_eq!(pct_to_bps(100.0), 10_000);
    }

    #[test]
    fn bps_conversion_clamps_negative_input() {
        assert_eq!(pct_to_bps(-1.0), 0);
        assert_eq!(pct_to_bps(0.0), 0);
    }

    #[test]
    fn usd_value_scales_down_by_wad() {
        // 2 USD per token, 3 tokens (both 1e18 scaled).
        let price = U256::from(2u64) * U256::from(WAD);
        let amount = U256::from(3u64) * U256::from(WAD);
        assert_eq!(usd_value(price, amount), U256::from(6u64) * U256::from(WAD));
    }

    #[test]
    fn usd_value_of_zero_price_is_zero() {
        assert_eq!(usd_value(U256::ZERO, U256::from(1_000_000u64)), U256::ZERO);
    }
}
