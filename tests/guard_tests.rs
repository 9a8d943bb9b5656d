//! Price-impact guard scenarios.
//!
//! The guard is pure, so these run without any node.

use alloy::primitives::U256;
use zap_trade_sdk::{SwapStage, ZapError, check_price_impact, pct_to_bps};

fn bps(values: &[u64]) -> Vec<U256> {
    values.iter().copied().map(U256::from).collect()
}

#[test]
fn quoted_impact_below_tolerance_passes() {
    // 6-decimal token, 1.0 unit in, 2.5% reported impact, 3% tolerance.
    assert!(check_price_impact(&bps(&[250]), 3.0).is_ok());
}

#[test]
fn quoted_impact_above_tolerance_is_rejected_with_leg_name() {
    let err = check_price_impact(&bps(&[350]), 3.0).unwrap_err();
    assert_eq!(err.to_string(), "Price impact for first token swap too high");
}

#[test]
fn every_leg_within_tolerance_always_passes() {
    let tolerance_bps = pct_to_bps(3.0);
    for first in (0..=tolerance_bps).step_by(37) {
        for second in (0..=tolerance_bps).step_by(41) {
            assert!(
                check_price_impact(&bps(&[first, second]), 3.0).is_ok(),
                "[{first}, {second}] must pass a 3% tolerance"
            );
        }
    }
}

#[test]
fn first_offender_wins_regardless_of_later_legs() {
    for second in [0u64, 100, 301, 10_000] {
        let err = check_price_impact(&bps(&[301, second]), 3.0).unwrap_err();
        assert_eq!(err, ZapError::PriceImpactExceeded(SwapStage(0)));
    }
    let err = check_price_impact(&bps(&[300, 301]), 3.0).unwrap_err();
    assert_eq!(err, ZapError::PriceImpactExceeded(SwapStage(1)));
}

#[test]
fn conversion_is_exact_for_hundredth_multiples() {
    for hundredths in 0..=1000u64 {
        let pct = hundredths as f64 / 100.0;
        assert_eq!(pct_to_bps(pct), hundredths, "{pct}% must convert exactly");
    }
}

#[test]
fn huge_onchain_impact_values_do_not_wrap() {
    let impacts = vec![U256::MAX];
    assert!(check_price_impact(&impacts, 100.0).is_err());
}
