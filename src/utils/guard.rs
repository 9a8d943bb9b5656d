//! Price-impact guard.
//!
//! Pure validation of lens-reported impact figures against the caller's
//! tolerance. Runs before a quote is handed back, so an unsafe quote never
//! reaches the caller.

use alloy::primitives::U256;

use crate::common::{SwapStage, ZapError, ZapResult};
use crate::utils::calc::pct_to_bps;

/// Check each quoted leg's price impact against `allowed_pct`.
///
/// `impacts` is ordered (one entry per swap leg, basis points); the first
/// entry above tolerance fails the whole quote, identified by its position
/// rather than its tokens so the message is stable across routes.
pub fn check_price_impact(impacts: &[U256], allowed_pct: f64) -> ZapResult<()> {
    let allowed_bps = U256::from(pct_to_bps(allowed_pct));
    for (index, impact) in impacts.iter().enumerate() {
        if *impact > allowed_bps {
            return Err(ZapError::PriceImpactExceeded(SwapStage(index)));
        }
    }
    Ok(())
}
