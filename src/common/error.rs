//! Public error type.
//!
//! Every public operation returns [`ZapResult`]; nothing in this crate panics
//! or lets a transport error escape in any other shape. The `Display` output
//! is the diagnostic an SDK consumer shows to a user, so the messages here
//! are part of the API.

use std::fmt;

use crate::constants::{Chain, Dex};

pub type ZapResult<T> = Result<T, ZapError>;

/// Position of a swap leg inside a quote, counted from zero.
///
/// Quotes carry one leg for a plain swap and two for a zap, so the rendered
/// names stay stable no matter which tokens a route goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapStage(pub usize);

impl fmt::Display for SwapStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "first token swap"),
            1 => write!(f, "second token swap"),
            n => write!(f, "token swap {}", n + 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZapError {
    /// No contract address registered for the requested combination.
    /// Surfaced before any network call and never retried.
    #[error("{0}")]
    Configuration(String),

    /// A quoted leg's price impact exceeds the caller's tolerance. The quote
    /// is discarded; nothing is submitted.
    #[error("Price impact for {0} too high")]
    PriceImpactExceeded(SwapStage),

    /// The lens or router reverted, or the transport failed. Carries the
    /// revert reason verbatim when one could be decoded.
    #[error("{0}")]
    ContractCall(String),

    /// Caller handed the dispatcher a pre-encoded payload. The native value
    /// for such a call cannot be inferred, so this input shape stays
    /// rejected until it can be.
    #[error("Param not yet supported")]
    UnsupportedInput,
}

impl ZapError {
    pub fn lens_not_registered(dex: Dex, chain: Chain) -> Self {
        ZapError::Configuration(format!("Lens contract not found for {dex} on {chain}"))
    }

    pub fn zap_not_registered(chain: Chain) -> Self {
        ZapError::Configuration(format!("Zap contract not found for {chain}"))
    }
}

/// Map a contract-layer failure onto [`ZapError::ContractCall`], preferring
/// the decoded revert reason over the transport's own rendering.
pub(crate) fn contract_call_error(err: alloy::contract::Error) -> ZapError {
    let reason = err
        .as_revert_data()
        .and_then(|data| alloy::sol_types::decode_revert_reason(&data));
    match reason {
        Some(reason) => ZapError::ContractCall(reason),
        None => ZapError::ContractCall("Something went wrong".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_stage_names_are_ordinal() {
        assert_eq!(SwapStage(0).to_string(), "first token swap");
        assert_eq!(SwapStage(1).to_string(), "second token swap");
        assert_eq!(SwapStage(2).to_string(), "token swap 3");
    }

    #[test]
    fn diagnostics_render_exact_messages() {
        let err = ZapError::PriceImpactExceeded(SwapStage(0));
        assert_eq!(err.to_string(), "Price impact for first token swap too high");
        assert_eq!(ZapError::UnsupportedInput.to_string(), "Param not yet supported");
    }

    #[test]
    fn configuration_errors_name_the_registry_slot() {
        let err = ZapError::lens_not_registered(Dex::QuickSwap, Chain::Bnb);
        assert_eq!(err.to_string(), "Lens contract not found for QuickSwap on bnb");
    }
}
