//! USD valuation aggregator.
//!
//! Estimates the USD value of a quote's input and output without one RPC
//! round trip per token: every unit-price lookup is encoded as a read
//! descriptor and the descriptors are batched through Multicall3.
//!
//! Valuation is advisory. A missing price getter or reference factory turns
//! into an absent unit price (rendered as zero), never into a failed quote.

use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::DynProvider;
use alloy::sol_types::{SolCall, SolValue};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::common::{ZapResult, contract_call_error};
use crate::constants::{
    Chain, Dex, MULTICALL3_ADDRESS, PriceProtocol, ZERO_ADDRESS, erc20_for_pricing,
    factory_address, price_getter_address,
};
use crate::contracts::{IMulticall3, IPriceGetter};
use crate::utils::calc::usd_value;

/// Upper bound on reads packed into one Multicall3 round trip.
pub const DEFAULT_MAX_CALLS_PER_BATCH: usize = 1000;

/// USD estimates for a quote, 1e18 fixed-point. Zero means "no reference
/// pool registered", not "worthless".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsdValuation {
    pub input: U256,
    pub output: U256,
}

/// One batched read: the contract to call and the encoded calldata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceDescriptor {
    pub target: Address,
    pub calldata: Bytes,
}

/// Batches independent unit-price reads against the price getter.
#[derive(Clone)]
pub struct PriceAggregator {
    provider: DynProvider,
    chain: Chain,
    price_getter: Option<Address>,
    multicall: Address,
    max_calls_per_batch: usize,
}

impl PriceAggregator {
    /// Resolve the price getter for `chain` from the static tables. A chain
    /// without a registered getter still yields a working aggregator; it
    /// just reports absent prices.
    pub fn new(chain: Chain, provider: DynProvider) -> Self {
        let price_getter = price_getter_address(chain);
        if price_getter.is_none() {
            warn!(%chain, "no price getter registered, valuations will be zero");
        }
        Self {
            provider,
            chain,
            price_getter,
            multicall: MULTICALL3_ADDRESS,
            max_calls_per_batch: DEFAULT_MAX_CALLS_PER_BATCH,
        }
    }

    pub fn with_price_getter(mut self, price_getter: Address) -> Self {
        self.price_getter = Some(price_getter);
        self
    }

    pub fn with_max_calls_per_batch(mut self, max_calls_per_batch: usize) -> Self {
        self.max_calls_per_batch = max_calls_per_batch.max(1);
        self
    }

    pub fn max_calls_per_batch(&self) -> usize {
        self.max_calls_per_batch
    }

    /// Descriptor for one token's unit price via `dex`'s reference factory.
    /// The native sentinel is swapped for the wrapped-native ERC20 first.
    /// `None` when the getter or the factory is unregistered.
    pub fn token_price_descriptor(&self, token: Address, dex: Dex) -> Option<PriceDescriptor> {
        let (getter, factory) = self.pricing_contracts(dex)?;
        let call = IPriceGetter::getPriceFromFactoryCall {
            token: erc20_for_pricing(token, self.chain),
            protocol: PriceProtocol::V2.into(),
            factory,
            overrideA: ZERO_ADDRESS,
            overrideB: ZERO_ADDRESS,
        };
        Some(PriceDescriptor { target: getter, calldata: call.abi_encode().into() })
    }

    /// Descriptor for a pool-share token's unit price.
    pub fn lp_price_descriptor(&self, lp_token: Address, dex: Dex) -> Option<PriceDescriptor> {
        let (getter, factory) = self.pricing_contracts(dex)?;
        let call = IPriceGetter::getLPPriceFromFactoryCall {
            lpToken: lp_token,
            protocol: PriceProtocol::V2.into(),
            factory,
            overrideA: ZERO_ADDRESS,
            overrideB: ZERO_ADDRESS,
        };
        Some(PriceDescriptor { target: getter, calldata: call.abi_encode().into() })
    }

    fn pricing_contracts(&self, dex: Dex) -> Option<(Address, Address)> {
        let getter = self.price_getter?;
        let factory = match factory_address(dex, self.chain, PriceProtocol::V2) {
            Some(factory) => factory,
            None => {
                debug!(%dex, chain = %self.chain, "no reference factory registered");
                return None;
            }
        };
        Some((getter, factory))
    }

    /// Resolve unit prices for `descriptors` in one batched round trip per
    /// `max_calls_per_batch` chunk.
    ///
    /// Order-preserving: the i-th returned price belongs to the i-th
    /// descriptor. `None` descriptors (unregistered pricing) and reads that
    /// revert or decode badly come back as `None`; only a failure of the
    /// batch call itself is an error.
    pub async fn unit_prices(
        &self,
        descriptors: &[Option<PriceDescriptor>],
    ) -> ZapResult<Vec<Option<U256>>> {
        let indexed = indexed_calls(descriptors);
        if indexed.is_empty() {
            return Ok(vec![None; descriptors.len()]);
        }

        let multicall = IMulticall3::new(self.multicall, self.provider.clone());
        let batches = indexed
            .chunks(self.max_calls_per_batch)
            .map(|chunk| {
                let calls = chunk.iter().map(|(_, call)| call.clone()).collect::<Vec<_>>();
                let multicall = multicall.clone();
                async move { multicall.tryAggregate(false, calls).call().await }
            })
            .collect::<Vec<_>>();

        debug!(reads = indexed.len(), batches = batches.len(), "fetching unit prices");
        let results = try_join_all(batches).await.map_err(contract_call_error)?;

        Ok(reconcile_prices(descriptors.len(), &indexed, results.into_iter().flatten()))
    }

    /// Input/output USD estimate for a plain swap quote.
    pub async fn swap_valuation(
        &self,
        dex: Dex,
        token_in: Address,
        amount_in: U256,
        token_out: Address,
        amount_out: U256,
    ) -> ZapResult<UsdValuation> {
        let descriptors =
            [self.token_price_descriptor(token_in, dex), self.token_price_descriptor(token_out, dex)];
        let prices = self.unit_prices(&descriptors).await?;
        Ok(UsdValuation {
            input: usd_value(prices[0].unwrap_or_default(), amount_in),
            output: usd_value(prices[1].unwrap_or_default(), amount_out),
        })
    }

    /// Input/output USD estimate for a zap quote. The output side is priced
    /// off the pool-share token when one is known; a bond zap carries no
    /// pool-share token in its request, so its output stays zero.
    pub async fn zap_valuation(
        &self,
        dex: Dex,
        token_in: Address,
        amount_in: U256,
        lp_token: Option<Address>,
        lp_amount: U256,
    ) -> ZapResult<UsdValuation> {
        let descriptors = [
            self.token_price_descriptor(token_in, dex),
            lp_token.and_then(|token| self.lp_price_descriptor(token, dex)),
        ];
        let prices = self.unit_prices(&descriptors).await?;
        Ok(UsdValuation {
            input: usd_value(prices[0].unwrap_or_default(), amount_in),
            output: usd_value(prices[1].unwrap_or_default(), lp_amount),
        })
    }
}

/// Flatten `descriptors` into Multicall3 calls, remembering each call's
/// original position.
fn indexed_calls(descriptors: &[Option<PriceDescriptor>]) -> Vec<(usize, IMulticall3::Call)> {
    descriptors
        .iter()
        .enumerate()
        .filter_map(|(index, descriptor)| {
            descriptor.as_ref().map(|descriptor| {
                (
                    index,
                    IMulticall3::Call {
                        target: descriptor.target,
                        callData: descriptor.calldata.clone(),
                    },
                )
            })
        })
        .collect()
}

/// Scatter batch results back to their descriptor positions. Results arrive
/// in submission order, so zipping against the indexed calls restores the
/// positional mapping no matter how the calls were chunked.
fn reconcile_prices(
    len: usize,
    indexed: &[(usize, IMulticall3::Call)],
    results: impl Iterator<Item = IMulticall3::Result>,
) -> Vec<Option<U256>> {
    let mut prices: Vec<Option<U256>> = vec![None; len];
    for ((index, _), result) in indexed.iter().zip(results) {
        if result.success {
            prices[*index] = U256::abi_decode(&result.returnData).ok();
        }
    }
    prices
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::providers::{Provider, ProviderBuilder};
    use alloy::sol_types::{SolCall, SolValue};

    fn aggregator(chain: Chain) -> PriceAggregator {
        let provider =
            ProviderBuilder::new().connect_http("http://127.0.0.1:8545".parse().unwrap()).erased();
        PriceAggregator::new(chain, provider)
    }

    #[test]
    fn descriptor_substitutes_wrapped_native() {
        let agg = aggregator(Chain::Bnb);
        let descriptor = agg
            .token_price_descriptor(crate::constants::NATIVE_ADDRESS, Dex::ApeBond)
            .expect("bnb pricing is registered");

        let decoded = IPriceGetter::getPriceFromFactoryCall::abi_decode(&descriptor.calldata)
            .expect("calldata round-trips");
        assert_eq!(decoded.token, crate::constants::wrapped_native(Chain::Bnb));
        assert_eq!(decoded.protocol, 2);
    }

    #[test]
    fn unregistered_chain_yields_no_descriptor() {
        let agg = aggregator(Chain::Ethereum);
        assert!(agg.token_price_descriptor(crate::constants::NATIVE_ADDRESS, Dex::ApeBond).is_none());
    }

    #[test]
    fn unregistered_factory_yields_no_descriptor() {
        // QuickSwap has no BNB factory even though BNB has a price getter.
        let agg = aggregator(Chain::Bnb);
        assert!(agg.token_price_descriptor(crate::constants::NATIVE_ADDRESS, Dex::QuickSwap).is_none());
    }

    fn descriptor(byte: u8) -> Option<PriceDescriptor> {
        Some(PriceDescriptor {
            target: Address::repeat_byte(byte),
            calldata: Bytes::from(vec![byte; 4]),
        })
    }

    fn price_result(value: u64) -> IMulticall3::Result {
        IMulticall3::Result {
            success: true,
            returnData: U256::from(value).abi_encode().into(),
        }
    }

    #[test]
    fn indexed_calls_skip_absent_slots_in_order() {
        let descriptors = [descriptor(1), None, descriptor(3), None, descriptor(5)];
        let indexed = indexed_calls(&descriptors);
        let positions: Vec<usize> = indexed.iter().map(|(index, _)| *index).collect();
        assert_eq!(positions, vec![0, 2, 4]);
        assert_eq!(indexed[1].1.target, Address::repeat_byte(3));
    }

    #[test]
    fn reconcile_is_order_preserving_across_any_chunking() {
        let descriptors = [descriptor(1), None, descriptor(3), descriptor(5)];
        let indexed = indexed_calls(&descriptors);
        // Results in submission order, as flattened chunks deliver them.
        // Identical whether the batch size was 1, 2 or 1000.
        let results = vec![price_result(10), price_result(30), price_result(50)];

        let prices = reconcile_prices(descriptors.len(), &indexed, results.into_iter());
        assert_eq!(
            prices,
            vec![Some(U256::from(10u64)), None, Some(U256::from(30u64)), Some(U256::from(50u64))]
        );
    }

    #[test]
    fn failed_or_garbled_reads_become_absent_prices() {
        let descriptors = [descriptor(1), descriptor(2)];
        let indexed = indexed_calls(&descriptors);
        let results = vec![
            IMulticall3::Result { success: false, returnData: Bytes::new() },
            IMulticall3::Result { success: true, returnData: Bytes::from(vec![0x01]) },
        ];
        let prices = reconcile_prices(descriptors.len(), &indexed, results.into_iter());
        assert_eq!(prices, vec![None, None]);
    }

    #[test]
    fn batch_bound_defaults_and_clamps() {
        let agg = aggregator(Chain::Bnb);
        assert_eq!(agg.max_calls_per_batch(), DEFAULT_MAX_CALLS_PER_BATCH);
        // Zero would make chunking panic; it clamps to one call per batch.
        assert_eq!(aggregator(Chain::Bnb).with_max_calls_per_batch(0).max_calls_per_batch(), 1);
        assert_eq!(aggregator(Chain::Bnb).with_max_calls_per_batch(25).max_calls_per_batch(), 25);
    }

    #[tokio::test]
    async fn absent_descriptors_resolve_without_network() {
        // Every slot is None, so no batch is built and no RPC happens.
        let agg = aggregator(Chain::Ethereum);
        let prices = agg.unit_prices(&[None, None, None]).await.unwrap();
        assert_eq!(prices, vec![None, None, None]);
    }

    #[tokio::test]
    async fn valuation_degrades_to_zero_without_registration() {
        let agg = aggregator(Chain::Ethereum);
        let valuation = agg
            .swap_valuation(
                Dex::ApeBond,
                crate::constants::NATIVE_ADDRESS,
                U256::from(1_000_000u64),
                Address::repeat_byte(0x22),
                U256::from(5u64),
            )
            .await
            .unwrap();
        assert_eq!(valuation, UsdValuation::default());
    }
}
