//! Rust SDK for quoting and executing token swaps and liquidity zaps
//! through an on-chain zap router.
//!
//! The flow is quote → guard → dispatch: a read-only routing lens computes
//! the route and its expected price impact, the client checks that impact
//! against the caller's tolerance before anything is signed, and a quote
//! that passes can be handed straight to the router. USD valuations are an
//! optional enrichment, batched through Multicall3.
//!
//! Dispatch requires the provider to carry a signer; quoting works with a
//! plain read-only provider.

pub mod common;
pub mod constants;
pub mod contracts;
pub mod pricing;
pub mod quote;
pub mod trading;
pub mod utils;

use std::collections::HashMap;

use alloy::primitives::{Address, U256};
use alloy::providers::DynProvider;
use tracing::{debug, error, warn};

pub use crate::common::{SwapStage, ZapConfig, ZapError, ZapResult};
pub use crate::constants::{Chain, DENOMINATOR, Dex, NATIVE_ADDRESS, Project};
pub use crate::pricing::{PriceAggregator, UsdValuation};
pub use crate::quote::{
    BondZapQuote, BondZapQuoteRequest, SwapQuote, SwapQuoteRequest, ZapQuote, ZapQuoteRequest,
};
pub use crate::trading::{
    BondZapInput, CallbackContext, CallbackRef, DispatchCallback, DispatchKind, DispatchOptions,
    DispatchReceipt, NoopCallback, SwapInput, TxStatus, ZapInput, native_call_value,
};
pub use crate::utils::calc::pct_to_bps;
pub use crate::utils::guard::check_price_impact;

use crate::common::contract_call_error;
use crate::constants::{hop_tokens, zap_address, zap_lens_address};
use crate::contracts::IZapLens;
use crate::trading::Dispatcher;

/// Client for one project deployment on one chain.
///
/// Holds the lens registry, the router address and the per-instance config
/// snapshot. The config is immutable after construction; per-call overrides
/// ride in the request structs, so concurrent operations on a shared client
/// can never race on settings.
#[derive(Clone)]
pub struct ZapClient {
    provider: DynProvider,
    project: Project,
    chain: Chain,
    lens_registry: HashMap<Dex, Address>,
    zap_router: Option<Address>,
    config: ZapConfig,
    pricing: PriceAggregator,
}

impl ZapClient {
    /// Build a client for `project` on `chain`, resolving contract addresses
    /// from the static tables.
    ///
    /// Missing registrations are logged here and surfaced as
    /// [`ZapError::Configuration`] by the first operation that needs them,
    /// so a partially-registered chain can still serve the exchanges it has.
    pub fn new(project: Project, chain: Chain, provider: DynProvider) -> Self {
        let mut lens_registry = HashMap::new();
        for dex in Dex::ALL {
            match zap_lens_address(project, chain, dex) {
                Some(address) => {
                    lens_registry.insert(dex, address);
                }
                None => debug!(%project, %chain, %dex, "no lens registered"),
            }
        }
        if lens_registry.is_empty() {
            error!(%project, %chain, "no lens registered for any exchange");
        }

        let zap_router = zap_address(project, chain);
        if zap_router.is_none() {
            error!(%project, %chain, "no zap router registered");
        }

        let pricing = PriceAggregator::new(chain, provider.clone());
        Self {
            provider,
            project,
            chain,
            lens_registry,
            zap_router,
            config: ZapConfig::default(),
            pricing,
        }
    }

    pub fn with_config(mut self, config: ZapConfig) -> Self {
        self.config = config;
        self
    }

    /// Override or add a lens registration for `dex`.
    pub fn with_lens(mut self, dex: Dex, address: Address) -> Self {
        self.lens_registry.insert(dex, address);
        self
    }

    /// Override the router registration.
    pub fn with_zap_router(mut self, address: Address) -> Self {
        self.zap_router = Some(address);
        self
    }

    pub fn project(&self) -> Project {
        self.project
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }

    pub fn config(&self) -> &ZapConfig {
        &self.config
    }

    pub fn pricing(&self) -> &PriceAggregator {
        &self.pricing
    }

    /// Hop tokens registered for `dex` on this client's chain. Routing
    /// hints only; the lens does its own route selection.
    pub fn hop_tokens(&self, dex: Dex) -> &'static [Address] {
        hop_tokens(dex, self.chain)
    }

    /// Registered lens for `dex`, or a configuration error.
    pub fn lens_address(&self, dex: Dex) -> ZapResult<Address> {
        self.lens_registry
            .get(&dex)
            .copied()
            .ok_or_else(|| ZapError::lens_not_registered(dex, self.chain))
    }

    /// Registered zap router, or a configuration error.
    pub fn zap_router_address(&self) -> ZapResult<Address> {
        self.zap_router.ok_or_else(|| ZapError::zap_not_registered(self.chain))
    }

    fn slippage_bps(&self) -> U256 {
        U256::from(pct_to_bps(self.config.slippage_pct))
    }

    fn deadline_offset(&self, override_secs: Option<u64>) -> U256 {
        U256::from(override_secs.unwrap_or(self.config.deadline_offset_secs))
    }

    /// Valuation is advisory: log and continue without it rather than fail
    /// a quote that already passed the guard.
    fn advisory_valuation(&self, result: ZapResult<UsdValuation>) -> Option<UsdValuation> {
        match result {
            Ok(valuation) => Some(valuation),
            Err(err) => {
                warn!(%err, "usd valuation failed, returning quote without it");
                None
            }
        }
    }

    /// Request a swap quote from the lens and guard its price impact.
    ///
    /// One read call; the configured slippage is converted to basis points
    /// for the contract, while the request's price-impact tolerance stays
    /// client-side. A quote whose impact exceeds tolerance is discarded and
    /// reported as [`ZapError::PriceImpactExceeded`].
    pub async fn get_swap_quote(&self, request: SwapQuoteRequest) -> ZapResult<SwapQuote> {
        let lens_address = self.lens_address(request.dex)?;
        let lens = IZapLens::new(lens_address, self.provider.clone());

        debug!(dex = %request.dex, token_in = %request.token_in, amount_in = %request.amount_in, "requesting swap quote");
        let data = lens
            .getSwapData(
                request.token_in,
                request.amount_in,
                request.token_out,
                self.slippage_bps(),
                request.to,
                self.deadline_offset(request.deadline_offset_secs),
            )
            .call()
            .await
            .map_err(contract_call_error)?;

        let price_impacts = vec![data.priceImpactPercentage];
        check_price_impact(&price_impacts, request.allowed_price_impact_pct)?;

        let amount_out = data.swapParams.path.amountOut;
        let usd_valuation = if request.with_usd_valuation {
            self.advisory_valuation(
                self.pricing
                    .swap_valuation(
                        request.dex,
                        request.token_in,
                        request.amount_in,
                        request.token_out,
                        amount_out,
                    )
                    .await,
            )
        } else {
            None
        };

        Ok(SwapQuote {
            encoded_payload: data.encodedTx,
            swap_params: data.swapParams,
            fee_leg: data.feeSwapPath,
            price_impacts,
            usd_valuation,
        })
    }

    /// [`get_swap_quote`](Self::get_swap_quote) with the native sentinel as
    /// input token.
    pub async fn get_swap_quote_native(
        &self,
        mut request: SwapQuoteRequest,
    ) -> ZapResult<SwapQuote> {
        request.token_in = NATIVE_ADDRESS;
        self.get_swap_quote(request).await
    }

    /// Request a zap quote (swap into a liquidity position) and guard both
    /// swap legs' price impacts.
    pub async fn get_zap_quote(&self, request: ZapQuoteRequest) -> ZapResult<ZapQuote> {
        let lens_address = self.lens_address(request.dex)?;
        let lens = IZapLens::new(lens_address, self.provider.clone());

        debug!(dex = %request.dex, token_in = %request.token_in, amount_in = %request.amount_in, "requesting zap quote");
        let data = lens
            .getZapData(
                request.token_in,
                request.amount_in,
                request.token_out,
                self.slippage_bps(),
                request.to,
                self.deadline_offset(request.deadline_offset_secs),
            )
            .call()
            .await
            .map_err(contract_call_error)?;

        check_price_impact(&data.priceImpactPercentages, request.allowed_price_impact_pct)?;

        let lp_amount = data.zapParams.liquidityPath.lpAmount;
        let usd_valuation = if request.with_usd_valuation {
            self.advisory_valuation(
                self.pricing
                    .zap_valuation(
                        request.dex,
                        request.token_in,
                        request.amount_in,
                        Some(request.token_out),
                        lp_amount,
                    )
                    .await,
            )
        } else {
            None
        };

        Ok(ZapQuote {
            encoded_payload: data.encodedTx,
            zap_params: data.zapParams,
            fee_leg: data.feeSwapPath,
            price_impacts: data.priceImpactPercentages,
            usd_valuation,
        })
    }

    /// [`get_zap_quote`](Self::get_zap_quote) with the native sentinel as
    /// input token.
    pub async fn get_zap_quote_native(&self, mut request: ZapQuoteRequest) -> ZapResult<ZapQuote> {
        request.token_in = NATIVE_ADDRESS;
        self.get_zap_quote(request).await
    }

    /// Request a bond-zap quote. The lens fills the bond params (bond
    /// address and maximum acceptable price); they are carried on the quote
    /// and must reach `zapBond` unchanged.
    pub async fn get_bond_zap_quote(
        &self,
        request: BondZapQuoteRequest,
    ) -> ZapResult<BondZapQuote> {
        let lens_address = self.lens_address(request.dex)?;
        let lens = IZapLens::new(lens_address, self.provider.clone());

        debug!(dex = %request.dex, bond = %request.bond, amount_in = %request.amount_in, "requesting bond zap quote");
        let data = lens
            .getZapDataBond(
                request.token_in,
                request.amount_in,
                request.bond,
                self.slippage_bps(),
                request.to,
                self.deadline_offset(request.deadline_offset_secs),
            )
            .call()
            .await
            .map_err(contract_call_error)?;

        check_price_impact(&data.priceImpactPercentages, request.allowed_price_impact_pct)?;

        let lp_amount = data.zapParams.liquidityPath.lpAmount;
        let usd_valuation = if request.with_usd_valuation {
            // No pool-share token in the request; only the input side can
            // be priced.
            self.advisory_valuation(
                self.pricing
                    .zap_valuation(request.dex, request.token_in, request.amount_in, None, lp_amount)
                    .await,
            )
        } else {
            None
        };

        Ok(BondZapQuote {
            encoded_payload: data.encodedTx,
            zap_params: data.zapParams,
            fee_leg: data.feeSwapPath,
            bond_params: data.bondParams,
            price_impacts: data.priceImpactPercentages,
            usd_valuation,
        })
    }

    /// [`get_bond_zap_quote`](Self::get_bond_zap_quote) with the native
    /// sentinel as input token.
    pub async fn get_bond_zap_quote_native(
        &self,
        mut request: BondZapQuoteRequest,
    ) -> ZapResult<BondZapQuote> {
        request.token_in = NATIVE_ADDRESS;
        self.get_bond_zap_quote(request).await
    }

    /// Submit a swap to the router. Attaches native value exactly when the
    /// input token is the native sentinel.
    pub async fn swap(
        &self,
        input: SwapInput,
        options: DispatchOptions,
    ) -> ZapResult<DispatchReceipt> {
        Dispatcher::new(self.provider.clone(), self.zap_router_address()?).swap(input, options).await
    }

    /// [`swap`](Self::swap) accepting a quote result directly; an incoming
    /// failure short-circuits unchanged.
    pub async fn swap_quoted(
        &self,
        quoted: ZapResult<SwapQuote>,
        options: DispatchOptions,
    ) -> ZapResult<DispatchReceipt> {
        self.swap(SwapInput::Quote(quoted?), options).await
    }

    /// Submit a zap to the router.
    pub async fn zap(
        &self,
        input: ZapInput,
        options: DispatchOptions,
    ) -> ZapResult<DispatchReceipt> {
        Dispatcher::new(self.provider.clone(), self.zap_router_address()?).zap(input, options).await
    }

    /// [`zap`](Self::zap) accepting a quote result directly.
    pub async fn zap_quoted(
        &self,
        quoted: ZapResult<ZapQuote>,
        options: DispatchOptions,
    ) -> ZapResult<DispatchReceipt> {
        self.zap(ZapInput::Quote(quoted?), options).await
    }

    /// Submit a bond zap to the router, forwarding the quote's bond params
    /// unchanged.
    pub async fn zap_bond(
        &self,
        input: BondZapInput,
        options: DispatchOptions,
    ) -> ZapResult<DispatchReceipt> {
        Dispatcher::new(self.provider.clone(), self.zap_router_address()?)
            .zap_bond(input, options)
            .await
    }

    /// [`zap_bond`](Self::zap_bond) accepting a quote result directly.
    pub async fn zap_bond_quoted(
        &self,
        quoted: ZapResult<BondZapQuote>,
        options: DispatchOptions,
    ) -> ZapResult<DispatchReceipt> {
        self.zap_bond(BondZapInput::Quote(quoted?), options).await
    }
}
