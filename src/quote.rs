//! Quote requests and the quotes they produce.
//!
//! A request is built per call and never persisted. A quote is a snapshot of
//! one lens read: immutable, single-use, consumed by at most one dispatch.
//! Any newer chain state invalidates a held quote; the client never caches
//! them.

use alloy::primitives::{Address, Bytes, U256};

use crate::constants::{Dex, NATIVE_ADDRESS};
use crate::contracts::{BondParams, SwapParams, SwapPath, ZapParams};
use crate::pricing::UsdValuation;

/// Intent to swap `token_in` into `token_out`.
#[derive(Debug, Clone)]
pub struct SwapQuoteRequest {
    pub dex: Dex,
    pub token_in: Address,
    pub amount_in: U256,
    pub token_out: Address,
    /// Price-impact tolerance in percent. Enforced client-side, never sent
    /// to the lens.
    pub allowed_price_impact_pct: f64,
    pub to: Address,
    /// Overrides the client's deadline offset for this call only.
    pub deadline_offset_secs: Option<u64>,
    /// Enrich the quote with batched USD estimates.
    pub with_usd_valuation: bool,
}

impl SwapQuoteRequest {
    pub fn new(
        dex: Dex,
        token_in: Address,
        amount_in: U256,
        token_out: Address,
        allowed_price_impact_pct: f64,
        to: Address,
    ) -> Self {
        Self {
            dex,
            token_in,
            amount_in,
            token_out,
            allowed_price_impact_pct,
            to,
            deadline_offset_secs: None,
            with_usd_valuation: false,
        }
    }

    /// Same request with the native sentinel as input token.
    pub fn native(
        dex: Dex,
        amount_in: U256,
        token_out: Address,
        allowed_price_impact_pct: f64,
        to: Address,
    ) -> Self {
        Self::new(dex, NATIVE_ADDRESS, amount_in, token_out, allowed_price_impact_pct, to)
    }

    pub fn with_deadline_offset_secs(mut self, secs: u64) -> Self {
        self.deadline_offset_secs = Some(secs);
        self
    }

    pub fn with_usd_valuation(mut self) -> Self {
        self.with_usd_valuation = true;
        self
    }
}

/// Intent to zap `token_in` into the pool identified by its pool-share
/// token `token_out`.
#[derive(Debug, Clone)]
pub struct ZapQuoteRequest {
    pub dex: Dex,
    pub token_in: Address,
    pub amount_in: U256,
    /// Pool-share (LP) token of the target pool.
    pub token_out: Address,
    pub allowed_price_impact_pct: f64,
    pub to: Address,
    pub deadline_offset_secs: Option<u64>,
    pub with_usd_valuation: bool,
}

impl ZapQuoteRequest {
    pub fn new(
        dex: Dex,
        token_in: Address,
        amount_in: U256,
        token_out: Address,
        allowed_price_impact_pct: f64,
        to: Address,
    ) -> Self {
        Self {
            dex,
            token_in,
            amount_in,
            token_out,
            allowed_price_impact_pct,
            to,
            deadline_offset_secs: None,
            with_usd_valuation: false,
        }
    }

    pub fn native(
        dex: Dex,
        amount_in: U256,
        token_out: Address,
        allowed_price_impact_pct: f64,
        to: Address,
    ) -> Self {
        Self::new(dex, NATIVE_ADDRESS, amount_in, token_out, allowed_price_impact_pct, to)
    }

    pub fn with_deadline_offset_secs(mut self, secs: u64) -> Self {
        self.deadline_offset_secs = Some(secs);
        self
    }

    pub fn with_usd_valuation(mut self) -> Self {
        self.with_usd_valuation = true;
        self
    }
}

/// Intent to zap `token_in` into a bond purchase, capped at `max_price`
/// by the lens-filled bond params.
#[derive(Debug, Clone)]
pub struct BondZapQuoteRequest {
    pub dex: Dex,
    pub token_in: Address,
    pub amount_in: U256,
    pub bond: Address,
    pub allowed_price_impact_pct: f64,
    pub to: Address,
    pub deadline_offset_secs: Option<u64>,
    pub with_usd_valuation: bool,
}

impl BondZapQuoteRequest {
    pub fn new(
        dex: Dex,
        token_in: Address,
        amount_in: U256,
        bond: Address,
        allowed_price_impact_pct: f64,
        to: Address,
    ) -> Self {
        Self {
            dex,
            token_in,
            amount_in,
            bond,
            allowed_price_impact_pct,
            to,
            deadline_offset_secs: None,
            with_usd_valuation: false,
        }
    }

    pub fn native(
        dex: Dex,
        amount_in: U256,
        bond: Address,
        allowed_price_impact_pct: f64,
        to: Address,
    ) -> Self {
        Self::new(dex, NATIVE_ADDRESS, amount_in, bond, allowed_price_impact_pct, to)
    }

    pub fn with_deadline_offset_secs(mut self, secs: u64) -> Self {
        self.deadline_offset_secs = Some(secs);
        self
    }

    pub fn with_usd_valuation(mut self) -> Self {
        self.with_usd_valuation = true;
        self
    }
}

/// A guarded swap quote. `price_impacts` holds one entry, the single swap
/// leg, already checked against the request tolerance.
#[derive(Debug, Clone)]
pub struct SwapQuote {
    pub encoded_payload: Bytes,
    pub swap_params: SwapParams,
    pub fee_leg: SwapPath,
    pub price_impacts: Vec<U256>,
    pub usd_valuation: Option<UsdValuation>,
}

/// A guarded zap quote. `price_impacts` holds two entries, one per
/// constituent swap leg.
#[derive(Debug, Clone)]
pub struct ZapQuote {
    pub encoded_payload: Bytes,
    pub zap_params: ZapParams,
    pub fee_leg: SwapPath,
    pub price_impacts: Vec<U256>,
    pub usd_valuation: Option<UsdValuation>,
}

/// A guarded bond-zap quote. Carries the lens-filled bond params that must
/// reach `zapBond` unchanged.
#[derive(Debug, Clone)]
pub struct BondZapQuote {
    pub encoded_payload: Bytes,
    pub zap_params: ZapParams,
    pub fee_leg: SwapPath,
    pub bond_params: BondParams,
    pub price_impacts: Vec<U256>,
    pub usd_valuation: Option<UsdValuation>,
}
