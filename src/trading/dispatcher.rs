//! Transaction dispatcher.
//!
//! Turns a validated quote (or caller-built params) into a state-changing
//! call against the zap router. Input shapes are an explicit tagged union:
//! the pre-encoded payload variant is rejected at the type level because the
//! native value for an opaque payload cannot be inferred.

use alloy::network::Ethereum;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{DynProvider, PendingTransactionBuilder};
use tracing::{debug, warn};

use crate::common::{ZapError, ZapResult, contract_call_error};
use crate::constants::NATIVE_ADDRESS;
use crate::contracts::{BondParams, IZapRouter, SwapParams, SwapPath, ZapParams};
use crate::quote::{BondZapQuote, SwapQuote, ZapQuote};
use crate::trading::lifecycle::{CallbackContext, CallbackRef, DispatchKind};

/// Accepted input shapes for [`swap`](crate::ZapClient::swap).
#[derive(Debug, Clone)]
pub enum SwapInput {
    /// A quote the client already guarded. Forwarded as-is.
    Quote(SwapQuote),
    /// Caller-built params. No price-impact re-validation happens here; the
    /// caller owns that responsibility.
    Raw { swap_params: SwapParams, fee_leg: SwapPath },
    /// Pre-encoded payload. Permanently rejected, see [`ZapError::UnsupportedInput`].
    Encoded(Bytes),
}

/// Accepted input shapes for [`zap`](crate::ZapClient::zap).
#[derive(Debug, Clone)]
pub enum ZapInput {
    Quote(ZapQuote),
    Raw { zap_params: ZapParams, fee_leg: SwapPath },
    Encoded(Bytes),
}

/// Accepted input shapes for [`zap_bond`](crate::ZapClient::zap_bond).
#[derive(Debug, Clone)]
pub enum BondZapInput {
    Quote(BondZapQuote),
    Raw { zap_params: ZapParams, fee_leg: SwapPath, bond_params: BondParams },
    Encoded(Bytes),
}

/// Observable outcome of one dispatch.
///
/// A call moves `Pending -> Submitted -> {Confirmed | Reverted}`; only
/// `Submitted` and the terminal states are ever returned. A transaction that
/// never made it to the mempool surfaces as a [`ZapError`] instead
/// (`FailedToSubmit` exists for callers who fold that error back into a
/// status).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    Pending,
    Submitted,
    Confirmed,
    Reverted,
    FailedToSubmit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReceipt {
    pub tx_hash: TxHash,
    pub status: TxStatus,
}

/// Per-dispatch options.
#[derive(Clone, Default)]
pub struct DispatchOptions {
    /// Wait for the receipt and report `Confirmed`/`Reverted` instead of
    /// returning right after submission.
    pub wait_for_confirmation: bool,
    /// Invoked on a spawned task once the transaction is submitted.
    pub on_submitted: Option<CallbackRef>,
}

/// Native value to attach: the input amount exactly when the input token is
/// the native sentinel, zero otherwise. Applied uniformly across swap, zap
/// and bond zap.
pub fn native_call_value(token_in: Address, amount_in: U256) -> U256 {
    if token_in == NATIVE_ADDRESS { amount_in } else { U256::ZERO }
}

pub(crate) fn resolve_swap_input(input: SwapInput) -> ZapResult<(SwapParams, SwapPath)> {
    match input {
        SwapInput::Quote(quote) => Ok((quote.swap_params, quote.fee_leg)),
        SwapInput::Raw { swap_params, fee_leg } => Ok((swap_params, fee_leg)),
        SwapInput::Encoded(_) => Err(ZapError::UnsupportedInput),
    }
}

pub(crate) fn resolve_zap_input(input: ZapInput) -> ZapResult<(ZapParams, SwapPath)> {
    match input {
        ZapInput::Quote(quote) => Ok((quote.zap_params, quote.fee_leg)),
        ZapInput::Raw { zap_params, fee_leg } => Ok((zap_params, fee_leg)),
        ZapInput::Encoded(_) => Err(ZapError::UnsupportedInput),
    }
}

pub(crate) fn resolve_bond_zap_input(
    input: BondZapInput,
) -> ZapResult<(ZapParams, SwapPath, BondParams)> {
    match input {
        BondZapInput::Quote(quote) => Ok((quote.zap_params, quote.fee_leg, quote.bond_params)),
        BondZapInput::Raw { zap_params, fee_leg, bond_params } => {
            Ok((zap_params, fee_leg, bond_params))
        }
        BondZapInput::Encoded(_) => Err(ZapError::UnsupportedInput),
    }
}

pub(crate) struct Dispatcher {
    provider: DynProvider,
    router: Address,
}

impl Dispatcher {
    pub(crate) fn new(provider: DynProvider, router: Address) -> Self {
        Self { provider, router }
    }

    pub(crate) async fn swap(
        &self,
        input: SwapInput,
        options: DispatchOptions,
    ) -> ZapResult<DispatchReceipt> {
        let (swap_params, fee_leg) = resolve_swap_input(input)?;
        let value = native_call_value(swap_params.tokenIn, swap_params.amountIn);
        let router = IZapRouter::new(self.router, self.provider.clone());
        let pending = router
            .swap(swap_params, fee_leg)
            .value(value)
            .send()
            .await
            .map_err(contract_call_error)?;
        self.finish(DispatchKind::Swap, value, pending, options).await
    }

    pub(crate) async fn zap(
        &self,
        input: ZapInput,
        options: DispatchOptions,
    ) -> ZapResult<DispatchReceipt> {
        let (zap_params, fee_leg) = resolve_zap_input(input)?;
        let value = native_call_value(zap_params.tokenIn, zap_params.amountIn);
        let router = IZapRouter::new(self.router, self.provider.clone());
        let pending = router
            .zap(zap_params, fee_leg)
            .value(value)
            .send()
            .await
            .map_err(contract_call_error)?;
        self.finish(DispatchKind::Zap, value, pending, options).await
    }

    pub(crate) async fn zap_bond(
        &self,
        input: BondZapInput,
        options: DispatchOptions,
    ) -> ZapResult<DispatchReceipt> {
        let (zap_params, fee_leg, bond_params) = resolve_bond_zap_input(input)?;
        let value = native_call_value(zap_params.tokenIn, zap_params.amountIn);
        let router = IZapRouter::new(self.router, self.provider.clone());
        let pending = router
            .zapBond(zap_params, fee_leg, bond_params.bond, bond_params.maxPrice)
            .value(value)
            .send()
            .await
            .map_err(contract_call_error)?;
        self.finish(DispatchKind::ZapBond, value, pending, options).await
    }

    async fn finish(
        &self,
        kind: DispatchKind,
        value: U256,
        pending: PendingTransactionBuilder<Ethereum>,
        options: DispatchOptions,
    ) -> ZapResult<DispatchReceipt> {
        let tx_hash = *pending.tx_hash();
        debug!(?kind, %tx_hash, %value, "transaction submitted");

        if let Some(callback) = options.on_submitted {
            let future = callback.on_submitted(CallbackContext::new(kind, tx_hash, value));
            tokio::spawn(async move {
                if let Err(err) = future.await {
                    warn!(%tx_hash, %err, "dispatch callback failed");
                }
            });
        }

        if !options.wait_for_confirmation {
            return Ok(DispatchReceipt { tx_hash, status: TxStatus::Submitted });
        }

        match pending.get_receipt().await {
            Ok(receipt) if receipt.status() => {
                Ok(DispatchReceipt { tx_hash, status: TxStatus::Confirmed })
            }
            Ok(_) => Ok(DispatchReceipt { tx_hash, status: TxStatus::Reverted }),
            Err(err) => Err(ZapError::ContractCall(err.to_string())),
        }
    }
}
