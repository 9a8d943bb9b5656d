//! Dispatch lifecycle hooks.
//!
//! Lets an upstream application observe a transaction right after it is
//! submitted (persistence, audit trails, logging) without blocking the
//! dispatch path.

use std::sync::Arc;

use alloy::primitives::{TxHash, U256};
use anyhow::Result;
use futures::future::BoxFuture;

/// What the dispatcher submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchKind {
    Swap,
    Zap,
    ZapBond,
}

/// Context handed to [`DispatchCallback::on_submitted`].
#[derive(Debug, Clone)]
pub struct CallbackContext {
    pub kind: DispatchKind,
    pub tx_hash: TxHash,
    /// Native value attached to the call.
    pub value: U256,
    pub timestamp_ns: u64,
}

impl CallbackContext {
    pub fn new(kind: DispatchKind, tx_hash: TxHash, value: U256) -> Self {
        let timestamp_ns = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        Self { kind, tx_hash, value, timestamp_ns }
    }

    /// JSON rendering for log sinks.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": format!("{:?}", self.kind),
            "tx_hash": self.tx_hash.to_string(),
            "value": self.value.to_string(),
            "timestamp_ns": self.timestamp_ns,
        })
    }
}

/// Callback invoked after a dispatch transaction has been submitted.
///
/// Runs on a spawned task; a callback error is logged and never affects the
/// already-submitted transaction.
pub trait DispatchCallback: Send + Sync {
    fn on_submitted(&self, context: CallbackContext) -> BoxFuture<'static, Result<()>>;
}

pub type CallbackRef = Arc<dyn DispatchCallback>;

/// Default callback that does nothing.
pub struct NoopCallback;

impl DispatchCallback for NoopCallback {
    fn on_submitted(&self, _context: CallbackContext) -> BoxFuture<'static, Result<()>> {
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_renders_to_json() {
        let context =
            CallbackContext::new(DispatchKind::Swap, TxHash::repeat_byte(0x11), U256::from(7u64));
        let json = context.to_json();
        assert_eq!(json["kind"], "Swap");
        assert_eq!(json["value"], "7");
    }

    #[tokio::test]
    async fn noop_callback_succeeds() {
        let callback = NoopCallback;
        let context =
            CallbackContext::new(DispatchKind::Zap, TxHash::repeat_byte(0x22), U256::ZERO);
        assert!(callback.on_submitted(context).await.is_ok());
    }
}
