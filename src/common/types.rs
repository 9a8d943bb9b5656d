//! Client configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DEADLINE_OFFSET_SECS, DEFAULT_SLIPPAGE_PCT};

pub type AnyResult<T> = anyhow::Result<T>;

/// Per-instance defaults for quote requests.
///
/// The config is immutable once the client is built; requests that need a
/// different deadline carry their own override. Snapshotting at construction
/// means two in-flight operations can never observe half-updated settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZapConfig {
    /// Slippage tolerance between the quote read and execution, in percent.
    /// This is forwarded to the lens (as basis points); it is NOT the
    /// price-impact tolerance, which is enforced client-side.
    pub slippage_pct: f64,
    /// Seconds added to the chain's current timestamp by the lens to form
    /// the execution deadline.
    pub deadline_offset_secs: u64,
}

impl Default for ZapConfig {
    fn default() -> Self {
        Self {
            slippage_pct: DEFAULT_SLIPPAGE_PCT,
            deadline_offset_secs: DEFAULT_DEADLINE_OFFSET_SECS,
        }
    }
}

impl ZapConfig {
    pub fn with_slippage_pct(mut self, slippage_pct: f64) -> Self {
        self.slippage_pct = slippage_pct;
        self
    }

    pub fn with_deadline_offset_secs(mut self, deadline_offset_secs: u64) -> Self {
        self.deadline_offset_secs = deadline_offset_secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ZapConfig::default();
        assert_eq!(config.slippage_pct, 0.5);
        assert_eq!(config.deadline_offset_secs, 300);
    }

    #[test]
    fn builders_override_single_fields() {
        let config = ZapConfig::default().with_slippage_pct(1.0).with_deadline_offset_secs(60);
        assert_eq!(config.slippage_pct, 1.0);
        assert_eq!(config.deadline_offset_secs, 60);
    }
}
