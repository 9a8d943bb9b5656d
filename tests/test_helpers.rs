//! Shared helpers for integration tests.

use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use zap_trade_sdk::{Chain, Project, ZapClient};

/// Local node used by the fork tests (anvil --fork-url <rpc>).
pub const LOCAL_RPC: &str = "http://127.0.0.1:8545";

pub fn test_provider() -> DynProvider {
    ProviderBuilder::new().connect_http(LOCAL_RPC.parse().unwrap()).erased()
}

pub fn test_client(chain: Chain) -> ZapClient {
    ZapClient::new(Project::ApeBond, chain, test_provider())
}
