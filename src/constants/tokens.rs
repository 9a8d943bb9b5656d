//! Well-known token and helper-contract addresses.

use alloy::primitives::{Address, address};

use super::platforms::Chain;

pub const ZERO_ADDRESS: Address = Address::ZERO;

/// Sentinel address callers pass as `token_in` to mean the chain's native
/// currency. Reserved and non-zero; never a real ERC20.
pub const NATIVE_ADDRESS: Address = address!("EeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");

/// Canonical Multicall3 deployment, same address on every supported chain.
pub const MULTICALL3_ADDRESS: Address = address!("cA11bde05977b3631167028862bE2a173976CA11");

/// Wrapped-native ERC20 for `chain`.
pub fn wrapped_native(chain: Chain) -> Address {
    match chain {
        Chain::Ethereum => address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
        Chain::Bnb => address!("bb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"),
        Chain::Polygon => address!("0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270"),
        Chain::ArbitrumOne => address!("82aF49447D8a07e3bd95BD0d56f35241523fBab1"),
    }
}

/// Replace the native sentinel with the chain's wrapped-native ERC20.
///
/// The price getter only understands ERC20 balances, so every token address
/// goes through this before a pricing call is built.
pub fn erc20_for_pricing(token: Address, chain: Chain) -> Address {
    if token == NATIVE_ADDRESS { wrapped_native(chain) } else { token }
}
