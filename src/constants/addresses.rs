//! Deployment address tables.
//!
//! One lookup function per contract kind. A `None` means no deployment is
//! registered for that combination; callers surface that as a configuration
//! error (or, for pricing, degrade to a zero valuation).

use alloy::primitives::{Address, address};
use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::platforms::{Chain, Dex, PriceProtocol, Project};

/// Routing lens (read-only quote oracle) per {project, chain, dex}.
pub fn zap_lens_address(project: Project, chain: Chain, dex: Dex) -> Option<Address> {
    match (project, chain, dex) {
        (Project::ApeBond, Chain::Bnb, Dex::ApeBond) => {
            Some(address!("Feeb321973D3b5F6C475A90D86c5C2d197A27881"))
        }
        (Project::ApeBond, Chain::Bnb, Dex::PancakeSwap) => {
            Some(address!("61B428C02CB1058F9AAf2bFeACCB00333c50E0A1"))
        }
        (Project::ApeBond, Chain::Polygon, Dex::ApeBond) => {
            Some(address!("52B95673D84A30fe8375dC7A088d2F612d13F7A5"))
        }
        (Project::ApeBond, Chain::Polygon, Dex::QuickSwap) => {
            Some(address!("b20889d91a4E1f409B08412B55eF079186Aa2b96"))
        }
        _ => None,
    }
}

/// Execution (zap router) contract per {project, chain}.
pub fn zap_address(project: Project, chain: Chain) -> Option<Address> {
    match (project, chain) {
        (Project::ApeBond, Chain::Bnb) => {
            Some(address!("A400A9a00bd1b7ca90BbC5F8DB0d3d723da8D72c"))
        }
        (Project::ApeBond, Chain::Polygon) => {
            Some(address!("133141571DC83783d7c05138af8aA9cc2189c1A7"))
        }
        _ => None,
    }
}

/// Price getter contract per chain.
pub fn price_getter_address(chain: Chain) -> Option<Address> {
    match chain {
        Chain::Bnb => Some(address!("945b9E730f35046c5bf24117478D651999377831")),
        Chain::Polygon => Some(address!("241ebA867Bee0Dd50a8Ca54732A6C05815C50Cc5")),
        _ => None,
    }
}

/// UniV2 factory used as the pricing reference pool source for {dex, chain}.
pub fn factory_address(dex: Dex, chain: Chain, protocol: PriceProtocol) -> Option<Address> {
    if protocol != PriceProtocol::V2 {
        return None;
    }
    match (dex, chain) {
        (Dex::ApeBond, Chain::Bnb) => Some(address!("0841BD0B734E4F5853f0dD8d7Ea041c241fb0Da6")),
        (Dex::ApeBond, Chain::Polygon) => {
            Some(address!("Cf083Be4164828f00cAE704EC15a36D711491284"))
        }
        (Dex::QuickSwap, Chain::Polygon) => {
            Some(address!("5757371414417b8C6CAad45bAeF941aBc7d3Ab32"))
        }
        (Dex::PancakeSwap, Chain::Bnb) => {
            Some(address!("cA143Ce32Fe78f1f7019d7d551a6402fC5350c73"))
        }
        _ => None,
    }
}

/// Hop tokens per {dex, chain}: intermediate tokens the lens may route
/// through when no direct pool exists. Pure routing hints, forwarded as-is.
pub static HOP_TOKENS: Lazy<HashMap<(Dex, Chain), Vec<Address>>> = Lazy::new(|| {
    let mut map: HashMap<(Dex, Chain), Vec<Address>> = HashMap::new();
    map.insert(
        (Dex::ApeBond, Chain::Bnb),
        vec![
            // WBNB, BUSD, USDT, ETH
            address!("bb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"),
            address!("e9e7CEA3DedcA5984780Bafc599bD69ADd087D56"),
            address!("55d398326f99059fF775485246999027B3197955"),
            address!("2170Ed0880ac9A755fd29B2688956BD959F933F8"),
        ],
    );
    map.insert(
        (Dex::PancakeSwap, Chain::Bnb),
        vec![
            address!("bb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"),
            address!("e9e7CEA3DedcA5984780Bafc599bD69ADd087D56"),
            address!("55d398326f99059fF775485246999027B3197955"),
        ],
    );
    map.insert(
        (Dex::ApeBond, Chain::Polygon),
        vec![
            // WMATIC, USDC, WETH, USDT, DAI
            address!("0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270"),
            address!("2791Bca1f2de4661ED88A30C99A7a9449Aa84174"),
            address!("7ceB23fD6bC0adD59E62ac25578270cFf1b9f619"),
            address!("c2132D05D31c914a87C6611C10748AEb04B58e8F"),
            address!("8f3Cf7ad23Cd3CaDbD9735AFf958023239c6A063"),
        ],
    );
    map.insert(
        (Dex::QuickSwap, Chain::Polygon),
        vec![
            address!("0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270"),
            address!("2791Bca1f2de4661ED88A30C99A7a9449Aa84174"),
            address!("7ceB23fD6bC0adD59E62ac25578270cFf1b9f619"),
        ],
    );
    map
});

/// Hop tokens registered for {dex, chain}, empty when none are.
pub fn hop_tokens(dex: Dex, chain: Chain) -> &'static [Address] {
    HOP_TOKENS.get(&(dex, chain)).map(Vec::as_slice).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_chains_resolve() {
        assert!(zap_lens_address(Project::ApeBond, Chain::Bnb, Dex::ApeBond).is_some());
        assert!(zap_lens_address(Project::ApeBond, Chain::Polygon, Dex::QuickSwap).is_some());
        assert!(zap_address(Project::ApeBond, Chain::Bnb).is_some());
        assert!(price_getter_address(Chain::Polygon).is_some());
    }

    #[test]
    fn unregistered_combinations_are_none() {
        assert!(zap_lens_address(Project::ApeBond, Chain::Ethereum, Dex::ApeBond).is_none());
        assert!(zap_lens_address(Project::ApeBond, Chain::Bnb, Dex::QuickSwap).is_none());
        assert!(zap_address(Project::ApeBond, Chain::ArbitrumOne).is_none());
        assert!(price_getter_address(Chain::Ethereum).is_none());
        assert!(factory_address(Dex::QuickSwap, Chain::Bnb, PriceProtocol::V2).is_none());
    }

    #[test]
    fn hop_tokens_default_to_empty() {
        assert!(!hop_tokens(Dex::ApeBond, Chain::Bnb).is_empty());
        assert!(hop_tokens(Dex::PancakeSwap, Chain::Polygon).is_empty());
    }
}
