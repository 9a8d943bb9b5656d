//! Supported projects, chains and exchanges.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Project whose zap deployment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Project {
    ApeBond,
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Project::ApeBond => write!(f, "ApeBond"),
        }
    }
}

/// EVM chains with at least one registered deployment.
///
/// The discriminant is the chain id, so `Chain::try_from(56)` resolves the
/// chain from an RPC response.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Serialize, Deserialize,
)]
#[repr(u64)]
pub enum Chain {
    Ethereum = 1,
    Bnb = 56,
    Polygon = 137,
    ArbitrumOne = 42161,
}

impl Chain {
    pub fn id(&self) -> u64 {
        (*self).into()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Chain::Ethereum => "ethereum",
            Chain::Bnb => "bnb",
            Chain::Polygon => "polygon",
            Chain::ArbitrumOne => "arbitrum-one",
        };
        write!(f, "{name}")
    }
}

/// Exchanges a routing lens can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dex {
    ApeBond,
    QuickSwap,
    PancakeSwap,
}

impl Dex {
    pub const ALL: [Dex; 3] = [Dex::ApeBond, Dex::QuickSwap, Dex::PancakeSwap];
}

impl fmt::Display for Dex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dex::ApeBond => "ApeBond",
            Dex::QuickSwap => "QuickSwap",
            Dex::PancakeSwap => "PancakeSwap",
        };
        write!(f, "{name}")
    }
}

/// Protocol selector understood by the price getter contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum PriceProtocol {
    Both = 1,
    V2 = 2,
    V3 = 3,
    Algebra = 4,
    Gamma = 5,
}
