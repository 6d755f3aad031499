//! Capability grouping — which API features each chain supports
//!
//! The listing document carries one optional block per capability
//! (`balances`, `activity`, ...). This module names those capabilities,
//! answers per-chain support queries, and produces the grouped views the
//! display layer renders (per-capability chain tables and counts).

use std::fmt;
use std::str::FromStr;

use crate::{Chain, ChainList, Error};

/// An API feature a chain may support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Balances,
    Activity,
    Collectibles,
    Transactions,
    TokenInfo,
    TokenHolders,
}

impl Capability {
    /// All capabilities, in the order the display layer lists them
    pub const ALL: [Capability; 6] = [
        Capability::Balances,
        Capability::Activity,
        Capability::Collectibles,
        Capability::Transactions,
        Capability::TokenInfo,
        Capability::TokenHolders,
    ];

    /// The snake_case key used in the chain document
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Balances => "balances",
            Capability::Activity => "activity",
            Capability::Collectibles => "collectibles",
            Capability::Transactions => "transactions",
            Capability::TokenInfo => "token_info",
            Capability::TokenHolders => "token_holders",
        }
    }

    /// Section title for grouped display
    pub fn title(self) -> &'static str {
        match self {
            Capability::Balances => "Balances API",
            Capability::Activity => "Activity API",
            Capability::Collectibles => "Collectibles API",
            Capability::Transactions => "Transactions API",
            Capability::TokenInfo => "Token Info API",
            Capability::TokenHolders => "Token Holders API",
        }
    }

    /// Documentation path for the capability's API reference page
    pub fn doc_path(self) -> &'static str {
        match self {
            Capability::Balances => "/evm/balances",
            Capability::Activity => "/evm/activity",
            Capability::Collectibles => "/evm/collectibles",
            Capability::Transactions => "/evm/transactions",
            Capability::TokenInfo => "/evm/token-info",
            Capability::TokenHolders => "/evm/token-holders",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = Error;

    /// Accepts the document key in snake or hyphen form, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "balances" => Ok(Capability::Balances),
            "activity" => Ok(Capability::Activity),
            "collectibles" => Ok(Capability::Collectibles),
            "transactions" => Ok(Capability::Transactions),
            "token_info" => Ok(Capability::TokenInfo),
            "token_holders" => Ok(Capability::TokenHolders),
            _ => Err(Error::UnknownCapability(s.to_string())),
        }
    }
}

impl Chain {
    /// Whether this chain supports the given capability
    ///
    /// An absent capability block means not supported.
    pub fn supports(&self, capability: Capability) -> bool {
        let block = match capability {
            Capability::Balances => self.balances,
            Capability::Activity => self.activity,
            Capability::Collectibles => self.collectibles,
            Capability::Transactions => self.transactions,
            Capability::TokenInfo => self.token_info,
            Capability::TokenHolders => self.token_holders,
        };
        block.map(|support| support.supported).unwrap_or(false)
    }
}

impl ChainList {
    /// Chains supporting a capability, in upstream document order
    pub fn supporting(&self, capability: Capability) -> Vec<&Chain> {
        self.chains
            .iter()
            .filter(|chain| chain.supports(capability))
            .collect()
    }

    /// Supported-chain count for every capability, in display order
    pub fn capability_counts(&self) -> [(Capability, usize); 6] {
        Capability::ALL.map(|capability| (capability, self.supporting(capability).len()))
    }
}
