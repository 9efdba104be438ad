//! Supported blockchain networks and their display/placeholder metadata.
//!
//! All network-keyed branching in the wizard (fee currency, receiver wallet,
//! simulated-mint placeholders) goes through this one lookup table rather
//! than being duplicated per call site.

use serde::{Deserialize, Serialize};

/// A blockchain network the wizard can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Network {
    Solana,
    Ethereum,
    Xrp,
}

/// All selectable networks, in the order the setup step offers them.
pub const NETWORKS: [Network; 3] = [Network::Solana, Network::Ethereum, Network::Xrp];

/// Placeholder contract address and transaction hash shown after the
/// simulated mint. These are fixed literals, not derived from any input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintPlaceholders {
    pub contract_address: &'static str,
    pub tx_hash: &'static str,
}

const SOLANA_PLACEHOLDERS: MintPlaceholders = MintPlaceholders {
    contract_address: "7nE8v5G...p9w2k",
    tx_hash: "5f2d6...3e9a",
};

// Ethereum and XRP share one placeholder set.
const EVM_PLACEHOLDERS: MintPlaceholders = MintPlaceholders {
    contract_address: "0x71C765...67891",
    tx_hash: "5f2d6...3e9a",
};

impl Network {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "SOLANA" | "SOL" => Some(Self::Solana),
            "ETHEREUM" | "ETH" => Some(Self::Ethereum),
            "XRP" => Some(Self::Xrp),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solana => "SOLANA",
            Self::Ethereum => "ETHEREUM",
            Self::Xrp => "XRP",
        }
    }

    /// Human-readable name for the network selection cards.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Solana => "Solana",
            Self::Ethereum => "Ethereum",
            Self::Xrp => "XRP Ledger",
        }
    }

    /// One-line pitch shown on the network selection card.
    pub fn tagline(self) -> &'static str {
        match self {
            Self::Solana => "Ultra-fast, low cost, high throughput.",
            Self::Ethereum => "The gold standard for smart contracts.",
            Self::Xrp => "Efficient, sustainable, and scalable.",
        }
    }

    /// Currency code used for fee display, mapped 1:1 from the network.
    pub fn currency(self) -> &'static str {
        match self {
            Self::Solana => "SOL",
            Self::Ethereum => "ETH",
            Self::Xrp => "XRP",
        }
    }

    /// Fixed contract-address/tx-hash pair displayed after the simulated
    /// mint completes.
    pub fn mint_placeholders(self) -> MintPlaceholders {
        match self {
            Self::Solana => SOLANA_PLACEHOLDERS,
            Self::Ethereum | Self::Xrp => EVM_PLACEHOLDERS,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_canonical_names_and_currency_aliases() {
        assert_eq!(Network::parse("SOLANA"), Some(Network::Solana));
        assert_eq!(Network::parse("sol"), Some(Network::Solana));
        assert_eq!(Network::parse(" ethereum "), Some(Network::Ethereum));
        assert_eq!(Network::parse("XRP"), Some(Network::Xrp));
        assert_eq!(Network::parse("cardano"), None);
    }

    #[test]
    fn currency_maps_one_to_one() {
        assert_eq!(Network::Solana.currency(), "SOL");
        assert_eq!(Network::Ethereum.currency(), "ETH");
        assert_eq!(Network::Xrp.currency(), "XRP");
    }

    #[test]
    fn ethereum_and_xrp_share_mint_placeholders() {
        assert_eq!(
            Network::Ethereum.mint_placeholders(),
            Network::Xrp.mint_placeholders()
        );
        assert_ne!(
            Network::Solana.mint_placeholders().contract_address,
            Network::Ethereum.mint_placeholders().contract_address
        );
    }

    #[test]
    fn serde_round_trips_screaming_case() {
        let json = serde_json::to_string(&Network::Solana).unwrap();
        assert_eq!(json, "\"SOLANA\"");
        let back: Network = serde_json::from_str("\"XRP\"").unwrap();
        assert_eq!(back, Network::Xrp);
    }
}
