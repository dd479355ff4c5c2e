//! Chain identifiers and display labels.
//!
//! The chain determines which address format rules apply. `other` exists
//! as an escape hatch for chains without a dedicated validator; it only
//! gets a minimum-length check.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const CHAIN_ETHEREUM: &str = "ethereum";
pub const CHAIN_SOLANA: &str = "solana";
pub const CHAIN_BITCOIN: &str = "bitcoin";
pub const CHAIN_POLYGON: &str = "polygon";
pub const CHAIN_BASE: &str = "base";
pub const CHAIN_OTHER: &str = "other";

/// All valid chain strings.
pub const VALID_CHAINS: &[&str] = &[
    CHAIN_ETHEREUM,
    CHAIN_SOLANA,
    CHAIN_BITCOIN,
    CHAIN_POLYGON,
    CHAIN_BASE,
    CHAIN_OTHER,
];

// ---------------------------------------------------------------------------
// Enum
// ---------------------------------------------------------------------------

/// A blockchain network identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chain {
    Ethereum,
    Solana,
    Bitcoin,
    Polygon,
    Base,
    Other,
}

impl Chain {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            CHAIN_ETHEREUM => Ok(Self::Ethereum),
            CHAIN_SOLANA => Ok(Self::Solana),
            CHAIN_BITCOIN => Ok(Self::Bitcoin),
            CHAIN_POLYGON => Ok(Self::Polygon),
            CHAIN_BASE => Ok(Self::Base),
            CHAIN_OTHER => Ok(Self::Other),
            _ => Err(format!(
                "Invalid chain '{s}'. Must be one of: {}",
                VALID_CHAINS.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ethereum => CHAIN_ETHEREUM,
            Self::Solana => CHAIN_SOLANA,
            Self::Bitcoin => CHAIN_BITCOIN,
            Self::Polygon => CHAIN_POLYGON,
            Self::Base => CHAIN_BASE,
            Self::Other => CHAIN_OTHER,
        }
    }

    /// Human-readable display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::Solana => "Solana",
            Self::Bitcoin => "Bitcoin",
            Self::Polygon => "Polygon",
            Self::Base => "Base",
            Self::Other => "Other",
        }
    }

    /// Whether addresses on this chain use the EVM `0x` + 40-hex format.
    pub fn is_evm(&self) -> bool {
        matches!(self, Self::Ethereum | Self::Polygon | Self::Base)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a chain string is one of the allowed values.
pub fn validate_chain(chain: &str) -> Result<(), String> {
    if VALID_CHAINS.contains(&chain) {
        Ok(())
    } else {
        Err(format!(
            "Invalid chain '{chain}'. Must be one of: {}",
            VALID_CHAINS.join(", ")
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_accepts_every_valid_chain() {
        for chain in VALID_CHAINS {
            assert!(Chain::from_str_value(chain).is_ok(), "chain {chain}");
        }
    }

    #[test]
    fn from_str_rejects_unknown_chain() {
        let result = Chain::from_str_value("dogecoin");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid chain"));
    }

    #[test]
    fn as_str_round_trip() {
        for chain in &[
            Chain::Ethereum,
            Chain::Solana,
            Chain::Bitcoin,
            Chain::Polygon,
            Chain::Base,
            Chain::Other,
        ] {
            assert_eq!(Chain::from_str_value(chain.as_str()).unwrap(), *chain);
        }
    }

    #[test]
    fn evm_chains_share_address_format() {
        assert!(Chain::Ethereum.is_evm());
        assert!(Chain::Polygon.is_evm());
        assert!(Chain::Base.is_evm());
        assert!(!Chain::Solana.is_evm());
        assert!(!Chain::Bitcoin.is_evm());
        assert!(!Chain::Other.is_evm());
    }

    #[test]
    fn labels_are_title_cased() {
        assert_eq!(Chain::Ethereum.label(), "Ethereum");
        assert_eq!(Chain::Base.label(), "Base");
        assert_eq!(Chain::Other.label(), "Other");
    }

    #[test]
    fn validate_chain_rejects_empty() {
        assert!(validate_chain("").is_err());
    }
}
