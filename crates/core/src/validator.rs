//! Per-chain wallet address format validation and chain detection.
//!
//! Validation is format-only; addresses are never checked on-chain.
//! EVM chains (ethereum, polygon, base) share the `0x` + 40-hex format.
//! Solana addresses are base58 (the alphabet excludes `0OIl`). Bitcoin
//! accepts either taproot (`bc1p...`) or legacy/segwit prefixes. `other`
//! only gets a minimum-length sanity check.

use std::sync::LazyLock;

use regex::Regex;

use crate::chain::Chain;

/// EVM address: `0x` followed by exactly 40 hex characters.
static EVM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("valid regex"));

/// Solana address: base58 alphabet, 32-44 characters.
static SOLANA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{32,44}$").expect("valid regex"));

/// Bitcoin taproot address: `bc1p` plus 58 more characters.
static BTC_TAPROOT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^bc1p[a-zA-HJ-NP-Z0-9]{58}$").expect("valid regex"));

/// Bitcoin legacy / segwit address: `1`, `3`, or `bc1` prefix.
static BTC_LEGACY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(1|3|bc1)[a-zA-HJ-NP-Z0-9]{25,62}$").expect("valid regex"));

/// Minimum plausible address length for the `other` chain.
const OTHER_MIN_LENGTH: usize = 10;

/// Validate a wallet address against the format rules of the given chain.
///
/// The input is trimmed first. Empty or whitespace-only input fails with a
/// distinct "empty" error on every chain.
pub fn validate_address(address: &str, chain: Chain) -> Result<(), String> {
    let trimmed = address.trim();

    if trimmed.is_empty() {
        return Err("Address is empty".to_string());
    }

    match chain {
        Chain::Ethereum | Chain::Polygon | Chain::Base => {
            if EVM_RE.is_match(trimmed) {
                Ok(())
            } else {
                Err(
                    "Invalid EVM address. Must start with 0x followed by 40 hex characters"
                        .to_string(),
                )
            }
        }
        Chain::Solana => {
            if SOLANA_RE.is_match(trimmed) {
                Ok(())
            } else {
                Err("Invalid Solana address. Must be a base58 string (32-44 characters)".to_string())
            }
        }
        Chain::Bitcoin => {
            if BTC_TAPROOT_RE.is_match(trimmed) || BTC_LEGACY_RE.is_match(trimmed) {
                Ok(())
            } else {
                Err("Invalid Bitcoin address".to_string())
            }
        }
        Chain::Other => {
            if trimmed.chars().count() < OTHER_MIN_LENGTH {
                Err("Address seems too short".to_string())
            } else {
                Ok(())
            }
        }
    }
}

/// Guess the chain from an address by pattern matching.
///
/// Patterns are tried in fixed priority order: ethereum, then solana, then
/// bitcoin. Returns `None` when nothing matches. Used to auto-select the
/// chain for CSV rows and form input.
pub fn detect_chain(address: &str) -> Option<Chain> {
    let trimmed = address.trim();

    if EVM_RE.is_match(trimmed) {
        return Some(Chain::Ethereum);
    }
    if SOLANA_RE.is_match(trimmed) {
        return Some(Chain::Solana);
    }
    if BTC_TAPROOT_RE.is_match(trimmed) || BTC_LEGACY_RE.is_match(trimmed) {
        return Some(Chain::Bitcoin);
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
