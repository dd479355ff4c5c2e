//! CSV wallet import parsing.
//!
//! Accepts raw text from a `.csv`/`.txt` upload and produces candidate
//! rows for bulk import. The format is deliberately simple: one wallet
//! per line, comma-separated `address,chain,category,label` with an
//! optional header line. Embedded commas or quotes inside fields are NOT
//! supported (no escaping) -- a known limitation of the format, not a bug.

/// One candidate row parsed from an import file.
///
/// Only the address is mandatory. Chain and category are raw strings at
/// this stage; the import path validates them (falling back to the
/// project's chain and the `wl` category) so a bad value in one row never
/// aborts the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvWalletRow {
    pub address: String,
    pub chain: Option<String>,
    pub category: Option<String>,
    pub label: Option<String>,
}

/// Parse raw CSV content into candidate wallet rows.
///
/// Rules:
/// - Lines are split on `\n` after trimming the whole input.
/// - The first line is skipped as a header iff its lowercase form
///   contains "address", "wallet", or "chain".
/// - Each remaining non-empty line is split on commas; every field is
///   trimmed and stripped of one pair of surrounding single/double quotes.
/// - Field 0 is the address; rows with an empty address are dropped.
/// - Fields 1-3 map to chain, category, and label; empty fields become
///   `None`.
pub fn parse_wallet_csv(content: &str) -> Vec<CsvWalletRow> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = trimmed.split('\n').collect();

    let first_lower = lines[0].to_lowercase();
    let has_header = first_lower.contains("address")
        || first_lower.contains("wallet")
        || first_lower.contains("chain");
    let start_index = if has_header { 1 } else { 0 };

    let mut rows = Vec::new();

    for line in &lines[start_index..] {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<String> = line.split(',').map(clean_field).collect();

        let address = parts[0].clone();
        if address.is_empty() {
            continue;
        }

        rows.push(CsvWalletRow {
            address,
            chain: parts.get(1).filter(|s| !s.is_empty()).cloned(),
            category: parts.get(2).filter(|s| !s.is_empty()).cloned(),
            label: parts.get(3).filter(|s| !s.is_empty()).cloned(),
        });
    }

    rows
}

/// Trim a field and strip at most one surrounding single or double quote
/// from each end.
fn clean_field(field: &str) -> String {
    let trimmed = field.trim();
    let without_leading = trimmed
        .strip_prefix('"')
        .or_else(|| trimmed.strip_prefix('\''))
        .unwrap_or(trimmed);
    let without_trailing = without_leading
        .strip_suffix('"')
        .or_else(|| without_leading.strip_suffix('\''))
        .unwrap_or(without_leading);
    without_trailing.to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
