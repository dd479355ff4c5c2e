//! Wallet tier categories, provenance sources, and lifecycle status.
//!
//! Category controls which allocation counter a wallet feeds: `gtd`
//! counts toward the GTD tier, everything else toward WL. Wallets are
//! soft-removed (status flip) rather than deleted so provenance survives.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category constants
// ---------------------------------------------------------------------------

pub const CATEGORY_WL: &str = "wl";
pub const CATEGORY_GTD: &str = "gtd";
pub const CATEGORY_OG: &str = "og";
pub const CATEGORY_TEAM: &str = "team";
pub const CATEGORY_FCFS: &str = "fcfs";

/// All valid category strings.
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_WL,
    CATEGORY_GTD,
    CATEGORY_OG,
    CATEGORY_TEAM,
    CATEGORY_FCFS,
];

// ---------------------------------------------------------------------------
// Source constants
// ---------------------------------------------------------------------------

pub const SOURCE_MANUAL: &str = "manual";
pub const SOURCE_CSV_UPLOAD: &str = "csv_upload";
pub const SOURCE_COLLAB: &str = "collab";
pub const SOURCE_APPLICATION: &str = "application";

/// All valid provenance source strings.
pub const VALID_SOURCES: &[&str] = &[
    SOURCE_MANUAL,
    SOURCE_CSV_UPLOAD,
    SOURCE_COLLAB,
    SOURCE_APPLICATION,
];

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_REMOVED: &str = "removed";

/// All valid wallet status strings.
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_REMOVED];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Whitelist tier tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Wl,
    Gtd,
    Og,
    Team,
    Fcfs,
}

impl Category {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            CATEGORY_WL => Ok(Self::Wl),
            CATEGORY_GTD => Ok(Self::Gtd),
            CATEGORY_OG => Ok(Self::Og),
            CATEGORY_TEAM => Ok(Self::Team),
            CATEGORY_FCFS => Ok(Self::Fcfs),
            _ => Err(format!(
                "Invalid category '{s}'. Must be one of: {}",
                VALID_CATEGORIES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wl => CATEGORY_WL,
            Self::Gtd => CATEGORY_GTD,
            Self::Og => CATEGORY_OG,
            Self::Team => CATEGORY_TEAM,
            Self::Fcfs => CATEGORY_FCFS,
        }
    }

    /// Human-readable display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Wl => "WL",
            Self::Gtd => "GTD",
            Self::Og => "OG",
            Self::Team => "Team",
            Self::Fcfs => "FCFS",
        }
    }

    /// Whether wallets in this category count toward the GTD allocation
    /// counter. Every other category feeds the WL counter.
    pub fn counts_toward_gtd(&self) -> bool {
        matches!(self, Self::Gtd)
    }
}

/// How a wallet entry got onto the whitelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalletSource {
    Manual,
    CsvUpload,
    Collab,
    Application,
}

impl WalletSource {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            SOURCE_MANUAL => Ok(Self::Manual),
            SOURCE_CSV_UPLOAD => Ok(Self::CsvUpload),
            SOURCE_COLLAB => Ok(Self::Collab),
            SOURCE_APPLICATION => Ok(Self::Application),
            _ => Err(format!(
                "Invalid wallet source '{s}'. Must be one of: {}",
                VALID_SOURCES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => SOURCE_MANUAL,
            Self::CsvUpload => SOURCE_CSV_UPLOAD,
            Self::Collab => SOURCE_COLLAB,
            Self::Application => SOURCE_APPLICATION,
        }
    }
}

/// Lifecycle status of a wallet entry. Removal is a status flip, never a
/// physical delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalletStatus {
    Active,
    Removed,
}

impl WalletStatus {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            STATUS_ACTIVE => Ok(Self::Active),
            STATUS_REMOVED => Ok(Self::Removed),
            _ => Err(format!(
                "Invalid wallet status '{s}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => STATUS_ACTIVE,
            Self::Removed => STATUS_REMOVED,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a category string is one of the allowed values.
pub fn validate_category(category: &str) -> Result<(), String> {
    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(format!(
            "Invalid category '{category}'. Must be one of: {}",
            VALID_CATEGORIES.join(", ")
        ))
    }
}

/// Validate that a wallet source string is one of the allowed values.
pub fn validate_source(source: &str) -> Result<(), String> {
    if VALID_SOURCES.contains(&source) {
        Ok(())
    } else {
        Err(format!(
            "Invalid wallet source '{source}'. Must be one of: {}",
            VALID_SOURCES.join(", ")
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Category -------------------------------------------------------------

    #[test]
    fn category_from_str_accepts_all_valid() {
        for cat in VALID_CATEGORIES {
            assert!(Category::from_str_value(cat).is_ok(), "category {cat}");
        }
    }

    #[test]
    fn category_from_str_rejects_unknown() {
        let result = Category::from_str_value("vip");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid category"));
    }

    #[test]
    fn category_as_str_round_trip() {
        for cat in &[
            Category::Wl,
            Category::Gtd,
            Category::Og,
            Category::Team,
            Category::Fcfs,
        ] {
            assert_eq!(Category::from_str_value(cat.as_str()).unwrap(), *cat);
        }
    }

    #[test]
    fn only_gtd_feeds_the_gtd_counter() {
        assert!(Category::Gtd.counts_toward_gtd());
        assert!(!Category::Wl.counts_toward_gtd());
        assert!(!Category::Og.counts_toward_gtd());
        assert!(!Category::Team.counts_toward_gtd());
        assert!(!Category::Fcfs.counts_toward_gtd());
    }

    #[test]
    fn category_labels_match_display_convention() {
        assert_eq!(Category::Gtd.label(), "GTD");
        assert_eq!(Category::Team.label(), "Team");
    }

    // -- WalletSource ---------------------------------------------------------

    #[test]
    fn source_round_trip() {
        for source in &[
            WalletSource::Manual,
            WalletSource::CsvUpload,
            WalletSource::Collab,
            WalletSource::Application,
        ] {
            assert_eq!(
                WalletSource::from_str_value(source.as_str()).unwrap(),
                *source
            );
        }
    }

    #[test]
    fn source_rejects_unknown() {
        assert!(WalletSource::from_str_value("airdrop").is_err());
    }

    // -- WalletStatus ---------------------------------------------------------

    #[test]
    fn status_round_trip() {
        assert_eq!(
            WalletStatus::from_str_value("active").unwrap(),
            WalletStatus::Active
        );
        assert_eq!(
            WalletStatus::from_str_value("removed").unwrap(),
            WalletStatus::Removed
        );
    }

    #[test]
    fn status_rejects_soft_delete_synonyms() {
        assert!(WalletStatus::from_str_value("deleted").is_err());
        assert!(WalletStatus::from_str_value("inactive").is_err());
    }

    // -- validate helpers -----------------------------------------------------

    #[test]
    fn validate_category_lists_valid_values_in_error() {
        let err = validate_category("bogus").unwrap_err();
        assert!(err.contains("wl"));
        assert!(err.contains("fcfs"));
    }

    #[test]
    fn validate_source_accepts_all_valid() {
        for source in VALID_SOURCES {
            assert!(validate_source(source).is_ok());
        }
    }
}
