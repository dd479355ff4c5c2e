//! Launch readiness checklist.
//!
//! Pure evaluation of how close a project is to a credible mint: the
//! caller loads the project row and passes a snapshot in, this module
//! derives the checklist items and the headline score. The `core` crate
//! has no database access.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Valid checklist item statuses.
pub const ITEM_COMPLETE: &str = "complete";
pub const ITEM_INCOMPLETE: &str = "incomplete";
pub const ITEM_COMING_SOON: &str = "coming_soon";

/// All valid item status strings.
pub const VALID_ITEM_STATUSES: &[&str] = &[ITEM_COMPLETE, ITEM_INCOMPLETE, ITEM_COMING_SOON];

/// Valid checklist item categories.
pub const CATEGORY_WHITELIST: &str = "whitelist";
pub const CATEGORY_TIMELINE: &str = "timeline";
pub const CATEGORY_PROFILE: &str = "profile";
pub const CATEGORY_ASSETS: &str = "assets";
pub const CATEGORY_CONTRACT: &str = "contract";
pub const CATEGORY_DISTRIBUTION: &str = "distribution";

/// All valid item category strings.
pub const VALID_ITEM_CATEGORIES: &[&str] = &[
    CATEGORY_WHITELIST,
    CATEGORY_TIMELINE,
    CATEGORY_PROFILE,
    CATEGORY_ASSETS,
    CATEGORY_CONTRACT,
    CATEGORY_DISTRIBUTION,
];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Status of a single checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Complete,
    Incomplete,
    ComingSoon,
}

impl ItemStatus {
    /// Convert to the wire string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => ITEM_COMPLETE,
            Self::Incomplete => ITEM_INCOMPLETE,
            Self::ComingSoon => ITEM_COMING_SOON,
        }
    }
}

/// Grouping shown alongside each checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Whitelist,
    Timeline,
    Profile,
    Assets,
    Contract,
    Distribution,
}

impl ItemCategory {
    /// Convert to the wire string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Whitelist => CATEGORY_WHITELIST,
            Self::Timeline => CATEGORY_TIMELINE,
            Self::Profile => CATEGORY_PROFILE,
            Self::Assets => CATEGORY_ASSETS,
            Self::Contract => CATEGORY_CONTRACT,
            Self::Distribution => CATEGORY_DISTRIBUTION,
        }
    }
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The project fields the checklist reads. Loaded by the caller.
#[derive(Debug, Clone)]
pub struct ProjectSnapshot {
    pub id: DbId,
    pub name: String,
    pub chain: String,
    pub wl_open_date: Option<Timestamp>,
    pub mint_date: Option<Timestamp>,
    pub wl_spots_total: i32,
    pub wl_spots_filled: i32,
    pub twitter_url: Option<String>,
    pub discord_url: Option<String>,
    pub website_url: Option<String>,
    pub is_locked: bool,
}

/// One entry in the readiness checklist.
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessItem {
    pub id: &'static str,
    pub label: &'static str,
    pub category: ItemCategory,
    pub status: ItemStatus,
    pub description: &'static str,
    /// In-app page where the item can be completed. Absent for
    /// coming-soon items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Headline score: completed live items out of all live items.
/// Coming-soon items never count either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadinessScore {
    pub completed: usize,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Evaluate the full checklist for a project snapshot.
///
/// Item order is fixed and part of the API contract: live items first,
/// then the coming-soon placeholders.
pub fn evaluate_readiness(snapshot: &ProjectSnapshot) -> Vec<ReadinessItem> {
    let settings_href = format!("/projects/{}/settings", snapshot.id);
    let whitelist_href = format!("/projects/{}/whitelist", snapshot.id);

    let live = |complete: bool| {
        if complete {
            ItemStatus::Complete
        } else {
            ItemStatus::Incomplete
        }
    };

    vec![
        ReadinessItem {
            id: "project-configured",
            label: "Project configured",
            category: ItemCategory::Whitelist,
            status: live(!snapshot.name.trim().is_empty() && !snapshot.chain.trim().is_empty()),
            description: "Name, chain, and basic info set",
            href: Some(settings_href.clone()),
        },
        ReadinessItem {
            id: "timeline-set",
            label: "Timeline set",
            category: ItemCategory::Timeline,
            status: live(snapshot.wl_open_date.is_some() && snapshot.mint_date.is_some()),
            description: "WL open date and mint date configured",
            href: Some(settings_href.clone()),
        },
        ReadinessItem {
            id: "whitelist-populated",
            label: "Whitelist populated",
            category: ItemCategory::Whitelist,
            status: live(snapshot.wl_spots_filled > 0),
            description: "At least one wallet added to the list",
            href: Some(whitelist_href),
        },
        ReadinessItem {
            id: "spots-allocated",
            label: "Spot allocations defined",
            category: ItemCategory::Whitelist,
            status: live(snapshot.wl_spots_total > 0),
            description: "Total WL spots configured",
            href: Some(settings_href.clone()),
        },
        ReadinessItem {
            id: "social-links",
            label: "Social links added",
            category: ItemCategory::Profile,
            status: live(
                has_value(&snapshot.twitter_url)
                    || has_value(&snapshot.discord_url)
                    || has_value(&snapshot.website_url),
            ),
            description: "At least one social link connected",
            href: Some(settings_href.clone()),
        },
        ReadinessItem {
            id: "whitelist-locked",
            label: "Whitelist locked",
            category: ItemCategory::Whitelist,
            status: live(snapshot.is_locked),
            description: "List finalized and visible to community",
            href: Some(settings_href),
        },
        ReadinessItem {
            id: "metadata-validated",
            label: "Metadata validated",
            category: ItemCategory::Assets,
            status: ItemStatus::ComingSoon,
            description: "Token metadata format and completeness check",
            href: None,
        },
        ReadinessItem {
            id: "art-organized",
            label: "Art assets organized",
            category: ItemCategory::Assets,
            status: ItemStatus::ComingSoon,
            description: "Image layers and trait files structured",
            href: None,
        },
        ReadinessItem {
            id: "trait-verified",
            label: "Trait file verified",
            category: ItemCategory::Assets,
            status: ItemStatus::ComingSoon,
            description: "Trait rarity and distribution validated",
            href: None,
        },
        ReadinessItem {
            id: "contract-uri",
            label: "Contract URI set",
            category: ItemCategory::Contract,
            status: ItemStatus::ComingSoon,
            description: "Base URI and reveal URI configured",
            href: None,
        },
        ReadinessItem {
            id: "marketplace-compat",
            label: "Marketplace compatibility",
            category: ItemCategory::Distribution,
            status: ItemStatus::ComingSoon,
            description: "OpenSea, Magic Eden, and marketplace standards met",
            href: None,
        },
    ]
}

/// Compute the headline score over an evaluated checklist.
pub fn readiness_score(items: &[ReadinessItem]) -> ReadinessScore {
    let live: Vec<&ReadinessItem> = items
        .iter()
        .filter(|item| item.status != ItemStatus::ComingSoon)
        .collect();
    let completed = live
        .iter()
        .filter(|item| item.status == ItemStatus::Complete)
        .count();
    ReadinessScore {
        completed,
        total: live.len(),
    }
}

fn has_value(field: &Option<String>) -> bool {
    matches!(field, Some(v) if !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
