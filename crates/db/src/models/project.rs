//! Project entity model and DTOs.

use launchlist_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub chain: String,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub twitter_url: Option<String>,
    pub discord_url: Option<String>,
    pub website_url: Option<String>,
    pub marketplace_url: Option<String>,
    pub mint_date: Option<Timestamp>,
    pub supply: Option<i32>,
    pub mint_price: Option<String>,
    pub wl_spots_total: i32,
    pub wl_spots_filled: i32,
    pub gtd_spots_total: i32,
    pub gtd_spots_filled: i32,
    pub is_applications_open: bool,
    pub is_locked: bool,
    pub locked_at: Option<Timestamp>,
    pub locked_by: Option<DbId>,
    pub wl_open_date: Option<Timestamp>,
    pub wl_close_date: Option<Timestamp>,
    pub snapshot_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project. Slug and owner are supplied by the
/// caller, not the request body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    /// Defaults to `ethereum` if omitted.
    pub chain: Option<String>,
    pub description: Option<String>,
}

/// DTO for updating an existing project. All fields are optional;
/// omitted fields keep their current value (clearing to NULL is not
/// supported by this patch shape).
///
/// `slug` and the filled-spot counters are deliberately absent: slugs are
/// immutable and counters are recomputed from wallet rows.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub chain: Option<String>,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub twitter_url: Option<String>,
    pub discord_url: Option<String>,
    pub website_url: Option<String>,
    pub marketplace_url: Option<String>,
    pub mint_date: Option<Timestamp>,
    pub supply: Option<i32>,
    pub mint_price: Option<String>,
    pub wl_spots_total: Option<i32>,
    pub gtd_spots_total: Option<i32>,
    pub is_applications_open: Option<bool>,
    pub wl_open_date: Option<Timestamp>,
    pub wl_close_date: Option<Timestamp>,
    pub snapshot_date: Option<Timestamp>,
}

/// Dashboard list row: the card fields plus the pending-application badge
/// count, joined in a single query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectSummary {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub chain: String,
    pub logo_url: Option<String>,
    pub mint_date: Option<Timestamp>,
    pub wl_spots_total: i32,
    pub wl_spots_filled: i32,
    pub gtd_spots_total: i32,
    pub gtd_spots_filled: i32,
    pub is_applications_open: bool,
    pub is_locked: bool,
    pub pending_applications: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public launch view of a project, addressed by slug. Excludes owner and
/// moderation internals.
#[derive(Debug, Clone, Serialize)]
pub struct PublicProject {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub chain: String,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub twitter_url: Option<String>,
    pub discord_url: Option<String>,
    pub website_url: Option<String>,
    pub marketplace_url: Option<String>,
    pub mint_date: Option<Timestamp>,
    pub supply: Option<i32>,
    pub mint_price: Option<String>,
    pub wl_spots_total: i32,
    pub wl_spots_filled: i32,
    pub gtd_spots_total: i32,
    pub gtd_spots_filled: i32,
    pub is_applications_open: bool,
    pub is_locked: bool,
    pub wl_open_date: Option<Timestamp>,
    pub wl_close_date: Option<Timestamp>,
    pub snapshot_date: Option<Timestamp>,
}

impl From<Project> for PublicProject {
    fn from(project: Project) -> Self {
        Self {
            name: project.name,
            slug: project.slug,
            description: project.description,
            chain: project.chain,
            logo_url: project.logo_url,
            banner_url: project.banner_url,
            twitter_url: project.twitter_url,
            discord_url: project.discord_url,
            website_url: project.website_url,
            marketplace_url: project.marketplace_url,
            mint_date: project.mint_date,
            supply: project.supply,
            mint_price: project.mint_price,
            wl_spots_total: project.wl_spots_total,
            wl_spots_filled: project.wl_spots_filled,
            gtd_spots_total: project.gtd_spots_total,
            gtd_spots_filled: project.gtd_spots_filled,
            is_applications_open: project.is_applications_open,
            is_locked: project.is_locked,
            wl_open_date: project.wl_open_date,
            wl_close_date: project.wl_close_date,
            snapshot_date: project.snapshot_date,
        }
    }
}
